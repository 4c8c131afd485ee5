//! Keyphrase in image alt attributes.

use super::{missing_keyphrase, AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule checking that image alt text reflects the keyphrase
#[derive(Debug, Default)]
pub struct ImageKeyphraseRule;

impl ImageKeyphraseRule {
    /// An alt text matches when it contains at least half (rounded up) of the keyphrase words
    pub fn alt_matches(alt: &str, keyphrase_words: &[&str]) -> bool {
        if keyphrase_words.is_empty() {
            return false;
        }
        let alt = alt.to_lowercase();
        let found = keyphrase_words.iter().filter(|w| alt.contains(**w)).count();
        found >= keyphrase_words.len().div_ceil(2)
    }
}

impl AnalysisRule for ImageKeyphraseRule {
    fn id(&self) -> CriterionId {
        CriterionId::ImageKeyphrase
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let keyphrase_words: Vec<&str> = ctx.keyphrase().split_whitespace().collect();
        let images = &ctx.view.images;
        let images_with_alt = images.iter().filter(|i| i.has_alt()).count();
        let images_with_keyphrase = images
            .iter()
            .filter_map(|i| i.alt.as_deref())
            .filter(|alt| Self::alt_matches(alt, &keyphrase_words))
            .count();
        let total_images = images.len();
        let details = Details::ImageKeyphrase {
            total_images,
            images_with_alt,
            images_with_keyphrase,
        };

        if keyphrase_words.is_empty() {
            return missing_keyphrase(details);
        }

        if total_images == 0 {
            CriterionResult::new(
                Status::Unfavorable,
                "This page has no images. Add relevant images with descriptive alt text.",
                details,
            )
        } else if images_with_keyphrase >= total_images.div_ceil(2) {
            CriterionResult::new(
                Status::Favorable,
                "Images on this page have alt attributes with at least half of the keyphrase words. Good job!",
                details,
            )
        } else if images_with_keyphrase > 0 {
            CriterionResult::new(
                Status::Cautionary,
                "Some images have alt attributes that reflect the keyphrase. Add it to more of them.",
                details,
            )
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                "No image alt attribute reflects the keyphrase. Describe your images with it.",
                details,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::rules::testing::{doc, run};

    #[test]
    fn test_alt_matches_half_of_words() {
        assert!(ImageKeyphraseRule::alt_matches(
            "Fresh Coffee",
            &["best", "coffee"]
        ));
        assert!(!ImageKeyphraseRule::alt_matches(
            "coffee",
            &["best", "coffee", "shops"]
        ));
        assert!(ImageKeyphraseRule::alt_matches(
            "coffee shops",
            &["best", "coffee", "shops"]
        ));
    }

    #[test]
    fn test_half_the_images_match() {
        let html = r#"<img src="a" alt="best coffee"><img src="b" alt="tea">"#;
        let r = run(&ImageKeyphraseRule, &doc(html, "best coffee"));
        assert_eq!(r.status, Status::Favorable);
    }

    #[test]
    fn test_some_images_match() {
        let html = r#"<img src="a" alt="coffee"><img src="b" alt="tea"><img src="c"><img src="d">"#;
        let r = run(&ImageKeyphraseRule, &doc(html, "best coffee"));
        assert_eq!(r.status, Status::Cautionary);
        assert_eq!(
            r.details,
            Details::ImageKeyphrase {
                total_images: 4,
                images_with_alt: 2,
                images_with_keyphrase: 1
            }
        );
    }

    #[test]
    fn test_no_images() {
        let r = run(&ImageKeyphraseRule, &doc("<p>text</p>", "best coffee"));
        assert_eq!(r.status, Status::Unfavorable);
    }

    #[test]
    fn test_no_matching_images() {
        let html = r#"<img src="a" alt="tea">"#;
        let r = run(&ImageKeyphraseRule, &doc(html, "best coffee"));
        assert_eq!(r.status, Status::Unfavorable);
    }
}
