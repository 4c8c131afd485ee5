//! Keyphrase in the introduction.

use super::{missing_keyphrase, AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

/// Checks that the keyphrase appears in the opening sentence
#[derive(Debug, Default)]
pub struct IntroductionRule;

impl IntroductionRule {
    /// Sentences up to and including the first one that ends with a
    /// terminator, or the first `fallback_chars` characters of `text` when no
    /// sentence does. Sentences come from the normalizer, so periods inside
    /// link text never cut the introduction short.
    pub fn introduction(sentences: &[String], text: &str, fallback_chars: usize) -> String {
        match sentences.iter().position(|s| s.ends_with(['.', '!', '?'])) {
            Some(idx) => sentences[..=idx].join(" "),
            None => text.chars().take(fallback_chars).collect(),
        }
    }
}

impl AnalysisRule for IntroductionRule {
    fn id(&self) -> CriterionId {
        CriterionId::Introduction
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let introduction = Self::introduction(
            &ctx.view.sentences,
            &ctx.view.text,
            ctx.thresholds.introduction_fallback_chars,
        );
        let keyphrase = ctx.keyphrase();

        if keyphrase.is_empty() {
            return missing_keyphrase(Details::Introduction {
                introduction,
                keyphrase_present: false,
            });
        }

        let keyphrase_present = introduction.to_lowercase().contains(keyphrase);
        let details = Details::Introduction {
            introduction,
            keyphrase_present,
        };

        if keyphrase_present {
            CriterionResult::new(
                Status::Favorable,
                "The keyphrase appears in the introduction. Well done!",
                details,
            )
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                "The keyphrase does not appear in the introduction. Mention it in the first sentence.",
                details,
            )
        }
    }
}
