//! Meta description checks: keyphrase presence and length.

use super::{missing_keyphrase, AnalysisContext, AnalysisRule};
use crate::parser::decode_text;
use crate::{CriterionId, CriterionResult, Details, Status};

/// Decoded meta description text with non-breaking spaces removed
pub fn clean_meta_description(raw: &str) -> String {
    decode_text(raw).replace('\u{a0}', "")
}

/// Rule checking the meta description mentions the keyphrase
#[derive(Debug, Default)]
pub struct MetaDescriptionKeyphraseRule;

impl AnalysisRule for MetaDescriptionKeyphraseRule {
    fn id(&self) -> CriterionId {
        CriterionId::MetaDescriptionKeyphrase
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        if ctx.document.meta_description.trim().is_empty() {
            return CriterionResult::new(
                Status::Unfavorable,
                "The meta description is empty. Write one that contains the keyphrase.",
                Details::MetaDescriptionKeyphrase {
                    keyphrase_present: false,
                },
            );
        }

        let keyphrase = ctx.keyphrase();
        if keyphrase.is_empty() {
            return missing_keyphrase(Details::MetaDescriptionKeyphrase {
                keyphrase_present: false,
            });
        }

        let description = clean_meta_description(&ctx.document.meta_description).to_lowercase();
        let keyphrase_present = description.contains(keyphrase);
        let details = Details::MetaDescriptionKeyphrase { keyphrase_present };

        if keyphrase_present {
            CriterionResult::new(
                Status::Favorable,
                "The keyphrase appears in the meta description. Well done!",
                details,
            )
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                "The meta description does not contain the keyphrase. Add it.",
                details,
            )
        }
    }
}

/// Rule checking the meta description fits in a search result snippet
#[derive(Debug, Default)]
pub struct MetaDescriptionLengthRule;

impl AnalysisRule for MetaDescriptionLengthRule {
    fn id(&self) -> CriterionId {
        CriterionId::MetaDescriptionLength
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        if ctx.document.meta_description.is_empty() {
            return CriterionResult::new(
                Status::Unfavorable,
                "The meta description is empty. Write one to improve the search snippet.",
                Details::MetaDescriptionLength { length: 0 },
            );
        }

        let length = clean_meta_description(&ctx.document.meta_description)
            .chars()
            .count();
        let details = Details::MetaDescriptionLength { length };
        let t = ctx.thresholds;

        if length > t.meta_description_max_chars {
            CriterionResult::new(
                Status::Unfavorable,
                format!(
                    "The meta description is over {} characters. Shorten it so the whole description is visible.",
                    t.meta_description_max_chars
                ),
                details,
            )
        } else if length >= t.meta_description_min_chars {
            CriterionResult::new(
                Status::Favorable,
                "The meta description length is great. Keep it relevant to the content.",
                details,
            )
        } else if length > 0 {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "The meta description is shorter than {} characters. Add a few words to describe the content better.",
                    t.meta_description_min_chars
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                "The meta description has no visible text. Write a description.",
                details,
            )
        }
    }
}
