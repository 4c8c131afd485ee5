//! Keyphrase length in words.

use super::{AnalysisContext, AnalysisRule};
use crate::parser::text::collapse_whitespace;
use crate::parser::word_count;
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule checking the keyphrase is neither too short nor too long
#[derive(Debug, Default)]
pub struct KeyphraseLengthRule;

impl AnalysisRule for KeyphraseLengthRule {
    fn id(&self) -> CriterionId {
        CriterionId::KeyphraseLength
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let keyphrase = collapse_whitespace(&ctx.document.keyphrase);
        let length = word_count(&keyphrase);
        let details = Details::KeyphraseLength { keyphrase, length };
        let t = ctx.thresholds;

        if length < t.keyphrase_min_words {
            CriterionResult::new(
                Status::Unfavorable,
                format!(
                    "The keyphrase is too short. Use {} to {} words.",
                    t.keyphrase_min_words, t.keyphrase_max_words
                ),
                details,
            )
        } else if length > t.keyphrase_max_words {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "The keyphrase is too long. Use {} to {} words.",
                    t.keyphrase_min_words, t.keyphrase_max_words
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Favorable,
                "The keyphrase length is ideal.",
                details,
            )
        }
    }
}
