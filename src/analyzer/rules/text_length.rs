//! Overall content length.

use super::{AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

#[derive(Debug, Default)]
pub struct TextLengthRule;

impl AnalysisRule for TextLengthRule {
    fn id(&self) -> CriterionId {
        CriterionId::TextLength
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let word_count = ctx.view.word_count();
        let details = Details::TextLength { word_count };
        let t = ctx.thresholds;

        if word_count >= t.text_length_good_words {
            CriterionResult::new(
                Status::Favorable,
                format!("The text contains {} words. Good job!", word_count),
                details,
            )
        } else if word_count >= t.text_length_min_words {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "The text contains {} words. Aim for at least {} words.",
                    word_count, t.text_length_good_words
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                format!(
                    "The text contains {} words, which is far below the recommended minimum of {} words.",
                    word_count, t.text_length_min_words
                ),
                details,
            )
        }
    }
}
