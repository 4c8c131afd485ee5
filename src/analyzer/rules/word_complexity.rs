//! Share of long, complex words.

use super::{percentage, round2, AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

#[derive(Debug, Default)]
pub struct WordComplexityRule;

impl AnalysisRule for WordComplexityRule {
    fn id(&self) -> CriterionId {
        CriterionId::WordComplexity
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let t = ctx.thresholds;
        let total_words = ctx.view.word_count();
        let complex_words = ctx
            .view
            .words
            .iter()
            .filter(|w| w.chars().count() >= t.complex_word_chars)
            .count();
        let raw = percentage(complex_words, total_words);
        let pct = round2(raw);
        let details = Details::WordComplexity {
            complex_words,
            total_words,
            percentage: pct,
        };

        if raw > t.complex_word_max_pct {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "{}% of the words are considered complex. Use shorter, more familiar words.",
                    pct
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Favorable,
                "You are not using too many complex words. Good job!",
                details,
            )
        }
    }
}
