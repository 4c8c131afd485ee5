//! Keyphrase density: occurrences per hundred words.

use super::{missing_keyphrase, percentage, round2, AnalysisContext, AnalysisRule};
use crate::parser::count_occurrences;
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule measuring how often the keyphrase is used relative to text length
#[derive(Debug, Default)]
pub struct DensityRule;

impl AnalysisRule for DensityRule {
    fn id(&self) -> CriterionId {
        CriterionId::Density
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let total_words = ctx.view.word_count();
        let keyphrase_count = count_occurrences(&ctx.view.lowercase, ctx.keyphrase());
        let raw = percentage(keyphrase_count, total_words);
        let density = round2(raw);
        let details = Details::Density {
            keyphrase_count,
            total_words,
            density,
        };

        if ctx.keyphrase().is_empty() {
            return missing_keyphrase(details);
        }

        let t = ctx.thresholds;
        if keyphrase_count == 0 {
            CriterionResult::new(
                Status::Unfavorable,
                "The keyphrase was not found in the content.",
                details,
            )
        } else if raw > t.density_max {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "Keyphrase density is {}%, above the {}% maximum. Use the keyphrase less often.",
                    density, t.density_max
                ),
                details,
            )
        } else if raw >= t.density_min {
            CriterionResult::new(
                Status::Favorable,
                format!(
                    "The keyphrase was found {} times. That's great!",
                    keyphrase_count
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "Keyphrase density is {}%, below the {}% minimum. Use the keyphrase more often.",
                    density, t.density_min
                ),
                details,
            )
        }
    }
}
