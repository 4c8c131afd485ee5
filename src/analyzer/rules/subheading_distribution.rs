//! Text between subheadings.

use super::{round2, AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

#[derive(Debug, Default)]
pub struct SubheadingDistributionRule;

impl AnalysisRule for SubheadingDistributionRule {
    fn id(&self) -> CriterionId {
        CriterionId::SubheadingDistribution
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let total_headings = ctx.view.headings.len();
        let raw = ctx.view.word_count() as f64 / (total_headings + 1) as f64;
        let words_per_section = round2(raw);
        let details = Details::SubheadingDistribution {
            total_headings,
            words_per_section,
        };
        let max = ctx.thresholds.subheading_max_words;

        if total_headings == 0 {
            CriterionResult::new(
                Status::Unfavorable,
                "You are not using any subheadings. Add some to structure the text.",
                details,
            )
        } else if raw > max {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "Sections average {} words. Add subheadings so no section runs past {} words.",
                    words_per_section, max
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Favorable,
                "Great job distributing your subheadings!",
                details,
            )
        }
    }
}
