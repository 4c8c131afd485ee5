//! Keyphrase in H2/H3 subheadings.

use super::{missing_keyphrase, AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule counting level-2 and level-3 headings that mention the keyphrase
#[derive(Debug, Default)]
pub struct SubheadingsRule;

impl AnalysisRule for SubheadingsRule {
    fn id(&self) -> CriterionId {
        CriterionId::Subheadings
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let keyphrase = ctx.keyphrase();
        let subheadings: Vec<_> = ctx
            .view
            .headings
            .iter()
            .filter(|h| h.level == 2 || h.level == 3)
            .collect();
        let keyphrase_count = if keyphrase.is_empty() {
            0
        } else {
            subheadings
                .iter()
                .filter(|h| h.text.to_lowercase().contains(keyphrase))
                .count()
        };
        let details = Details::Subheadings {
            total_subheadings: subheadings.len(),
            keyphrase_count,
        };

        if keyphrase.is_empty() {
            return missing_keyphrase(details);
        }

        if keyphrase_count >= ctx.thresholds.subheadings_with_keyphrase {
            CriterionResult::new(
                Status::Favorable,
                format!(
                    "{} H2 and H3 subheadings reflect the topic of your copy. Good job!",
                    keyphrase_count
                ),
                details,
            )
        } else if keyphrase_count > 0 {
            CriterionResult::new(
                Status::Cautionary,
                "Only one H2 or H3 subheading reflects the topic of your copy. Use the keyphrase in more subheadings.",
                details,
            )
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                "No H2 or H3 subheading reflects the topic of your copy. Use the keyphrase in your subheadings.",
                details,
            )
        }
    }
}
