//! Keyphrase already used by other content.

use super::{missing_keyphrase, AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule comparing the keyphrase with the caller-supplied history
#[derive(Debug, Default)]
pub struct PreviouslyUsedRule;

impl AnalysisRule for PreviouslyUsedRule {
    fn id(&self) -> CriterionId {
        CriterionId::PreviouslyUsed
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let keyphrase = ctx.keyphrase();
        if keyphrase.is_empty() {
            return missing_keyphrase(Details::PreviouslyUsed {
                previously_used: false,
            });
        }

        let history = &ctx.document.used_keyphrases;
        if history.is_empty() {
            return CriterionResult::new(
                Status::Favorable,
                "No keyphrase history to compare against.",
                Details::PreviouslyUsed {
                    previously_used: false,
                },
            );
        }

        let previously_used = history
            .iter()
            .any(|used| used.trim().to_lowercase() == keyphrase);
        let details = Details::PreviouslyUsed { previously_used };

        if previously_used {
            CriterionResult::new(
                Status::Unfavorable,
                "You've used this keyphrase before. Don't use a keyphrase more than once.",
                details,
            )
        } else {
            CriterionResult::new(
                Status::Favorable,
                "You haven't used this keyphrase before. Very good.",
                details,
            )
        }
    }
}
