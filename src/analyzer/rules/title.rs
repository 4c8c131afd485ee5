//! Keyphrase placement in the page title.

use super::{missing_keyphrase, AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule checking the keyphrase leads the title
#[derive(Debug, Default)]
pub struct TitleRule;

impl AnalysisRule for TitleRule {
    fn id(&self) -> CriterionId {
        CriterionId::Title
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let title = ctx.document.title.trim();
        let keyphrase = ctx.keyphrase();
        let position = if keyphrase.is_empty() {
            None
        } else {
            title.to_lowercase().find(keyphrase)
        };
        let details = Details::Title {
            title: title.to_string(),
            position,
        };

        if keyphrase.is_empty() {
            return missing_keyphrase(details);
        }

        match position {
            Some(0) => CriterionResult::new(
                Status::Favorable,
                "The title starts with the keyphrase. Excellent!",
                details,
            ),
            Some(_) => CriterionResult::new(
                Status::Cautionary,
                "The title contains the keyphrase, but not at the beginning. Move it to the front.",
                details,
            ),
            None => CriterionResult::new(
                Status::Unfavorable,
                "The title does not contain the keyphrase. Add it, preferably at the beginning.",
                details,
            ),
        }
    }
}
