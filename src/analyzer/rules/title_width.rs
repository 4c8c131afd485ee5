//! SEO title width.

use super::{AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule checking the title fits a search result line
#[derive(Debug, Default)]
pub struct TitleWidthRule;

impl AnalysisRule for TitleWidthRule {
    fn id(&self) -> CriterionId {
        CriterionId::TitleWidth
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let title = ctx.document.title.trim();
        let length = title.chars().count();
        let details = Details::TitleWidth {
            title: title.to_string(),
            length,
        };
        let t = ctx.thresholds;

        if length == 0 {
            CriterionResult::new(
                Status::Unfavorable,
                "The title is empty. Write a title for this page.",
                details,
            )
        } else if (t.title_min_chars..=t.title_max_chars).contains(&length) {
            CriterionResult::new(Status::Favorable, "The title width is good.", details)
        } else if length < t.title_min_chars {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "The title is {} characters. Use between {} and {} to fill the search result.",
                    length, t.title_min_chars, t.title_max_chars
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "The title is {} characters and may be cut off. Keep it under {}.",
                    length, t.title_max_chars
                ),
                details,
            )
        }
    }
}
