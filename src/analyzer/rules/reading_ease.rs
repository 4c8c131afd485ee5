//! Flesch reading ease.

use super::{round2, AnalysisContext, AnalysisRule};
use crate::analyzer::insights::unrounded_reading_ease;
use crate::{CriterionId, CriterionResult, Details, Status};

#[derive(Debug, Default)]
pub struct ReadingEaseRule;

impl AnalysisRule for ReadingEaseRule {
    fn id(&self) -> CriterionId {
        CriterionId::ReadingEase
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let raw = unrounded_reading_ease(ctx.view);
        let reading_ease = round2(raw);
        let details = Details::ReadingEase { reading_ease };
        let t = ctx.thresholds;

        if raw >= t.reading_ease_good {
            CriterionResult::new(
                Status::Favorable,
                format!(
                    "The text scores {:.1} in the Flesch reading ease test, which is considered easy to read. Good job!",
                    reading_ease
                ),
                details,
            )
        } else if raw >= t.reading_ease_min {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "The text scores {:.1} in the Flesch reading ease test, which is considered fairly difficult to read. Try shorter sentences.",
                    reading_ease
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                format!(
                    "The text scores {:.1} in the Flesch reading ease test, which is considered difficult to read. Use shorter sentences and simpler words.",
                    reading_ease
                ),
                details,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::rules::testing::{doc, run};

    #[test]
    fn test_simple_text_is_easy() {
        let r = run(&ReadingEaseRule, &doc("<p>The cat sat. The dog ran. We had fun.</p>", ""));
        assert_eq!(r.status, Status::Favorable);
    }

    #[test]
    fn test_dense_text_is_hard() {
        let html = "<p>Institutional interoperability considerations necessitate comprehensive organizational restructuring initiatives.</p>";
        let r = run(&ReadingEaseRule, &doc(html, ""));
        assert_eq!(r.status, Status::Unfavorable);
    }

    #[test]
    fn test_empty_content_scores_zero() {
        let r = run(&ReadingEaseRule, &doc("", ""));
        assert_eq!(r.details, Details::ReadingEase { reading_ease: 0.0 });
        assert_eq!(r.status, Status::Unfavorable);
    }
}
