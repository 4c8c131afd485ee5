//! Keyphrase distribution across the beginning, middle and end of the text.

use super::{missing_keyphrase, AnalysisContext, AnalysisRule};
use crate::parser::count_occurrences;
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule checking that the keyphrase is spread through the whole text
#[derive(Debug, Default)]
pub struct DistributionRule;

impl DistributionRule {
    /// Split text into thirds by character count. Each of the first two thirds
    /// holds `ceil(len / 3)` characters; the last one takes the remainder.
    pub fn thirds(text: &str) -> [String; 3] {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let third = len.div_ceil(3);
        let a = third.min(len);
        let b = (third * 2).min(len);
        [
            chars[..a].iter().collect(),
            chars[a..b].iter().collect(),
            chars[b..].iter().collect(),
        ]
    }
}

impl AnalysisRule for DistributionRule {
    fn id(&self) -> CriterionId {
        CriterionId::Distribution
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let keyphrase = ctx.keyphrase();
        let [beginning, middle, end] =
            Self::thirds(&ctx.view.lowercase).map(|part| count_occurrences(&part, keyphrase));
        let sections_with_keyphrase = [beginning, middle, end].iter().filter(|c| **c > 0).count();
        let details = Details::Distribution {
            beginning,
            middle,
            end,
            sections_with_keyphrase,
        };

        if keyphrase.is_empty() {
            return missing_keyphrase(details);
        }

        match sections_with_keyphrase {
            3 => CriterionResult::new(
                Status::Favorable,
                "The keyphrase is evenly distributed throughout the text. Great job!",
                details,
            ),
            2 => CriterionResult::new(
                Status::Cautionary,
                "The keyphrase appears in two parts of the text. Spread it more evenly.",
                details,
            ),
            1 => CriterionResult::new(
                Status::Unfavorable,
                "The keyphrase appears in only one part of the text. Spread it throughout.",
                details,
            ),
            _ => CriterionResult::new(
                Status::Unfavorable,
                "The keyphrase was not found. Add it to the content.",
                details,
            ),
        }
    }
}
