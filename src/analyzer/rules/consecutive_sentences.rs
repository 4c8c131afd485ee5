//! Adjacent sentences opening with the same word.

use super::{AnalysisContext, AnalysisRule};
use crate::parser::words;
use crate::{CriterionId, CriterionResult, Details, Status};

#[derive(Debug, Default)]
pub struct ConsecutiveSentencesRule;

impl ConsecutiveSentencesRule {
    /// Longest streak of adjacent sentences sharing a case-folded first word,
    /// with that word. A lone sentence is a streak of 1.
    pub fn longest_run(sentences: &[String]) -> (usize, Option<String>) {
        let mut best = (0, None);
        let mut current: Option<String> = None;
        let mut run = 0;

        for first in sentences.iter().map(|s| words(s).into_iter().next()) {
            if first.is_some() && first == current {
                run += 1;
            } else {
                run = 1;
                current = first;
            }
            if run > best.0 {
                best = (run, current.clone());
            }
        }

        best
    }
}

impl AnalysisRule for ConsecutiveSentencesRule {
    fn id(&self) -> CriterionId {
        CriterionId::ConsecutiveSentences
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let (longest_run, word) = Self::longest_run(&ctx.view.sentences);
        let max = ctx.thresholds.consecutive_max_run;

        if longest_run >= max {
            let message = format!(
                "{} consecutive sentences start with \"{}\". Mix things up!",
                longest_run,
                word.as_deref().unwrap_or_default()
            );
            CriterionResult::new(
                Status::Cautionary,
                message,
                Details::ConsecutiveSentences {
                    longest_run,
                    repeated_word: word,
                },
            )
        } else {
            CriterionResult::new(
                Status::Favorable,
                "There is enough variety in your sentences. Good job!",
                Details::ConsecutiveSentences {
                    longest_run,
                    repeated_word: None,
                },
            )
        }
    }
}
