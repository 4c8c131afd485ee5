//! Transition word usage.
//!
//! Counts raw substring occurrences of every lexicon entry, so a text dense in
//! transitions can score above 100%.

use super::{percentage, round2, AnalysisContext, AnalysisRule};
use crate::lexicon::WordList;
use crate::parser::count_occurrences;
use crate::{CriterionId, CriterionResult, Details, Status};

#[derive(Debug, Default)]
pub struct TransitionWordsRule;

impl AnalysisRule for TransitionWordsRule {
    fn id(&self) -> CriterionId {
        CriterionId::TransitionWords
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let occurrences: usize = ctx
            .lexicon
            .words(WordList::Transitions)
            .iter()
            .map(|phrase| count_occurrences(&ctx.view.lowercase, phrase))
            .sum();
        let total_sentences = ctx.view.sentence_count();
        let raw = percentage(occurrences, total_sentences);
        let pct = round2(raw);
        let details = Details::TransitionWords {
            occurrences,
            total_sentences,
            percentage: pct,
        };
        let min = ctx.thresholds.transition_min_pct;

        if raw < min {
            CriterionResult::new(
                Status::Unfavorable,
                format!(
                    "Transition words appear at a rate of {}%, which is below the recommended {}%. Use more of them.",
                    pct, min
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Favorable,
                "Well done, you use enough transition words!",
                details,
            )
        }
    }
}
