//! Passive voice share.

use super::{percentage, round2, AnalysisContext, AnalysisRule};
use crate::lexicon::{Lexicon, WordList};
use crate::parser::words;
use crate::{CriterionId, CriterionResult, Details, Status};

#[derive(Debug, Default)]
pub struct PassiveVoiceRule;

impl PassiveVoiceRule {
    /// A sentence is passive when a token carries a passive marker and no
    /// exception word occurs anywhere in the sentence.
    pub fn is_passive(sentence: &str, lexicon: &dyn Lexicon) -> bool {
        let tokens = words(sentence);
        if !tokens.iter().any(|t| lexicon.has_passive_marker(t)) {
            return false;
        }
        let lowered = sentence.to_lowercase();
        !lexicon
            .words(WordList::PassiveExceptions)
            .iter()
            .any(|exception| {
                if exception.contains(' ') {
                    lowered.contains(exception.as_str())
                } else {
                    tokens.iter().any(|t| t == exception)
                }
            })
    }
}

impl AnalysisRule for PassiveVoiceRule {
    fn id(&self) -> CriterionId {
        CriterionId::PassiveVoice
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let total_sentences = ctx.view.sentence_count();
        let passive_sentences = ctx
            .view
            .sentences
            .iter()
            .filter(|s| Self::is_passive(s, ctx.lexicon))
            .count();
        let raw = percentage(passive_sentences, total_sentences);
        let pct = round2(raw);
        let details = Details::PassiveVoice {
            passive_sentences,
            total_sentences,
            percentage: pct,
        };
        let t = ctx.thresholds;

        if raw > t.passive_max_pct {
            CriterionResult::new(
                Status::Unfavorable,
                format!(
                    "{}% of the sentences are in the passive voice, more than the recommended maximum of {}%. Use active verbs.",
                    pct, t.passive_max_pct
                ),
                details,
            )
        } else if raw > t.passive_caution_pct {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "{}% of the sentences are in the passive voice. Try to keep it at or below {}%.",
                    pct, t.passive_caution_pct
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Favorable,
                "You're using enough active voice. That's great!",
                details,
            )
        }
    }
}
