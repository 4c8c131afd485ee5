//! Share of long sentences.

use super::{percentage, round2, AnalysisContext, AnalysisRule};
use crate::parser::word_count;
use crate::{CriterionId, CriterionResult, Details, Status};

#[derive(Debug, Default)]
pub struct SentenceLengthRule;

impl AnalysisRule for SentenceLengthRule {
    fn id(&self) -> CriterionId {
        CriterionId::SentenceLength
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let t = ctx.thresholds;
        let total_sentences = ctx.view.sentence_count();
        let long_sentences = ctx
            .view
            .sentences
            .iter()
            .filter(|s| word_count(s) > t.long_sentence_words)
            .count();
        let raw = percentage(long_sentences, total_sentences);
        let pct = round2(raw);
        let details = Details::SentenceLength {
            long_sentences,
            total_sentences,
            percentage: pct,
        };

        if raw > t.long_sentence_max_pct {
            CriterionResult::new(
                Status::Unfavorable,
                format!(
                    "{}% of the sentences contain more than {} words, which is more than the recommended maximum of {}%. Try to shorten them.",
                    pct, t.long_sentence_words, t.long_sentence_max_pct
                ),
                details,
            )
        } else if raw >= t.long_sentence_caution_pct {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "{}% of the sentences contain more than {} words. Consider shortening some of them.",
                    pct, t.long_sentence_words
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Favorable,
                "Sentence length is fine. Good job!",
                details,
            )
        }
    }
}
