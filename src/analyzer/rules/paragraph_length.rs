//! Sentences per paragraph or heading block.

use super::{AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

#[derive(Debug, Default)]
pub struct ParagraphLengthRule;

impl AnalysisRule for ParagraphLengthRule {
    fn id(&self) -> CriterionId {
        CriterionId::ParagraphLength
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let max = ctx.thresholds.paragraph_max_sentences;
        let blocks = &ctx.view.blocks;
        let long_blocks = blocks.iter().filter(|b| b.sentence_count > max).count();
        let longest_block_sentences = blocks.iter().map(|b| b.sentence_count).max().unwrap_or(0);
        let details = Details::ParagraphLength {
            total_blocks: blocks.len(),
            long_blocks,
            longest_block_sentences,
        };

        if long_blocks > 0 {
            CriterionResult::new(
                Status::Cautionary,
                format!(
                    "{} paragraph(s) contain more than {} sentences. Split them up.",
                    long_blocks, max
                ),
                details,
            )
        } else {
            CriterionResult::new(
                Status::Favorable,
                "None of the paragraphs are too long. Great job!",
                details,
            )
        }
    }
}
