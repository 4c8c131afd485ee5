//! Keyphrase used as link text.
//!
//! Polarity is inverted relative to the other keyphrase checks: finding the
//! keyphrase is the problem, because linking away with it competes with this page.

use super::{missing_keyphrase, AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule flagging anchors whose text contains the keyphrase
#[derive(Debug, Default)]
pub struct LinkKeyphraseRule;

impl AnalysisRule for LinkKeyphraseRule {
    fn id(&self) -> CriterionId {
        CriterionId::LinkKeyphrase
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let keyphrase = ctx.keyphrase();
        if keyphrase.is_empty() {
            return missing_keyphrase(Details::LinkKeyphrase {
                link_keyphrase_count: 0,
            });
        }

        let link_keyphrase_count = ctx
            .view
            .anchors
            .iter()
            .filter(|a| a.text.to_lowercase().contains(keyphrase))
            .count();
        let details = Details::LinkKeyphrase {
            link_keyphrase_count,
        };

        if link_keyphrase_count > 0 {
            CriterionResult::new(
                Status::Unfavorable,
                "You are linking to other pages with the words you want this page to rank for. Don't do that!",
                details,
            )
        } else {
            CriterionResult::new(
                Status::Favorable,
                "No link text uses the keyphrase. Good job!",
                details,
            )
        }
    }
}
