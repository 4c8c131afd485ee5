//! Page-level image alt coverage.

use super::{AnalysisContext, AnalysisRule};
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule checking every image carries alt text
#[derive(Debug, Default)]
pub struct ImagesRule;

impl AnalysisRule for ImagesRule {
    fn id(&self) -> CriterionId {
        CriterionId::Images
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let total_images = ctx.view.images.len();
        let images_with_alt = ctx.view.images.iter().filter(|i| i.has_alt()).count();
        let details = Details::Images {
            total_images,
            images_with_alt,
            images_without_alt: total_images - images_with_alt,
        };

        if total_images == 0 {
            CriterionResult::new(
                Status::Unfavorable,
                "No images appear in this page. Add some to illustrate the content.",
                details,
            )
        } else if images_with_alt == total_images {
            CriterionResult::new(
                Status::Favorable,
                "All images have alt attributes. Good job!",
                details,
            )
        } else if images_with_alt > 0 {
            CriterionResult::new(
                Status::Cautionary,
                "Some images are missing alt attributes. Describe every image.",
                details,
            )
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                "None of the images have alt attributes. Add descriptive alt text.",
                details,
            )
        }
    }
}
