//! Keyphrase in the URL slug.

use super::{missing_keyphrase, AnalysisContext, AnalysisRule};
use crate::parser::slugify;
use crate::{CriterionId, CriterionResult, Details, Status};

/// Rule checking the slugified keyphrase is part of the slug
#[derive(Debug, Default)]
pub struct SlugRule;

impl AnalysisRule for SlugRule {
    fn id(&self) -> CriterionId {
        CriterionId::Slug
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let slug = ctx.document.slug.trim().to_lowercase();
        let slugified_keyphrase = slugify(ctx.keyphrase());

        if slug.is_empty() {
            return CriterionResult::new(
                Status::Unfavorable,
                "The slug is empty. Add a slug that contains the keyphrase.",
                Details::Slug {
                    slug,
                    slugified_keyphrase,
                    keyphrase_in_slug: false,
                },
            );
        }

        if slugified_keyphrase.is_empty() {
            return missing_keyphrase(Details::Slug {
                slug,
                slugified_keyphrase,
                keyphrase_in_slug: false,
            });
        }

        let keyphrase_in_slug = slug.contains(&slugified_keyphrase);
        let details = Details::Slug {
            slug,
            slugified_keyphrase,
            keyphrase_in_slug,
        };

        if keyphrase_in_slug {
            CriterionResult::new(Status::Favorable, "Keyphrase in slug: great work!", details)
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                "The slug does not contain the keyphrase. Add it to the slug.",
                details,
            )
        }
    }
}
