//! Outbound and internal link checks.
//!
//! Classification depends on the caller's site domain; an empty domain
//! never marks a link as internal.

use super::{AnalysisContext, AnalysisRule};
use crate::parser::Anchor;
use crate::{CriterionId, CriterionResult, Details, Status};

/// How a link's `rel` attribute qualifies it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Followed,
    Nofollowed,
    Sponsored,
    Ugc,
}

impl LinkKind {
    /// Classify by `rel`: nofollow wins over sponsored, which wins over ugc
    pub fn classify(rel: &str) -> Self {
        let rel = rel.to_lowercase();
        if rel.contains("nofollow") {
            LinkKind::Nofollowed
        } else if rel.contains("sponsored") {
            LinkKind::Sponsored
        } else if rel.contains("ugc") {
            LinkKind::Ugc
        } else {
            LinkKind::Followed
        }
    }
}

fn points_to_site(anchor: &Anchor, site_domain: &str) -> bool {
    !site_domain.is_empty() && anchor.href.contains(site_domain)
}

pub fn is_outbound(anchor: &Anchor, site_domain: &str) -> bool {
    !anchor.href.is_empty() && !points_to_site(anchor, site_domain) && !anchor.href.starts_with('/')
}

pub fn is_internal(anchor: &Anchor, site_domain: &str) -> bool {
    !anchor.href.is_empty() && (points_to_site(anchor, site_domain) || anchor.href.starts_with('/'))
}

/// Rule checking the content links out to other sites
#[derive(Debug, Default)]
pub struct OutboundLinksRule;

impl AnalysisRule for OutboundLinksRule {
    fn id(&self) -> CriterionId {
        CriterionId::OutboundLinks
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let (mut followed, mut nofollowed, mut sponsored, mut ugc) = (0, 0, 0, 0);
        for anchor in ctx.view.anchors.iter().filter(|a| is_outbound(a, ctx.site_domain)) {
            match LinkKind::classify(&anchor.rel) {
                LinkKind::Followed => followed += 1,
                LinkKind::Nofollowed => nofollowed += 1,
                LinkKind::Sponsored => sponsored += 1,
                LinkKind::Ugc => ugc += 1,
            }
        }
        let details = Details::OutboundLinks {
            total_outbound_links: followed + nofollowed + sponsored + ugc,
            followed_links: followed,
            nofollowed_links: nofollowed,
            sponsored_links: sponsored,
            ugc_links: ugc,
        };

        if followed > 0 {
            CriterionResult::new(
                Status::Favorable,
                "The content links to other sites. Good job!",
                details,
            )
        } else if nofollowed > 0 {
            CriterionResult::new(
                Status::Cautionary,
                "All outbound links are nofollowed. Add at least one followed link.",
                details,
            )
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                "No outbound links appear in this page. Add some where relevant.",
                details,
            )
        }
    }
}

/// Rule checking the content links to other pages of the same site
#[derive(Debug, Default)]
pub struct InternalLinksRule;

impl AnalysisRule for InternalLinksRule {
    fn id(&self) -> CriterionId {
        CriterionId::InternalLinks
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult {
        let (followed, nofollowed) = ctx
            .view
            .anchors
            .iter()
            .filter(|a| is_internal(a, ctx.site_domain))
            .fold((0, 0), |(f, n), a| {
                if LinkKind::classify(&a.rel) == LinkKind::Nofollowed {
                    (f, n + 1)
                } else {
                    (f + 1, n)
                }
            });
        let details = Details::InternalLinks {
            total_internal_links: followed + nofollowed,
            followed_links: followed,
            nofollowed_links: nofollowed,
        };

        if followed > 0 {
            CriterionResult::new(
                Status::Favorable,
                "You have enough internal links. Good job!",
                details,
            )
        } else if nofollowed > 0 {
            CriterionResult::new(
                Status::Cautionary,
                "All internal links are nofollowed. Add at least one followed internal link.",
                details,
            )
        } else {
            CriterionResult::new(
                Status::Unfavorable,
                "No internal links appear in this page. Link to related content on your site.",
                details,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::rules::testing::{doc, run, run_with_domain};

    const LINKS: &str = r#"<p>
        <a href="https://example.com/a">own absolute</a>
        <a href="/about">own relative</a>
        <a href="https://other.org" rel="nofollow">no</a>
        <a href="https://paid.org" rel="sponsored">paid</a>
        <a href="https://forum.org" rel="UGC">ugc</a>
        <a href="">empty</a>
    </p>"#;

    #[test]
    fn test_classify_precedence() {
        assert_eq!(LinkKind::classify("nofollow sponsored"), LinkKind::Nofollowed);
        assert_eq!(LinkKind::classify("sponsored ugc"), LinkKind::Sponsored);
        assert_eq!(LinkKind::classify("noopener"), LinkKind::Followed);
    }

    #[test]
    fn test_outbound_counts() {
        let r = run(&OutboundLinksRule, &doc(LINKS, ""));
        assert_eq!(
            r.details,
            Details::OutboundLinks {
                total_outbound_links: 3,
                followed_links: 0,
                nofollowed_links: 1,
                sponsored_links: 1,
                ugc_links: 1
            }
        );
        assert_eq!(r.status, Status::Cautionary);
    }

    #[test]
    fn test_outbound_followed_is_favorable() {
        let html = r#"<p><a href="https://other.org">ref</a></p>"#;
        let r = run(&OutboundLinksRule, &doc(html, ""));
        assert_eq!(r.status, Status::Favorable);
    }

    #[test]
    fn test_outbound_none() {
        let html = r#"<p><a href="/local">x</a></p>"#;
        let r = run(&OutboundLinksRule, &doc(html, ""));
        assert_eq!(r.status, Status::Unfavorable);
    }

    #[test]
    fn test_internal_counts() {
        let r = run(&InternalLinksRule, &doc(LINKS, ""));
        assert_eq!(
            r.details,
            Details::InternalLinks {
                total_internal_links: 2,
                followed_links: 2,
                nofollowed_links: 0
            }
        );
        assert_eq!(r.status, Status::Favorable);
    }

    #[test]
    fn test_internal_only_nofollowed() {
        let html = r#"<p><a href="/a" rel="nofollow">x</a></p>"#;
        let r = run(&InternalLinksRule, &doc(html, ""));
        assert_eq!(r.status, Status::Cautionary);
    }

    #[test]
    fn test_empty_domain_never_matches() {
        let html = r#"<p><a href="https://example.com/a">x</a></p>"#;
        let internal = run_with_domain(&InternalLinksRule, &doc(html, ""), "");
        assert_eq!(internal.status, Status::Unfavorable);
        let outbound = run_with_domain(&OutboundLinksRule, &doc(html, ""), "");
        assert_eq!(outbound.status, Status::Favorable);
    }
}
