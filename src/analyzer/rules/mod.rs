//! Analysis rules: one independent criterion per file

pub mod anchor_text;
pub mod consecutive_sentences;
pub mod density;
pub mod distribution;
pub mod image_keyphrase;
pub mod images;
pub mod introduction;
pub mod keyphrase_length;
pub mod links;
pub mod meta_description;
pub mod paragraph_length;
pub mod passive_voice;
pub mod previously_used;
pub mod reading_ease;
pub mod sentence_length;
pub mod slug;
pub mod subheading_distribution;
pub mod subheadings;
pub mod text_length;
pub mod title;
pub mod title_width;
pub mod transition_words;
pub mod word_complexity;

pub use anchor_text::LinkKeyphraseRule;
pub use consecutive_sentences::ConsecutiveSentencesRule;
pub use density::DensityRule;
pub use distribution::DistributionRule;
pub use image_keyphrase::ImageKeyphraseRule;
pub use images::ImagesRule;
pub use introduction::IntroductionRule;
pub use keyphrase_length::KeyphraseLengthRule;
pub use links::{InternalLinksRule, OutboundLinksRule};
pub use meta_description::{MetaDescriptionKeyphraseRule, MetaDescriptionLengthRule};
pub use paragraph_length::ParagraphLengthRule;
pub use passive_voice::PassiveVoiceRule;
pub use previously_used::PreviouslyUsedRule;
pub use reading_ease::ReadingEaseRule;
pub use sentence_length::SentenceLengthRule;
pub use slug::SlugRule;
pub use subheading_distribution::SubheadingDistributionRule;
pub use subheadings::SubheadingsRule;
pub use text_length::TextLengthRule;
pub use title::TitleRule;
pub use title_width::TitleWidthRule;
pub use transition_words::TransitionWordsRule;
pub use word_complexity::WordComplexityRule;

use super::Thresholds;
use crate::lexicon::Lexicon;
use crate::parser::text::collapse_whitespace;
use crate::parser::NormalizedView;
use crate::{ContentDocument, CriterionId, CriterionResult, Details, Status};

/// Everything a rule may read. Shared, immutable, built once per document.
pub struct AnalysisContext<'a> {
    pub document: &'a ContentDocument,
    pub view: &'a NormalizedView,
    pub thresholds: &'a Thresholds,
    pub lexicon: &'a dyn Lexicon,
    /// The site's own domain; empty when unknown
    pub site_domain: &'a str,
    keyphrase: String,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        document: &'a ContentDocument,
        view: &'a NormalizedView,
        thresholds: &'a Thresholds,
        lexicon: &'a dyn Lexicon,
        site_domain: &'a str,
    ) -> Self {
        Self {
            document,
            view,
            thresholds,
            lexicon,
            site_domain: site_domain.trim(),
            keyphrase: collapse_whitespace(&document.keyphrase).to_lowercase(),
        }
    }

    /// Trimmed, lowercased keyphrase
    pub fn keyphrase(&self) -> &str {
        &self.keyphrase
    }
}

/// Trait for analysis rules
pub trait AnalysisRule: Send + Sync {
    /// Stable identifier of the criterion
    fn id(&self) -> CriterionId;

    /// Inspect the document and return a verdict. Never fails: missing input
    /// maps to the unfavorable tier.
    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> CriterionResult;
}

/// Every built-in rule, in report order
pub fn all_rules() -> Vec<Box<dyn AnalysisRule>> {
    vec![
        Box::new(IntroductionRule),
        Box::new(DensityRule),
        Box::new(DistributionRule),
        Box::new(KeyphraseLengthRule),
        Box::new(SubheadingsRule),
        Box::new(ImageKeyphraseRule),
        Box::new(TitleRule),
        Box::new(LinkKeyphraseRule),
        Box::new(PreviouslyUsedRule),
        Box::new(SlugRule),
        Box::new(MetaDescriptionKeyphraseRule),
        Box::new(MetaDescriptionLengthRule),
        Box::new(OutboundLinksRule),
        Box::new(InternalLinksRule),
        Box::new(ImagesRule),
        Box::new(TextLengthRule),
        Box::new(TitleWidthRule),
        Box::new(ReadingEaseRule),
        Box::new(WordComplexityRule),
        Box::new(SentenceLengthRule),
        Box::new(ParagraphLengthRule),
        Box::new(SubheadingDistributionRule),
        Box::new(ConsecutiveSentencesRule),
        Box::new(TransitionWordsRule),
        Box::new(PassiveVoiceRule),
    ]
}

/// Verdict for keyphrase checks when no keyphrase was given
pub(crate) fn missing_keyphrase(details: Details) -> CriterionResult {
    CriterionResult::new(
        Status::Unfavorable,
        "No focus keyphrase was set. Set a keyphrase to run this check.",
        details,
    )
}

/// `part / whole * 100`; 0 when `whole` is 0. Unrounded: compare this against
/// thresholds and round only what goes into the details.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shared fixtures for rule tests
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::lexicon::WordLists;

    pub fn doc(content: &str, keyphrase: &str) -> ContentDocument {
        ContentDocument {
            content: content.to_string(),
            keyphrase: keyphrase.to_string(),
            ..ContentDocument::default()
        }
    }

    /// Run one rule over a document with default thresholds and English lists
    pub fn run(rule: &dyn AnalysisRule, document: &ContentDocument) -> CriterionResult {
        run_with_domain(rule, document, "example.com")
    }

    pub fn run_with_domain(
        rule: &dyn AnalysisRule,
        document: &ContentDocument,
        domain: &str,
    ) -> CriterionResult {
        let view = NormalizedView::from_html(&document.content);
        let thresholds = Thresholds::default();
        let lexicon = WordLists::english();
        let ctx = AnalysisContext::new(document, &view, &thresholds, &lexicon, domain);
        rule.evaluate(&ctx)
    }
}
