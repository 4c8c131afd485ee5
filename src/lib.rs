//! Seoscope: SEO and readability diagnostics for authored content
//!
//! This library inspects an HTML content fragment plus its metadata (title,
//! keyphrase, slug, meta description) and produces a report of per-criterion
//! verdicts an author can act on before publishing.

pub mod analyzer;
pub mod config;
pub mod input;
pub mod lexicon;
pub mod parser;
pub mod reporter;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single piece of authored content submitted for analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    /// HTML body of the content
    #[serde(default)]
    pub content: String,
    /// Page title
    #[serde(default)]
    pub title: String,
    /// Target keyphrase the content is optimized for
    #[serde(default)]
    pub keyphrase: String,
    /// Keyphrases already used by other content (caller-supplied history)
    #[serde(default)]
    pub used_keyphrases: Vec<String>,
    /// URL slug
    #[serde(default)]
    pub slug: String,
    /// Meta description (may contain HTML entities)
    #[serde(default)]
    pub meta_description: String,
}

/// Traffic-light status of a criterion or section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Favorable,
    Cautionary,
    Unfavorable,
}

impl Status {
    pub fn is_favorable(self) -> bool {
        self == Status::Favorable
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Favorable => write!(f, "favorable"),
            Status::Cautionary => write!(f, "cautionary"),
            Status::Unfavorable => write!(f, "unfavorable"),
        }
    }
}

/// Report section a criterion belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    KeyphraseAnalysis,
    Readability,
}

/// Stable identifiers for every criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriterionId {
    Introduction,
    Density,
    Distribution,
    KeyphraseLength,
    Subheadings,
    ImageKeyphrase,
    Title,
    LinkKeyphrase,
    PreviouslyUsed,
    Slug,
    MetaDescriptionKeyphrase,
    MetaDescriptionLength,
    OutboundLinks,
    InternalLinks,
    Images,
    TextLength,
    TitleWidth,
    ReadingEase,
    WordComplexity,
    SentenceLength,
    ParagraphLength,
    SubheadingDistribution,
    ConsecutiveSentences,
    TransitionWords,
    PassiveVoice,
}

impl CriterionId {
    /// Section this criterion is reported under
    pub fn section(self) -> SectionKind {
        use CriterionId::*;
        match self {
            Introduction | Density | Distribution | KeyphraseLength | Subheadings
            | ImageKeyphrase | Title | LinkKeyphrase | PreviouslyUsed | Slug
            | MetaDescriptionKeyphrase | MetaDescriptionLength | OutboundLinks | InternalLinks
            | Images | TextLength | TitleWidth => SectionKind::KeyphraseAnalysis,
            ReadingEase | WordComplexity | SentenceLength | ParagraphLength
            | SubheadingDistribution | ConsecutiveSentences | TransitionWords | PassiveVoice => {
                SectionKind::Readability
            }
        }
    }

    /// Human-readable label for console output
    pub fn label(self) -> &'static str {
        match self {
            CriterionId::Introduction => "Keyphrase in introduction",
            CriterionId::Density => "Keyphrase density",
            CriterionId::Distribution => "Keyphrase distribution",
            CriterionId::KeyphraseLength => "Keyphrase length",
            CriterionId::Subheadings => "Keyphrase in subheadings",
            CriterionId::ImageKeyphrase => "Keyphrase in image alt text",
            CriterionId::Title => "Keyphrase in title",
            CriterionId::LinkKeyphrase => "Keyphrase in link text",
            CriterionId::PreviouslyUsed => "Previously used keyphrase",
            CriterionId::Slug => "Keyphrase in slug",
            CriterionId::MetaDescriptionKeyphrase => "Keyphrase in meta description",
            CriterionId::MetaDescriptionLength => "Meta description length",
            CriterionId::OutboundLinks => "Outbound links",
            CriterionId::InternalLinks => "Internal links",
            CriterionId::Images => "Image alt attributes",
            CriterionId::TextLength => "Text length",
            CriterionId::TitleWidth => "SEO title width",
            CriterionId::ReadingEase => "Flesch reading ease",
            CriterionId::WordComplexity => "Word complexity",
            CriterionId::SentenceLength => "Sentence length",
            CriterionId::ParagraphLength => "Paragraph length",
            CriterionId::SubheadingDistribution => "Subheading distribution",
            CriterionId::ConsecutiveSentences => "Consecutive sentences",
            CriterionId::TransitionWords => "Transition words",
            CriterionId::PassiveVoice => "Passive voice",
        }
    }
}

impl std::fmt::Display for CriterionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CriterionId::Introduction => "introduction",
            CriterionId::Density => "density",
            CriterionId::Distribution => "distribution",
            CriterionId::KeyphraseLength => "keyphrase-length",
            CriterionId::Subheadings => "subheadings",
            CriterionId::ImageKeyphrase => "image-keyphrase",
            CriterionId::Title => "title",
            CriterionId::LinkKeyphrase => "link-keyphrase",
            CriterionId::PreviouslyUsed => "previously-used",
            CriterionId::Slug => "slug",
            CriterionId::MetaDescriptionKeyphrase => "meta-description-keyphrase",
            CriterionId::MetaDescriptionLength => "meta-description-length",
            CriterionId::OutboundLinks => "outbound-links",
            CriterionId::InternalLinks => "internal-links",
            CriterionId::Images => "images",
            CriterionId::TextLength => "text-length",
            CriterionId::TitleWidth => "title-width",
            CriterionId::ReadingEase => "reading-ease",
            CriterionId::WordComplexity => "word-complexity",
            CriterionId::SentenceLength => "sentence-length",
            CriterionId::ParagraphLength => "paragraph-length",
            CriterionId::SubheadingDistribution => "subheading-distribution",
            CriterionId::ConsecutiveSentences => "consecutive-sentences",
            CriterionId::TransitionWords => "transition-words",
            CriterionId::PassiveVoice => "passive-voice",
        };
        write!(f, "{}", name)
    }
}

impl CriterionId {
    /// Every criterion, in report order
    pub const ALL: [CriterionId; 25] = [
        CriterionId::Introduction,
        CriterionId::Density,
        CriterionId::Distribution,
        CriterionId::KeyphraseLength,
        CriterionId::Subheadings,
        CriterionId::ImageKeyphrase,
        CriterionId::Title,
        CriterionId::LinkKeyphrase,
        CriterionId::PreviouslyUsed,
        CriterionId::Slug,
        CriterionId::MetaDescriptionKeyphrase,
        CriterionId::MetaDescriptionLength,
        CriterionId::OutboundLinks,
        CriterionId::InternalLinks,
        CriterionId::Images,
        CriterionId::TextLength,
        CriterionId::TitleWidth,
        CriterionId::ReadingEase,
        CriterionId::WordComplexity,
        CriterionId::SentenceLength,
        CriterionId::ParagraphLength,
        CriterionId::SubheadingDistribution,
        CriterionId::ConsecutiveSentences,
        CriterionId::TransitionWords,
        CriterionId::PassiveVoice,
    ];
}

impl std::str::FromStr for CriterionId {
    type Err = String;

    /// Parse a kebab-case criterion name, as used in config files
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CriterionId::ALL
            .into_iter()
            .find(|id| id.to_string() == s)
            .ok_or_else(|| format!("Unknown criterion: {}", s))
    }
}

/// Verdict produced by one criterion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResult {
    /// Status tier
    pub status: Status,
    /// Human-readable feedback
    pub message: String,
    /// Criterion-specific measurements
    #[serde(flatten)]
    pub details: Details,
}

impl CriterionResult {
    pub fn new(status: Status, message: impl Into<String>, details: Details) -> Self {
        Self {
            status,
            message: message.into(),
            details,
        }
    }
}

/// Criterion-specific measurements, flattened into the verdict when serialized
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum Details {
    Introduction {
        introduction: String,
        keyphrase_present: bool,
    },
    Density {
        keyphrase_count: usize,
        total_words: usize,
        density: f64,
    },
    Distribution {
        beginning: usize,
        middle: usize,
        end: usize,
        sections_with_keyphrase: usize,
    },
    KeyphraseLength {
        keyphrase: String,
        length: usize,
    },
    Subheadings {
        total_subheadings: usize,
        keyphrase_count: usize,
    },
    ImageKeyphrase {
        total_images: usize,
        images_with_alt: usize,
        images_with_keyphrase: usize,
    },
    Title {
        title: String,
        position: Option<usize>,
    },
    LinkKeyphrase {
        link_keyphrase_count: usize,
    },
    PreviouslyUsed {
        previously_used: bool,
    },
    Slug {
        slug: String,
        slugified_keyphrase: String,
        keyphrase_in_slug: bool,
    },
    MetaDescriptionKeyphrase {
        keyphrase_present: bool,
    },
    MetaDescriptionLength {
        length: usize,
    },
    OutboundLinks {
        total_outbound_links: usize,
        followed_links: usize,
        nofollowed_links: usize,
        sponsored_links: usize,
        ugc_links: usize,
    },
    InternalLinks {
        total_internal_links: usize,
        followed_links: usize,
        nofollowed_links: usize,
    },
    Images {
        total_images: usize,
        images_with_alt: usize,
        images_without_alt: usize,
    },
    TextLength {
        word_count: usize,
    },
    TitleWidth {
        title: String,
        length: usize,
    },
    ReadingEase {
        reading_ease: f64,
    },
    WordComplexity {
        complex_words: usize,
        total_words: usize,
        percentage: f64,
    },
    SentenceLength {
        long_sentences: usize,
        total_sentences: usize,
        percentage: f64,
    },
    ParagraphLength {
        total_blocks: usize,
        long_blocks: usize,
        longest_block_sentences: usize,
    },
    SubheadingDistribution {
        total_headings: usize,
        words_per_section: f64,
    },
    ConsecutiveSentences {
        longest_run: usize,
        repeated_word: Option<String>,
    },
    TransitionWords {
        occurrences: usize,
        total_sentences: usize,
        percentage: f64,
    },
    PassiveVoice {
        passive_sentences: usize,
        total_sentences: usize,
        percentage: f64,
    },
}

/// Aggregate over one section's verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    /// Number of criteria evaluated
    pub total: usize,
    /// Number of favorable criteria
    pub success: usize,
    /// success / total as a rounded percentage (0-100)
    pub percentage: u8,
    /// Tier derived from the percentage
    pub status: Status,
}

/// A named group of verdicts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub criteria: BTreeMap<CriterionId, CriterionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SectionSummary>,
}

impl Section {
    pub fn get(&self, id: CriterionId) -> Option<&CriterionResult> {
        self.criteria.get(&id)
    }
}

/// Word frequency entry in the keyword list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Headline numbers about the content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Flesch-Kincaid grade level
    pub score: f64,
    /// Short label for the grade level
    pub score_label: String,
    /// Audience the grade level suits
    pub score_info: String,
    /// Flesch reading ease (higher is easier)
    pub reading_ease: f64,
    pub word_count: usize,
    /// Estimated reading time in minutes
    pub reading_time: usize,
    pub keyword_list: Vec<KeywordCount>,
}

/// Full analysis output for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub insights: Insights,
    pub keyphrase_analysis: Section,
    pub readability: Section,
}

impl Report {
    /// Iterate over every verdict in both criterion sections
    pub fn verdicts(&self) -> impl Iterator<Item = (&CriterionId, &CriterionResult)> {
        self.keyphrase_analysis
            .criteria
            .iter()
            .chain(self.readability.criteria.iter())
    }
}

/// Report for a document loaded from disk
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResult {
    pub file_path: std::path::PathBuf,
    #[serde(flatten)]
    pub report: Report,
}

/// Public API: analyze a single document with default thresholds and lexicon.
///
/// * `document` - content and metadata to inspect
/// * `site_domain` - the site's own domain, used to tell internal from outbound links
pub fn analyze_document(document: &ContentDocument, site_domain: &str) -> Report {
    crate::analyzer::AnalysisEngine::new()
        .with_site_domain(site_domain)
        .analyze(document)
}
