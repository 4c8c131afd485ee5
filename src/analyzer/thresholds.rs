//! Tunable rule thresholds

use serde::{Deserialize, Serialize};

/// Revision of the default threshold table. Bump when a default changes.
pub const RULESET_VERSION: u32 = 3;

/// Every constant the criteria compare against. Deserializes partially:
/// fields missing from the config keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thresholds {
    /// Characters used as the introduction when the text has no sentence terminator
    pub introduction_fallback_chars: usize,
    pub density_min: f64,
    pub density_max: f64,
    pub keyphrase_min_words: usize,
    pub keyphrase_max_words: usize,
    /// Subheadings mentioning the keyphrase needed for a favorable verdict
    pub subheadings_with_keyphrase: usize,
    pub meta_description_min_chars: usize,
    pub meta_description_max_chars: usize,
    pub text_length_good_words: usize,
    pub text_length_min_words: usize,
    pub title_min_chars: usize,
    pub title_max_chars: usize,
    pub reading_ease_good: f64,
    pub reading_ease_min: f64,
    pub complex_word_chars: usize,
    pub complex_word_max_pct: f64,
    /// A sentence with more tokens than this is long
    pub long_sentence_words: usize,
    pub long_sentence_caution_pct: f64,
    pub long_sentence_max_pct: f64,
    pub paragraph_max_sentences: usize,
    pub subheading_max_words: f64,
    /// Run of same-word sentence openings that triggers a warning
    pub consecutive_max_run: usize,
    pub transition_min_pct: f64,
    pub passive_caution_pct: f64,
    pub passive_max_pct: f64,
    pub words_per_minute: usize,
    pub keyword_list_size: usize,
    /// Section percentage at or above which a summary is favorable
    pub summary_favorable_pct: u8,
    /// Section percentage at or above which a summary is cautionary
    pub summary_cautionary_pct: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            introduction_fallback_chars: 150,
            density_min: 0.5,
            density_max: 2.5,
            keyphrase_min_words: 2,
            keyphrase_max_words: 4,
            subheadings_with_keyphrase: 2,
            meta_description_min_chars: 120,
            meta_description_max_chars: 156,
            text_length_good_words: 900,
            text_length_min_words: 300,
            title_min_chars: 50,
            title_max_chars: 60,
            reading_ease_good: 60.0,
            reading_ease_min: 30.0,
            complex_word_chars: 8,
            complex_word_max_pct: 15.0,
            long_sentence_words: 20,
            long_sentence_caution_pct: 25.0,
            long_sentence_max_pct: 30.0,
            paragraph_max_sentences: 4,
            subheading_max_words: 300.0,
            consecutive_max_run: 2,
            transition_min_pct: 30.0,
            passive_caution_pct: 10.0,
            passive_max_pct: 15.0,
            words_per_minute: 200,
            keyword_list_size: 10,
            summary_favorable_pct: 71,
            summary_cautionary_pct: 31,
        }
    }
}
