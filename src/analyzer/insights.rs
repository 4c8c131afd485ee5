//! Headline numbers: grade level, reading ease, reading time, keyword list

use std::collections::HashMap;

use super::rules::round2;
use super::Thresholds;
use crate::parser::{syllable_count, words, NormalizedView};
use crate::{ContentDocument, Insights, KeywordCount};

/// Word, sentence and syllable totals behind both Flesch formulas
struct TextStats {
    words: f64,
    sentences: f64,
    syllables: f64,
}

impl TextStats {
    /// `None` when the text has no words. Sentences are clamped to at least 1.
    fn of(view: &NormalizedView) -> Option<Self> {
        if view.words.is_empty() {
            return None;
        }
        Some(Self {
            words: view.words.len() as f64,
            sentences: view.sentence_count().max(1) as f64,
            syllables: view.words.iter().map(|w| syllable_count(w)).sum::<usize>() as f64,
        })
    }
}

/// Flesch-Kincaid grade level, rounded to two decimals; 0 for an empty text
pub fn flesch_kincaid_grade(view: &NormalizedView) -> f64 {
    match TextStats::of(view) {
        Some(s) => round2(0.39 * (s.words / s.sentences) + 11.8 * (s.syllables / s.words) - 15.59),
        None => 0.0,
    }
}

/// Flesch reading ease (higher is easier), rounded to two decimals; 0 for an empty text
pub fn flesch_reading_ease(view: &NormalizedView) -> f64 {
    round2(unrounded_reading_ease(view))
}

/// Flesch reading ease before rounding, for threshold comparisons
pub(crate) fn unrounded_reading_ease(view: &NormalizedView) -> f64 {
    match TextStats::of(view) {
        Some(s) => 206.835 - 1.015 * (s.words / s.sentences) - 84.6 * (s.syllables / s.words),
        None => 0.0,
    }
}

/// Label and audience for a grade level
pub fn grade_description(grade: f64) -> (&'static str, &'static str) {
    if grade <= 5.0 {
        ("Very easy to read", "Suitable for readers in 5th grade or younger")
    } else if grade <= 8.0 {
        ("Fairly easy to read", "Suitable for readers in 6th to 8th grade")
    } else if grade <= 12.0 {
        ("Standard", "Suitable for high school readers")
    } else if grade <= 16.0 {
        ("Difficult to read", "Suitable for early college readers")
    } else {
        (
            "Very difficult to read",
            "Suitable for advanced college readers or technical text",
        )
    }
}

/// Minutes needed to read `word_count` words, rounded up
pub fn reading_time(word_count: usize, words_per_minute: usize) -> usize {
    if words_per_minute == 0 {
        return 0;
    }
    word_count.div_ceil(words_per_minute)
}

/// Most frequent words of title and content, ties in first-seen order
pub fn keyword_list(title: &str, view: &NormalizedView, size: usize) -> Vec<KeywordCount> {
    let mut counts: Vec<KeywordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in words(title).into_iter().chain(view.words.iter().cloned()) {
        match index.get(&word) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push(KeywordCount { word, count: 1 });
            }
        }
    }

    // stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(size);
    counts
}

/// Compute every insight for one document
pub fn compile(document: &ContentDocument, view: &NormalizedView, thresholds: &Thresholds) -> Insights {
    let score = flesch_kincaid_grade(view);
    let (label, info) = grade_description(score);
    Insights {
        score,
        score_label: label.to_string(),
        score_info: info.to_string(),
        reading_ease: flesch_reading_ease(view),
        word_count: view.word_count(),
        reading_time: reading_time(view.word_count(), thresholds.words_per_minute),
        keyword_list: keyword_list(&document.title, view, thresholds.keyword_list_size),
    }
}
