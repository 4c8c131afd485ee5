//! Word lists consumed by the readability criteria
//!
//! Lists are injectable: the engine only sees the [`Lexicon`] trait, so a
//! caller can retarget it to another language by supplying its own lists.

mod english;
mod indonesian;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Named word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordList {
    /// Single- and multi-word transition phrases
    Transitions,
    /// Prefix-style passive markers. An entry ending in `-` is a bound prefix
    /// and only matches tokens longer than itself.
    PassiveMarkers,
    /// Words that look passive but are not
    PassiveExceptions,
}

/// Membership queries over lowercased words and phrases
pub trait Lexicon: Send + Sync {
    /// All entries of a list, lowercased
    fn words(&self, list: WordList) -> &[String];

    /// Whether `phrase` (normalized) is an entry of `list`
    fn contains(&self, list: WordList, phrase: &str) -> bool {
        let phrase = phrase.trim().to_lowercase();
        self.words(list).iter().any(|w| *w == phrase)
    }

    /// Whether `token` carries one of the passive markers
    fn has_passive_marker(&self, token: &str) -> bool {
        self.words(WordList::PassiveMarkers)
            .iter()
            .any(|marker| marker_matches(marker, token))
    }
}

/// Match a passive marker against a lowercased token
pub fn marker_matches(marker: &str, token: &str) -> bool {
    match marker.strip_suffix('-') {
        Some(prefix) => token.len() > prefix.len() && token.starts_with(prefix),
        None => token.starts_with(marker),
    }
}

/// Built-in language packs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Id,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Id => write!(f, "id"),
        }
    }
}

/// Plain in-memory lexicon, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordLists {
    #[serde(default)]
    pub transitions: Vec<String>,
    #[serde(default)]
    pub passive_markers: Vec<String>,
    #[serde(default)]
    pub passive_exceptions: Vec<String>,
}

impl WordLists {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self::from_static(
                english::TRANSITIONS,
                english::PASSIVE_MARKERS,
                english::PASSIVE_EXCEPTIONS,
            ),
            Language::Id => Self::from_static(
                indonesian::TRANSITIONS,
                indonesian::PASSIVE_MARKERS,
                indonesian::PASSIVE_EXCEPTIONS,
            ),
        }
    }

    pub fn english() -> Self {
        Self::for_language(Language::En)
    }

    pub fn indonesian() -> Self {
        Self::for_language(Language::Id)
    }

    /// Load word lists from a JSON file (`transitions`, `passiveMarkers`, `passiveExceptions`)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon: {}", path.display()))?;
        let lists: WordLists = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in lexicon: {}", path.display()))?;
        Ok(lists.normalized())
    }

    fn from_static(transitions: &[&str], markers: &[&str], exceptions: &[&str]) -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            transitions: owned(transitions),
            passive_markers: owned(markers),
            passive_exceptions: owned(exceptions),
        }
    }

    /// Lowercase and trim every entry, dropping blanks
    fn normalized(self) -> Self {
        let clean = |list: Vec<String>| {
            list.into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };
        Self {
            transitions: clean(self.transitions),
            passive_markers: clean(self.passive_markers),
            passive_exceptions: clean(self.passive_exceptions),
        }
    }
}

impl Lexicon for WordLists {
    fn words(&self, list: WordList) -> &[String] {
        match list {
            WordList::Transitions => &self.transitions,
            WordList::PassiveMarkers => &self.passive_markers,
            WordList::PassiveExceptions => &self.passive_exceptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_lists_are_lowercase_and_nonempty() {
        for lists in [WordLists::english(), WordLists::indonesian()] {
            for list in [
                WordList::Transitions,
                WordList::PassiveMarkers,
                WordList::PassiveExceptions,
            ] {
                let words = lists.words(list);
                assert!(!words.is_empty());
                assert!(words.iter().all(|w| *w == w.to_lowercase()));
            }
        }
    }

    #[test]
    fn test_contains_normalizes_phrase() {
        let lists = WordLists::english();
        assert!(lists.contains(WordList::Transitions, "  For Example "));
        assert!(!lists.contains(WordList::Transitions, "banana"));
    }

    #[test]
    fn test_bound_prefix_marker() {
        assert!(marker_matches("di-", "ditulis"));
        assert!(!marker_matches("di-", "di"));
        assert!(marker_matches("was", "was"));
        assert!(!marker_matches("was", "saw"));
    }

    #[test]
    fn test_indonesian_passive_marker() {
        let lists = WordLists::indonesian();
        assert!(lists.has_passive_marker("ditulis"));
        assert!(lists.has_passive_marker("terbuat"));
        assert!(!lists.has_passive_marker("menulis"));
    }

    #[test]
    fn test_from_file_normalizes_entries() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{ "transitions": ["  However ", ""], "passiveMarkers": ["GE-"] }}"#
        )
        .unwrap();
        let lists = WordLists::from_file(file.path()).unwrap();
        assert_eq!(lists.transitions, vec!["however"]);
        assert_eq!(lists.passive_markers, vec!["ge-"]);
        assert!(lists.passive_exceptions.is_empty());
    }

    #[test]
    fn test_from_file_rejects_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        let err = WordLists::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }
}
