//! Plain-text tokenization: words, sentences, syllables

use regex::Regex;
use std::sync::LazyLock;

/// Marks a block-level element boundary in flattened text
pub const BLOCK_MARK: char = '\u{1E}';

/// Stands in for a period inside anchor text so it never ends a sentence
pub const PROTECTED_DOT: char = '\u{2024}';

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}'\u{2019}]+").expect("word pattern is valid")
});

/// Split text into lowercased word tokens.
///
/// A token is a maximal run of letters, digits and apostrophes that holds at
/// least one letter or digit.
pub fn words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .map(str::to_lowercase)
        .collect()
}

pub fn word_count(text: &str) -> usize {
    WORD_RE
        .find_iter(text)
        .filter(|m| m.as_str().chars().any(char::is_alphanumeric))
        .count()
}

/// Split text into sentences.
///
/// Boundaries are block marks and `.`, `!` or `?` followed by whitespace or
/// the end of the text. Fragments without any word are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();

    for chunk in text.split(BLOCK_MARK) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut current = String::new();
        let mut i = 0;
        while i < chars.len() {
            current.push(chars[i]);
            if is_terminator(chars[i]) {
                // "?!" and "..." end a sentence once
                while i + 1 < chars.len() && is_terminator(chars[i + 1]) {
                    i += 1;
                    current.push(chars[i]);
                }
                if i + 1 >= chars.len() || chars[i + 1].is_whitespace() {
                    push_sentence(&mut sentences, &current);
                    current.clear();
                }
            }
            i += 1;
        }
        push_sentence(&mut sentences, &current);
    }

    sentences
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let restored = raw.replace(PROTECTED_DOT, ".");
    let sentence = collapse_whitespace(&restored);
    if word_count(&sentence) > 0 {
        out.push(sentence);
    }
}

/// Collapse whitespace runs to single spaces and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Approximate syllables as runs of vowel letters, at least one per word
pub fn syllable_count(word: &str) -> usize {
    let mut runs = 0;
    let mut in_vowel = false;
    for c in word.chars().flat_map(char::to_lowercase) {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_vowel {
            runs += 1;
        }
        in_vowel = vowel;
    }
    runs.max(1)
}

/// Count non-overlapping occurrences of `needle` in `haystack`. An empty needle never matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Turn a phrase into a URL slug: lowercase, spaces to hyphens, drop everything outside `[a-z0-9-]`
pub fn slugify(phrase: &str) -> String {
    phrase
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}
