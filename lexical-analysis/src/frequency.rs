//! Word-frequency aggregation.
//!
//! The table is keyed in first-occurrence order of the filtered token
//! stream, and the top/bottom extractions use a stable sort, so words with
//! equal counts keep that first-seen order.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::{Language, WordCount, stopwords};

/// Leftovers of HTML-entity decoding that survive Spanish tokenization
/// (`x2f`, `x27`, `#39`, ...).
static DECODE_ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[x#]+[a-z0-9]+$").unwrap());

/// Insertion-ordered word→count table over the significant tokens.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: IndexMap<String, u32>,
}

impl FrequencyTable {
    /// Build the table from the lowercased token stream, keeping only
    /// significant tokens: longer than two characters, not a stopword, not
    /// purely numeric, and (Spanish) not an entity-decoding artifact.
    pub fn build(tokens: &[String], language: Language) -> Self {
        let mut counts: IndexMap<String, u32> = IndexMap::new();
        for token in tokens {
            if !is_significant(token, language) {
                continue;
            }
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct significant words.
    pub fn unique_words(&self) -> usize {
        self.counts.len()
    }

    /// Up to `n` most frequent words, ties in first-seen order.
    pub fn top_words(&self, n: usize) -> Vec<WordCount> {
        let mut entries: Vec<(&String, &u32)> = self.counts.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));
        entries
            .into_iter()
            .take(n)
            .map(|(word, &count)| WordCount { word: word.clone(), count })
            .collect()
    }

    /// Up to `n` least frequent words, ties in first-seen order.
    pub fn bottom_words(&self, n: usize) -> Vec<WordCount> {
        let mut entries: Vec<(&String, &u32)> = self.counts.iter().collect();
        entries.sort_by(|a, b| a.1.cmp(b.1));
        entries
            .into_iter()
            .take(n)
            .map(|(word, &count)| WordCount { word: word.clone(), count })
            .collect()
    }
}

fn is_significant(token: &str, language: Language) -> bool {
    if token.chars().count() <= 2 {
        return false;
    }
    if stopwords::is_stopword(language, token) {
        return false;
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if language == Language::Spanish && DECODE_ARTIFACT.is_match(token) {
        return false;
    }
    true
}

/// Unique-to-total ratio as a percentage, rounded to two decimals.
/// Reported as 0.0 when there are no words at all.
pub fn lexical_density(unique_words: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    let density = unique_words as f64 / total_words as f64 * 100.0;
    (density * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_counts_in_first_seen_order() {
        let table = FrequencyTable::build(
            &tokens(&["perro", "gato", "perro", "casa", "gato", "perro"]),
            Language::Spanish,
        );
        assert_eq!(table.unique_words(), 3);
        let top = table.top_words(10);
        assert_eq!(top[0].word, "perro");
        assert_eq!(top[0].count, 3);
        assert_eq!(top[1].word, "gato");
        assert_eq!(top[2].word, "casa");
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let table = FrequencyTable::build(
            &tokens(&["bravo", "alfa", "alfa", "bravo", "china"]),
            Language::English,
        );
        // bravo and alfa both have count 2; bravo was seen first.
        let top = table.top_words(10);
        assert_eq!(top[0].word, "bravo");
        assert_eq!(top[1].word, "alfa");
        assert_eq!(top[2].word, "china");
        let bottom = table.bottom_words(10);
        assert_eq!(bottom[0].word, "china");
        assert_eq!(bottom[1].word, "bravo");
        assert_eq!(bottom[2].word, "alfa");
    }

    #[test]
    fn test_filters_short_stopword_and_numeric_tokens() {
        let table = FrequencyTable::build(
            &tokens(&["el", "no", "casa", "123", "2024", "árbol"]),
            Language::Spanish,
        );
        assert_eq!(table.unique_words(), 2);
        assert!(table.top_words(10).iter().all(|w| w.word == "casa" || w.word == "árbol"));
    }

    #[test]
    fn test_spanish_decode_artifacts_are_dropped() {
        let table = FrequencyTable::build(&tokens(&["x2f", "casa"]), Language::Spanish);
        assert_eq!(table.unique_words(), 1);
        // The artifact pattern is a Spanish-only quirk.
        let english = FrequencyTable::build(&tokens(&["x2f", "house"]), Language::English);
        assert_eq!(english.unique_words(), 2);
    }

    #[test]
    fn test_top_and_bottom_respect_limit() {
        let many: Vec<String> = (0..25).map(|i| format!("word{i:02}")).collect();
        let table = FrequencyTable::build(&many, Language::English);
        assert_eq!(table.top_words(10).len(), 10);
        assert_eq!(table.bottom_words(10).len(), 10);
    }

    #[test]
    fn test_lexical_density_rounding() {
        assert_eq!(lexical_density(6, 7), 85.71);
        assert_eq!(lexical_density(1, 3), 33.33);
        assert_eq!(lexical_density(5, 5), 100.0);
        assert_eq!(lexical_density(0, 0), 0.0);
    }

    #[test]
    fn test_empty_after_filtering() {
        let table = FrequencyTable::build(&tokens(&["el", "la", "un"]), Language::Spanish);
        assert!(table.is_empty());
    }
}
