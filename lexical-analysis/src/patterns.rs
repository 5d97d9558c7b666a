//! Language-agnostic pattern extractors.
//!
//! Dates, numeric literals, emails, URLs, and phone numbers are recognized
//! by fixed patterns over the normalized (not script-restricted) text, so
//! they behave identically for every declared language. Matches are kept in
//! first-match order and are deliberately not deduplicated.

use std::sync::LazyLock;

use regex::Regex;

/// `D[D]/M[M]/YY[YY]` numeric dates, `/` or `-` separated.
static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap());

/// Integer or decimal literals.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").unwrap());

/// `local@domain.tld`-shaped strings, domain suffix of at least two letters.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[\w.%+-]+@[\w.-]+\.[a-z]{2,}\b").unwrap());

/// `http(s)://` followed by any non-whitespace run.
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://\S+").unwrap());

/// Eight-digit phone groupings: `DDDD-DDDD`, `DDDD DDDD`, or `DDDDDDDD`.
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}[-\s]?\d{4}\b").unwrap());

/// The extracted pattern matches for one text.
#[derive(Debug, Clone, Default)]
pub struct PatternMatches {
    pub dates: Vec<String>,
    pub numbers: Vec<String>,
    pub emails: Vec<String>,
    pub urls: Vec<String>,
    pub phones: Vec<String>,
}

/// Run all five extractors over the normalized text.
pub fn extract(text: &str) -> PatternMatches {
    PatternMatches {
        dates: all_matches(&DATE, text),
        numbers: all_matches(&NUMBER, text),
        emails: all_matches(&EMAIL, text),
        urls: all_matches(&URL, text),
        phones: all_matches(&PHONE, text),
    }
}

fn all_matches(pattern: &Regex, text: &str) -> Vec<String> {
    pattern.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
