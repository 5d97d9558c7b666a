//! Text sanitization.
//!
//! Sanitization runs in two idempotent layers. [`normalize`] is
//! language-agnostic: it NFC-normalizes the decoded text, strips HTML
//! entity-like runs (`&...;`), and collapses whitespace. [`restrict`] then
//! drops every character outside the language's allowed set. The pattern
//! extractors consume the normalized text; everything else in the pipeline
//! consumes the restricted text, which is also echoed back on the result
//! record.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::Language;
use crate::tokenize;

/// Inputs whose restricted form is shorter than this are rejected.
pub const MIN_TEXT_CHARS: usize = 3;

static HTML_ENTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&[#A-Za-z0-9]+;").unwrap());

/// Strip HTML entities, normalize to NFC, collapse whitespace runs to
/// single spaces, and trim.
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    let stripped = HTML_ENTITY.replace_all(&composed, "");
    collapse_whitespace(&stripped)
}

/// Drop every character outside the language's allowed set, then collapse
/// whitespace again (removals can leave double spaces behind).
pub fn restrict(text: &str, language: Language) -> String {
    let kept: String = text.chars().filter(|&c| is_allowed(c, language)).collect();
    collapse_whitespace(&kept)
}

/// Full sanitization: [`restrict`] composed over [`normalize`].
///
/// Idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(text: &str, language: Language) -> String {
    restrict(&normalize(text), language)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Language-appropriate allowed sets: letters of the target script plus a
/// small punctuation repertoire. Spanish keeps digits and `/` (dates),
/// English and Russian keep apostrophes and quotes.
fn is_allowed(c: char, language: Language) -> bool {
    if c.is_whitespace() {
        return true;
    }
    match language {
        Language::Spanish => {
            c.is_ascii_alphanumeric()
                || c == '_'
                || tokenize::is_spanish_letter(c)
                || matches!(c, '.' | ',' | '!' | '?' | '/' | '-')
        }
        Language::English => {
            c.is_ascii_alphanumeric()
                || c == '_'
                || matches!(c, '.' | ',' | '!' | '?' | '\'' | '"' | '-')
        }
        Language::Russian => {
            tokenize::is_cyrillic(c) || matches!(c, '.' | ',' | '!' | '?' | '\'' | '"' | '-')
        }
    }
}
