//! Word segmentation and sentence counting.
//!
//! Tokenization is a pure function of the sanitized text: maximal runs of
//! script-appropriate word characters, in document order. Calling it twice
//! on the same input yields the same sequence.

use crate::Language;

/// Split sanitized text into word tokens using the language's script rules.
///
/// Spanish tokens are runs of Latin letters (with Spanish diacritics) and
/// ASCII digits — digit-bearing tokens are later screened out by the
/// frequency filter. English tokens are runs of ASCII letters only, and
/// Russian tokens are runs of Cyrillic letters. Case is preserved.
pub fn words(text: &str, language: Language) -> Vec<String> {
    text.split(|c: char| !is_word_char(c, language))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char, language: Language) -> bool {
    match language {
        Language::Spanish => c.is_ascii_alphanumeric() || is_spanish_letter(c),
        Language::English => c.is_ascii_alphabetic(),
        Language::Russian => is_cyrillic(c),
    }
}

/// Spanish diacritic letters outside the ASCII range.
pub(crate) fn is_spanish_letter(c: char) -> bool {
    matches!(
        c,
        'á' | 'é' | 'í' | 'ó' | 'ú' | 'ñ' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'Ñ'
    )
}

/// Cyrillic-script letters, including the historic and extended blocks.
pub fn is_cyrillic(c: char) -> bool {
    matches!(c as u32,
        0x0400..=0x04FF |  // Cyrillic
        0x0500..=0x052F |  // Cyrillic Supplement
        0x1C80..=0x1C8F |  // Cyrillic Extended-C
        0x2DE0..=0x2DFF |  // Cyrillic Extended-A
        0xA640..=0xA69F    // Cyrillic Extended-B
    )
}

/// Count sentence-terminator clusters: consecutive runs of `.`, `!`, `?`
/// collapse into a single sentence boundary.
pub fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_terminator = false;
    for c in text.chars() {
        let terminator = matches!(c, '.' | '!' | '?');
        if terminator && !in_terminator {
            count += 1;
        }
        in_terminator = terminator;
    }
    count
}
