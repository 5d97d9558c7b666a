//! Per-language stopword tables.
//!
//! The lists are fixed, versioned data: they are part of the analyzer's
//! contract (frequency tables are defined relative to them), so they live
//! here as literals rather than being pulled from a third-party word-list
//! crate whose contents could drift. Lookup sets are materialized once and
//! shared read-only across all invocations.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use crate::Language;

static SPANISH: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "de", "del", "al", "a", "en", "por",
    "para", "con", "sin", "sobre", "entre", "que", "como", "pero", "si", "no", "ni", "y", "o",
    "u", "es", "son", "está", "están",
];

static ENGLISH: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "was", "were", "been", "be", "being", "have", "has", "had", "this",
    "that", "these", "those", "it", "its", "he", "she", "they", "we", "you", "i", "me", "my",
    "your", "his", "her", "our", "their", "mine", "ours", "yours", "theirs", "as", "if", "then",
    "so",
];

static RUSSIAN: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "ее", "мне", "было",
    "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда", "даже", "ну",
    "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до", "вас", "нибудь",
    "опять", "уж", "вам", "сказал", "ведь", "там", "потом", "себя", "ничего", "ей", "может",
    "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем", "была", "сам",
    "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет", "ж", "тогда", "кто",
    "этот", "того", "потому", "этого", "какой", "совсем", "ним", "здесь", "этом", "один",
    "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были", "куда", "зачем", "всех", "можно",
];

static SPANISH_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| SPANISH.iter().copied().collect());
static ENGLISH_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ENGLISH.iter().copied().collect());
static RUSSIAN_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| RUSSIAN.iter().copied().collect());

/// The stopword set for a language.
pub fn stopwords(language: Language) -> &'static FxHashSet<&'static str> {
    match language {
        Language::Spanish => &SPANISH_SET,
        Language::English => &ENGLISH_SET,
        Language::Russian => &RUSSIAN_SET,
    }
}

/// Membership test against the language's stopword set. Expects lowercased
/// input; the sets are stored lowercase.
pub fn is_stopword(language: Language, word: &str) -> bool {
    stopwords(language).contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_membership() {
        assert!(is_stopword(Language::Spanish, "el"));
        assert!(is_stopword(Language::Spanish, "están"));
        assert!(!is_stopword(Language::Spanish, "gato"));
    }

    #[test]
    fn test_english_membership() {
        for word in ["the", "on", "was", "so"] {
            assert!(is_stopword(Language::English, word));
        }
        assert!(!is_stopword(Language::English, "cat"));
    }

    #[test]
    fn test_russian_membership() {
        assert!(is_stopword(Language::Russian, "и"));
        assert!(is_stopword(Language::Russian, "можно"));
        assert!(!is_stopword(Language::Russian, "город"));
    }

    #[test]
    fn test_sets_are_disjoint_from_each_other_where_expected() {
        // Sanity: a Spanish stopword is not silently treated as an English one.
        assert!(!is_stopword(Language::English, "del"));
        assert!(!is_stopword(Language::Spanish, "the"));
    }
}
