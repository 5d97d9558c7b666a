//! English pipeline: a rule-based, closed-vocabulary tagger.
//!
//! The original system leaned on a lexicon-backed part-of-speech tagger;
//! this rendition gets the same output shape from fixed word tables and
//! orthographic suffix rules. Verb candidates are lemmatized to the
//! infinitive and noun candidates to the singular. Like the Spanish
//! gazetteers, this trades recall for precision: words and names outside
//! the tables are simply not tagged.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::stem;
use crate::stopwords;
use crate::Language;
use crate::LanguageEntities;

/// Capped length of the noun and verb lists.
const MAX_STEMS: usize = 30;

static PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
];

/// Common given and family names for the person heuristic.
static COMMON_NAMES: &[&str] = &[
    "John", "Mary", "James", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "David", "Richard", "Susan", "Joseph", "Thomas", "Sarah", "Charles", "Emily", "Daniel",
    "Anna", "Peter", "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
    "Davis", "Wilson", "Anderson", "Taylor", "Moore", "Jackson", "Martin",
];

static PLACES: &[&str] = &[
    "London", "Paris", "Madrid", "Berlin", "Moscow", "Rome", "New York", "Washington",
    "Chicago", "Boston", "Seattle", "England", "France", "Germany", "Spain", "Italy", "Russia",
    "China", "Japan", "India", "Brazil", "Canada", "Mexico", "Guatemala", "America", "Europe",
    "Africa", "Asia", "Australia", "Texas", "California", "Florida",
];

/// Frequent verbs whose base form carries no telltale suffix.
static COMMON_VERBS: &[&str] = &[
    "be", "have", "do", "go", "say", "get", "make", "know", "think", "see", "come", "want",
    "look", "use", "find", "give", "tell", "work", "call", "try", "ask", "need", "feel",
    "become", "leave", "put", "mean", "keep", "let", "begin", "seem", "help", "talk", "turn",
    "start", "show", "hear", "play", "run", "move", "like", "live", "believe", "hold", "bring",
    "happen", "walk", "sit", "stand", "visit", "stay", "open", "close", "read", "write",
    "speak", "watch", "learn",
];

/// Frequent adjectives, excluded from the noun candidates.
static ADJECTIVES: &[&str] = &[
    "happy", "sad", "good", "bad", "big", "small", "new", "old", "young", "long", "short",
    "high", "low", "great", "little", "own", "other", "same", "different", "early", "late",
    "important", "public", "able", "hard", "easy", "strong", "weak", "free", "full", "empty",
    "warm", "cold", "hot", "nice", "beautiful", "quick", "slow", "bright", "dark",
];

static PRONOUN_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| PRONOUNS.iter().copied().collect());
static NAME_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| COMMON_NAMES.iter().copied().collect());
static COMMON_VERB_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| COMMON_VERBS.iter().copied().collect());
static ADJECTIVE_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ADJECTIVES.iter().copied().collect());

/// Two to four consecutive capitalized words.
static PERSON_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3}\b").unwrap());

static PLACE_MATCHERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PLACES
        .iter()
        .map(|place| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(place));
            (*place, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Run the English tagger over the sanitized text (case preserved) and the
/// lowercased token stream.
pub(crate) fn extract(sanitized: &str, tokens: &[String]) -> LanguageEntities {
    let mut pronouns: IndexSet<String> = IndexSet::new();
    let mut verbs: IndexSet<String> = IndexSet::new();
    let mut nouns: IndexSet<String> = IndexSet::new();

    for token in tokens {
        let token = token.as_str();
        if PRONOUN_SET.contains(token) {
            pronouns.insert(token.to_string());
            continue;
        }
        if let Some(infinitive) = verb_lemma(token) {
            verbs.insert(infinitive);
            continue;
        }
        if is_noun_candidate(token) {
            nouns.insert(stem::english_singular(token));
        }
    }
    verbs.truncate(MAX_STEMS);
    nouns.truncate(MAX_STEMS);

    let mut people: IndexSet<String> = IndexSet::new();
    for candidate in PERSON_CANDIDATE.find_iter(sanitized) {
        let candidate = candidate.as_str();
        if candidate.split_whitespace().any(|word| NAME_SET.contains(word)) {
            people.insert(candidate.to_string());
        }
    }

    let mut places: Vec<String> = Vec::new();
    for (name, matcher) in PLACE_MATCHERS.iter() {
        if matcher.is_match(sanitized) {
            places.push((*name).to_string());
        }
    }

    LanguageEntities {
        pronouns: pronouns.into_iter().collect(),
        people: people.into_iter().collect(),
        places,
        nouns: nouns.into_iter().collect(),
        verbs: verbs.into_iter().collect(),
    }
}

/// Decide whether a token is a verb, and if so return its infinitive.
///
/// A token counts as a verb when it is a known irregular form, a common
/// base verb, an `-ing`/`-ed` participle, or an `-s` form whose base is a
/// common verb. Everything else is left to the noun heuristic.
fn verb_lemma(token: &str) -> Option<String> {
    if stem::is_irregular_verb(token) || COMMON_VERB_SET.contains(token) {
        return Some(stem::english_infinitive(token));
    }
    let length = token.chars().count();
    if length > 4 && (token.ends_with("ing") || token.ends_with("ed")) {
        return Some(stem::english_infinitive(token));
    }
    if length > 3 && token.ends_with('s') && !token.ends_with("ss") {
        let base = stem::english_infinitive(token);
        if COMMON_VERB_SET.contains(base.as_str()) {
            return Some(base);
        }
    }
    None
}

fn is_noun_candidate(token: &str) -> bool {
    token.chars().count() > 2
        && !stopwords::is_stopword(Language::English, token)
        && !ADJECTIVE_SET.contains(token)
}
