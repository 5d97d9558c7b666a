//! Spanish pipeline: suffix-based morphology plus gazetteer entity lookup.
//!
//! People and places come from fixed gazetteers with whole-word matching —
//! a precision-biased heuristic that under-detects anything missing from
//! the lists, by contract. Verb and noun candidates are recognized by
//! suffix membership and reduced with the Snowball Spanish stemmer.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::stem;
use crate::LanguageEntities;

/// Capped length of the noun and verb lists.
const MAX_STEMS: usize = 30;

static PRONOUNS: &[&str] = &[
    "yo", "tú", "él", "ella", "nosotros", "nosotras", "vosotros", "vosotras", "ellos", "ellas",
    "usted", "ustedes", "me", "te", "se", "le", "nos", "os", "les", "mi", "tu", "su", "nuestro",
    "vuestro",
];

/// Common given and family names; a capitalized sequence counts as a person
/// only if one of its words appears here.
static COMMON_NAMES: &[&str] = &[
    "María", "José", "Juan", "Ana", "Carlos", "Luis", "Pedro", "Mariano", "Gálvez", "García",
    "Rodríguez", "Martínez", "González", "López", "Hernández", "Pérez",
];

static PLACES: &[&str] = &[
    "Guatemala", "México", "España", "Argentina", "Colombia", "Chile", "Perú", "Venezuela",
    "Ecuador", "Bolivia", "Paraguay", "Uruguay", "Costa Rica", "Panamá", "Cuba",
    "República Dominicana", "Honduras", "El Salvador", "Nicaragua", "Ciudad de Guatemala",
    "Antigua", "Quetzaltenango", "Mixco", "Villa Nueva", "Madrid", "Barcelona", "Buenos Aires",
    "Bogotá", "Lima", "Santiago", "Caracas",
];

static VERB_SUFFIXES: &[&str] = &[
    "ar", "er", "ir", "ando", "iendo", "ado", "ido", "aba", "ía", "ará", "erá", "irá",
];

static NOUN_SUFFIXES: &[&str] = &[
    "ción", "sión", "dad", "tad", "miento", "ismo", "ista", "anza", "encia", "ancia",
];

static PRONOUN_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| PRONOUNS.iter().copied().collect());
static NAME_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| COMMON_NAMES.iter().copied().collect());

/// Two to four consecutive capitalized words.
static PERSON_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-ZÁÉÍÓÚÑ][a-záéíóúñ]+(?:\s+[A-ZÁÉÍÓÚÑ][a-záéíóúñ]+){1,3}\b").unwrap()
});

/// One whole-word, case-insensitive matcher per gazetteer place.
static PLACE_MATCHERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PLACES
        .iter()
        .map(|place| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(place));
            (*place, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Run the Spanish heuristics over the sanitized text (case preserved) and
/// the lowercased token stream.
pub(crate) fn extract(sanitized: &str, tokens: &[String]) -> LanguageEntities {
    let mut pronouns: IndexSet<String> = IndexSet::new();
    let mut verbs: IndexSet<String> = IndexSet::new();
    let mut nouns: IndexSet<String> = IndexSet::new();

    for token in tokens {
        let token = token.as_str();
        if PRONOUN_SET.contains(token) {
            pronouns.insert(token.to_string());
        }
        let length = token.chars().count();
        let verb_like = has_suffix(token, VERB_SUFFIXES);
        if verb_like && length > 3 {
            verbs.insert(stem::spanish_stem(token));
        }
        if has_suffix(token, NOUN_SUFFIXES) || (length > 4 && !verb_like) {
            nouns.insert(stem::spanish_stem(token));
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

fn has_suffix(token: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| token.ends_with(suffix))
}
