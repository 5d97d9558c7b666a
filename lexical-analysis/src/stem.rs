//! Stemming and lemmatization.
//!
//! Spanish uses the Snowball Spanish stemmer (the same algorithm family the
//! original analyzer used), so inflected verb forms like `hablando` /
//! `hablaba` collapse to one comparable root. English reduction aims at
//! dictionary forms instead: verbs to the infinitive via an irregular-form
//! table plus orthographic suffix rules, nouns to the singular. Russian has
//! no reducer at all.

use std::sync::LazyLock;

use rust_stemmers::{Algorithm, Stemmer};
use rustc_hash::FxHashMap;

static SPANISH_STEMMER: LazyLock<Stemmer> = LazyLock::new(|| Stemmer::create(Algorithm::Spanish));

/// Stem a lowercase Spanish word to its comparable root.
pub fn spanish_stem(word: &str) -> String {
    SPANISH_STEMMER.stem(word).to_string()
}

/// Irregular English verb forms mapped to their infinitive.
static IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"),
    ("goes", "go"), ("went", "go"), ("gone", "go"), ("going", "go"),
    ("says", "say"), ("said", "say"),
    ("makes", "make"), ("made", "make"), ("making", "make"),
    ("gets", "get"), ("got", "get"), ("gotten", "get"), ("getting", "get"),
    ("takes", "take"), ("took", "take"), ("taken", "take"), ("taking", "take"),
    ("comes", "come"), ("came", "come"), ("coming", "come"),
    ("sees", "see"), ("saw", "see"), ("seen", "see"), ("seeing", "see"),
    ("knows", "know"), ("knew", "know"), ("known", "know"),
    ("thinks", "think"), ("thought", "think"),
    ("finds", "find"), ("found", "find"),
    ("gives", "give"), ("gave", "give"), ("given", "give"), ("giving", "give"),
    ("tells", "tell"), ("told", "tell"),
    ("feels", "feel"), ("felt", "feel"),
    ("leaves", "leave"), ("left", "leave"), ("leaving", "leave"),
    ("keeps", "keep"), ("kept", "keep"),
    ("runs", "run"), ("ran", "run"), ("running", "run"),
    ("sits", "sit"), ("sat", "sit"), ("sitting", "sit"),
    ("stands", "stand"), ("stood", "stand"),
    ("writes", "write"), ("wrote", "write"), ("written", "write"), ("writing", "write"),
    ("reads", "read"), ("reading", "read"),
    ("speaks", "speak"), ("spoke", "speak"), ("spoken", "speak"),
    ("brings", "bring"), ("brought", "bring"),
    ("buys", "buy"), ("bought", "buy"),
    ("begins", "begin"), ("began", "begin"), ("begun", "begin"),
    ("breaks", "break"), ("broke", "break"), ("broken", "break"),
    ("puts", "put"), ("putting", "put"),
    ("lets", "let"), ("letting", "let"),
    ("means", "mean"), ("meant", "mean"),
    ("dies", "die"), ("died", "die"), ("dying", "die"),
    ("uses", "use"), ("used", "use"), ("using", "use"),
];

static IRREGULAR_MAP: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_VERBS.iter().copied().collect());

/// Whether the lowercase word is a known irregular English verb form.
pub fn is_irregular_verb(word: &str) -> bool {
    IRREGULAR_MAP.contains_key(word)
}

/// Reduce a lowercase English verb form to its infinitive.
///
/// Irregular forms come from the table; regular forms go through
/// orthographic suffix rules (`studied` → `study`, `stopped` → `stop`,
/// `making` → `make`). Words the rules don't recognize pass through
/// unchanged — this is an approximation, not a full morphology.
pub fn english_infinitive(word: &str) -> String {
    if let Some(base) = IRREGULAR_MAP.get(word) {
        return (*base).to_string();
    }
    if word.len() >= 5 {
        if let Some(stem) = word.strip_suffix("ying") {
            // dying -> die, but playing -> play, studying -> study
            if stem.chars().count() <= 1 {
                return format!("{stem}ie");
            }
            return format!("{stem}y");
        }
    }
    if word.len() > 5 {
        if let Some(stem) = word.strip_suffix("ing") {
            return finish_stripped_stem(stem);
        }
    }
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ied") {
            return format!("{stem}y");
        }
        if let Some(stem) = word.strip_suffix("ed") {
            return finish_stripped_stem(stem);
        }
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Reduce a lowercase English noun to its singular form.
pub fn english_singular(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.chars().count() >= 2 {
            return format!("{stem}y");
        }
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// After stripping `-ing`/`-ed`: undo consonant doubling (stopped -> stop)
/// or restore a dropped final `e` on short stems (making -> make).
fn finish_stripped_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n >= 3
        && chars[n - 1] == chars[n - 2]
        && is_consonant(chars[n - 1])
        && !matches!(chars[n - 1], 'l' | 's')
    {
        return chars[..n - 1].iter().collect();
    }
    if (3..=4).contains(&n)
        && is_consonant(chars[n - 3])
        && !is_consonant(chars[n - 2])
        && is_consonant(chars[n - 1])
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
    {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
