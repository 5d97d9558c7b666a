//! Multilingual lexical analysis.
//!
//! Given raw text and a declared [`Language`] (Spanish, English, or Russian),
//! this crate sanitizes and tokenizes the text, filters stopwords, reduces
//! inflected forms to comparable roots, computes frequency statistics, and
//! extracts coarse entity categories (pronouns, people, places, dates,
//! numbers, emails, URLs, phone numbers). The result is a single immutable
//! [`AnalysisResult`] record per request.
//!
//! Every invocation is pure: no state is shared between calls, and the only
//! process-wide data (stopword sets, gazetteers, compiled patterns) is
//! immutable and initialized once on first use, so concurrent calls need no
//! synchronization.
//!
//! The person/place detectors are closed-vocabulary heuristics backed by
//! fixed gazetteers, not a general named-entity recognizer: names and places
//! missing from the gazetteers are not detected. That precision ceiling is a
//! documented property of the engine, as is the Russian pipeline's lack of
//! any morphological analysis (its `nouns`/`verbs`/`pronouns`/`people`/
//! `places` lists are always empty).
//!
//! # Example
//!
//! ```
//! use lexical_analysis::{Language, analyze};
//!
//! let result = analyze("The cat sat on the mat. The cat was happy.", Language::English);
//! assert!(result.error.is_none());
//! assert_eq!(result.sentence_count, 2);
//! assert_eq!(result.top_words[0].word, "cat");
//! assert_eq!(result.top_words[0].count, 2);
//! ```

pub mod english;
pub mod frequency;
pub mod patterns;
pub mod russian;
pub mod sanitize;
pub mod spanish;
pub mod stem;
pub mod stopwords;
pub mod tokenize;

use std::panic::{AssertUnwindSafe, catch_unwind};

/// Languages supported by the analyzer.
#[derive(
    Copy, Clone, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Spanish,
    English,
    Russian,
}

/// Script used to segment text into word tokens.
#[derive(Copy, Clone, Debug, serde::Serialize, serde::Deserialize, Eq, PartialEq)]
pub enum WritingSystem {
    /// Latin alphabet (Spanish, English)
    Latin,
    /// Cyrillic alphabet (Russian)
    Cyrillic,
}

impl Language {
    /// Resolve a caller-supplied language tag.
    ///
    /// Accepts ISO 639-1 codes, English names, and the Spanish-language
    /// aliases the original request layer understood (`español`, `ingles`,
    /// `ruso`), case-insensitively. Returns `None` for anything else.
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag.trim().to_lowercase().as_str() {
            "es" | "español" | "espanol" | "spanish" => Some(Language::Spanish),
            "en" | "inglés" | "ingles" | "english" => Some(Language::English),
            "ru" | "ruso" | "russian" => Some(Language::Russian),
            _ => None,
        }
    }

    pub fn iso_639_1(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    pub fn writing_system(&self) -> WritingSystem {
        match self {
            Language::Spanish | Language::English => WritingSystem::Latin,
            Language::Russian => WritingSystem::Cyrillic,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Spanish => write!(f, "Spanish"),
            Language::English => write!(f, "English"),
            Language::Russian => write!(f, "Russian"),
        }
    }
}

impl std::fmt::Display for WritingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WritingSystem::Latin => write!(f, "Latin"),
            WritingSystem::Cyrillic => write!(f, "Cyrillic"),
        }
    }
}

pub const LANGUAGES: &[Language] = &[Language::Spanish, Language::English, Language::Russian];

/// Why an analysis request produced no usable result.
///
/// Every variant except [`AnalyzeError::Extraction`] is a validation failure
/// caught before or during the early pipeline stages. None of them escape
/// [`analyze`] as errors; they surface as the `error` field of a zero-valued
/// [`AnalysisResult`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    #[error("text is empty or too short to analyze")]
    TextTooShort,
    #[error("no valid words detected in the text")]
    NoWords,
    #[error("no significant words to analyze after filtering")]
    NoSignificantWords,
    #[error("unsupported language: {0:?} (expected spanish, english, or russian)")]
    UnsupportedLanguage(String),
    #[error("entity extraction failed: {0}")]
    Extraction(String),
}

impl AnalyzeError {
    /// Validation failures reject the input; extraction failures mean a
    /// language heuristic broke mid-pipeline.
    pub fn is_validation(&self) -> bool {
        !matches!(self, AnalyzeError::Extraction(_))
    }
}

/// A word and how many times it occurred in the filtered frequency table.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, Eq, PartialEq)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

/// The complete result record for one analysis request.
///
/// Either fully populated (`error` is `None`) or fully zeroed with `error`
/// set; partial results are never produced. Serialized field names are
/// camelCase (`totalWords`, `topWords`, ...).
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The resolved language; `None` only when the request carried an
    /// unsupported language tag.
    pub language: Option<Language>,
    /// The sanitized text that was actually analyzed.
    pub text: String,
    /// Raw token count, before stopword filtering.
    pub total_words: usize,
    /// Character count of the sanitized text.
    pub total_characters: usize,
    /// Distinct entries in the post-filter frequency table.
    pub unique_words: usize,
    /// `unique_words / total_words * 100`, rounded to two decimals.
    pub lexical_density: f64,
    /// Count of sentence-terminator clusters (`.` `!` `?`).
    pub sentence_count: usize,
    pub top_words: Vec<WordCount>,
    pub bottom_words: Vec<WordCount>,
    pub pronouns: Vec<String>,
    pub people: Vec<String>,
    pub places: Vec<String>,
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
    pub dates: Vec<String>,
    pub numbers: Vec<String>,
    pub emails: Vec<String>,
    pub urls: Vec<String>,
    pub phones: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    fn failed(language: Option<Language>, error: &AnalyzeError) -> Self {
        Self {
            language,
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}

/// Entity lists contributed by a per-language pipeline, merged into the
/// final record by the dispatcher.
#[derive(Debug, Default)]
pub(crate) struct LanguageEntities {
    pub(crate) pronouns: Vec<String>,
    pub(crate) people: Vec<String>,
    pub(crate) places: Vec<String>,
    pub(crate) nouns: Vec<String>,
    pub(crate) verbs: Vec<String>,
}

/// Analyze `text` as the given language.
///
/// Never panics and never returns an error to the caller: validation and
/// extraction failures are converted into a zero-valued result carrying a
/// human-readable `error` message.
pub fn analyze(text: &str, language: Language) -> AnalysisResult {
    match run_pipeline(text, language) {
        Ok(result) => result,
        Err(error) => {
            log::warn!("{language} analysis failed: {error}");
            AnalysisResult::failed(Some(language), &error)
        }
    }
}

/// Analyze `text` under a caller-supplied language tag.
///
/// Unknown tags yield the "unsupported language" error result without
/// entering the pipeline.
pub fn analyze_tag(text: &str, tag: &str) -> AnalysisResult {
    match Language::from_tag(tag) {
        Some(language) => analyze(text, language),
        None => {
            let error = AnalyzeError::UnsupportedLanguage(tag.to_string());
            log::warn!("{error}");
            AnalysisResult::failed(None, &error)
        }
    }
}

fn run_pipeline(text: &str, language: Language) -> Result<AnalysisResult, AnalyzeError> {
    // Validating: normalize, restrict to the language's script, reject
    // inputs with nothing left to analyze.
    let normalized = sanitize::normalize(text);
    let sanitized = sanitize::restrict(&normalized, language);
    if sanitized.chars().count() < sanitize::MIN_TEXT_CHARS {
        return Err(AnalyzeError::TextTooShort);
    }

    // Analyzing: tokenize, aggregate, and run the per-language heuristics.
    let tokens = tokenize::words(&sanitized, language);
    if tokens.is_empty() {
        return Err(AnalyzeError::NoWords);
    }
    let lowercase: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    let table = frequency::FrequencyTable::build(&lowercase, language);
    if table.is_empty() {
        return Err(AnalyzeError::NoSignificantWords);
    }

    // A heuristic that panics must not escape the analyze boundary; the
    // panic is downgraded to an extraction failure on the result record.
    let entities = catch_unwind(AssertUnwindSafe(|| match language {
        Language::Spanish => spanish::extract(&sanitized, &lowercase),
        Language::English => english::extract(&sanitized, &lowercase),
        Language::Russian => russian::extract(),
    }))
    .map_err(|payload| AnalyzeError::Extraction(panic_message(payload)))?;

    // Composing: merge the language-specific output with the
    // language-agnostic pattern extractors into one record. The extractors
    // run on the normalized (not script-restricted) text so that digits,
    // `@`, and `:` survive for every language.
    let patterns = patterns::extract(&normalized);

    let total_words = tokens.len();
    let total_characters = sanitized.chars().count();
    let unique_words = table.unique_words();
    Ok(AnalysisResult {
        language: Some(language),
        total_words,
        total_characters,
        unique_words,
        lexical_density: frequency::lexical_density(unique_words, total_words),
        sentence_count: tokenize::count_sentences(&sanitized),
        top_words: table.top_words(10),
        bottom_words: table.bottom_words(10),
        pronouns: entities.pronouns,
        people: entities.people,
        places: entities.places,
        nouns: entities.nouns,
        verbs: entities.verbs,
        dates: patterns.dates,
        numbers: patterns.numbers,
        emails: patterns.emails,
        urls: patterns.urls,
        phones: patterns.phones,
        text: sanitized,
        error: None,
    })
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "language pipeline panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_zeroed(result: &AnalysisResult) {
        assert!(result.error.is_some());
        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_characters, 0);
        assert_eq!(result.unique_words, 0);
        assert_eq!(result.lexical_density, 0.0);
        assert_eq!(result.sentence_count, 0);
        assert!(result.top_words.is_empty());
        assert!(result.bottom_words.is_empty());
        assert!(result.pronouns.is_empty());
        assert!(result.people.is_empty());
        assert!(result.places.is_empty());
        assert!(result.nouns.is_empty());
        assert!(result.verbs.is_empty());
        assert!(result.dates.is_empty());
        assert!(result.numbers.is_empty());
        assert!(result.emails.is_empty());
        assert!(result.urls.is_empty());
        assert!(result.phones.is_empty());
        assert!(result.text.is_empty());
    }

    #[test]
    fn test_empty_and_whitespace_inputs_error_for_all_languages() {
        for &language in LANGUAGES {
            assert_zeroed(&analyze("", language));
            assert_zeroed(&analyze("   ", language));
            assert_zeroed(&analyze(" \t\n ", language));
        }
    }

    #[test]
    fn test_unsupported_language_tag() {
        let result = analyze_tag("bonjour le monde", "fr");
        assert_zeroed(&result);
        assert_eq!(result.language, None);
        assert!(result.error.as_deref().unwrap().contains("unsupported language"));
    }

    #[test]
    fn test_language_tag_aliases() {
        assert_eq!(Language::from_tag("es"), Some(Language::Spanish));
        assert_eq!(Language::from_tag("Español"), Some(Language::Spanish));
        assert_eq!(Language::from_tag("espanol"), Some(Language::Spanish));
        assert_eq!(Language::from_tag("EN"), Some(Language::English));
        assert_eq!(Language::from_tag("inglés"), Some(Language::English));
        assert_eq!(Language::from_tag("ingles"), Some(Language::English));
        assert_eq!(Language::from_tag("ruso"), Some(Language::Russian));
        assert_eq!(Language::from_tag(" russian "), Some(Language::Russian));
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn test_spanish_scenario() {
        let result = analyze("Juan García visitó Guatemala. Juan caminó mucho.", Language::Spanish);
        assert!(result.error.is_none());
        assert_eq!(result.language, Some(Language::Spanish));
        assert_eq!(result.total_words, 7);
        assert_eq!(result.sentence_count, 2);
        assert!(result.people.contains(&"Juan García".to_string()));
        assert!(result.places.contains(&"Guatemala".to_string()));
        // "juan" appears twice, everything else once.
        assert_eq!(result.top_words[0].word, "juan");
        assert_eq!(result.top_words[0].count, 2);
        assert_eq!(result.unique_words, 6);
    }

    #[test]
    fn test_english_scenario() {
        let result = analyze("The cat sat on the mat. The cat was happy.", Language::English);
        assert!(result.error.is_none());
        let words: Vec<&str> = result.top_words.iter().map(|w| w.word.as_str()).collect();
        assert!(words.contains(&"cat"));
        assert_eq!(result.top_words[0].word, "cat");
        assert_eq!(result.top_words[0].count, 2);
        // Stopwords never reach the frequency table.
        for stopword in ["the", "on", "was"] {
            assert!(!words.contains(&stopword));
            assert!(!result.bottom_words.iter().any(|w| w.word == stopword));
        }
    }

    #[test]
    fn test_russian_morphology_is_always_empty() {
        let result = analyze(
            "Анна поехала в Москву. Анна видела красивый город.",
            Language::Russian,
        );
        assert!(result.error.is_none());
        assert!(result.total_words > 0);
        assert!(result.pronouns.is_empty());
        assert!(result.people.is_empty());
        assert!(result.places.is_empty());
        assert!(result.nouns.is_empty());
        assert!(result.verbs.is_empty());
    }

    #[test]
    fn test_pattern_extractors_independent_of_language() {
        // Cyrillic words keep the Russian pipeline itself valid; the Latin
        // words do the same for Spanish and English. The extractors see the
        // normalized text either way, so all three languages report the
        // same patterns.
        let text = "Напиши мне. contact me at a@b.com or visit https://x.com \
                    on 01/02/2024, call 5555-5555";
        for &language in LANGUAGES {
            let result = analyze(text, language);
            assert!(result.error.is_none(), "{language} failed");
            assert_eq!(result.emails, vec!["a@b.com"]);
            assert_eq!(result.urls, vec!["https://x.com"]);
            assert_eq!(result.dates, vec!["01/02/2024"]);
            assert_eq!(result.phones, vec!["5555-5555"]);
        }
    }

    #[test]
    fn test_count_invariants() {
        let result = analyze(
            "Un texto cualquiera con palabras repetidas, palabras repetidas y más palabras.",
            Language::Spanish,
        );
        assert!(result.error.is_none());
        assert!(result.total_words >= result.unique_words);
        assert!(result.lexical_density >= 0.0 && result.lexical_density <= 100.0);
        assert!(result.top_words.len() <= 10);
        assert!(result.bottom_words.len() <= 10);
        assert!(result.top_words.len() <= result.unique_words);
        assert!(result.bottom_words.len() <= result.unique_words);
    }

    #[test]
    fn test_punctuation_only_input_is_rejected() {
        let result = analyze("?!?! ... ,,,", Language::English);
        assert_zeroed(&result);
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let result = analyze("Just a few plain words here.", Language::English);
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("totalWords").is_some());
        assert!(value.get("totalCharacters").is_some());
        assert!(value.get("uniqueWords").is_some());
        assert!(value.get("lexicalDensity").is_some());
        assert!(value.get("sentenceCount").is_some());
        assert!(value.get("topWords").is_some());
        assert!(value.get("bottomWords").is_some());
        // Successful results do not carry an error field at all.
        assert!(value.get("error").is_none());
        assert_eq!(value.get("language").unwrap(), "english");
    }

    #[test]
    fn test_error_taxonomy() {
        assert!(AnalyzeError::TextTooShort.is_validation());
        assert!(AnalyzeError::UnsupportedLanguage("fr".into()).is_validation());
        assert!(!AnalyzeError::Extraction("boom".into()).is_validation());
    }
}
