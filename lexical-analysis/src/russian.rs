//! Russian pipeline.
//!
//! No morphological analyzer is wired up for Russian: tokenization,
//! stopword filtering, and frequency statistics all work, but the pronoun,
//! person, place, noun, and verb lists are always empty. This is a
//! documented limitation of the engine, not a failure — the result record
//! carries no error for it.

use crate::LanguageEntities;

pub(crate) fn extract() -> LanguageEntities {
    LanguageEntities::default()
}
