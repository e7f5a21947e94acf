//! Error types for the matchle engine.

use thiserror::Error;

/// All failures the engine can report.
///
/// Every variant is a programmer or input error: no retries, no partial
/// results. Callers are expected to validate upstream or surface the
/// failure directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchleError {
    /// A null (`'\0'`) character was found while constructing an n-gram.
    /// Carries the 0-based index of the offending character.
    #[error("null character found at index: {index}")]
    NullCharacter { index: usize },

    /// A builder with no accumulated n-grams cannot produce a corpus.
    #[error("cannot build a corpus from zero ngrams")]
    EmptyCorpus,

    /// The accumulated n-grams do not share a single length.
    #[error("inconsistent ngram length: expected {expected}, found {found}")]
    InconsistentLength { expected: usize, found: usize },
}
