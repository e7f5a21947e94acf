//! # Matchle
//!
//! A feedback-driven word-guessing engine.
//!
//! Given a key and a guess of the same length, the engine derives the
//! Wordle-style exact/misplaced/absent feedback as a composable [`Filter`],
//! applies it to a length-uniform [`Corpus`] of candidate words, and
//! selects the guess that minimizes surviving candidates under a
//! worst-case (max) or total-case (sum) adversary model.
//!
//! ```
//! use matchle::{CorpusBuilder, NGram};
//!
//! let corpus = CorpusBuilder::empty()
//!     .add(NGram::from_word("hello").unwrap())
//!     .add(NGram::from_word("world").unwrap())
//!     .add(NGram::from_word("raise").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let best = corpus.best_worst_case_guess();
//! assert_eq!(best.len(), corpus.word_size());
//! ```

pub mod corpus;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod ngram;

pub use corpus::{Corpus, CorpusBuilder};
pub use error::MatchleError;
pub use filter::Filter;
pub use matcher::NGramMatcher;
pub use ngram::{IndexedCharacter, NGram};
