//! Composable boolean predicates over n-grams.
//!
//! A [`Filter`] wraps a pure predicate and composes by logical AND. It is
//! the currency of the engine: the matcher derives one from a (key, guess)
//! pair and the corpus counts survivors against it.

use std::fmt;
use std::sync::Arc;

use crate::ngram::NGram;

/// An immutable boolean predicate over [`NGram`]s.
///
/// Cloning is cheap (shared `Arc`), and filters are referentially
/// transparent, so they can be shared freely across threads.
#[derive(Clone)]
pub struct Filter {
    predicate: Arc<dyn Fn(&NGram) -> bool + Send + Sync>,
}

impl Filter {
    /// Wraps a predicate in a filter.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Fn(&NGram) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluates the filter. Mutates nothing.
    pub fn test(&self, ngram: &NGram) -> bool {
        (self.predicate)(ngram)
    }

    /// Conjunction with an optional second filter.
    ///
    /// `None` means "no additional constraint" and returns this filter
    /// unchanged.
    pub fn and(self, other: Option<Filter>) -> Filter {
        match other {
            Some(other) => {
                Filter::new(move |ngram| self.test(ngram) && other.test(ngram))
            }
            None => self,
        }
    }

    /// The filter that rejects every n-gram.
    ///
    /// Absorbing element for conjunction; used when key and guess lengths
    /// differ.
    pub fn reject_all() -> Filter {
        Filter::new(|_| false)
    }

    /// The vacuously-true filter that accepts every n-gram.
    pub fn accept_all() -> Filter {
        Filter::new(|_| true)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}
