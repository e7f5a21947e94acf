//! The candidate universe: an immutable, length-uniform set of n-grams.
//!
//! A [`Corpus`] is built through [`CorpusBuilder`], which enforces the
//! uniform-length invariant at `build()` time. The corpus exposes filtered
//! counting plus the guess-scoring search: every member is treated as a
//! hypothetical key, the matcher filter for (key, guess) is applied back
//! to the corpus, and survivor counts are aggregated by max (worst case)
//! or sum (total case). The guess minimizing the aggregate wins.

use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::MatchleError;
use crate::filter::Filter;
use crate::matcher::NGramMatcher;
use crate::ngram::NGram;

/// Accumulates n-grams toward an immutable [`Corpus`].
///
/// Single-owner staging object: accumulate, then freeze with
/// [`build`](CorpusBuilder::build). Duplicates collapse (set semantics).
#[derive(Debug, Clone, Default)]
pub struct CorpusBuilder {
    ngrams: BTreeSet<NGram>,
}

impl CorpusBuilder {
    /// An empty builder.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A builder seeded with the members of an existing corpus.
    pub fn of(corpus: &Corpus) -> Self {
        Self {
            ngrams: corpus.iter().cloned().collect(),
        }
    }

    /// Adds one n-gram.
    pub fn add(mut self, ngram: NGram) -> Self {
        self.ngrams.insert(ngram);
        self
    }

    /// Adds every n-gram from the given collection.
    pub fn add_all<I>(mut self, ngrams: I) -> Self
    where
        I: IntoIterator<Item = NGram>,
    {
        self.ngrams.extend(ngrams);
        self
    }

    /// True iff every accumulated n-gram has the given length.
    pub fn is_consistent(&self, word_size: usize) -> bool {
        self.ngrams.iter().all(|ngram| ngram.len() == word_size)
    }

    /// A new builder holding only the n-grams that satisfy the filter.
    pub fn filter(self, filter: &Filter) -> CorpusBuilder {
        CorpusBuilder {
            ngrams: self
                .ngrams
                .into_iter()
                .filter(|ngram| filter.test(ngram))
                .collect(),
        }
    }

    /// Freezes the accumulated n-grams into a corpus.
    ///
    /// Fails with [`MatchleError::EmptyCorpus`] when nothing was
    /// accumulated and [`MatchleError::InconsistentLength`] when the
    /// n-grams have mixed lengths. No partial corpus is ever observable.
    pub fn build(self) -> Result<Corpus, MatchleError> {
        let mut iter = self.ngrams.iter();
        let expected = match iter.next() {
            Some(first) => first.len(),
            None => return Err(MatchleError::EmptyCorpus),
        };
        if let Some(odd) = iter.find(|ngram| ngram.len() != expected) {
            return Err(MatchleError::InconsistentLength {
                expected,
                found: odd.len(),
            });
        }
        Ok(Corpus {
            words: self.ngrams.into_iter().collect(),
            word_size: expected,
        })
    }
}

/// An immutable set of n-grams sharing a single length.
///
/// Non-empty by construction, so scoring and selection never face an
/// empty universe. Members are kept in lexicographic order, which makes
/// enumeration and guess tie-breaking deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<NGram>,
    word_size: usize,
}

impl Corpus {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: `build()` rejects empty input, so a corpus has at
    /// least one member.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The uniform length of every member.
    pub fn word_size(&self) -> usize {
        self.word_size
    }

    /// Read-only view of the members, in lexicographic order.
    pub fn ngrams(&self) -> &[NGram] {
        &self.words
    }

    pub fn contains(&self, ngram: &NGram) -> bool {
        self.words.binary_search(ngram).is_ok()
    }

    /// Iterates the members in lexicographic order.
    pub fn iter(&self) -> std::slice::Iter<'_, NGram> {
        self.words.iter()
    }

    /// Counts the members that satisfy the filter.
    pub fn size(&self, filter: &Filter) -> usize {
        self.words.iter().filter(|ngram| filter.test(ngram)).count()
    }

    /// Counts the members consistent with the feedback `guess` would
    /// receive against `key`.
    pub fn score(&self, key: &NGram, guess: &NGram) -> u64 {
        let filter = NGramMatcher::of(key, guess).matching();
        self.size(&filter) as u64
    }

    /// Worst-case survivor count for a guess: the maximum of
    /// [`score`](Corpus::score) over every member treated as the key.
    /// Models an adversary picking the least favorable key.
    pub fn score_worst_case(&self, guess: &NGram) -> u64 {
        let worst = self
            .words
            .par_iter()
            .map(|key| self.score(key, guess))
            .reduce(|| 0, u64::max);
        trace!(guess = %guess, worst, "worst-case score");
        worst
    }

    /// Total-case survivor count for a guess: the sum of
    /// [`score`](Corpus::score) over every member treated as the key.
    ///
    /// Note this is a sum, not a mean; divide by [`len`](Corpus::len) for
    /// the average number of survivors per key.
    pub fn score_average_case(&self, guess: &NGram) -> u64 {
        self.words
            .par_iter()
            .map(|key| self.score(key, guess))
            .sum()
    }

    /// The member minimizing the given scoring function.
    ///
    /// Only members are candidate guesses. Ties are broken toward the
    /// lexicographically smallest n-gram.
    pub fn best_guess<F>(&self, criterion: F) -> &NGram
    where
        F: Fn(&NGram) -> u64 + Sync,
    {
        let (score, best) = self
            .words
            .par_iter()
            .map(|guess| (criterion(guess), guess))
            .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
            .expect("corpus is non-empty by construction");
        debug!(guess = %best, score, "selected best guess");
        best
    }

    /// [`best_guess`](Corpus::best_guess) under the worst-case criterion.
    pub fn best_worst_case_guess(&self) -> &NGram {
        self.best_guess(|guess| self.score_worst_case(guess))
    }

    /// [`best_guess`](Corpus::best_guess) under the total-case criterion.
    pub fn best_average_case_guess(&self) -> &NGram {
        self.best_guess(|guess| self.score_average_case(guess))
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a NGram;
    type IntoIter = std::slice::Iter<'a, NGram>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
