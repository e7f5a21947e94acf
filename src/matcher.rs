//! Key/guess classification: deriving a consistency filter from feedback.
//!
//! Given a key and a guess of equal length, [`NGramMatcher`] computes the
//! exact/misplaced/absent classification a Wordle-style game would report
//! and expresses it as a [`Filter`]: an n-gram satisfies the filter iff it
//! is consistent with that feedback.

use std::collections::HashMap;

use crate::filter::Filter;
use crate::ngram::{IndexedCharacter, NGram};

/// One constraint derived from a single classified guess position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constraint {
    /// The character must appear at exactly this position.
    ExactAt { index: usize, character: char },
    /// The character must appear somewhere in the n-gram.
    Contains(char),
    /// The character must not appear anywhere in the n-gram.
    Excludes(char),
}

impl Constraint {
    fn test(&self, ngram: &NGram) -> bool {
        match *self {
            Constraint::ExactAt { index, character } => {
                ngram.matches(&IndexedCharacter { index, character })
            }
            Constraint::Contains(c) => ngram.contains(c),
            Constraint::Excludes(c) => !ngram.contains(c),
        }
    }
}

/// A classification scoped to one (key, guess) pair.
///
/// The matcher itself is stateless; all claim tracking lives inside
/// [`NGramMatcher::matching`] and is discarded once the filter is built.
#[derive(Debug, Clone, Copy)]
pub struct NGramMatcher<'a> {
    key: &'a NGram,
    guess: &'a NGram,
}

impl<'a> NGramMatcher<'a> {
    pub fn of(key: &'a NGram, guess: &'a NGram) -> Self {
        Self { key, guess }
    }

    /// Derives the consistency filter for this key/guess pair.
    ///
    /// Classification runs in three passes over the guess:
    ///
    /// 1. Exact: positions where guess and key agree claim that position
    ///    and one unit of the key's frequency budget for the character.
    /// 2. Misplaced: remaining guess positions, left to right, claim
    ///    budget greedily while any remains for their character. This is
    ///    what keeps duplicate letters in the guess from matching more
    ///    occurrences than the key actually has.
    /// 3. Absent: unclaimed guess positions whose character the key does
    ///    not contain at all. An exhausted budget alone adds no exclusion,
    ///    since the character was already granted a claim elsewhere and an
    ///    exclusion would contradict it.
    ///
    /// A length mismatch yields [`Filter::reject_all`]; zero predicates
    /// (only possible for zero-length inputs) yield the vacuous truth.
    pub fn matching(&self) -> Filter {
        if self.key.len() != self.guess.len() {
            return Filter::reject_all();
        }

        let mut remaining = self.key_occurrences();
        let mut claimed = vec![false; self.guess.len()];
        let mut constraints = Vec::with_capacity(self.guess.len());

        // Exact pass
        for ic in self.guess.iter() {
            if self.key.matches(&ic) {
                claimed[ic.index] = true;
                if let Some(count) = remaining.get_mut(&ic.character) {
                    *count -= 1;
                }
                constraints.push(Constraint::ExactAt {
                    index: ic.index,
                    character: ic.character,
                });
            }
        }

        // Misplaced pass, left to right
        for ic in self.guess.iter() {
            if claimed[ic.index] {
                continue;
            }
            if let Some(count) = remaining.get_mut(&ic.character) {
                if *count > 0 {
                    *count -= 1;
                    claimed[ic.index] = true;
                    constraints.push(Constraint::Contains(ic.character));
                }
            }
        }

        // Absent pass
        for ic in self.guess.iter() {
            if !claimed[ic.index] && !self.key.contains(ic.character) {
                constraints.push(Constraint::Excludes(ic.character));
            }
        }

        if constraints.is_empty() {
            return Filter::accept_all();
        }
        Filter::new(move |ngram| constraints.iter().all(|c| c.test(ngram)))
    }

    /// Frequency table of the key's characters.
    fn key_occurrences(&self) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for ic in self.key.iter() {
            *counts.entry(ic.character).or_insert(0) += 1;
        }
        counts
    }
}
