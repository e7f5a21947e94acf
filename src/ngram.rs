//! Immutable fixed-length character sequences (n-grams).
//!
//! An [`NGram`] is the word unit of the engine: an ordered sequence of
//! characters with an O(1) membership test backed by a derived character
//! set. Iteration yields position-aware [`IndexedCharacter`] pairs, which
//! is what the matcher's positional predicates are expressed against.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::MatchleError;

/// A character and its 0-based position within an n-gram.
///
/// Produced on demand during iteration; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexedCharacter {
    pub index: usize,
    pub character: char,
}

/// An immutable, ordered, fixed-length sequence of characters.
///
/// Equality and hashing are defined on the character sequence alone.
/// Ordering is lexicographic, which gives corpus enumeration and guess
/// tie-breaking a deterministic order.
#[derive(Debug, Clone)]
pub struct NGram {
    chars: Vec<char>,
    charset: HashSet<char>,
}

impl NGram {
    /// Creates an n-gram from an explicit character sequence.
    ///
    /// Rejects null (`'\0'`) characters, reporting the index of the first
    /// offender. An empty sequence is legal and yields a zero-length n-gram.
    pub fn new(chars: Vec<char>) -> Result<Self, MatchleError> {
        if let Some(index) = chars.iter().position(|&c| c == '\0') {
            return Err(MatchleError::NullCharacter { index });
        }
        let charset = chars.iter().copied().collect();
        Ok(Self { chars, charset })
    }

    /// Creates an n-gram from a string, decomposed into its characters.
    pub fn from_word(word: &str) -> Result<Self, MatchleError> {
        Self::new(word.chars().collect())
    }

    /// Number of characters in the n-gram.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at a 0-based index, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// O(1) membership test against the derived character set.
    pub fn contains(&self, c: char) -> bool {
        self.charset.contains(&c)
    }

    /// True iff the character at the given index equals the given character.
    pub fn matches(&self, ic: &IndexedCharacter) -> bool {
        self.get(ic.index) == Some(ic.character)
    }

    /// True iff the n-gram contains the character somewhere other than the
    /// given index (right letter, wrong spot).
    pub fn contains_elsewhere(&self, ic: &IndexedCharacter) -> bool {
        self.contains(ic.character) && !self.matches(ic)
    }

    /// Read-only view of the underlying character sequence.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Copies the character sequence into a new vector.
    pub fn to_chars(&self) -> Vec<char> {
        self.chars.clone()
    }

    /// Lazy, restartable iteration over indexed characters in position order.
    pub fn iter(&self) -> impl Iterator<Item = IndexedCharacter> + '_ {
        self.chars
            .iter()
            .copied()
            .enumerate()
            .map(|(index, character)| IndexedCharacter { index, character })
    }
}

impl PartialEq for NGram {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for NGram {}

impl Hash for NGram {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chars.hash(state);
    }
}

impl PartialOrd for NGram {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NGram {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.chars.cmp(&other.chars)
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a NGram {
    type Item = IndexedCharacter;
    type IntoIter = NGramIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        NGramIter {
            ngram: self,
            index: 0,
        }
    }
}

/// Iterator over an n-gram's indexed characters.
pub struct NGramIter<'a> {
    ngram: &'a NGram,
    index: usize,
}

impl Iterator for NGramIter<'_> {
    type Item = IndexedCharacter;

    fn next(&mut self) -> Option<Self::Item> {
        let character = self.ngram.get(self.index)?;
        let item = IndexedCharacter {
            index: self.index,
            character,
        };
        self.index += 1;
        Some(item)
    }
}
