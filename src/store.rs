//! `store` — Module holding the collected word-search data for one session.
//!
//! The store accumulates validated (word, direction) pairs in insertion order
//! and tracks the grid dimension separately. It enforces the two invariants
//! the rest of the crate relies on:
//!
//! - no two entries share a word (comparison is on the already-lowercased
//!   form the session hands in), and
//! - the dimension is either unset or at least 1.
//!
//! Appends are amortized O(1): entries live in a `Vec` and ride its doubling
//! growth. Duplicate lookup stays a linear scan over whole words — with a
//! session's worth of entries there is nothing to index, and an exact
//! per-word comparison can never produce the substring false-positives a
//! naive "is it in the blob" check would ("ola" must not match a stored
//! "hola").

use crate::direction::Direction;
use crate::errors::InputError;

/// First allocation holds this many entries; growth doubles from there.
const INITIAL_CAPACITY: usize = 10;

/// A single validated record: a lowercase word and its placement direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub direction: Direction,
}

/// Ordered, duplicate-free collection of entries plus the grid dimension.
#[derive(Debug, Clone)]
pub struct Store {
    entries: Vec<Entry>,
    dimension: Option<u32>,
}

impl Store {
    #[must_use]
    pub fn new() -> Store {
        Store {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
            dimension: None,
        }
    }

    /// Set the grid dimension. Later calls overwrite earlier ones; the
    /// interactive flow only ever calls this once.
    pub fn set_dimension(&mut self, dimension: u32) {
        self.dimension = Some(dimension);
    }

    /// The grid dimension, or `None` before the user has supplied one.
    #[must_use]
    pub fn dimension(&self) -> Option<u32> {
        self.dimension
    }

    /// True iff no entry has been appended yet. The dimension does not
    /// count: a session that only got as far as the dimension prompt still
    /// has nothing worth saving.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Whole-word duplicate lookup.
    ///
    /// Linear scan comparing each stored word for exact equality with
    /// `word`. Substring containment is deliberately not a match.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word == word)
    }

    /// Append a (word, direction) pair.
    ///
    /// The word is expected already lowercased by the caller (the session
    /// folds case right after the sentinel check).
    ///
    /// # Errors
    ///
    /// Returns [`InputError::DuplicateWord`] without modifying the store if
    /// an equal word is already present.
    pub fn append(&mut self, word: String, direction: Direction) -> Result<(), InputError> {
        if self.contains_word(&word) {
            return Err(InputError::DuplicateWord { word });
        }
        self.entries.push(Entry { word, direction });
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}
