//! The deck pool: the ordered supply of undealt card records.
//!
//! The pool is shuffled once when the table is built, then consumed from the
//! top as cards are dealt. An exhausted pool yields `None` rather than
//! failing — a deal from an empty deck is simply skipped.

use serde::{Deserialize, Serialize};

use super::record::CardRecord;
use crate::rng::TableRng;

/// Ordered pool of card records waiting to be dealt.
///
/// ```
/// use flashtable::content::{CardRecord, DeckPool};
///
/// let mut pool = DeckPool::new(vec![
///     CardRecord::new("1", "a", "b", ""),
///     CardRecord::new("2", "c", "d", ""),
/// ]);
///
/// assert_eq!(pool.remaining(), 2);
/// assert_eq!(pool.draw_next().unwrap().id, "2"); // top = end
/// assert_eq!(pool.draw_next().unwrap().id, "1");
/// assert_eq!(pool.draw_next(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPool {
    /// Undealt records. The top of the pool is the end of the vec.
    records: Vec<CardRecord>,
}

impl DeckPool {
    /// Create a pool from an ordered list of records.
    #[must_use]
    pub fn new(records: Vec<CardRecord>) -> Self {
        Self { records }
    }

    /// Number of undealt records.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.records.len()
    }

    /// Check if the pool has been exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shuffle the undealt records in place.
    pub fn shuffle(&mut self, rng: &mut TableRng) {
        rng.shuffle(&mut self.records);
    }

    /// Draw the top record, removing it from the pool.
    ///
    /// Returns `None` once the pool is exhausted; never indexes out of range.
    pub fn draw_next(&mut self) -> Option<CardRecord> {
        self.records.pop()
    }

    /// Look at a uniformly random undealt record without removing it.
    pub fn peek_random(&mut self, rng: &mut TableRng) -> Option<&CardRecord> {
        let index = rng.index(self.records.len())?;
        self.records.get(index)
    }
}
