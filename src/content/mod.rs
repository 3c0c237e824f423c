//! Card content: CSV records, parsing, loading, and the deck pool.
//!
//! Content flows in one direction: raw CSV text becomes an ordered sequence
//! of [`CardRecord`]s, which seed a [`DeckPool`] that the table draws from.
//! The pool is the only stateful piece; records themselves are plain data.

mod csv;
mod loader;
mod pool;
mod record;

pub use csv::parse_records;
pub use loader::{load_records, load_records_or_empty, ContentError};
pub use pool::DeckPool;
pub use record::CardRecord;
