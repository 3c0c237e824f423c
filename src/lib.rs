//! # flashtable
//!
//! A deterministic, headless engine for a flashcard table: cards dealt from
//! a shuffled deck, flipped between their two faces, dragged around, and
//! discarded onto a stacked pile — with every animation driven by plain
//! integer frame counters.
//!
//! ## Design Principles
//!
//! 1. **Headless**: the engine owns state and timing, never pixels. A
//!    renderer reads positions, scales, faces, z-order, and the palette each
//!    frame and draws whatever it likes.
//!
//! 2. **Deterministic**: all randomness (shuffle, deal scatter, rotation
//!    jitter) flows through one seeded RNG. Same seed + same inputs = the
//!    same table, frame for frame.
//!
//! 3. **Session-owned state**: every counter (z-order interactions, discard
//!    stacking, frames) is a field of [`table::Table`]. No globals, so
//!    multiple tables coexist without interference.
//!
//! ## Driving the engine
//!
//! Two calls: [`table::Table::handle`] for user inputs, [`table::Table::tick`]
//! once per rendered frame. Inputs that arrive mid-animation are dropped,
//! never queued: each card's animation is single-flight.
//!
//! ## Modules
//!
//! - `content`: card records, CSV parsing, loading, the deck pool
//! - `geom`: positions, scales, the cubic ease-out
//! - `anim`: frame-counter movement and flip animations
//! - `cards`: faces, the color palette, the table card entity
//! - `table`: layout, piles, inputs, the session state machine
//! - `rng`: seeded table randomness

pub mod anim;
pub mod cards;
pub mod content;
pub mod geom;
pub mod rng;
pub mod table;

// Re-export commonly used types
pub use crate::anim::{FlipAnimation, MoveAnimation, FLIP_SWAP_FRAME, FLIP_TOTAL_FRAMES, MOVE_FRAMES};
pub use crate::cards::{CardEvent, CardFace, CardId, Palette, TableCard, CARD_HEIGHT, CARD_WIDTH};
pub use crate::content::{
    load_records, load_records_or_empty, parse_records, CardRecord, ContentError, DeckPool,
};
pub use crate::geom::{ease_out_cubic, Position, Scale};
pub use crate::rng::TableRng;
pub use crate::table::{
    InputOutcome, InputRecord, Pile, Table, TableBuilder, TableEvent, TableInput, TableLayout,
};
