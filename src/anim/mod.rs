//! Frame-counter animations.
//!
//! Every animation here is a plain integer counter advanced once per rendered
//! frame and compared against fixed thresholds — no wall-clock time, no
//! delta-time normalization. Playback speed is therefore tied to however fast
//! the embedding render loop calls [`crate::table::Table::tick`], exactly as
//! in the original toy.
//!
//! Two machines exist:
//! - [`MoveAnimation`]: eased start-to-end positional movement, used for both
//!   deal-in and discard.
//! - [`FlipAnimation`]: the three-segment shrink / swap / grow sequence that
//!   turns a card over.
//!
//! Both machines land exactly on their final values (end position, unit
//! scale) on the last frame of their timeline.

mod flip;
mod movement;

pub use flip::{FlipAnimation, FlipStep, FLIP_SWAP_FRAME, FLIP_TOTAL_FRAMES};
pub use movement::{MoveAnimation, MOVE_FRAMES};
