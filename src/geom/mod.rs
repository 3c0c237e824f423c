//! Geometry primitives: positions, scales, easing.
//!
//! Everything the animation layer needs to describe where a card is and how
//! it gets somewhere else. Coordinates are `f32` scene pixels with the origin
//! at the top-left, matching the canvas the original toy rendered to.

mod easing;
mod position;

pub use easing::ease_out_cubic;
pub use position::{Position, Scale};
