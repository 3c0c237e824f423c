//! The three-segment flip animation.
//!
//! Timeline (frames, matching the original `[0, 120, 121, 241]`):
//!
//! 1. `1..=120` — the card's vertical scale shrinks linearly from 1 to 0
//!    while the card drifts down by half its height in total, keeping the
//!    visual center fixed as the card collapses to a line.
//! 2. `121` — the edge-on frame: the displayed face, colors and id suffix
//!    swap, and the rotation jitter negates. Scale stays at 0.
//! 3. `122..=241` — scale grows back from 0 to 1 while the card drifts up by
//!    the same half height.
//!
//! On the final frame the scale is exactly 1 and the card is snapped back to
//! the position it held when the flip started, so repeated flips never
//! accumulate drift.

use serde::{Deserialize, Serialize};

use crate::geom::Position;

/// Frame at which the face swap happens (end of the shrink segment).
pub const FLIP_SWAP_FRAME: u32 = 121;

/// Total flip length in frames.
pub const FLIP_TOTAL_FRAMES: u32 = 241;

/// Frames in each scale segment (shrink and grow are symmetric).
const SCALE_FRAMES: u32 = FLIP_SWAP_FRAME - 1;

/// What one flip frame does to the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipStep {
    /// New vertical scale.
    pub y_scale: f32,
    /// Vertical drift to apply this frame.
    pub y_shift: f32,
    /// True exactly once, on the edge-on frame.
    pub swap_face: bool,
    /// True on the final frame.
    pub done: bool,
}

/// Frame counter for an in-flight flip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlipAnimation {
    /// Position when the flip started; restored on completion.
    origin: Position,
    frame: u32,
}

impl FlipAnimation {
    /// Start a flip from the card's current position.
    #[must_use]
    pub fn new(origin: Position) -> Self {
        Self { origin, frame: 0 }
    }

    /// The position the card held when the flip started.
    #[must_use]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Frames elapsed so far.
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Check if the flip has played out.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.frame >= FLIP_TOTAL_FRAMES
    }

    /// Advance one frame.
    ///
    /// `card_height` sets the total vertical drift (half the height down,
    /// then back up).
    pub fn advance(&mut self, card_height: f32) -> FlipStep {
        debug_assert!(!self.is_done(), "flip advanced past its timeline");

        self.frame += 1;
        let per_frame_shift = card_height / 2.0 / SCALE_FRAMES as f32;

        if self.frame < FLIP_SWAP_FRAME {
            // Shrinking: scale 1 -> 0 over SCALE_FRAMES frames.
            FlipStep {
                y_scale: 1.0 - self.frame as f32 / SCALE_FRAMES as f32,
                y_shift: per_frame_shift,
                swap_face: false,
                done: false,
            }
        } else if self.frame == FLIP_SWAP_FRAME {
            // Edge-on: the face swap frame.
            FlipStep {
                y_scale: 0.0,
                y_shift: 0.0,
                swap_face: true,
                done: false,
            }
        } else {
            // Growing: scale 0 -> 1 over SCALE_FRAMES frames.
            let grown = self.frame - FLIP_SWAP_FRAME;
            FlipStep {
                y_scale: grown as f32 / SCALE_FRAMES as f32,
                y_shift: -per_frame_shift,
                swap_face: false,
                done: self.frame >= FLIP_TOTAL_FRAMES,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_HEIGHT: f32 = 200.0;

    fn run_to_completion(anim: &mut FlipAnimation) -> Vec<FlipStep> {
        let mut steps = Vec::new();
        while !anim.is_done() {
            steps.push(anim.advance(CARD_HEIGHT));
        }
        steps
    }

    #[test]
    fn test_total_length() {
        let mut anim = FlipAnimation::new(Position::default());
        let steps = run_to_completion(&mut anim);

        assert_eq!(steps.len(), FLIP_TOTAL_FRAMES as usize);
        assert!(steps.last().unwrap().done);
    }

    #[test]
    fn test_swap_happens_exactly_once() {
        let mut anim = FlipAnimation::new(Position::default());
        let steps = run_to_completion(&mut anim);

        let swaps: Vec<_> = steps
            .iter()
            .enumerate()
            .filter(|(_, s)| s.swap_face)
            .collect();

        assert_eq!(swaps.len(), 1);
        // Frame numbers are 1-based; index is 0-based.
        assert_eq!(swaps[0].0 as u32 + 1, FLIP_SWAP_FRAME);
    }

    #[test]
    fn test_scale_reaches_zero_then_unit() {
        let mut anim = FlipAnimation::new(Position::default());
        let steps = run_to_completion(&mut anim);

        // Last shrink frame hits zero.
        let edge = &steps[(FLIP_SWAP_FRAME - 2) as usize];
        assert_eq!(edge.y_scale, 0.0);

        // Final frame is exactly unit scale, not one step short.
        assert_eq!(steps.last().unwrap().y_scale, 1.0);
    }

    #[test]
    fn test_scale_monotone_per_segment() {
        let mut anim = FlipAnimation::new(Position::default());
        let steps = run_to_completion(&mut anim);

        let swap_index = (FLIP_SWAP_FRAME - 1) as usize;
        for pair in steps[..swap_index].windows(2) {
            assert!(pair[1].y_scale <= pair[0].y_scale);
        }
        for pair in steps[swap_index + 1..].windows(2) {
            assert!(pair[1].y_scale >= pair[0].y_scale);
        }
    }

    #[test]
    fn test_drift_cancels_out() {
        let mut anim = FlipAnimation::new(Position::default());
        let steps = run_to_completion(&mut anim);

        let down: f32 = steps.iter().filter(|s| s.y_shift > 0.0).map(|s| s.y_shift).sum();
        let up: f32 = steps.iter().filter(|s| s.y_shift < 0.0).map(|s| s.y_shift).sum();

        assert!((down - CARD_HEIGHT / 2.0).abs() < 1e-3);
        assert!((down + up).abs() < 1e-3);
    }

    #[test]
    fn test_origin_recorded() {
        let origin = Position::new(42.0, 17.0);
        let anim = FlipAnimation::new(origin);
        assert_eq!(anim.origin(), origin);
    }
}
