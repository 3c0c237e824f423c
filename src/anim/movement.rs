//! Eased start-to-end positional movement.

use serde::{Deserialize, Serialize};

use crate::geom::{ease_out_cubic, Position};

/// Length of a positional movement, in frames.
pub const MOVE_FRAMES: u32 = 180;

/// A single start-to-end movement driven by a frame counter.
///
/// Each [`advance`](MoveAnimation::advance) evaluates the cubic ease-out at
/// `frame / frames` and interpolates between the captured start and end
/// positions. The final frame lands on the end position exactly.
///
/// ```
/// use flashtable::anim::{MoveAnimation, MOVE_FRAMES};
/// use flashtable::geom::Position;
///
/// let start = Position::new(0.0, 0.0);
/// let end = Position::new(100.0, 40.0);
/// let mut anim = MoveAnimation::new(start, end);
///
/// let mut last = start;
/// for _ in 0..MOVE_FRAMES {
///     let (pos, _done) = anim.advance();
///     last = pos;
/// }
/// assert_eq!(last, end);
/// assert!(anim.is_done());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveAnimation {
    start: Position,
    end: Position,
    frames: u32,
    frame: u32,
}

impl MoveAnimation {
    /// Create a movement over the standard frame length.
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        Self::with_length(start, end, MOVE_FRAMES)
    }

    /// Create a movement over a custom frame length.
    ///
    /// Panics if `frames` is zero.
    #[must_use]
    pub fn with_length(start: Position, end: Position, frames: u32) -> Self {
        assert!(frames > 0, "movement must span at least one frame");
        Self {
            start,
            end,
            frames,
            frame: 0,
        }
    }

    /// The target position.
    #[must_use]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Frames elapsed so far.
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Raw progress in `[0, 1]`, before easing.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.frame as f32 / self.frames as f32
    }

    /// Check if the movement has played out.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.frame >= self.frames
    }

    /// Advance one frame.
    ///
    /// Returns the new position and whether this frame completed the
    /// movement. Advancing past completion keeps returning the end position.
    pub fn advance(&mut self) -> (Position, bool) {
        if self.is_done() {
            return (self.end, true);
        }

        self.frame += 1;
        let eased = ease_out_cubic(self.progress());
        (self.start.lerp(self.end, eased), self.is_done())
    }
}
