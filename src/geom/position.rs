//! Positions and scales in scene space.
//!
//! `Position` is a plain 2D point. The only non-obvious piece is `lerp`,
//! which is written in the `a*(1-t) + b*t` form so that `t = 0.0` returns the
//! start *exactly* and `t = 1.0` returns the end *exactly* — movement
//! animations rely on landing on their target on the final frame.

use serde::{Deserialize, Serialize};

/// A point (or offset) in scene coordinates.
///
/// ```
/// use flashtable::geom::Position;
///
/// let a = Position::new(0.0, 0.0);
/// let b = Position::new(10.0, 20.0);
///
/// assert_eq!(a.lerp(b, 0.0), a);
/// assert_eq!(a.lerp(b, 1.0), b);
/// assert_eq!(a.lerp(b, 0.5), Position::new(5.0, 10.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linearly interpolate towards `end`.
    ///
    /// Uses the endpoint-exact form: `t = 0` yields `self` exactly and
    /// `t = 1` yields `end` exactly.
    #[must_use]
    pub fn lerp(self, end: Self, t: f32) -> Self {
        Self {
            x: self.x * (1.0 - t) + end.x * t,
            y: self.y * (1.0 - t) + end.y * t,
        }
    }

    /// Offset by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Per-axis scale of a card.
///
/// The flip animation only touches `y`; `x` stays at 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    /// Unit scale (no distortion).
    pub const UNIT: Self = Self { x: 1.0, y: 1.0 };

    /// Create a scale.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::UNIT
    }
}
