//! Which side of a card is showing.

use serde::{Deserialize, Serialize};

/// The face a card currently displays.
///
/// Cards always enter play on side A. A flip toggles the face at the
/// edge-on frame of the flip animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// The front: the prompt side.
    #[default]
    SideA,
    /// The back: the answer side.
    SideB,
}

impl CardFace {
    /// The opposite face.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SideA => Self::SideB,
            Self::SideB => Self::SideA,
        }
    }

    /// Suffix used in the corner id label (`#12a` / `#12b`).
    #[must_use]
    pub fn suffix(self) -> char {
        match self {
            Self::SideA => 'a',
            Self::SideB => 'b',
        }
    }
}
