//! The table's color palette.
//!
//! The engine never draws anything, but the flip animation swaps which color
//! scheme a card displays, so the palette is part of the card state a
//! renderer consumes. Colors match the original palette
//! (<https://coolors.co/palette/0081a7-00afb9-fdfcdc-fed9b7-f07167>).

use serde::{Deserialize, Serialize};

use super::face::CardFace;

/// An sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Render as a `#rrggbb` hex string.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fill and border colors for one card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceColors {
    pub fill: Rgb,
    pub border: Rgb,
}

/// The full table palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Background gradient, top stop.
    pub background_top: Rgb,
    /// Background gradient, bottom stop.
    pub background_bottom: Rgb,
    /// Side-A card colors.
    pub side_a: FaceColors,
    /// Side-B card colors.
    pub side_b: FaceColors,
    /// Card text color.
    pub text: Rgb,
}

impl Palette {
    /// Colors for the given face.
    #[must_use]
    pub fn for_face(&self, face: CardFace) -> FaceColors {
        match face {
            CardFace::SideA => self.side_a,
            CardFace::SideB => self.side_b,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background_top: Rgb(0x00, 0xaf, 0xb9),
            background_bottom: Rgb(0x00, 0x81, 0xa7),
            side_a: FaceColors {
                fill: Rgb(0xf0, 0x71, 0x67),
                border: Rgb(0xed, 0x51, 0x45),
            },
            side_b: FaceColors {
                fill: Rgb(0xee, 0xbf, 0x25),
                border: Rgb(0xbe, 0x95, 0x0e),
            },
            text: Rgb(0xff, 0xf0, 0xe2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb(0xf0, 0x71, 0x67).hex(), "#f07167");
        assert_eq!(Rgb(0, 0, 0).hex(), "#000000");
    }

    #[test]
    fn test_face_colors_swap() {
        let palette = Palette::default();

        let a = palette.for_face(CardFace::SideA);
        let b = palette.for_face(CardFace::SideB);

        assert_ne!(a, b);
        assert_eq!(a.fill.hex(), "#f07167");
        assert_eq!(b.fill.hex(), "#eebf25");
    }
}
