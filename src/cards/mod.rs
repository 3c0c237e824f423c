//! Cards: faces, palette, and the table card entity.

mod card;
mod face;
mod theme;

pub use card::{CardEvent, CardId, TableCard, CARD_HEIGHT, CARD_WIDTH};
pub use face::CardFace;
pub use theme::{FaceColors, Palette, Rgb};
