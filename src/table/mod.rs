//! The table: layout, piles, inputs, and the session state machine.

mod input;
mod layout;
mod piles;
mod state;

pub use input::{InputOutcome, InputRecord, TableInput};
pub use layout::{
    DealSide, TableLayout, CARD_STACK_OFFSET, DECK_CONTROLS_SPACING, DECK_VISUAL_CARDS,
    ROTATION_JITTER,
};
pub use piles::{Pile, Piles};
pub use state::{Table, TableBuilder, TableEvent};
