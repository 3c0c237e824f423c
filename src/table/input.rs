//! Inputs: the mouse interactions the table understands.
//!
//! The embedding UI translates raw pointer events into these inputs; the
//! engine neither sees the DOM nor owns any event wiring. A press on a card
//! body and a press on one of its buttons are separate inputs — a UI that
//! wants the original's bubbling behavior sends `PressCard` first, then the
//! button input.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::geom::Position;

/// A user interaction with the table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TableInput {
    /// Mouse-down on a card body: raise it above everything else.
    PressCard(CardId),
    /// Mouse-down on the deck: deal a new card.
    PressDeck,
    /// Press the card's flip button.
    Flip(CardId),
    /// Press the card's discard button.
    Discard(CardId),
    /// Drag the card to a new position.
    Drag(CardId, Position),
}

/// What an input actually did.
///
/// Inputs that arrive mid-animation, target unknown cards, or find the deck
/// exhausted produce [`InputOutcome::Ignored`] and change nothing — they are
/// dropped, never queued.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputOutcome {
    /// A new card was dealt from the deck.
    Dealt(CardId),
    /// The card was raised to the top of the z-order.
    Raised(CardId),
    /// A flip animation started.
    FlipStarted(CardId),
    /// A discard movement started.
    DiscardStarted(CardId),
    /// The card was repositioned.
    Dragged(CardId),
    /// The input changed nothing.
    Ignored,
}

impl InputOutcome {
    /// Check if the input was dropped without effect.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// A handled input with its outcome, kept in the table's history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Frame counter value when the input arrived.
    pub frame: u64,
    /// The input as received.
    pub input: TableInput,
    /// What it did.
    pub outcome: InputOutcome,
}
