//! Pile tracking: which cards are in play and which are discarded.
//!
//! The table has exactly two piles for dealt cards. `InPlay` is unordered
//! (z-order lives on the cards themselves); `Discard` keeps its order so the
//! stack renders bottom-to-top in discard order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Where a dealt card currently lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pile {
    /// On the table, interactive.
    InPlay,
    /// On the discard stack.
    Discard,
}

/// Tracks the pile each dealt card occupies.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Piles {
    /// Card locations: card -> pile.
    locations: FxHashMap<CardId, Pile>,

    /// Discard stack, bottom to top.
    discard_order: Vec<CardId>,
}

impl Piles {
    /// Create an empty pile tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly dealt card as in play.
    ///
    /// Panics if the card is already tracked.
    pub fn add_in_play(&mut self, card: CardId) {
        let previous = self.locations.insert(card, Pile::InPlay);
        assert!(previous.is_none(), "{card} already tracked in a pile");
    }

    /// Move a card from play to the discard stack.
    ///
    /// Returns the card's stack index (0 = bottom), or `None` if the card is
    /// unknown or already discarded.
    pub fn move_to_discard(&mut self, card: CardId) -> Option<usize> {
        match self.locations.get(&card) {
            Some(Pile::InPlay) => {
                self.locations.insert(card, Pile::Discard);
                self.discard_order.push(card);
                Some(self.discard_order.len() - 1)
            }
            _ => None,
        }
    }

    /// The pile a card is in, if it was ever dealt.
    #[must_use]
    pub fn pile_of(&self, card: CardId) -> Option<Pile> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is tracked at all.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }

    /// Cards currently in play (unordered).
    pub fn in_play(&self) -> impl Iterator<Item = CardId> + '_ {
        self.locations
            .iter()
            .filter(|(_, &pile)| pile == Pile::InPlay)
            .map(|(&card, _)| card)
    }

    /// The discard stack, bottom to top.
    #[must_use]
    pub fn discard_order(&self) -> &[CardId] {
        &self.discard_order
    }

    /// Number of discarded cards.
    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.discard_order.len()
    }

    /// Number of cards in play.
    #[must_use]
    pub fn in_play_count(&self) -> usize {
        self.locations.len() - self.discard_order.len()
    }
}
