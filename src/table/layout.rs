//! Table layout: where the deck, discard pile, and deal targets live.
//!
//! Everything is derived from the scene size. The deck sits left of center
//! along the top edge with only its lower half visible, the discard outline
//! mirrors it on the right, and dealt cards scatter around the scene center.

use serde::{Deserialize, Serialize};

use crate::cards::{CARD_HEIGHT, CARD_WIDTH};
use crate::geom::Position;
use crate::rng::TableRng;

/// Vertical offset between stacked cards, in pixels.
pub const CARD_STACK_OFFSET: f32 = 4.0;

/// Horizontal gap between the deck and the discard outline.
pub const DECK_CONTROLS_SPACING: f32 = 40.0;

/// Number of blank cards rendered as the deck stack.
pub const DECK_VISUAL_CARDS: usize = 10;

/// Half-range of the rotation jitter rolled for each dealt card, in radians.
pub const ROTATION_JITTER: f32 = 0.005;

/// Half-range of the random scatter around the center for regular deals.
const DEAL_SCATTER: f32 = 150.0;

/// Ranges for the opening deal offsets (side-biased).
const OPENING_X_RANGE: f32 = 50.0;
const OPENING_Y_HALF_RANGE: f32 = 50.0;

/// Which side of center an opening card lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealSide {
    Left,
    Right,
}

/// Scene-derived positions for the table's fixed furniture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    pub scene_width: f32,
    pub scene_height: f32,
}

impl TableLayout {
    /// Create a layout for the given scene size.
    #[must_use]
    pub fn new(scene_width: f32, scene_height: f32) -> Self {
        Self {
            scene_width,
            scene_height,
        }
    }

    /// Scene center.
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(self.scene_width / 2.0, self.scene_height / 2.0)
    }

    /// Top-left corner of the deck stack.
    ///
    /// Half a card above the top edge: only the lower half of the deck is
    /// visible.
    #[must_use]
    pub fn deck_position(&self) -> Position {
        Position::new(
            self.center().x - CARD_WIDTH - DECK_CONTROLS_SPACING / 2.0,
            -CARD_HEIGHT / 2.0,
        )
    }

    /// Top-left corner of the discard outline.
    #[must_use]
    pub fn discard_position(&self) -> Position {
        Position::new(
            self.center().x + DECK_CONTROLS_SPACING / 2.0,
            -CARD_HEIGHT / 2.0 - 2.0,
        )
    }

    /// Where the next discarded card comes to rest.
    ///
    /// Each discard stacks [`CARD_STACK_OFFSET`] higher than the last.
    #[must_use]
    pub fn discard_target(&self, discard_count: u32) -> Position {
        self.discard_position()
            .offset(0.0, -(discard_count as f32 * CARD_STACK_OFFSET))
    }

    /// Positions of the blank cards rendered as the deck stack.
    #[must_use]
    pub fn deck_stack_positions(&self) -> Vec<Position> {
        let base = self.deck_position();
        (0..DECK_VISUAL_CARDS)
            .map(|i| base.offset(0.0, -(i as f32 * CARD_STACK_OFFSET)))
            .collect()
    }

    /// A randomized deal target scattered around the scene center.
    #[must_use]
    pub fn deal_target(&self, rng: &mut TableRng) -> Position {
        self.center()
            .offset(-CARD_WIDTH / 2.0, -CARD_HEIGHT / 2.0)
            .offset(rng.symmetric(DEAL_SCATTER), rng.symmetric(DEAL_SCATTER))
    }

    /// A deal target for one of the opening cards.
    ///
    /// The left card sits a full card-width left of center, the right card
    /// at center; both get a small side-biased scatter.
    #[must_use]
    pub fn opening_target(&self, rng: &mut TableRng, side: DealSide) -> Position {
        let base = match side {
            DealSide::Left => self.center().offset(-CARD_WIDTH, -CARD_HEIGHT / 2.0),
            DealSide::Right => self.center().offset(0.0, -CARD_HEIGHT / 2.0),
        };

        let x_sign = match side {
            DealSide::Left => -1.0,
            DealSide::Right => 1.0,
        };

        base.offset(
            rng.uniform(OPENING_X_RANGE) * x_sign,
            rng.symmetric(OPENING_Y_HALF_RANGE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TableLayout {
        TableLayout::new(1280.0, 720.0)
    }

    #[test]
    fn test_center() {
        assert_eq!(layout().center(), Position::new(640.0, 360.0));
    }

    #[test]
    fn test_deck_left_of_discard() {
        let l = layout();
        let deck = l.deck_position();
        let discard = l.discard_position();

        assert!(deck.x < discard.x);
        // Deck right edge + spacing = discard left edge.
        assert_eq!(deck.x + CARD_WIDTH + DECK_CONTROLS_SPACING, discard.x);
    }

    #[test]
    fn test_piles_half_off_top_edge() {
        let l = layout();

        assert_eq!(l.deck_position().y, -CARD_HEIGHT / 2.0);
        assert_eq!(l.discard_position().y, -CARD_HEIGHT / 2.0 - 2.0);
    }

    #[test]
    fn test_discard_target_stacks_upward() {
        let l = layout();

        let first = l.discard_target(0);
        let second = l.discard_target(1);
        let third = l.discard_target(2);

        assert_eq!(first, l.discard_position());
        assert_eq!(second.y, first.y - CARD_STACK_OFFSET);
        assert_eq!(third.y, first.y - 2.0 * CARD_STACK_OFFSET);
        assert_eq!(first.x, second.x);
    }

    #[test]
    fn test_deck_stack_positions() {
        let l = layout();
        let positions = l.deck_stack_positions();

        assert_eq!(positions.len(), DECK_VISUAL_CARDS);
        assert_eq!(positions[0], l.deck_position());
        for pair in positions.windows(2) {
            assert_eq!(pair[1].y, pair[0].y - CARD_STACK_OFFSET);
        }
    }

    #[test]
    fn test_deal_target_scatter_bounds() {
        let l = layout();
        let mut rng = TableRng::new(42);
        let anchor = l.center().offset(-CARD_WIDTH / 2.0, -CARD_HEIGHT / 2.0);

        for _ in 0..200 {
            let target = l.deal_target(&mut rng);
            assert!((target.x - anchor.x).abs() <= DEAL_SCATTER);
            assert!((target.y - anchor.y).abs() <= DEAL_SCATTER);
        }
    }

    #[test]
    fn test_opening_targets_respect_sides() {
        let l = layout();
        let mut rng = TableRng::new(42);

        for _ in 0..100 {
            let left = l.opening_target(&mut rng, DealSide::Left);
            let right = l.opening_target(&mut rng, DealSide::Right);

            // Left card never drifts right of its anchor, and vice versa.
            assert!(left.x <= l.center().x - CARD_WIDTH);
            assert!(right.x >= l.center().x);
        }
    }
}
