//! The table: one self-contained flashcard session.
//!
//! `Table` owns every piece of session state — the deck pool, the dealt
//! cards, the piles, the RNG, and all the counters the original kept as
//! module-level globals (interaction count for z-order, discard count for
//! stack offsets, the frame counter). Two tables on one page can never
//! interfere.
//!
//! The engine is driven by exactly two calls: [`Table::handle`] for user
//! inputs and [`Table::tick`] once per rendered frame.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::input::{InputOutcome, InputRecord, TableInput};
use super::layout::{DealSide, TableLayout, ROTATION_JITTER};
use super::piles::{Pile, Piles};
use crate::cards::{CardEvent, CardFace, CardId, Palette, TableCard};
use crate::content::{CardRecord, DeckPool};
use crate::geom::Position;
use crate::rng::TableRng;

/// A state transition that completed (or passed a milestone) during a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// A card's flip passed its edge-on frame; the displayed face changed.
    FaceChanged(CardId, CardFace),
    /// A card's movement (deal-in or discard) reached its target.
    MoveFinished(CardId),
    /// A card's flip completed.
    FlipFinished(CardId),
}

/// Builder for a [`Table`].
///
/// ```
/// use flashtable::content::CardRecord;
/// use flashtable::table::TableBuilder;
///
/// let records = vec![
///     CardRecord::new("1", "Hello", "World", ""),
///     CardRecord::new("2", "Bonjour", "Monde", ""),
///     CardRecord::new("3", "Hallo", "Welt", ""),
/// ];
///
/// let table = TableBuilder::new(records)
///     .scene_size(1280.0, 720.0)
///     .build(42);
///
/// assert_eq!(table.card_count(), 2); // two opening deals
/// assert_eq!(table.deck_remaining(), 1);
/// ```
pub struct TableBuilder {
    records: Vec<CardRecord>,
    scene_width: f32,
    scene_height: f32,
    opening_deals: usize,
}

impl TableBuilder {
    /// Start building a table with the given card content.
    #[must_use]
    pub fn new(records: Vec<CardRecord>) -> Self {
        Self {
            records,
            scene_width: 1280.0,
            scene_height: 720.0,
            opening_deals: 2,
        }
    }

    /// Set the scene size the layout derives from.
    #[must_use]
    pub fn scene_size(mut self, width: f32, height: f32) -> Self {
        self.scene_width = width;
        self.scene_height = height;
        self
    }

    /// Number of cards dealt automatically at startup (default 2).
    #[must_use]
    pub fn opening_deals(mut self, count: usize) -> Self {
        self.opening_deals = count;
        self
    }

    /// Build the table.
    ///
    /// Shuffles the pool with the seeded RNG, then deals the opening cards
    /// (alternating left/right around center). Runs out of content
    /// gracefully: a short pool just means fewer opening cards.
    #[must_use]
    pub fn build(self, seed: u64) -> Table {
        let mut rng = TableRng::new(seed);
        let mut pool = DeckPool::new(self.records);
        pool.shuffle(&mut rng);

        let mut table = Table {
            layout: TableLayout::new(self.scene_width, self.scene_height),
            palette: Palette::default(),
            pool,
            cards: FxHashMap::default(),
            piles: Piles::new(),
            rng,
            interactions: 0,
            discard_count: 0,
            frame: 0,
            next_card_id: 0,
            history: Vector::new(),
        };

        for i in 0..self.opening_deals {
            let side = if i % 2 == 0 {
                DealSide::Left
            } else {
                DealSide::Right
            };

            let Some(record) = table.pool.draw_next() else {
                break;
            };
            let target = table.layout.opening_target(&mut table.rng, side);
            table.spawn_card(record, target);
        }

        table
    }
}

/// A flashcard table session.
pub struct Table {
    layout: TableLayout,
    palette: Palette,
    pool: DeckPool,
    cards: FxHashMap<CardId, TableCard>,
    piles: Piles,
    rng: TableRng,

    /// Interaction counter driving z-order. Every deck press and card press
    /// bumps it; the pressed/dealt card takes a z derived from it.
    interactions: u32,

    /// Number of discards so far; sets the next discard stack offset.
    discard_count: u32,

    /// Frames ticked since the session started.
    frame: u64,

    next_card_id: u32,

    /// Every handled input with its outcome, oldest first.
    history: Vector<InputRecord>,
}

impl Table {
    /// Handle one user input.
    ///
    /// Returns what the input did. Every input is recorded in the history,
    /// including ignored ones.
    pub fn handle(&mut self, input: TableInput) -> InputOutcome {
        let outcome = self.apply(input);

        if outcome.is_ignored() {
            tracing::debug!(?input, "table input ignored");
        }

        self.history.push_back(InputRecord {
            frame: self.frame,
            input,
            outcome,
        });
        outcome
    }

    fn apply(&mut self, input: TableInput) -> InputOutcome {
        match input {
            TableInput::PressCard(id) => {
                if !self.cards.contains_key(&id) {
                    return InputOutcome::Ignored;
                }
                // Pressing raises above everything interacted with so far,
                // even while the card is animating.
                self.interactions += 1;
                let z = self.interactions + 1;
                if let Some(card) = self.cards.get_mut(&id) {
                    card.z_index = z;
                }
                InputOutcome::Raised(id)
            }

            TableInput::PressDeck => {
                // The press counts as an interaction whether or not a card
                // comes out, matching the original click counter.
                self.interactions += 1;

                let Some(record) = self.pool.draw_next() else {
                    return InputOutcome::Ignored;
                };

                let target = self.layout.deal_target(&mut self.rng);
                let id = self.spawn_card(record, target);
                if let Some(card) = self.cards.get_mut(&id) {
                    card.z_index = self.interactions;
                }
                InputOutcome::Dealt(id)
            }

            TableInput::Flip(id) => {
                let Some(card) = self.cards.get_mut(&id) else {
                    return InputOutcome::Ignored;
                };
                if card.start_flip() {
                    InputOutcome::FlipStarted(id)
                } else {
                    InputOutcome::Ignored
                }
            }

            TableInput::Discard(id) => {
                if self.piles.pile_of(id) != Some(Pile::InPlay) {
                    return InputOutcome::Ignored;
                }
                let Some(card) = self.cards.get_mut(&id) else {
                    return InputOutcome::Ignored;
                };
                if card.is_animating() {
                    return InputOutcome::Ignored;
                }

                let target = self.layout.discard_target(self.discard_count);
                card.start_move(target);
                card.stop_dragging();
                self.piles.move_to_discard(id);
                self.discard_count += 1;
                InputOutcome::DiscardStarted(id)
            }

            TableInput::Drag(id, to) => {
                let Some(card) = self.cards.get_mut(&id) else {
                    return InputOutcome::Ignored;
                };
                if card.is_animating() || !card.is_draggable() {
                    return InputOutcome::Ignored;
                }
                card.position = to;
                InputOutcome::Dragged(id)
            }
        }
    }

    /// Advance every card's animation by one frame.
    ///
    /// Call once per rendered frame; playback speed follows the caller's
    /// frame rate. Returns the transitions that completed this frame.
    pub fn tick(&mut self) -> SmallVec<[TableEvent; 4]> {
        let mut events = SmallVec::new();

        // Sorted for a deterministic event order regardless of map layout.
        let mut ids: Vec<CardId> = self.cards.keys().copied().collect();
        ids.sort_unstable();

        for id in ids {
            let Some(card) = self.cards.get_mut(&id) else {
                continue;
            };
            for event in card.tick() {
                events.push(match event {
                    CardEvent::FaceChanged(face) => TableEvent::FaceChanged(id, face),
                    CardEvent::MoveFinished => TableEvent::MoveFinished(id),
                    CardEvent::FlipFinished => TableEvent::FlipFinished(id),
                });
            }
        }

        self.frame += 1;
        events
    }

    /// Run `frames` ticks, discarding events. Convenience for settling
    /// animations.
    pub fn run(&mut self, frames: u32) {
        for _ in 0..frames {
            self.tick();
        }
    }

    fn spawn_card(&mut self, record: CardRecord, target: Position) -> CardId {
        let id = CardId::new(self.next_card_id);
        self.next_card_id += 1;

        let rotation = self.rng.symmetric(ROTATION_JITTER);
        let card = TableCard::deal(id, record, self.layout.deck_position(), target, rotation);

        self.cards.insert(id, card);
        self.piles.add_in_play(id);
        id
    }

    // === Queries ===

    /// The table layout.
    #[must_use]
    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    /// The color palette renderers should use.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Look up a dealt card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&TableCard> {
        self.cards.get(&id)
    }

    /// All dealt cards, in id order.
    pub fn cards(&self) -> impl Iterator<Item = &TableCard> {
        let mut ids: Vec<CardId> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().filter_map(|id| self.cards.get(&id))
    }

    /// Number of dealt cards (in play and discarded).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Check if a card has an active animation.
    #[must_use]
    pub fn is_animating(&self, id: CardId) -> bool {
        self.cards.get(&id).is_some_and(TableCard::is_animating)
    }

    /// Undealt records remaining in the deck.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.pool.remaining()
    }

    /// Cards discarded so far.
    #[must_use]
    pub fn discard_count(&self) -> u32 {
        self.discard_count
    }

    /// The discard stack, bottom to top.
    #[must_use]
    pub fn discard_order(&self) -> &[CardId] {
        self.piles.discard_order()
    }

    /// Cards still in play (unordered).
    pub fn in_play(&self) -> impl Iterator<Item = CardId> + '_ {
        self.piles.in_play()
    }

    /// Frames ticked since the session started.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Every handled input with its outcome, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<InputRecord> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::MOVE_FRAMES;

    fn records(n: usize) -> Vec<CardRecord> {
        (0..n)
            .map(|i| CardRecord::new(i.to_string(), format!("front {i}"), format!("back {i}"), ""))
            .collect()
    }

    fn table(n: usize) -> Table {
        TableBuilder::new(records(n)).build(42)
    }

    #[test]
    fn test_opening_deals() {
        let table = table(10);

        assert_eq!(table.card_count(), 2);
        assert_eq!(table.deck_remaining(), 8);

        // Opening cards come in animating from the deck position.
        for card in table.cards() {
            assert!(card.is_animating());
            assert_eq!(card.position, table.layout().deck_position());
        }
    }

    #[test]
    fn test_opening_deals_short_pool() {
        let table = table(1);

        assert_eq!(table.card_count(), 1);
        assert_eq!(table.deck_remaining(), 0);
    }

    #[test]
    fn test_deal_from_deck() {
        let mut table = table(5);
        table.run(MOVE_FRAMES);

        let outcome = table.handle(TableInput::PressDeck);
        let InputOutcome::Dealt(id) = outcome else {
            panic!("expected a deal, got {outcome:?}");
        };

        assert_eq!(table.card_count(), 3);
        assert_eq!(table.deck_remaining(), 2);
        assert!(table.is_animating(id));
    }

    #[test]
    fn test_deal_exhaustion() {
        let mut table = table(3); // 2 opening deals + 1 in the pool
        table.run(MOVE_FRAMES);

        assert!(matches!(
            table.handle(TableInput::PressDeck),
            InputOutcome::Dealt(_)
        ));
        assert_eq!(table.deck_remaining(), 0);

        // Exhausted: no new card, no panic.
        assert_eq!(table.handle(TableInput::PressDeck), InputOutcome::Ignored);
        assert_eq!(table.card_count(), 3);
    }

    #[test]
    fn test_press_raises_above_deals() {
        let mut table = table(10);
        table.run(MOVE_FRAMES);

        let dealt = match table.handle(TableInput::PressDeck) {
            InputOutcome::Dealt(id) => id,
            other => panic!("unexpected {other:?}"),
        };
        let dealt_z = table.card(dealt).unwrap().z_index;

        let first = table.cards().next().unwrap().id();
        table.handle(TableInput::PressCard(first));
        let raised_z = table.card(first).unwrap().z_index;

        assert!(raised_z > dealt_z);
    }

    #[test]
    fn test_press_unknown_card_ignored() {
        let mut table = table(5);
        assert_eq!(
            table.handle(TableInput::PressCard(CardId::new(99))),
            InputOutcome::Ignored
        );
    }

    #[test]
    fn test_flip_guarded_during_deal_in() {
        let mut table = table(5);
        let id = table.cards().next().unwrap().id();

        // Still dealing in: flip is dropped.
        assert!(table.is_animating(id));
        assert_eq!(table.handle(TableInput::Flip(id)), InputOutcome::Ignored);

        table.run(MOVE_FRAMES);
        assert_eq!(
            table.handle(TableInput::Flip(id)),
            InputOutcome::FlipStarted(id)
        );
    }

    #[test]
    fn test_discard_stacks_with_offset() {
        let mut table = table(5);
        table.run(MOVE_FRAMES);

        let ids: Vec<CardId> = table.cards().map(TableCard::id).collect();

        assert_eq!(
            table.handle(TableInput::Discard(ids[0])),
            InputOutcome::DiscardStarted(ids[0])
        );
        table.run(MOVE_FRAMES);
        assert_eq!(
            table.handle(TableInput::Discard(ids[1])),
            InputOutcome::DiscardStarted(ids[1])
        );
        table.run(MOVE_FRAMES);

        let first = table.card(ids[0]).unwrap().position;
        let second = table.card(ids[1]).unwrap().position;

        assert_eq!(first, table.layout().discard_target(0));
        assert_eq!(second, table.layout().discard_target(1));
        assert_eq!(second.y, first.y - super::super::layout::CARD_STACK_OFFSET);
        assert_eq!(table.discard_count(), 2);
        assert_eq!(table.discard_order(), &[ids[0], ids[1]]);
    }

    #[test]
    fn test_discard_twice_ignored() {
        let mut table = table(5);
        table.run(MOVE_FRAMES);

        let id = table.cards().next().unwrap().id();
        table.handle(TableInput::Discard(id));
        table.run(MOVE_FRAMES);

        assert_eq!(table.handle(TableInput::Discard(id)), InputOutcome::Ignored);
        assert_eq!(table.discard_count(), 1);
    }

    #[test]
    fn test_drag_repositions_idle_card() {
        let mut table = table(5);
        table.run(MOVE_FRAMES);

        let id = table.cards().next().unwrap().id();
        let to = Position::new(321.0, 99.0);

        assert_eq!(
            table.handle(TableInput::Drag(id, to)),
            InputOutcome::Dragged(id)
        );
        assert_eq!(table.card(id).unwrap().position, to);
    }

    #[test]
    fn test_drag_ignored_while_animating_and_after_discard() {
        let mut table = table(5);
        let id = table.cards().next().unwrap().id();

        // Dealing in.
        assert_eq!(
            table.handle(TableInput::Drag(id, Position::new(0.0, 0.0))),
            InputOutcome::Ignored
        );

        table.run(MOVE_FRAMES);
        table.handle(TableInput::Discard(id));
        table.run(MOVE_FRAMES);

        // Discarded cards are no longer draggable.
        assert_eq!(
            table.handle(TableInput::Drag(id, Position::new(0.0, 0.0))),
            InputOutcome::Ignored
        );
    }

    #[test]
    fn test_history_records_everything() {
        let mut table = table(5);
        table.run(MOVE_FRAMES);

        let id = table.cards().next().unwrap().id();
        table.handle(TableInput::Flip(id));
        table.handle(TableInput::Flip(id)); // ignored, mid-flip

        let history = table.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].outcome, InputOutcome::FlipStarted(id));
        assert_eq!(history[1].outcome, InputOutcome::Ignored);
        assert_eq!(history[0].frame, u64::from(MOVE_FRAMES));
    }

    #[test]
    fn test_frame_counter_advances() {
        let mut table = table(5);
        assert_eq!(table.frame(), 0);

        table.run(10);
        assert_eq!(table.frame(), 10);
    }

    #[test]
    fn test_determinism_same_seed_same_table() {
        let build = || {
            let mut t = TableBuilder::new(records(8)).build(7);
            t.run(MOVE_FRAMES);
            t.handle(TableInput::PressDeck);
            t.run(30);
            t
        };

        let a = build();
        let b = build();

        assert_eq!(a.card_count(), b.card_count());
        for (ca, cb) in a.cards().zip(b.cards()) {
            assert_eq!(ca.id(), cb.id());
            assert_eq!(ca.position, cb.position);
            assert_eq!(ca.rotation, cb.rotation);
            assert_eq!(ca.record(), cb.record());
        }
    }

    #[test]
    fn test_two_tables_do_not_interfere() {
        let mut a = table(5);
        let mut b = table(5);
        a.run(MOVE_FRAMES);
        b.run(MOVE_FRAMES);

        let id = a.cards().next().unwrap().id();
        a.handle(TableInput::Discard(id));

        assert_eq!(a.discard_count(), 1);
        assert_eq!(b.discard_count(), 0);
    }
}
