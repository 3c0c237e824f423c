//! The table card: the ephemeral visual entity for one dealt record.
//!
//! A `TableCard` owns everything a renderer needs to draw it — position,
//! rotation, scale, face, z-order — plus its per-card animation state
//! machine. The machine has four states: dealing in (a movement), idle,
//! flipping, and discarding (another movement). At most one animation is
//! active at a time; `start_flip` and `start_move` are no-ops while one is,
//! which makes every transition single-flight.
//!
//! All of this state is re-derived each session and owned by the table; a
//! card never outlives the table it was dealt on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::face::CardFace;
use crate::anim::{FlipAnimation, MoveAnimation};
use crate::content::CardRecord;
use crate::geom::{Position, Scale};

/// Card width in scene pixels.
pub const CARD_WIDTH: f32 = 300.0;

/// Card height in scene pixels.
pub const CARD_HEIGHT: f32 = 200.0;

/// Unique identifier for a dealt card within one table session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Something a card did during one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEvent {
    /// The flip passed its edge-on frame and the displayed face changed.
    FaceChanged(CardFace),
    /// A movement (deal-in or discard) reached its target.
    MoveFinished,
    /// A flip completed and the card is idle again.
    FlipFinished,
}

/// A card in play on the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableCard {
    id: CardId,
    record: CardRecord,

    /// Top-left corner in scene coordinates.
    pub position: Position,

    /// Rotation in radians; a small jitter rolled at deal time, negated on
    /// every face swap.
    pub rotation: f32,

    /// Render scale. The flip animation drives `y`.
    pub scale: Scale,

    face: CardFace,

    /// Stacking order; higher draws on top.
    pub z_index: u32,

    draggable: bool,

    movement: Option<MoveAnimation>,
    flip: Option<FlipAnimation>,
}

impl TableCard {
    /// Create a card dealing in from `from` towards `to`.
    ///
    /// The card starts mid-animation: it is not idle until the deal-in
    /// movement completes.
    #[must_use]
    pub fn deal(id: CardId, record: CardRecord, from: Position, to: Position, rotation: f32) -> Self {
        Self {
            id,
            record,
            position: from,
            rotation,
            scale: Scale::UNIT,
            face: CardFace::SideA,
            z_index: 0,
            draggable: true,
            movement: Some(MoveAnimation::new(from, to)),
            flip: None,
        }
    }

    /// This card's ID.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The record this card was dealt from.
    #[must_use]
    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    /// The face currently displayed.
    #[must_use]
    pub fn face(&self) -> CardFace {
        self.face
    }

    /// Text for the displayed face.
    #[must_use]
    pub fn front_text(&self) -> &str {
        match self.face {
            CardFace::SideA => &self.record.side_a,
            CardFace::SideB => &self.record.side_b,
        }
    }

    /// Corner label: `#<id>` plus the face suffix, e.g. `#12a`.
    #[must_use]
    pub fn face_label(&self) -> String {
        format!("#{}{}", self.record.id, self.face.suffix())
    }

    /// Check whether any animation is active.
    ///
    /// While true, flip and discard requests are ignored.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.movement.is_some() || self.flip.is_some()
    }

    /// Check whether the card can still be dragged.
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Permanently disable dragging (done when the card is discarded).
    pub fn stop_dragging(&mut self) {
        self.draggable = false;
    }

    /// Start a flip.
    ///
    /// Returns false (and changes nothing) if an animation is active.
    pub fn start_flip(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.flip = Some(FlipAnimation::new(self.position));
        true
    }

    /// Start a movement from the current position to `end`.
    ///
    /// Returns false (and changes nothing) if an animation is active.
    pub fn start_move(&mut self, end: Position) -> bool {
        if self.is_animating() {
            return false;
        }
        self.movement = Some(MoveAnimation::new(self.position, end));
        true
    }

    /// Advance the active animation by one frame.
    ///
    /// Idle cards do nothing. Returns the events this frame produced.
    pub fn tick(&mut self) -> SmallVec<[CardEvent; 2]> {
        let mut events = SmallVec::new();

        if let Some(flip) = &mut self.flip {
            let origin = flip.origin();
            let step = flip.advance(CARD_HEIGHT);

            self.scale.y = step.y_scale;
            self.position.y += step.y_shift;

            if step.swap_face {
                self.face = self.face.toggled();
                self.rotation = -self.rotation;
                events.push(CardEvent::FaceChanged(self.face));
            }

            if step.done {
                // Counter done: snap scale and position so flips never drift.
                self.scale = Scale::UNIT;
                self.position = origin;
                self.flip = None;
                events.push(CardEvent::FlipFinished);
            }
        } else if let Some(movement) = &mut self.movement {
            let (position, done) = movement.advance();
            self.position = position;

            if done {
                self.movement = None;
                events.push(CardEvent::MoveFinished);
            }
        }

        events
    }
}
