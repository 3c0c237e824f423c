//! The card record: the four-field data unit behind every card.

use serde::{Deserialize, Serialize};

/// One row of card content.
///
/// Fields are assigned by column position from the source CSV:
/// `id, sideA, sideB, notes`. All fields are free-form strings; the engine
/// never interprets them beyond displaying one side at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRecord {
    /// Identifier shown in the corner of a rendered card (`#<id>a`).
    pub id: String,

    /// Front face text.
    pub side_a: String,

    /// Back face text.
    pub side_b: String,

    /// Free-form notes. Carried but not displayed on the card itself.
    pub notes: String,
}

impl CardRecord {
    /// Create a record from its four fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        side_a: impl Into<String>,
        side_b: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            side_a: side_a.into(),
            side_b: side_b.into(),
            notes: notes.into(),
        }
    }
}
