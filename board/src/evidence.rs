//! Evidence cards and the create/edit form state that produces them.
//!
//! A card is a free-floating note positioned in world space alongside pins.
//! The form is shared between "add" and "edit": opening it for an existing
//! card records that card's id in `editing`, and submitting yields a validated
//! [`EvidenceDraft`] that the engine applies as either an insert or an update.

#[cfg(test)]
#[path = "evidence_test.rs"]
mod evidence_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scene::SceneError;
use crate::viewport::Point;

/// Unique identifier for an evidence card.
pub type EvidenceId = Uuid;

/// What sort of evidence a card represents.
///
/// The three well-known kinds get their own variants; anything else a saved
/// file carries is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EvidenceKind {
    #[default]
    Document,
    Photo,
    Note,
    Other(String),
}

impl EvidenceKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Document => "document",
            Self::Photo => "photo",
            Self::Note => "note",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a stored kind name. Empty strings map to the default kind.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "document" => Self::Document,
            "photo" => Self::Photo,
            "note" => Self::Note,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for EvidenceKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EvidenceKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// How urgent a piece of evidence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a stored priority name; unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// An evidence card on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Evidence {
    pub id: EvidenceId,
    /// Left edge in world coordinates.
    pub x: f64,
    /// Top edge in world coordinates.
    pub y: f64,
    pub title: String,
    pub description: String,
    pub kind: EvidenceKind,
    pub priority: Priority,
    /// Embedded image as a data URL, if one was attached.
    pub image: Option<String>,
}

impl Evidence {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Secondary line shown in the evidence list, e.g. `"photo - high priority"`.
    #[must_use]
    pub fn list_caption(&self) -> String {
        format!("{} - {} priority", self.kind.as_str(), self.priority.as_str())
    }
}

/// The editable text fields of a card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvidenceDraft {
    pub title: String,
    pub description: String,
    pub kind: EvidenceKind,
    pub priority: Priority,
}

impl EvidenceDraft {
    /// Check the only hard rule on cards: the title must contain something
    /// other than whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EmptyTitle`] for blank titles.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.title.trim().is_empty() {
            return Err(SceneError::EmptyTitle);
        }
        Ok(())
    }
}

/// State of the evidence form while it is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvidenceForm {
    pub open: bool,
    /// Card being edited; `None` means the form creates a new card.
    pub editing: Option<EvidenceId>,
    /// World position chosen from the context menu for a new card.
    pub position: Option<Point>,
    pub draft: EvidenceDraft,
    /// An image file was chosen; the host reads it after the form is submitted.
    pub wants_image: bool,
}

impl EvidenceForm {
    /// Open the form for a new card of `kind`, clearing previous input.
    pub fn open_new(&mut self, kind: EvidenceKind, position: Option<Point>) {
        *self = Self {
            open: true,
            editing: None,
            position,
            draft: EvidenceDraft { kind, ..EvidenceDraft::default() },
            wants_image: false,
        };
    }

    /// Open the form pre-filled from `card`, remembering its id.
    pub fn open_edit(&mut self, card: &Evidence) {
        *self = Self {
            open: true,
            editing: Some(card.id),
            position: None,
            draft: EvidenceDraft {
                title: card.title.clone(),
                description: card.description.clone(),
                kind: card.kind.clone(),
                priority: card.priority,
            },
            wants_image: false,
        };
    }

    /// Close the form and forget the card being edited. Typed input is kept
    /// until the next `open_new`.
    pub fn close(&mut self) {
        self.open = false;
        self.editing = None;
        self.position = None;
        self.wants_image = false;
    }
}
