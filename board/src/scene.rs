//! Scene model: pins, the lines strung between them, and evidence cards.
//!
//! This module owns the three collections that make up a board and guards
//! the one structural invariant between them: a line only ever refers to pins
//! that exist. Removing a pin removes its lines in the same call, and bulk
//! loads drop any line whose endpoints cannot be resolved.
//!
//! Collections keep insertion order. Renderers iterate them in that order and
//! hit-testing uses it as the tie-break.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::consts::{DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH, DEFAULT_PIN_COLOR};
use crate::evidence::{Evidence, EvidenceDraft, EvidenceId};
use crate::viewport::Point;

/// Unique identifier for a pin.
pub type PinId = Uuid;

/// Unique identifier for a line.
pub type LineId = Uuid;

/// Errors raised by scene mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("a line cannot start and end at the same pin ({0})")]
    SelfLoop(PinId),
    #[error("pin not found: {0}")]
    MissingPin(PinId),
    #[error("Please enter a title for the evidence.")]
    EmptyTitle,
    #[error("evidence not found: {0}")]
    MissingEvidence(EvidenceId),
}

/// Dash style of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }

    /// Parse a stored style name. Unknown names draw as solid.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "dashed" => Self::Dashed,
            "dotted" => Self::Dotted,
            _ => Self::Solid,
        }
    }
}

/// Color and dash style applied to lines as they are created.
///
/// Lines copy these values, so changing the session's stroke afterwards does
/// not restyle existing lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub style: LineStyle,
}

impl Default for Stroke {
    fn default() -> Self {
        Self { color: DEFAULT_LINE_COLOR.to_string(), style: LineStyle::Solid }
    }
}

/// A labeled point on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub id: PinId,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: String,
}

impl Pin {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A styled connection between two distinct pins.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: LineId,
    pub start: PinId,
    pub end: PinId,
    pub color: String,
    pub style: LineStyle,
    pub width: f64,
}

impl Line {
    /// Whether either end of this line is `pin`.
    #[must_use]
    pub fn touches(&self, pin: PinId) -> bool {
        self.start == pin || self.end == pin
    }
}

/// A pin removed from the scene together with the lines that went with it.
#[derive(Debug, Clone)]
pub struct RemovedPin {
    pub pin: Pin,
    pub lines: Vec<Line>,
}

/// In-memory store of everything on the board.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pins: Vec<Pin>,
    lines: Vec<Line>,
    evidence: Vec<Evidence>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    #[must_use]
    pub fn pin(&self, id: PinId) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn card(&self, id: EvidenceId) -> Option<&Evidence> {
        self.evidence.iter().find(|e| e.id == id)
    }

    /// World positions of both ends of `line`, if both pins exist.
    #[must_use]
    pub fn endpoints(&self, line: &Line) -> Option<(Point, Point)> {
        Some((self.pin(line.start)?.position(), self.pin(line.end)?.position()))
    }

    /// Returns `true` when there is nothing worth saving: no pins and no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty() && self.evidence.is_empty()
    }

    // --- Pins ---

    /// Place a new pin at `world` with an empty label and the default color.
    pub fn add_pin(&mut self, world: Point) -> PinId {
        let id = Uuid::new_v4();
        self.pins.push(Pin {
            id,
            x: world.x,
            y: world.y,
            label: String::new(),
            color: DEFAULT_PIN_COLOR.to_string(),
        });
        id
    }

    /// Move a pin. Lines follow because they reference the pin by id.
    /// Returns false if the pin doesn't exist.
    pub fn move_pin(&mut self, id: PinId, world: Point) -> bool {
        let Some(pin) = self.pins.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        pin.x = world.x;
        pin.y = world.y;
        true
    }

    /// Replace a pin's label. Returns false if the pin doesn't exist.
    pub fn set_pin_label(&mut self, id: PinId, label: &str) -> bool {
        let Some(pin) = self.pins.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        pin.label = label.to_string();
        true
    }

    /// Remove a pin and every line attached to it.
    pub fn remove_pin(&mut self, id: PinId) -> Option<RemovedPin> {
        let idx = self.pins.iter().position(|p| p.id == id)?;
        let pin = self.pins.remove(idx);
        let (lines, kept): (Vec<Line>, Vec<Line>) = self.lines.drain(..).partition(|l| l.touches(id));
        self.lines = kept;
        Some(RemovedPin { pin, lines })
    }

    // --- Lines ---

    /// Connect two pins using the given stroke.
    ///
    /// Duplicate lines between the same pair are permitted.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::SelfLoop`] when `start == end`, or
    /// [`SceneError::MissingPin`] when either pin doesn't exist.
    pub fn add_line(&mut self, start: PinId, end: PinId, stroke: &Stroke) -> Result<LineId, SceneError> {
        if start == end {
            return Err(SceneError::SelfLoop(start));
        }
        for id in [start, end] {
            if self.pin(id).is_none() {
                return Err(SceneError::MissingPin(id));
            }
        }
        let id = Uuid::new_v4();
        self.lines.push(Line {
            id,
            start,
            end,
            color: stroke.color.clone(),
            style: stroke.style,
            width: DEFAULT_LINE_WIDTH,
        });
        Ok(id)
    }

    /// Remove a single line; its pins are untouched.
    pub fn remove_line(&mut self, id: LineId) -> Option<Line> {
        let idx = self.lines.iter().position(|l| l.id == id)?;
        Some(self.lines.remove(idx))
    }

    // --- Evidence ---

    /// Add a card at `world` built from `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EmptyTitle`] if the draft's title is blank; the
    /// scene is left unchanged.
    pub fn add_evidence(&mut self, draft: EvidenceDraft, world: Point) -> Result<EvidenceId, SceneError> {
        draft.validate()?;
        let id = Uuid::new_v4();
        self.evidence.push(Evidence {
            id,
            x: world.x,
            y: world.y,
            title: draft.title,
            description: draft.description,
            kind: draft.kind,
            priority: draft.priority,
            image: None,
        });
        Ok(id)
    }

    /// Overwrite a card's text fields. Position and image are kept.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EmptyTitle`] for a blank title, or
    /// [`SceneError::MissingEvidence`] if the card doesn't exist.
    pub fn update_evidence(&mut self, id: EvidenceId, draft: EvidenceDraft) -> Result<(), SceneError> {
        draft.validate()?;
        let card = self.card_mut(id).ok_or(SceneError::MissingEvidence(id))?;
        card.title = draft.title;
        card.description = draft.description;
        card.kind = draft.kind;
        card.priority = draft.priority;
        Ok(())
    }

    /// Move a card. Returns false if the card doesn't exist.
    pub fn move_evidence(&mut self, id: EvidenceId, world: Point) -> bool {
        let Some(card) = self.card_mut(id) else {
            return false;
        };
        card.x = world.x;
        card.y = world.y;
        true
    }

    /// Attach or clear a card's image. Returns false if the card doesn't exist.
    pub fn set_evidence_image(&mut self, id: EvidenceId, image: Option<String>) -> bool {
        let Some(card) = self.card_mut(id) else {
            return false;
        };
        card.image = image;
        true
    }

    pub fn remove_evidence(&mut self, id: EvidenceId) -> Option<Evidence> {
        let idx = self.evidence.iter().position(|e| e.id == id)?;
        Some(self.evidence.remove(idx))
    }

    // --- Bulk ---

    /// Remove everything.
    pub fn clear(&mut self) {
        self.pins.clear();
        self.lines.clear();
        self.evidence.clear();
    }

    /// Replace the whole scene. Lines that loop back to their own pin or
    /// reference a pin not in `pins` are dropped. Returns the number dropped.
    pub fn replace(&mut self, pins: Vec<Pin>, lines: Vec<Line>, evidence: Vec<Evidence>) -> usize {
        self.pins = pins;
        self.evidence = evidence;
        self.lines.clear();
        let mut dropped = 0;
        for line in lines {
            if line.start == line.end || self.pin(line.start).is_none() || self.pin(line.end).is_none() {
                warn!(line = %line.id, start = %line.start, end = %line.end, "dropping line with unresolved endpoints");
                dropped += 1;
                continue;
            }
            self.lines.push(line);
        }
        dropped
    }

    fn card_mut(&mut self, id: EvidenceId) -> Option<&mut Evidence> {
        self.evidence.iter_mut().find(|e| e.id == id)
    }
}
