//! Input model: edit modes, modifier keys, mouse buttons, and the gesture state machine.
//!
//! This module defines the types consumed by the editor engine. `Mode` and
//! `Modifiers` capture the user's intent at the time of a pointer event.
//! `InputState` is the active gesture, carrying everything needed to tell a
//! click from a drag and to apply incremental deltas on pointer-move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::evidence::EvidenceId;
use crate::scene::PinId;
use crate::viewport::Point;

/// What a primary click on the board does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Clicks place pins and string lines between them (default).
    #[default]
    Drawing,
    /// Clicks delete the pin or line under the cursor.
    Delete,
}

impl Mode {
    /// Status bar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Drawing => "Drawing Mode",
            Self::Delete => "Delete Mode",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Drawing => Self::Delete,
            Self::Delete => Self::Drawing,
        }
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key as reported by the host (e.g. `"Delete"`, `"Escape"`, `"d"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Current click behavior.
    pub mode: Mode,
    /// Highlighted pin; also the target of the Delete key.
    pub selected_pin: Option<PinId>,
    /// Highlighted evidence card.
    pub selected_evidence: Option<EvidenceId>,
    /// World position under the cursor at the last pointer move.
    pub hover_world: Option<Point>,
    /// World position where the context menu was opened, while it is open.
    pub context_world: Option<Point>,
}

/// The gesture currently being tracked.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The view is being dragged.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
        /// Armed line start to restore once the pan ends.
        resume: Option<PinId>,
    },
    /// A pin is armed as the start of a line, waiting for a click on another pin.
    DrawingLine {
        /// The armed pin.
        start: PinId,
        /// Screen position of the press while the button is still held. A move
        /// far enough from here turns the gesture into a drag.
        pressed_at: Option<Point>,
    },
    /// A pin follows the cursor.
    DraggingPin {
        id: PinId,
    },
    /// An evidence card follows the cursor.
    DraggingEvidence {
        id: EvidenceId,
        /// Screen position where the drag began.
        start_screen: Point,
        /// Card position at the start of the drag.
        orig_x: f64,
        orig_y: f64,
    },
}

impl InputState {
    /// The pin armed as a line start, if any.
    #[must_use]
    pub fn armed_pin(&self) -> Option<PinId> {
        match self {
            Self::DrawingLine { start, .. } => Some(*start),
            Self::Panning { resume, .. } => *resume,
            _ => None,
        }
    }
}
