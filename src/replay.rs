//! Recorded editor sessions: one JSON event per line, fed through the
//! gesture controller exactly as a host would.
//!
//! Pins and cards are addressed by their index in the scene, because their
//! ids are generated fresh on every run.

use std::io::BufRead;

use board::engine::{Action, Editor};
use board::evidence::{EvidenceId, EvidenceKind, Priority};
use board::input::{Button, Key, Modifiers, WheelDelta};
use board::scene::LineStyle;
use board::viewport::Point;
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read events: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid event on line {line}: {source}")]
    Event {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

fn primary() -> Button {
    Button::Primary
}

/// One recorded input. Coordinates are screen pixels unless noted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default = "primary")]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default = "primary")]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Wheel {
        x: f64,
        y: f64,
        #[serde(default)]
        dx: f64,
        dy: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default)]
        text_input_focused: bool,
    },
    /// Press on a card; `index` is its position in the scene.
    EvidenceDown {
        index: usize,
        x: f64,
        y: f64,
    },
    EvidenceDoubleClick {
        index: usize,
    },
    ContextMenu {
        x: f64,
        y: f64,
    },
    ContextAddPin,
    ContextAddEvidence {
        kind: EvidenceKind,
    },
    /// Fill the open evidence form and submit it.
    SubmitForm {
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        priority: Priority,
    },
    CancelForm,
    SetLineColor {
        color: String,
    },
    SetLineStyle {
        style: LineStyle,
    },
    SetPinLabel {
        index: usize,
        label: String,
    },
    SetCaseName {
        name: String,
    },
    ToggleDeleteMode,
    Cancel,
    NewCase,
}

/// Counts reported after a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayStats {
    pub events: usize,
    pub skipped_lines: usize,
    pub notices: usize,
}

/// Parse one line of the event log. Blank lines and `#` comments yield
/// `None`.
///
/// # Errors
///
/// Returns the JSON error for lines that are not a known event.
pub fn parse_line(line: &str) -> Result<Option<ReplayEvent>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

/// Feed `event` to `editor` and settle the host requests it raises.
/// Returns the actions the editor produced.
pub fn apply(editor: &mut Editor, event: ReplayEvent) -> Vec<Action> {
    let actions = dispatch(editor, event);
    let mut settled = Vec::new();
    for action in &actions {
        match action {
            // There is no one to ask, so the recording's request wins.
            Action::ConfirmNewCase => settled.extend(editor.new_case(true)),
            Action::SaveRequested | Action::LoadRequested => debug!(?action, "host request ignored during replay"),
            _ => {}
        }
    }
    let mut all = actions;
    all.extend(settled);
    all
}

fn dispatch(editor: &mut Editor, event: ReplayEvent) -> Vec<Action> {
    match event {
        ReplayEvent::PointerDown { x, y, button, modifiers } => editor.on_pointer_down(Point::new(x, y), button, modifiers),
        ReplayEvent::PointerMove { x, y, modifiers } => editor.on_pointer_move(Point::new(x, y), modifiers),
        ReplayEvent::PointerUp { x, y, button, modifiers } => editor.on_pointer_up(Point::new(x, y), button, modifiers),
        ReplayEvent::Wheel { x, y, dx, dy, modifiers } => {
            editor.on_wheel(Point::new(x, y), WheelDelta { dx, dy }, modifiers)
        }
        ReplayEvent::Key { key, modifiers, text_input_focused } => {
            editor.on_key_down(&Key(key), modifiers, text_input_focused)
        }
        ReplayEvent::EvidenceDown { index, x, y } => match card_at(editor, index) {
            Some(id) => editor.on_evidence_pointer_down(id, Point::new(x, y), Button::Primary),
            None => Vec::new(),
        },
        ReplayEvent::EvidenceDoubleClick { index } => match card_at(editor, index) {
            Some(id) => editor.on_evidence_double_click(id),
            None => Vec::new(),
        },
        ReplayEvent::ContextMenu { x, y } => editor.on_context_menu(Point::new(x, y)),
        ReplayEvent::ContextAddPin => editor.context_add_pin(),
        ReplayEvent::ContextAddEvidence { kind } => editor.context_add_evidence(kind),
        ReplayEvent::SubmitForm { title, description, priority } => {
            if !editor.form.open {
                warn!(%title, "form submitted while closed; skipping");
                return Vec::new();
            }
            editor.form.draft.title = title;
            editor.form.draft.description = description;
            editor.form.draft.priority = priority;
            editor.submit_evidence_form()
        }
        ReplayEvent::CancelForm => editor.cancel_evidence_form(),
        ReplayEvent::SetLineColor { color } => {
            editor.set_line_color(&color);
            Vec::new()
        }
        ReplayEvent::SetLineStyle { style } => {
            editor.set_line_style(style);
            Vec::new()
        }
        ReplayEvent::SetPinLabel { index, label } => {
            let Some(id) = editor.scene.pins().get(index).map(|pin| pin.id) else {
                warn!(index, "no pin at index");
                return Vec::new();
            };
            editor.set_pin_label(id, &label)
        }
        ReplayEvent::SetCaseName { name } => {
            editor.case_name = name;
            Vec::new()
        }
        ReplayEvent::ToggleDeleteMode => editor.toggle_delete_mode(),
        ReplayEvent::Cancel => editor.cancel(),
        ReplayEvent::NewCase => editor.new_case(false),
    }
}

fn card_at(editor: &Editor, index: usize) -> Option<EvidenceId> {
    let id = editor.scene.evidence().get(index).map(|card| card.id);
    if id.is_none() {
        warn!(index, "no evidence card at index");
    }
    id
}

/// Replay every event in `reader` against `editor`.
///
/// # Errors
///
/// Stops at the first unreadable input or malformed event line.
pub fn run(editor: &mut Editor, reader: &mut dyn BufRead) -> Result<ReplayStats, ReplayError> {
    let mut stats = ReplayStats::default();
    let mut line = String::new();
    let mut number = 0_usize;
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        number += 1;
        let event = parse_line(&line).map_err(|source| ReplayError::Event { line: number, source })?;
        let Some(event) = event else {
            stats.skipped_lines += 1;
            continue;
        };
        for action in apply(editor, event) {
            if let Action::Notice(message) = action {
                info!(line = number, %message, "notice");
                stats.notices += 1;
            }
        }
        stats.events += 1;
    }
    info!(events = stats.events, skipped = stats.skipped_lines, "replay finished");
    Ok(stats)
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod tests;
