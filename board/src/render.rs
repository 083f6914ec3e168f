//! Rendering plan: a backend-agnostic display list for one frame.
//!
//! The board is drawn in world space under a single transform (translate by
//! the pan offset, then scale by the zoom), exactly like a 2D canvas context
//! after `translate` + `scale`. Evidence cards are host-drawn overlays, so
//! the plan carries their screen placement instead of draw commands.
//!
//! Draw order: lines, then the preview line, then pins with their labels.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{
    DEFAULT_LINE_WIDTH, PIN_LABEL_COLOR, PIN_LABEL_OFFSET, PIN_LABEL_SIZE, PIN_OUTLINE, PIN_RADIUS,
    SELECTED_PIN_FILL, SELECTED_PIN_OUTLINE,
};
use crate::evidence::EvidenceId;
use crate::input::UiState;
use crate::scene::{LineStyle, PinId, Scene, Stroke};
use crate::viewport::{Point, Viewport};

/// Pin outline width in world units.
const PIN_OUTLINE_WIDTH: f64 = 2.0;

const DASHED: [f64; 2] = [10.0, 5.0];
const DOTTED: [f64; 2] = [2.0, 3.0];

/// Dash pattern for a line style; empty means solid.
#[must_use]
pub fn dash_pattern(style: LineStyle) -> &'static [f64] {
    match style {
        LineStyle::Solid => &[],
        LineStyle::Dashed => &DASHED,
        LineStyle::Dotted => &DOTTED,
    }
}

/// One drawing primitive, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Segment { from: Point, to: Point, color: String, width: f64, dash: &'static [f64] },
    Circle { center: Point, radius: f64, fill: String, outline: String, outline_width: f64 },
    Text { at: Point, text: String, color: String, size: f64 },
}

/// Where the host should place an evidence card's element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub id: EvidenceId,
    /// Top-left corner in screen pixels.
    pub screen: Point,
    /// CSS scale to apply to the element.
    pub scale: f64,
    pub selected: bool,
}

/// The armed line shown between its start pin and the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub from: PinId,
    pub to: Point,
    pub stroke: Stroke,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Screen translation applied before `scale`.
    pub translate: Point,
    pub scale: f64,
    pub commands: Vec<DrawCmd>,
    pub cards: Vec<CardPlacement>,
}

/// Build the frame for the current scene and view.
#[must_use]
pub fn plan(scene: &Scene, viewport: &Viewport, ui: &UiState, preview: Option<&Preview>) -> Frame {
    let mut commands = Vec::with_capacity(scene.lines().len() + scene.pins().len() * 2 + 1);

    for line in scene.lines() {
        if let Some((from, to)) = scene.endpoints(line) {
            commands.push(DrawCmd::Segment {
                from,
                to,
                color: line.color.clone(),
                width: line.width,
                dash: dash_pattern(line.style),
            });
        }
    }

    if let Some(p) = preview {
        if let Some(start) = scene.pin(p.from) {
            commands.push(DrawCmd::Segment {
                from: start.position(),
                to: p.to,
                color: p.stroke.color.clone(),
                width: DEFAULT_LINE_WIDTH,
                dash: dash_pattern(p.stroke.style),
            });
        }
    }

    for pin in scene.pins() {
        let selected = ui.selected_pin == Some(pin.id);
        let (fill, outline) =
            if selected { (SELECTED_PIN_FILL, SELECTED_PIN_OUTLINE) } else { (pin.color.as_str(), PIN_OUTLINE) };
        commands.push(DrawCmd::Circle {
            center: pin.position(),
            radius: PIN_RADIUS,
            fill: fill.to_string(),
            outline: outline.to_string(),
            outline_width: PIN_OUTLINE_WIDTH,
        });
        if !pin.label.is_empty() {
            commands.push(DrawCmd::Text {
                at: Point::new(pin.x + PIN_LABEL_OFFSET.0, pin.y + PIN_LABEL_OFFSET.1),
                text: pin.label.clone(),
                color: PIN_LABEL_COLOR.to_string(),
                size: PIN_LABEL_SIZE,
            });
        }
    }

    let cards = scene
        .evidence()
        .iter()
        .map(|card| CardPlacement {
            id: card.id,
            screen: viewport.screen_from_world(card.position()),
            scale: viewport.zoom,
            selected: ui.selected_evidence == Some(card.id),
        })
        .collect();

    Frame { translate: Point::new(viewport.offset_x, viewport.offset_y), scale: viewport.zoom, commands, cards }
}
