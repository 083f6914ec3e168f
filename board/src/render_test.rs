#![allow(clippy::float_cmp)]

use super::*;
use crate::evidence::EvidenceDraft;

fn circles(frame: &Frame) -> Vec<&DrawCmd> {
    frame.commands.iter().filter(|c| matches!(c, DrawCmd::Circle { .. })).collect()
}

#[test]
fn empty_scene_has_identity_transform() {
    let frame = plan(&Scene::new(), &Viewport::default(), &UiState::default(), None);
    assert!(frame.commands.is_empty());
    assert!(frame.cards.is_empty());
    assert_eq!(frame.translate, Point::new(0.0, 0.0));
    assert_eq!(frame.scale, 1.0);
}

#[test]
fn lines_draw_before_pins_with_dash() {
    let mut scene = Scene::new();
    let a = scene.add_pin(Point::new(0.0, 0.0));
    let b = scene.add_pin(Point::new(50.0, 0.0));
    let stroke = Stroke { color: "#00aa00".into(), style: LineStyle::Dashed };
    scene.add_line(a, b, &stroke).unwrap();

    let frame = plan(&scene, &Viewport::default(), &UiState::default(), None);
    assert_eq!(
        frame.commands[0],
        DrawCmd::Segment {
            from: Point::new(0.0, 0.0),
            to: Point::new(50.0, 0.0),
            color: "#00aa00".into(),
            width: 2.0,
            dash: &[10.0, 5.0],
        }
    );
    assert_eq!(circles(&frame).len(), 2);
}

#[test]
fn dash_patterns() {
    assert!(dash_pattern(LineStyle::Solid).is_empty());
    assert_eq!(dash_pattern(LineStyle::Dotted), &[2.0, 3.0]);
}

#[test]
fn selected_pin_is_highlighted() {
    let mut scene = Scene::new();
    let a = scene.add_pin(Point::new(0.0, 0.0));
    scene.add_pin(Point::new(40.0, 0.0));
    let ui = UiState { selected_pin: Some(a), ..UiState::default() };

    let frame = plan(&scene, &Viewport::default(), &ui, None);
    let pins = circles(&frame);
    assert_eq!(
        pins[0],
        &DrawCmd::Circle {
            center: Point::new(0.0, 0.0),
            radius: 8.0,
            fill: "#ff4444".into(),
            outline: "#fff".into(),
            outline_width: 2.0,
        }
    );
    assert!(matches!(pins[1], DrawCmd::Circle { fill, outline, .. } if fill == "#d4af37" && outline == "#333"));
}

#[test]
fn labels_are_offset_from_pin() {
    let mut scene = Scene::new();
    let a = scene.add_pin(Point::new(10.0, 20.0));
    scene.set_pin_label(a, "Suspect");

    let frame = plan(&scene, &Viewport::default(), &UiState::default(), None);
    assert_eq!(
        frame.commands.last(),
        Some(&DrawCmd::Text {
            at: Point::new(22.0, 24.0),
            text: "Suspect".into(),
            color: "#000".into(),
            size: 12.0,
        })
    );
}

#[test]
fn preview_line_uses_current_stroke() {
    let mut scene = Scene::new();
    let a = scene.add_pin(Point::new(0.0, 0.0));
    let preview =
        Preview { from: a, to: Point::new(30.0, 40.0), stroke: Stroke { color: "#123456".into(), style: LineStyle::Solid } };

    let frame = plan(&scene, &Viewport::default(), &UiState::default(), Some(&preview));
    assert!(matches!(
        &frame.commands[0],
        DrawCmd::Segment { to, color, dash, .. } if *to == Point::new(30.0, 40.0) && color == "#123456" && dash.is_empty()
    ));
}

#[test]
fn preview_from_missing_pin_is_skipped() {
    let preview = Preview { from: uuid::Uuid::new_v4(), to: Point::new(1.0, 1.0), stroke: Stroke::default() };
    let frame = plan(&Scene::new(), &Viewport::default(), &UiState::default(), Some(&preview));
    assert!(frame.commands.is_empty());
}

#[test]
fn cards_are_placed_in_screen_space() {
    let mut scene = Scene::new();
    let draft = EvidenceDraft { title: "Map".into(), ..EvidenceDraft::default() };
    let id = scene.add_evidence(draft, Point::new(100.0, 50.0)).unwrap();
    let viewport = Viewport { zoom: 2.0, offset_x: 10.0, offset_y: -20.0 };
    let ui = UiState { selected_evidence: Some(id), ..UiState::default() };

    let frame = plan(&scene, &viewport, &ui, None);
    assert_eq!(frame.cards, vec![CardPlacement { id, screen: Point::new(210.0, 80.0), scale: 2.0, selected: true }]);
    assert_eq!(frame.translate, Point::new(10.0, -20.0));
    assert_eq!(frame.scale, 2.0);
}
