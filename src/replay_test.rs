use std::io::Cursor;

use board::evidence::{EvidenceKind, Priority};
use board::scene::LineStyle;

use super::*;

fn replay(script: &str) -> (Editor, ReplayStats) {
    let mut editor = Editor::default();
    let stats = run(&mut editor, &mut Cursor::new(script.as_bytes())).unwrap();
    (editor, stats)
}

fn click_line(x: f64, y: f64) -> String {
    format!(
        "{{\"type\":\"pointer_down\",\"x\":{x},\"y\":{y}}}\n{{\"type\":\"pointer_up\",\"x\":{x},\"y\":{y}}}\n"
    )
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_line_skips_blank_and_comment_lines() {
    assert_eq!(parse_line("   \n").unwrap(), None);
    assert_eq!(parse_line("# two pins and a line").unwrap(), None);
}

#[test]
fn parse_line_fills_defaults() {
    let event = parse_line(r#"{"type":"pointer_down","x":1,"y":2}"#).unwrap().unwrap();
    assert_eq!(
        event,
        ReplayEvent::PointerDown { x: 1.0, y: 2.0, button: Button::Primary, modifiers: Modifiers::default() }
    );

    let event = parse_line(r#"{"type":"submit_form","title":"Ledger"}"#).unwrap().unwrap();
    assert_eq!(
        event,
        ReplayEvent::SubmitForm { title: "Ledger".into(), description: String::new(), priority: Priority::Medium }
    );
}

#[test]
fn parse_line_reads_modifiers_and_kinds() {
    let event = parse_line(r#"{"type":"key","key":"n","modifiers":{"ctrl":true}}"#).unwrap().unwrap();
    let ReplayEvent::Key { key, modifiers, text_input_focused } = event else {
        panic!("expected a key event");
    };
    assert_eq!(key, "n");
    assert!(modifiers.ctrl);
    assert!(!text_input_focused);

    let event = parse_line(r#"{"type":"context_add_evidence","kind":"note"}"#).unwrap().unwrap();
    assert_eq!(event, ReplayEvent::ContextAddEvidence { kind: EvidenceKind::Note });
}

#[test]
fn parse_line_rejects_unknown_event() {
    assert!(parse_line(r#"{"type":"teleport"}"#).is_err());
}

#[test]
fn run_reports_the_bad_line_number() {
    let mut editor = Editor::default();
    let script = "# header\n{\"type\":\"cancel\"}\nnot json\n";
    let err = run(&mut editor, &mut Cursor::new(script.as_bytes())).unwrap_err();
    assert!(matches!(err, ReplayError::Event { line: 3, .. }));
}

// =============================================================
// Sessions
// =============================================================

#[test]
fn clicks_build_pins_and_a_line() {
    let script = [click_line(100.0, 100.0), click_line(300.0, 100.0), click_line(100.0, 100.0)].concat();
    let (editor, stats) = replay(&script);

    assert_eq!(stats.events, 6);
    assert_eq!(editor.scene.pins().len(), 2);
    assert_eq!(editor.scene.lines().len(), 1);
}

#[test]
fn line_style_applies_to_new_lines() {
    let script = [
        "{\"type\":\"set_line_style\",\"style\":\"dotted\"}\n".to_string(),
        "{\"type\":\"set_line_color\",\"color\":\"#0000ff\"}\n".to_string(),
        click_line(100.0, 100.0),
        click_line(300.0, 100.0),
        click_line(100.0, 100.0),
    ]
    .concat();
    let (editor, _) = replay(&script);

    let line = &editor.scene.lines()[0];
    assert_eq!(line.style, LineStyle::Dotted);
    assert_eq!(line.color, "#0000ff");
}

#[test]
fn context_menu_card_lands_at_menu_position() {
    let script = "\
{\"type\":\"context_menu\",\"x\":240,\"y\":180}
{\"type\":\"context_add_evidence\",\"kind\":\"note\"}
{\"type\":\"submit_form\",\"title\":\"Alibi\",\"priority\":\"high\"}
";
    let (editor, _) = replay(script);

    let card = &editor.scene.evidence()[0];
    assert_eq!(card.title, "Alibi");
    assert_eq!(card.kind, EvidenceKind::Note);
    assert_eq!(card.priority, Priority::High);
    assert_eq!((card.x, card.y), (240.0, 180.0));
    assert!(editor.scene.pins().is_empty());
}

#[test]
fn blank_title_counts_a_notice_and_keeps_form_open() {
    let script = "\
{\"type\":\"key\",\"key\":\"e\"}
{\"type\":\"submit_form\",\"title\":\"   \"}
";
    let (editor, stats) = replay(script);

    assert_eq!(stats.notices, 1);
    assert!(editor.form.open);
    assert!(editor.scene.evidence().is_empty());
}

#[test]
fn submit_without_open_form_is_skipped() {
    let (editor, stats) = replay("{\"type\":\"submit_form\",\"title\":\"Lost\"}\n");
    assert_eq!(stats.events, 1);
    assert!(editor.scene.evidence().is_empty());
}

#[test]
fn new_case_shortcut_is_confirmed() {
    let script = [
        click_line(100.0, 100.0),
        "{\"type\":\"key\",\"key\":\"n\",\"modifiers\":{\"ctrl\":true}}\n".to_string(),
    ]
    .concat();
    let (editor, _) = replay(&script);
    assert!(editor.scene.pins().is_empty());
}

#[test]
fn pin_label_and_case_name_by_index() {
    let script = [
        click_line(50.0, 50.0),
        "{\"type\":\"set_pin_label\",\"index\":0,\"label\":\"Docks\"}\n".to_string(),
        "{\"type\":\"set_pin_label\",\"index\":4,\"label\":\"Nowhere\"}\n".to_string(),
        "{\"type\":\"set_case_name\",\"name\":\"Harbor\"}\n".to_string(),
    ]
    .concat();
    let (editor, _) = replay(&script);

    assert_eq!(editor.scene.pins()[0].label, "Docks");
    assert_eq!(editor.case_name, "Harbor");
}

#[test]
fn wheel_zooms_and_card_drag_moves_card() {
    let script = "\
{\"type\":\"context_menu\",\"x\":100,\"y\":100}
{\"type\":\"context_add_evidence\",\"kind\":\"document\"}
{\"type\":\"submit_form\",\"title\":\"Receipt\"}
{\"type\":\"evidence_down\",\"index\":0,\"x\":110,\"y\":110}
{\"type\":\"pointer_move\",\"x\":160,\"y\":130}
{\"type\":\"pointer_up\",\"x\":160,\"y\":130}
{\"type\":\"wheel\",\"x\":0,\"y\":0,\"dy\":-120}
";
    let (editor, _) = replay(script);

    let card = &editor.scene.evidence()[0];
    assert_eq!((card.x, card.y), (150.0, 120.0));
    assert!((editor.viewport.zoom - 1.1).abs() < 1e-9);
}
