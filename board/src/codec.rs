//! Case files: the saved form of a board.
//!
//! DESIGN
//! ======
//! A case is written as a single JSON document and then passed through a
//! ROT13 letter rotation. The rotation only keeps the file from being
//! readable at a glance; it offers no confidentiality and must not be
//! treated as encryption. Files written before the rotation existed are plain
//! JSON, so loading tries the rotated reading first and falls back to the raw
//! text.
//!
//! Loading is lenient. The document is parsed into a `serde_json::Value` and
//! every field is read through [`Fields`], which substitutes an empty/zero
//! value for anything missing or of the wrong type. Lines store full copies of
//! their endpoint pins (the historical format); on load an endpoint may be a
//! pin copy or a bare id, and either way it is resolved back to the loaded
//! pin with the same id.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::consts::{
    DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH, DEFAULT_PIN_COLOR, OBFUSCATION_SHIFT, UNTITLED_CASE_NAME,
};
use crate::evidence::{Evidence, EvidenceKind, Priority};
use crate::scene::{Line, LineStyle, Pin};
use crate::viewport::Viewport;

/// Error returned by [`decode_case`] and the encoders.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Neither the de-obfuscated text nor the raw text parsed as JSON.
    #[error("{0}")]
    Parse(serde_json::Error),
    /// The content parsed but is not a JSON object.
    #[error("case file does not contain a case object")]
    NotACase,
    /// The case could not be serialized.
    #[error("failed to serialize case: {0}")]
    Serialize(serde_json::Error),
}

/// Everything that is saved: metadata, the scene, and the view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Case {
    pub name: String,
    pub notes: String,
    pub pins: Vec<Pin>,
    pub lines: Vec<Line>,
    pub evidence: Vec<Evidence>,
    pub viewport: Viewport,
    /// ISO-8601 time of the save, as written.
    pub timestamp: String,
}

/// A case ready to hand to the user as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub file_name: String,
    pub contents: String,
}

// =============================================================
// Obfuscation
// =============================================================

/// Rotate ASCII letters by `shift` positions, preserving case. Everything
/// else passes through unchanged.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rotate_letters(text: &str, shift: u8) -> String {
    let shift = shift % 26;
    text.chars()
        .map(|c| {
            let base = match c {
                'a'..='z' => b'a',
                'A'..='Z' => b'A',
                _ => return c,
            };
            // ASCII letters fit in a byte.
            let offset = (c as u8 - base + shift) % 26;
            char::from(base + offset)
        })
        .collect()
}

/// Apply the case-file obfuscation. Not a security boundary.
#[must_use]
pub fn obfuscate(text: &str) -> String {
    rotate_letters(text, OBFUSCATION_SHIFT)
}

/// Undo [`obfuscate`].
#[must_use]
pub fn reveal(text: &str) -> String {
    rotate_letters(text, 26 - OBFUSCATION_SHIFT)
}

// =============================================================
// Encoding
// =============================================================

#[derive(Serialize)]
struct PinRecord<'a> {
    id: Uuid,
    x: f64,
    y: f64,
    label: &'a str,
    color: &'a str,
}

impl<'a> From<&'a Pin> for PinRecord<'a> {
    fn from(pin: &'a Pin) -> Self {
        Self { id: pin.id, x: pin.x, y: pin.y, label: &pin.label, color: &pin.color }
    }
}

#[derive(Serialize)]
struct LineRecord<'a> {
    id: Uuid,
    start: PinRecord<'a>,
    end: PinRecord<'a>,
    color: &'a str,
    style: LineStyle,
    width: f64,
}

#[derive(Serialize)]
struct EvidenceRecord<'a> {
    id: Uuid,
    title: &'a str,
    description: &'a str,
    #[serde(rename = "type")]
    kind: &'a EvidenceKind,
    priority: Priority,
    x: f64,
    y: f64,
    image: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewportRecord {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
}

#[derive(Serialize)]
struct CaseRecord<'a> {
    name: &'a str,
    notes: &'a str,
    points: Vec<PinRecord<'a>>,
    lines: Vec<LineRecord<'a>>,
    evidence: Vec<EvidenceRecord<'a>>,
    viewport: ViewportRecord,
    timestamp: &'a str,
}

impl<'a> CaseRecord<'a> {
    fn new(case: &'a Case) -> Self {
        let pins: HashMap<Uuid, &Pin> = case.pins.iter().map(|p| (p.id, p)).collect();
        let lines = case
            .lines
            .iter()
            .filter_map(|line| {
                let (Some(start), Some(end)) = (pins.get(&line.start), pins.get(&line.end)) else {
                    warn!(line = %line.id, "skipping line with missing endpoint while saving");
                    return None;
                };
                Some(LineRecord {
                    id: line.id,
                    start: PinRecord::from(*start),
                    end: PinRecord::from(*end),
                    color: &line.color,
                    style: line.style,
                    width: line.width,
                })
            })
            .collect();
        let evidence = case
            .evidence
            .iter()
            .map(|e| EvidenceRecord {
                id: e.id,
                title: &e.title,
                description: &e.description,
                kind: &e.kind,
                priority: e.priority,
                x: e.x,
                y: e.y,
                image: e.image.as_deref(),
            })
            .collect();
        Self {
            name: &case.name,
            notes: &case.notes,
            points: case.pins.iter().map(PinRecord::from).collect(),
            lines,
            evidence,
            viewport: ViewportRecord {
                zoom: case.viewport.zoom,
                offset_x: case.viewport.offset_x,
                offset_y: case.viewport.offset_y,
            },
            timestamp: &case.timestamp,
        }
    }
}

/// Serialize a case to compact, unobfuscated JSON (the auto-save form).
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if serialization fails.
pub fn to_plain_json(case: &Case) -> Result<String, CodecError> {
    serde_json::to_string(&CaseRecord::new(case)).map_err(CodecError::Serialize)
}

/// Serialize a case to indented, unobfuscated JSON.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if serialization fails.
pub fn to_pretty_json(case: &Case) -> Result<String, CodecError> {
    serde_json::to_string_pretty(&CaseRecord::new(case)).map_err(CodecError::Serialize)
}

/// Serialize and obfuscate a case for saving to a file.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if serialization fails.
pub fn encode_case(case: &Case) -> Result<String, CodecError> {
    Ok(obfuscate(&to_plain_json(case)?))
}

/// Build the downloadable artifact for `case`, saved at `unix_millis`.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if serialization fails.
pub fn save_file(case: &Case, unix_millis: i128) -> Result<SavedFile, CodecError> {
    Ok(SavedFile { file_name: save_file_name(&case.name, unix_millis), contents: encode_case(case)? })
}

/// `<name>_<millis>.json`, with every character outside `[A-Za-z0-9]`
/// replaced by `_`. An empty name saves as "Untitled Case".
#[must_use]
pub fn save_file_name(name: &str, unix_millis: i128) -> String {
    let name = if name.is_empty() { UNTITLED_CASE_NAME } else { name };
    let safe: String = name.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect();
    format!("{safe}_{unix_millis}.json")
}

/// `at` in the millisecond-precision UTC ISO-8601 form used for `timestamp`.
#[must_use]
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    at.to_offset(time::UtcOffset::UTC).format(&format).unwrap_or_else(|e| {
        warn!(error = %e, "failed to format save timestamp");
        String::new()
    })
}

// =============================================================
// Decoding
// =============================================================

/// Keys whose presence marks a JSON object as a case.
const CASE_KEYS: [&str; 7] = ["name", "notes", "points", "lines", "evidence", "viewport", "timestamp"];

/// Parse a case file, obfuscated or plain.
///
/// The de-obfuscated reading is accepted only when it yields an object with
/// at least one case key; a plain file run through the rotation usually still
/// parses, but with scrambled keys.
///
/// # Errors
///
/// Returns [`CodecError::Parse`] with the plain-text parse error when neither
/// reading is JSON, or [`CodecError::NotACase`] for JSON that isn't an object.
pub fn decode_case(raw: &str) -> Result<Case, CodecError> {
    match serde_json::from_str::<Value>(&reveal(raw)) {
        Ok(value) if looks_like_case(&value) => return Ok(case_from_value(&value)),
        Ok(_) => debug!("revealed content is not a case; trying plain JSON"),
        Err(e) => debug!(error = %e, "revealed content is not JSON; trying plain JSON"),
    }
    let value: Value = serde_json::from_str(raw).map_err(CodecError::Parse)?;
    if !value.is_object() {
        return Err(CodecError::NotACase);
    }
    Ok(case_from_value(&value))
}

/// Parse unobfuscated case JSON (the auto-save form).
///
/// # Errors
///
/// Same as [`decode_case`], without the obfuscated attempt.
pub fn decode_plain(raw: &str) -> Result<Case, CodecError> {
    let value: Value = serde_json::from_str(raw).map_err(CodecError::Parse)?;
    if !value.is_object() {
        return Err(CodecError::NotACase);
    }
    Ok(case_from_value(&value))
}

fn looks_like_case(value: &Value) -> bool {
    value.as_object().is_some_and(|obj| CASE_KEYS.iter().any(|k| obj.contains_key(*k)))
}

/// Typed, forgiving access to the fields of a JSON object.
struct Fields<'a> {
    value: &'a Value,
}

impl<'a> Fields<'a> {
    fn new(value: &'a Value) -> Self {
        Self { value }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.value.get(key)
    }

    /// String field, or `""` when absent or not a string.
    fn str(&self, key: &str) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// String field, or `None` when absent or not a string.
    fn opt_str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Finite number, or `default` when absent or not a number.
    fn num(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(Value::as_f64).filter(|v| v.is_finite()).unwrap_or(default)
    }

    /// Array field, or an empty slice.
    fn list(&self, key: &str) -> &'a [Value] {
        self.get(key).and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Stable text key for a stored id, which may be a number or a string.
fn raw_id_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reuse ids that are already UUIDs; mint fresh ones for anything else
/// (older files use numeric ids).
fn adopt_id(raw: Option<&Value>) -> Uuid {
    match raw {
        Some(Value::String(s)) => Uuid::parse_str(s).unwrap_or_else(|_| Uuid::new_v4()),
        _ => Uuid::new_v4(),
    }
}

/// [`adopt_id`], minting a fresh id when `used` already holds the result.
fn adopt_unique_id(raw: Option<&Value>, used: &mut HashSet<Uuid>, kind: &'static str) -> Uuid {
    let mut id = adopt_id(raw);
    if !used.insert(id) {
        warn!(%id, kind, "duplicate id in case file; assigning a new one");
        id = Uuid::new_v4();
        used.insert(id);
    }
    id
}

fn case_from_value(value: &Value) -> Case {
    let root = Fields::new(value);

    let mut pin_ids: HashMap<String, Uuid> = HashMap::new();
    let mut used_pins = HashSet::new();
    let mut pins: Vec<Pin> = Vec::new();
    for raw in root.list("points") {
        let f = Fields::new(raw);
        let id = adopt_unique_id(f.get("id"), &mut used_pins, "pin");
        if let Some(key) = f.get("id").and_then(raw_id_key) {
            pin_ids.entry(key).or_insert(id);
        }
        pins.push(Pin {
            id,
            x: f.num("x", 0.0),
            y: f.num("y", 0.0),
            label: f.str("label").to_string(),
            color: f.opt_str("color").unwrap_or(DEFAULT_PIN_COLOR).to_string(),
        });
    }

    let resolve = |endpoint: Option<&Value>| -> Option<Uuid> {
        let endpoint = endpoint?;
        let raw_id = if endpoint.is_object() { endpoint.get("id")? } else { endpoint };
        pin_ids.get(&raw_id_key(raw_id)?).copied()
    };

    let mut used_lines = HashSet::new();
    let mut lines = Vec::new();
    for raw in root.list("lines") {
        let f = Fields::new(raw);
        let (Some(start), Some(end)) = (resolve(f.get("start")), resolve(f.get("end"))) else {
            warn!("dropping line whose endpoints are not in the case");
            continue;
        };
        lines.push(Line {
            id: adopt_unique_id(f.get("id"), &mut used_lines, "line"),
            start,
            end,
            color: f.opt_str("color").unwrap_or(DEFAULT_LINE_COLOR).to_string(),
            style: LineStyle::parse(f.str("style")),
            width: f.num("width", DEFAULT_LINE_WIDTH),
        });
    }

    let mut used_cards = HashSet::new();
    let evidence = root
        .list("evidence")
        .iter()
        .map(|raw| {
            let f = Fields::new(raw);
            Evidence {
                id: adopt_unique_id(f.get("id"), &mut used_cards, "evidence"),
                x: f.num("x", 0.0),
                y: f.num("y", 0.0),
                title: f.str("title").to_string(),
                description: f.str("description").to_string(),
                kind: EvidenceKind::parse(f.str("type")),
                priority: Priority::parse(f.str("priority")).unwrap_or_default(),
                image: f.opt_str("image").filter(|s| !s.is_empty()).map(str::to_string),
            }
        })
        .collect();

    let viewport = match root.get("viewport") {
        Some(v) => {
            let f = Fields::new(v);
            Viewport::from_parts(f.num("zoom", 1.0), f.num("offsetX", 0.0), f.num("offsetY", 0.0))
        }
        None => Viewport::default(),
    };

    Case {
        name: root.str("name").to_string(),
        notes: root.str("notes").to_string(),
        pins,
        lines,
        evidence,
        viewport,
        timestamp: root.str("timestamp").to_string(),
    }
}
