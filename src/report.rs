//! Printable summary of a case, used by `pinboard inspect`.

use std::collections::BTreeMap;

use board::codec::Case;
use board::image;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseSummary {
    pub name: String,
    pub timestamp: String,
    pub pins: usize,
    pub labeled_pins: usize,
    pub lines: usize,
    pub evidence: usize,
    /// Card count per evidence type, e.g. `{"note": 2, "photo": 1}`.
    pub evidence_by_kind: BTreeMap<String, usize>,
    /// Cards whose image is a readable data URL.
    pub images: usize,
    /// Decoded size of those images.
    pub image_bytes: usize,
    pub zoom: f64,
    pub offset: [f64; 2],
    pub has_notes: bool,
}

impl CaseSummary {
    #[must_use]
    pub fn of(case: &Case) -> Self {
        let mut evidence_by_kind = BTreeMap::new();
        for card in &case.evidence {
            *evidence_by_kind.entry(card.kind.as_str().to_string()).or_insert(0) += 1;
        }
        let decoded: Vec<usize> = case
            .evidence
            .iter()
            .filter_map(|card| card.image.as_deref().and_then(image::decode_data_url))
            .map(|(_, bytes)| bytes.len())
            .collect();
        Self {
            name: case.name.clone(),
            timestamp: case.timestamp.clone(),
            pins: case.pins.len(),
            labeled_pins: case.pins.iter().filter(|pin| !pin.label.trim().is_empty()).count(),
            lines: case.lines.len(),
            evidence: case.evidence.len(),
            evidence_by_kind,
            images: decoded.len(),
            image_bytes: decoded.iter().sum(),
            zoom: case.viewport.zoom,
            offset: [case.viewport.offset_x, case.viewport.offset_y],
            has_notes: !case.notes.trim().is_empty(),
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
