//! Shared numeric and string constants for the board crate.

// ── Viewport ────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom multiplier for one wheel notch towards the user (scroll up).
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Zoom multiplier for one wheel notch away from the user (scroll down).
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Zoom multiplier for the zoom-in button and `+` shortcut.
pub const STEP_ZOOM_IN: f64 = 1.2;

/// Zoom multiplier for the zoom-out button and `-` shortcut.
pub const STEP_ZOOM_OUT: f64 = 0.8;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space pick radius for pins, in pixels.
pub const PIN_HIT_RADIUS_PX: f64 = 15.0;

/// Screen-space pick distance for lines, in pixels.
pub const LINE_HIT_RADIUS_PX: f64 = 10.0;

/// Pointer travel (screen pixels) that turns a press on a pin into a drag.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

// ── Scene defaults ──────────────────────────────────────────────

/// Fill color for newly placed pins.
pub const DEFAULT_PIN_COLOR: &str = "#d4af37";

/// Initial color for new lines.
pub const DEFAULT_LINE_COLOR: &str = "#cc0000";

/// Stroke width for new lines, in world units.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Lower bound of the random placement range for evidence without a position.
pub const EVIDENCE_SCATTER_MIN: f64 = 100.0;

/// Upper bound (exclusive) of the random placement range.
pub const EVIDENCE_SCATTER_MAX: f64 = 500.0;

// ── Persistence ─────────────────────────────────────────────────

/// Rotation applied to ASCII letters by the case-file obfuscation.
pub const OBFUSCATION_SHIFT: u8 = 13;

/// Name used when saving a case that has none.
pub const UNTITLED_CASE_NAME: &str = "Untitled Case";

/// Name used for auto-save snapshots of an unnamed case.
pub const AUTOSAVE_CASE_NAME: &str = "Auto-saved Case";

/// Storage slot key for the auto-save snapshot.
pub const AUTOSAVE_KEY: &str = "detectivePinboard_autosave";

/// Seconds between auto-save attempts.
pub const AUTOSAVE_INTERVAL_SECS: u64 = 30;

// ── Rendering ───────────────────────────────────────────────────

/// Pin circle radius in world units.
pub const PIN_RADIUS: f64 = 8.0;

/// Fill color of the selected pin.
pub const SELECTED_PIN_FILL: &str = "#ff4444";

/// Outline color of the selected pin.
pub const SELECTED_PIN_OUTLINE: &str = "#fff";

/// Outline color of unselected pins.
pub const PIN_OUTLINE: &str = "#333";

/// Label color drawn next to pins.
pub const PIN_LABEL_COLOR: &str = "#000";

/// Label font size in world units.
pub const PIN_LABEL_SIZE: f64 = 12.0;

/// Label offset from the pin center, in world units.
pub const PIN_LABEL_OFFSET: (f64, f64) = (12.0, 4.0);
