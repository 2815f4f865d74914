//! Colors and text settings for the SVG renderer.

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const INK_COLOR: &str = "black";
pub(super) const PAPER_COLOR: &str = "white";
pub(super) const STAFF_COLOR: &str = "black";
pub(super) const LEDGER_COLOR: &str = "blue";
pub(super) const BARLINE_COLOR: &str = "black";
pub(super) const MARKER_COLOR: &str = "red";

// ── Placeholder for notes without a layout ──────────────────────────
pub(super) const MARKER_TEXT: &str = "Not implemented!";
pub(super) const MARKER_FONT_RATIO: f64 = 0.6; // of line spacing

// ── Vector treble clef outline bounds (path units) ──────────────────
pub(super) const CLEF_PATH_MIN_X: f64 = 88.0;
pub(super) const CLEF_PATH_MIN_Y: f64 = 0.0;
pub(super) const CLEF_PATH_HEIGHT: f64 = 340.0;
