//! Staff proportions, all as fractions of the staff frame.

// ── Horizontal note spacing ─────────────────────────────────────────
pub(crate) const NOTE_START_RATIO: f64 = 0.15; // of width, before the first step
pub(crate) const NOTE_STEP_RATIO: f64 = 0.05; // of width, per note

// ── Vertical pitch mapping ──────────────────────────────────────────
pub(crate) const REFERENCE_OCTAVE: i32 = 4;
pub(crate) const REFERENCE_Y_RATIO: f64 = 0.40; // of height, where A4 sits
pub(crate) const PITCH_STEP_RATIO: f64 = 0.05; // of height, per letter step
pub(crate) const STEPS_PER_OCTAVE: i32 = 7;

// ── Staff ───────────────────────────────────────────────────────────
pub(crate) const STAFF_LINE_DIVISOR: f64 = 15.0; // line spacing = height / 15
pub(crate) const STAFF_TOP_RATIO: f64 = 0.33;
pub(crate) const STAFF_LINE_COUNT: usize = 5;
pub(crate) const LEDGER_LINE_COUNT: usize = 5; // per set, above and below
pub(crate) const LINE_THICKNESS: f64 = 1.0;
pub(crate) const INNER_BARLINE_RATIO: f64 = 0.995; // of width

// ── Clef ────────────────────────────────────────────────────────────
pub(crate) const DEFAULT_CLEF_ASSET: &str = "treble";
pub(crate) const CLEF_SCALE: f64 = 0.68;

// ── Notehead glyphs (relative to the notehead box) ──────────────────
pub(crate) const WHOLE_OUTER_HEIGHT: f64 = 0.6;
pub(crate) const WHOLE_INNER_WIDTH: f64 = 0.5;
pub(crate) const WHOLE_INNER_HEIGHT: f64 = 0.5;
pub(crate) const WHOLE_INNER_ROTATION: f64 = -30.0;
pub(crate) const HALF_OUTER_ROTATION: f64 = 90.0;
pub(crate) const HALF_INNER_WIDTH: f64 = 0.4;
pub(crate) const HALF_INNER_HEIGHT: f64 = 0.9;
pub(crate) const HALF_INNER_ROTATION: f64 = 30.0;

// ── Host window framing ─────────────────────────────────────────────
pub(crate) const WINDOW_STAFF_WIDTH_RATIO: f64 = 0.8;
pub(crate) const WINDOW_STAFF_HEIGHT_RATIO: f64 = 0.5;
pub(crate) const WINDOW_PADDING_RATIO: f64 = 0.01; // of window height
