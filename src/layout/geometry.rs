//! Staff geometry derived from the staff frame: line spacing, staff lines,
//! ledger line sets and bar lines.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::model::{Frame, Point};

/// Which role a line plays; the renderer colors by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Staff,
    LedgerAbove,
    LedgerBelow,
    Bar,
}

/// A straight line segment, `thickness` pixels wide, drawn right of
/// (vertical) or below (horizontal) its start point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub kind: LineKind,
    pub from: Point,
    pub to: Point,
    pub thickness: f64,
}

impl LineSegment {
    fn horizontal(kind: LineKind, y: f64, width: f64) -> Self {
        Self {
            kind,
            from: Point::new(0.0, y),
            to: Point::new(width, y),
            thickness: LINE_THICKNESS,
        }
    }

    fn vertical(kind: LineKind, x: f64, top: f64, bottom: f64) -> Self {
        Self {
            kind,
            from: Point::new(x, top),
            to: Point::new(x, bottom),
            thickness: LINE_THICKNESS,
        }
    }
}

/// Pixel measurements of one staff, recomputed whenever the frame changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffGeometry {
    pub frame: Frame,
    pub line_spacing: f64,
    pub staff_top: f64,
    pub staff_bottom: f64,
}

impl StaffGeometry {
    pub fn new(frame: Frame) -> Self {
        let line_spacing = frame.height / STAFF_LINE_DIVISOR;
        let staff_top = frame.height * STAFF_TOP_RATIO;
        Self {
            frame,
            line_spacing,
            staff_top,
            staff_bottom: staff_top + line_spacing * (STAFF_LINE_COUNT - 1) as f64,
        }
    }

    pub fn width(&self) -> f64 {
        self.frame.width
    }

    /// Notehead box: one line spacing square.
    pub fn notehead_size(&self) -> (f64, f64) {
        (self.line_spacing, self.line_spacing)
    }

    /// y of staff line `k` (0 = top).
    pub fn staff_line_y(&self, k: usize) -> f64 {
        self.staff_top + k as f64 * self.line_spacing
    }

    pub fn staff_lines(&self) -> Vec<LineSegment> {
        (0..STAFF_LINE_COUNT)
            .map(|k| LineSegment::horizontal(LineKind::Staff, self.staff_line_y(k), self.width()))
            .collect()
    }

    /// Ledger set above the staff, starting at the frame's top edge.
    pub fn ledger_lines_above(&self) -> Vec<LineSegment> {
        (0..LEDGER_LINE_COUNT)
            .map(|k| {
                let y = k as f64 * self.line_spacing;
                LineSegment::horizontal(LineKind::LedgerAbove, y, self.width())
            })
            .collect()
    }

    /// Ledger set below the staff, one spacing under the bottom line.
    pub fn ledger_lines_below(&self) -> Vec<LineSegment> {
        (0..LEDGER_LINE_COUNT)
            .map(|k| {
                let y = self.staff_bottom + self.line_spacing + k as f64 * self.line_spacing;
                LineSegment::horizontal(LineKind::LedgerBelow, y, self.width())
            })
            .collect()
    }

    /// Opening bar line at the left edge, double bar at the right.
    pub fn bar_lines(&self) -> Vec<LineSegment> {
        let w = self.width();
        [0.0, w * INNER_BARLINE_RATIO, w]
            .into_iter()
            .map(|x| LineSegment::vertical(LineKind::Bar, x, self.staff_top, self.staff_bottom))
            .collect()
    }

    /// Every line of the staff in drawing order: upper ledgers, opening
    /// bar, staff lines, double bar, lower ledgers.
    pub fn all_lines(&self) -> Vec<LineSegment> {
        let mut bars = self.bar_lines().into_iter();
        let mut lines = self.ledger_lines_above();
        lines.extend(bars.next());
        lines.extend(self.staff_lines());
        lines.extend(bars);
        lines.extend(self.ledger_lines_below());
        lines
    }

    /// Where the clef goes: a box as tall as the distance to the bottom
    /// staff line, scaled down, vertically centered in the frame and lifted
    /// by half a spacing. Anchored at the left edge.
    pub fn clef_box(&self) -> ClefBox {
        let height = self.staff_bottom * CLEF_SCALE;
        let center_y = self.frame.height / 2.0 - self.line_spacing / 2.0;
        ClefBox {
            x: 0.0,
            y: center_y - height / 2.0,
            height,
        }
    }
}

/// Top-left corner and height of the clef, width follows the asset's
/// aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClefBox {
    pub x: f64,
    pub y: f64,
    pub height: f64,
}
