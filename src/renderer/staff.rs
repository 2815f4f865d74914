//! Staff, ledger, bar line and clef rendering.

use super::constants::*;
use super::svg_builder::SvgBuilder;
use crate::config::ClefStyle;
use crate::layout::geometry::{LineKind, LineSegment, StaffGeometry};

pub(super) fn render_lines(svg: &mut SvgBuilder, lines: &[LineSegment], ledger_lines: bool) {
    for line in lines {
        let color = match line.kind {
            LineKind::Staff => STAFF_COLOR,
            LineKind::Bar => BARLINE_COLOR,
            LineKind::LedgerAbove | LineKind::LedgerBelow => {
                if !ledger_lines {
                    continue;
                }
                LEDGER_COLOR
            }
        };
        render_line(svg, line, color);
    }
}

/// Lines are drawn as thin filled rectangles hanging right of / below
/// their start point.
fn render_line(svg: &mut SvgBuilder, line: &LineSegment, color: &str) {
    let x = line.from.x.min(line.to.x);
    let y = line.from.y.min(line.to.y);
    let dx = (line.to.x - line.from.x).abs();
    let dy = (line.to.y - line.from.y).abs();
    if dy == 0.0 {
        svg.rect(x, y, dx, line.thickness, color);
    } else {
        svg.rect(x, y, line.thickness, dy, color);
    }
}

pub(super) fn render_clef(svg: &mut SvgBuilder, geometry: &StaffGeometry, style: &ClefStyle) {
    let clef = geometry.clef_box();
    match style {
        ClefStyle::Vector => svg.treble_clef(&clef),
        ClefStyle::Asset(id) => svg.image(id, &clef),
        ClefStyle::None => {}
    }
}
