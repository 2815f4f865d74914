//! Staff renderer — draws a computed [`StaffLayout`] as a self-contained
//! SVG string that any SVG-capable view can display.

mod constants;
mod notes;
mod staff;
mod svg_builder;

use crate::config::RenderOptions;
use crate::error::Error;
use crate::layout::{compute_layout, staff_frame_in_window, StaffLayout};
use crate::model::{Frame, StaffNote};
use notes::render_notes;
use staff::{render_clef, render_lines};
use svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a staff of the given frame size holding `notes`.
pub fn render_staff_to_svg(
    frame: Frame,
    notes: &[StaffNote],
    options: &RenderOptions,
) -> Result<String, Error> {
    let layout = compute_layout(frame, notes, &options.layout)?;
    Ok(render_layout_to_svg(&layout, options))
}

/// Draw an already computed layout.
pub fn render_layout_to_svg(layout: &StaffLayout, options: &RenderOptions) -> String {
    let frame = layout.geometry.frame;
    let mut svg = SvgBuilder::new(frame.width, frame.height);
    if let Some(ref bg) = options.background {
        svg.rect(0.0, 0.0, frame.width, frame.height, bg);
    }
    draw_staff(&mut svg, layout, options);
    svg.build()
}

/// Render a whole host window with the staff centered in it, the way the
/// trainer screen frames it.
pub fn render_window_to_svg(
    window: Frame,
    notes: &[StaffNote],
    options: &RenderOptions,
) -> Result<String, Error> {
    let (origin, staff_frame) = staff_frame_in_window(window)?;
    let layout = compute_layout(staff_frame, notes, &options.layout)?;

    let mut svg = SvgBuilder::new(window.width, window.height);
    if let Some(ref bg) = options.background {
        svg.rect(0.0, 0.0, window.width, window.height, bg);
    }
    svg.begin_group(origin.x, origin.y);
    draw_staff(&mut svg, &layout, options);
    svg.end_group();
    Ok(svg.build())
}

/// Clef first, then notes, then lines on top so they run through the
/// noteheads.
fn draw_staff(svg: &mut SvgBuilder, layout: &StaffLayout, options: &RenderOptions) {
    render_clef(svg, &layout.geometry, &options.clef);
    render_notes(svg, layout, options.unsupported_markers);
    render_lines(svg, &layout.lines, options.ledger_lines);
}
