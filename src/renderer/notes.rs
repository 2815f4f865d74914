//! Notehead and placeholder rendering.

use super::constants::*;
use super::svg_builder::SvgBuilder;
use crate::layout::{LayoutResult, StaffLayout};

pub(super) fn render_notes(svg: &mut SvgBuilder, layout: &StaffLayout, markers: bool) {
    let geometry = &layout.geometry;
    let marker_y = geometry.frame.height / 2.0;
    let marker_size = geometry.line_spacing * MARKER_FONT_RATIO;

    for note in &layout.notes {
        match &note.result {
            LayoutResult::Placed(placement) => {
                let p = placement.position;
                for shape in &placement.glyph.ellipses {
                    svg.ellipse(p.x, p.y, shape);
                }
            }
            LayoutResult::Unsupported { .. } if markers => {
                svg.text(note.x, marker_y, MARKER_TEXT, marker_size, MARKER_COLOR, "middle");
            }
            LayoutResult::Unsupported { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::compute_layout;
    use crate::model::{Duration, Frame, NoteDescriptor, Pitch, StaffNote};
    use pretty_assertions::assert_eq;

    fn render(notes: &[(Duration, i32, Pitch)], markers: bool) -> Vec<String> {
        let notes: Vec<StaffNote> = notes
            .iter()
            .map(|&(d, o, p)| StaffNote::new(NoteDescriptor::new(d, o, p)))
            .collect();
        let layout =
            compute_layout(Frame::new(1000.0, 500.0), &notes, &LayoutConfig::default()).unwrap();
        let mut svg = SvgBuilder::new(1000.0, 500.0);
        render_notes(&mut svg, &layout, markers);
        svg.elements
    }

    #[test]
    fn marker_sits_in_the_note_column_at_mid_height() {
        // second column: x = 150 + 2 * 50; font = 500 / 15 * 0.6
        let notes = [(Duration::Whole, 4, Pitch::A), (Duration::Quarter, 4, Pitch::D)];
        let elements = render(&notes, true);
        assert_eq!(elements.len(), 3);
        assert_eq!(
            elements[2],
            r#"<text x="250.00" y="250.00" font-size="20.0" fill="red" text-anchor="middle" dominant-baseline="middle">Not implemented!</text>"#
        );
    }

    #[test]
    fn placed_note_is_centered_on_its_position() {
        // F4 at 0.15 * 500, first column at 200
        let elements = render(&[(Duration::Half, 4, Pitch::F)], true);
        assert_eq!(elements.len(), 2);
        assert!(elements[0].starts_with(r#"<ellipse cx="200.00" cy="75.00""#), "{}", elements[0]);
        assert!(elements[1].starts_with(r#"<ellipse cx="200.00" cy="75.00""#), "{}", elements[1]);
    }

    #[test]
    fn markers_can_be_suppressed() {
        assert!(render(&[(Duration::Eighth, 4, Pitch::C)], false).is_empty());
    }
}
