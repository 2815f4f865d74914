//! Staff layout — turns a staff frame and an ordered list of notes into
//! pixel positions, notehead glyphs and staff lines.
//!
//! Layout is a pure function of its inputs; the renderer only draws what
//! it is handed. Notes the calculator cannot place come back as
//! [`LayoutResult::Unsupported`] instead of being dropped or drawn at the
//! origin, so the caller decides whether to skip, mark or assert.

pub(crate) mod constants;
pub mod geometry;
pub mod glyph;
pub mod position;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::LayoutConfig;
use crate::error::{Error, Unsupported};
use crate::model::{Frame, NoteDescriptor, Point, StaffNote};
use constants::*;
use geometry::{LineSegment, StaffGeometry};
use glyph::NoteheadGlyph;
use position::{note_position, note_x};

// ═══════════════════════════════════════════════════════════════════════
// Layout structures
// ═══════════════════════════════════════════════════════════════════════

/// A note that could be laid out: where its notehead is centered and what
/// it looks like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotePlacement {
    pub position: Point,
    pub glyph: NoteheadGlyph,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LayoutResult {
    Placed(NotePlacement),
    Unsupported { reason: Unsupported },
}

impl LayoutResult {
    pub fn placement(&self) -> Option<&NotePlacement> {
        match self {
            LayoutResult::Placed(p) => Some(p),
            LayoutResult::Unsupported { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<NotePlacement, Unsupported> {
        match self {
            LayoutResult::Placed(p) => Ok(p),
            LayoutResult::Unsupported { reason } => Err(reason),
        }
    }
}

impl From<Result<NotePlacement, Unsupported>> for LayoutResult {
    fn from(r: Result<NotePlacement, Unsupported>) -> Self {
        match r {
            Ok(p) => LayoutResult::Placed(p),
            Err(reason) => LayoutResult::Unsupported { reason },
        }
    }
}

/// Layout of one note. `x` is known even when the note is unsupported, so
/// a placeholder can still go in the right column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteLayout {
    pub id: Uuid,
    pub index: usize,
    pub note: NoteDescriptor,
    pub x: f64,
    pub result: LayoutResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffLayout {
    pub geometry: StaffGeometry,
    pub lines: Vec<LineSegment>,
    pub notes: Vec<NoteLayout>,
}

impl StaffLayout {
    pub fn placed(&self) -> impl Iterator<Item = (&NoteLayout, &NotePlacement)> {
        self.notes
            .iter()
            .filter_map(|n| n.result.placement().map(|p| (n, p)))
    }

    pub fn unsupported(&self) -> impl Iterator<Item = (&NoteLayout, Unsupported)> {
        self.notes.iter().filter_map(|n| match n.result {
            LayoutResult::Unsupported { reason } => Some((n, reason)),
            LayoutResult::Placed(_) => None,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Main layout computation
// ═══════════════════════════════════════════════════════════════════════

/// Lay out a single note. Pitch range is checked before duration.
pub fn layout_note(
    geometry: &StaffGeometry,
    index: usize,
    note: &NoteDescriptor,
    config: &LayoutConfig,
) -> LayoutResult {
    let (w, h) = geometry.notehead_size();
    note_position(geometry.frame, index, note.pitch, note.octave, config)
        .and_then(|position| {
            let glyph = NoteheadGlyph::for_duration(note.duration, w, h)?;
            Ok(NotePlacement { position, glyph })
        })
        .into()
}

/// Lay out the staff and every note, left to right in input order.
pub fn compute_layout(
    frame: Frame,
    notes: &[StaffNote],
    config: &LayoutConfig,
) -> Result<StaffLayout, Error> {
    let frame = frame.validate()?;
    let geometry = StaffGeometry::new(frame);
    debug!(
        "staff layout: {}x{} frame, spacing {:.2}, {} notes",
        frame.width,
        frame.height,
        geometry.line_spacing,
        notes.len()
    );

    let notes = notes
        .iter()
        .enumerate()
        .map(|(index, staff_note)| {
            let result = layout_note(&geometry, index, &staff_note.note, config);
            if let LayoutResult::Unsupported { reason } = &result {
                warn!("note {index} ({}) not laid out: {reason}", staff_note.note);
            }
            NoteLayout {
                id: staff_note.id,
                index,
                note: staff_note.note,
                x: note_x(frame.width, index),
                result,
            }
        })
        .collect();

    Ok(StaffLayout {
        geometry,
        lines: geometry.all_lines(),
        notes,
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Host window framing
// ═══════════════════════════════════════════════════════════════════════

/// The staff's origin and frame inside a host window: 80% of the window
/// width, half its height, centered.
pub fn staff_frame_in_window(window: Frame) -> Result<(Point, Frame), Error> {
    let window = window.validate()?;
    let staff = Frame::new(
        window.width * WINDOW_STAFF_WIDTH_RATIO,
        window.height * WINDOW_STAFF_HEIGHT_RATIO,
    );
    let padding = window.height * WINDOW_PADDING_RATIO;
    let outer_height = staff.height + 2.0 * padding;
    let origin = Point::new(
        (window.width - staff.width) / 2.0,
        (window.height - outer_height) / 2.0 + padding,
    );
    Ok((origin, staff))
}
