//! Note positions on the staff.
//!
//! Horizontally notes are spaced evenly from 20% of the width. Vertically
//! each letter step moves the note by a fixed fraction of the height,
//! measured from A4 upward: A4 sits at 0.40·H and G4 at 0.10·H. The same
//! step rule continues across octave boundaries, seven steps per octave.

use super::constants::*;
use crate::config::LayoutConfig;
use crate::error::Unsupported;
use crate::model::{Frame, Pitch, Point};

/// x of the note at `index` (0-based, left to right).
pub fn note_x(width: f64, index: usize) -> f64 {
    let step = width * NOTE_STEP_RATIO;
    width * NOTE_START_RATIO + step * (index + 1) as f64
}

/// Letter steps above A in the reference octave. Widened to i64 so every
/// `i32` octave has a step count.
pub fn diatonic_step(pitch: Pitch, octave: i32) -> i64 {
    (i64::from(octave) - i64::from(REFERENCE_OCTAVE)) * i64::from(STEPS_PER_OCTAVE)
        + i64::from(pitch.degree())
}

/// y of a pitch without any range check.
pub fn pitch_y(height: f64, pitch: Pitch, octave: i32) -> f64 {
    let reference_y = height * REFERENCE_Y_RATIO;
    let step_height = height * PITCH_STEP_RATIO;
    reference_y - diatonic_step(pitch, octave) as f64 * step_height
}

/// y of a pitch, rejecting octaves the config does not accept.
pub fn note_y(
    height: f64,
    pitch: Pitch,
    octave: i32,
    config: &LayoutConfig,
) -> Result<f64, Unsupported> {
    if !config.supports(octave) {
        return Err(Unsupported::PitchOctave { pitch, octave });
    }
    Ok(pitch_y(height, pitch, octave))
}

/// Full position of the note at `index`.
pub fn note_position(
    frame: Frame,
    index: usize,
    pitch: Pitch,
    octave: i32,
    config: &LayoutConfig,
) -> Result<Point, Unsupported> {
    let y = note_y(frame.height, pitch, octave, config)?;
    Ok(Point::new(note_x(frame.width, index), y))
}
