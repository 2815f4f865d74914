use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Duration, Pitch};

/// Why a single note could not be laid out. Recoverable: callers skip the
/// note, draw a placeholder, or assert.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Unsupported {
    #[error("pitch {pitch}{octave} is outside the supported octave range")]
    PitchOctave { pitch: Pitch, octave: i32 },

    #[error("no notehead glyph for {duration} notes")]
    Duration { duration: Duration },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid frame {width}x{height}: both sides must be finite and positive")]
    InvalidFrame { width: f64, height: f64 },

    #[error("invalid note: {0}")]
    InvalidNote(String),

    #[error("invalid octave range {min}..={max}")]
    InvalidOctaveRange { min: i32, max: i32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
