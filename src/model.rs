//! Data model for the notes drawn on the staff.
//!
//! A note is described by its duration class, octave and natural pitch
//! letter. Everything positional (frames, points) is plain pixel geometry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Natural note name. No accidentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pitch {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Pitch {
    pub const ALL: [Pitch; 7] = [
        Pitch::A,
        Pitch::B,
        Pitch::C,
        Pitch::D,
        Pitch::E,
        Pitch::F,
        Pitch::G,
    ];

    /// Position of the letter within a staff octave, A = 0 through G = 6.
    /// Higher degrees sit higher on the staff.
    pub fn degree(self) -> i32 {
        match self {
            Pitch::A => 0,
            Pitch::B => 1,
            Pitch::C => 2,
            Pitch::D => 3,
            Pitch::E => 4,
            Pitch::F => 5,
            Pitch::G => 6,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Pitch::A => 'A',
            Pitch::B => 'B',
            Pitch::C => 'C',
            Pitch::D => 'D',
            Pitch::E => 'E',
            Pitch::F => 'F',
            Pitch::G => 'G',
        }
    }

    pub fn from_letter(c: char) -> Option<Pitch> {
        match c.to_ascii_uppercase() {
            'A' => Some(Pitch::A),
            'B' => Some(Pitch::B),
            'C' => Some(Pitch::C),
            'D' => Some(Pitch::D),
            'E' => Some(Pitch::E),
            'F' => Some(Pitch::F),
            'G' => Some(Pitch::G),
            _ => None,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Duration class of a note. Only whole and half notes have a notehead glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl Duration {
    pub fn name(self) -> &'static str {
        match self {
            Duration::Whole => "whole",
            Duration::Half => "half",
            Duration::Quarter => "quarter",
            Duration::Eighth => "eighth",
            Duration::Sixteenth => "sixteenth",
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whole" | "w" | "1" => Ok(Duration::Whole),
            "half" | "h" | "2" => Ok(Duration::Half),
            "quarter" | "q" | "4" => Ok(Duration::Quarter),
            "eighth" | "e" | "8" => Ok(Duration::Eighth),
            "sixteenth" | "16th" | "s" | "16" => Ok(Duration::Sixteenth),
            other => Err(Error::InvalidNote(format!("unknown duration '{other}'"))),
        }
    }
}

/// One note to draw: duration class, octave and pitch letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteDescriptor {
    pub duration: Duration,
    pub octave: i32,
    pub pitch: Pitch,
}

impl NoteDescriptor {
    pub fn new(duration: Duration, octave: i32, pitch: Pitch) -> Self {
        Self {
            duration,
            octave,
            pitch,
        }
    }
}

impl fmt::Display for NoteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}:{}", self.pitch, self.octave, self.duration)
    }
}

/// Parses the compact form `F4:half` (letter, octave, `:`, duration).
/// Negative octaves are written `C-1:whole`.
impl FromStr for NoteDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (head, duration) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidNote(format!("'{s}' is missing ':<duration>'")))?;

        let mut chars = head.chars();
        let pitch = chars.next().and_then(Pitch::from_letter).ok_or_else(|| {
            Error::InvalidNote(format!("'{s}' does not start with a pitch letter A-G"))
        })?;
        let octave: i32 = chars
            .as_str()
            .parse()
            .map_err(|_| Error::InvalidNote(format!("'{s}' has no valid octave number")))?;

        Ok(NoteDescriptor::new(duration.parse()?, octave, pitch))
    }
}

/// A note on the staff with its own identity, so that two notes with the
/// same descriptor stay distinct list items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffNote {
    pub id: Uuid,
    #[serde(flatten)]
    pub note: NoteDescriptor,
}

impl StaffNote {
    pub fn new(note: NoteDescriptor) -> Self {
        Self {
            id: Uuid::new_v4(),
            note,
        }
    }
}

impl From<NoteDescriptor> for StaffNote {
    fn from(note: NoteDescriptor) -> Self {
        StaffNote::new(note)
    }
}

/// Identity is for list bookkeeping only; equality follows the descriptor.
impl PartialEq for StaffNote {
    fn eq(&self, other: &Self) -> bool {
        self.note == other.note
    }
}

/// Pixel size of a drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both sides must be finite and strictly positive.
    pub fn validate(self) -> Result<Self, Error> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(self)
        } else {
            Err(Error::InvalidFrame {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// A point in pixel space, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The notes shown on the trainer's staff at startup.
pub fn demo_notes() -> Vec<StaffNote> {
    vec![
        NoteDescriptor::new(Duration::Half, 4, Pitch::F).into(),
        NoteDescriptor::new(Duration::Whole, 4, Pitch::G).into(),
    ]
}
