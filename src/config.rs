//! Per-call knobs for layout and rendering. Fixed proportions live in
//! `layout::constants`; only what a host may reasonably vary lives here.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::layout::constants::{DEFAULT_CLEF_ASSET, REFERENCE_OCTAVE};

/// Which octaves the calculator accepts. The pitch formula extrapolates to
/// any octave; this range decides which ones are reported as placed.
/// Deserializing goes through [`LayoutConfig::with_octaves`], so an inverted
/// range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OctaveRange")]
pub struct LayoutConfig {
    pub min_octave: i32,
    pub max_octave: i32,
}

/// Unchecked wire form of [`LayoutConfig`].
#[derive(Deserialize)]
#[serde(default)]
struct OctaveRange {
    min_octave: i32,
    max_octave: i32,
}

impl Default for OctaveRange {
    fn default() -> Self {
        Self {
            min_octave: REFERENCE_OCTAVE,
            max_octave: REFERENCE_OCTAVE,
        }
    }
}

impl TryFrom<OctaveRange> for LayoutConfig {
    type Error = Error;

    fn try_from(raw: OctaveRange) -> Result<Self, Self::Error> {
        LayoutConfig::with_octaves(raw.min_octave, raw.max_octave)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_octave: REFERENCE_OCTAVE,
            max_octave: REFERENCE_OCTAVE,
        }
    }
}

impl LayoutConfig {
    pub fn with_octaves(min_octave: i32, max_octave: i32) -> Result<Self, Error> {
        if min_octave > max_octave {
            return Err(Error::InvalidOctaveRange {
                min: min_octave,
                max: max_octave,
            });
        }
        Ok(Self {
            min_octave,
            max_octave,
        })
    }

    /// Parse `4`, `3..5` or `3..=5` (both ends inclusive).
    pub fn parse_octaves(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let bad = || Error::InvalidNote(format!("'{s}' is not an octave range"));
        match s.split_once("..") {
            Some((lo, hi)) => {
                let lo: i32 = lo.trim().parse().map_err(|_| bad())?;
                let hi: i32 = hi.trim_start_matches('=').trim().parse().map_err(|_| bad())?;
                Self::with_octaves(lo, hi)
            }
            None => {
                let o: i32 = s.parse().map_err(|_| bad())?;
                Self::with_octaves(o, o)
            }
        }
    }

    pub fn supports(&self, octave: i32) -> bool {
        (self.min_octave..=self.max_octave).contains(&octave)
    }
}

/// How the clef is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ClefStyle {
    /// Built-in vector treble clef.
    Vector,
    /// External image referenced by identifier, resolved by the host.
    Asset(String),
    None,
}

impl ClefStyle {
    pub fn default_asset() -> Self {
        ClefStyle::Asset(DEFAULT_CLEF_ASSET.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub layout: LayoutConfig,
    pub clef: ClefStyle,
    pub ledger_lines: bool,
    /// Draw "Not implemented!" where a note could not be laid out.
    pub unsupported_markers: bool,
    pub background: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            clef: ClefStyle::Vector,
            ledger_lines: true,
            unsupported_markers: true,
            background: Some("white".to_string()),
        }
    }
}
