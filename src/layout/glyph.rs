//! Notehead glyphs built from two stacked ellipses: an ink ellipse and a
//! smaller paper-colored one on top that hollows it out.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::error::Unsupported;
use crate::model::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Ink,
    Paper,
}

/// An ellipse centered on the note position, rotated clockwise by
/// `rotation` degrees about its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub fill: Fill,
}

/// Shapes of one notehead, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteheadGlyph {
    pub duration: Duration,
    pub ellipses: Vec<Ellipse>,
}

impl NoteheadGlyph {
    /// Glyph for `duration` inside a `width` x `height` notehead box.
    pub fn for_duration(duration: Duration, width: f64, height: f64) -> Result<Self, Unsupported> {
        let ellipses = match duration {
            Duration::Whole => vec![
                Ellipse {
                    width,
                    height: height * WHOLE_OUTER_HEIGHT,
                    rotation: 0.0,
                    fill: Fill::Ink,
                },
                Ellipse {
                    width: width * WHOLE_INNER_WIDTH,
                    height: height * WHOLE_INNER_HEIGHT,
                    rotation: WHOLE_INNER_ROTATION,
                    fill: Fill::Paper,
                },
            ],
            Duration::Half => vec![
                Ellipse {
                    width,
                    height,
                    rotation: HALF_OUTER_ROTATION,
                    fill: Fill::Ink,
                },
                Ellipse {
                    width: width * HALF_INNER_WIDTH,
                    height: height * HALF_INNER_HEIGHT,
                    rotation: HALF_INNER_ROTATION,
                    fill: Fill::Paper,
                },
            ],
            Duration::Quarter | Duration::Eighth | Duration::Sixteenth => {
                return Err(Unsupported::Duration { duration });
            }
        };
        Ok(Self { duration, ellipses })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn whole_note_is_a_flat_ring() {
        let g = NoteheadGlyph::for_duration(Duration::Whole, 20.0, 20.0).unwrap();
        assert_eq!(g.ellipses.len(), 2);
        let (outer, inner) = (g.ellipses[0], g.ellipses[1]);
        assert_eq!(outer.fill, Fill::Ink);
        assert_eq!(outer.width, 20.0);
        assert!((outer.height - 12.0).abs() < 1e-9);
        assert_eq!(inner.fill, Fill::Paper);
        assert_eq!((inner.width, inner.height), (10.0, 10.0));
        assert_eq!(inner.rotation, -30.0);
    }

    #[test]
    fn half_note_is_rotated_pair() {
        let g = NoteheadGlyph::for_duration(Duration::Half, 10.0, 10.0).unwrap();
        let (outer, inner) = (g.ellipses[0], g.ellipses[1]);
        assert_eq!(outer.rotation, 90.0);
        assert_eq!((outer.width, outer.height), (10.0, 10.0));
        assert_eq!(inner.rotation, 30.0);
        assert!((inner.width - 4.0).abs() < 1e-9);
        assert!((inner.height - 9.0).abs() < 1e-9);
        // the paper ellipse must sit inside the ink one
        assert!(inner.width < outer.width && inner.height < outer.height);
    }

    #[test]
    fn short_durations_have_no_glyph() {
        for d in [Duration::Quarter, Duration::Eighth, Duration::Sixteenth] {
            assert_eq!(
                NoteheadGlyph::for_duration(d, 10.0, 10.0),
                Err(Unsupported::Duration { duration: d })
            );
        }
    }
}
