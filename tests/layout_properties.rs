//! Layout properties checked over ranges of frames and note sequences.

use pretty_assertions::assert_eq;
use staffsketch::{
    compute_layout, demo_notes, Duration, Frame, LayoutConfig, LayoutResult, NoteDescriptor, Pitch,
    StaffLayout, StaffNote, Unsupported,
};

const EPS: f64 = 1e-9;

fn notes(list: &[(Duration, i32, Pitch)]) -> Vec<StaffNote> {
    list.iter()
        .map(|&(d, o, p)| StaffNote::new(NoteDescriptor::new(d, o, p)))
        .collect()
}

fn default_layout(frame: Frame, notes: &[StaffNote]) -> StaffLayout {
    compute_layout(frame, notes, &LayoutConfig::default()).unwrap()
}

fn whole_notes(pitches: &[Pitch], octave: i32) -> Vec<StaffNote> {
    pitches
        .iter()
        .map(|&p| StaffNote::new(NoteDescriptor::new(Duration::Whole, octave, p)))
        .collect()
}

// ─── Horizontal placement ───────────────────────────────────────────

#[test]
fn x_follows_the_column_formula_and_increases() {
    for width in [1.0, 37.5, 568.0 * 0.8, 1000.0, 1792.0 * 0.8] {
        let staff = whole_notes(&[Pitch::A; 12], 4);
        let layout = default_layout(Frame::new(width, 300.0), &staff);

        let xs: Vec<f64> = layout.notes.iter().map(|n| n.x).collect();
        for (i, x) in xs.iter().enumerate() {
            let expected = 0.15 * width + 0.05 * width * (i + 1) as f64;
            assert!((x - expected).abs() < EPS, "width {width}, note {i}: {x} != {expected}");
        }
        assert!(xs.windows(2).all(|w| w[1] > w[0]), "x must increase: {xs:?}");

        for (note, placement) in layout.placed() {
            assert_eq!(placement.position.x, note.x);
        }
    }
}

// ─── Vertical placement ─────────────────────────────────────────────

#[test]
fn octave_four_descends_by_uniform_steps() {
    let order = [Pitch::A, Pitch::B, Pitch::C, Pitch::D, Pitch::E, Pitch::F, Pitch::G];
    for height in [10.0, 160.0, 320.0 * 0.5, 500.0, 828.0 * 0.5] {
        let layout = default_layout(Frame::new(800.0, height), &whole_notes(&order, 4));
        let ys: Vec<f64> = layout.placed().map(|(_, p)| p.position.y).collect();
        assert_eq!(ys.len(), 7);
        assert!((ys[0] - 0.40 * height).abs() < EPS);
        for w in ys.windows(2) {
            assert!(w[1] < w[0]);
            assert!(((w[0] - w[1]) - 0.05 * height).abs() < EPS);
        }
    }
}

#[test]
fn reference_example() {
    let layout = compute_layout(
        Frame::new(1000.0, 500.0),
        &notes(&[(Duration::Half, 4, Pitch::F), (Duration::Whole, 4, Pitch::G)]),
        &LayoutConfig::default(),
    )
    .unwrap();

    let points: Vec<(f64, f64)> = layout
        .placed()
        .map(|(_, p)| (p.position.x, p.position.y))
        .collect();
    assert_eq!(points.len(), 2);
    assert!((points[0].0 - 200.0).abs() < EPS && (points[0].1 - 75.0).abs() < EPS);
    assert!((points[1].0 - 250.0).abs() < EPS && (points[1].1 - 50.0).abs() < EPS);
}

#[test]
fn demo_notes_match_reference_example() {
    let layout = default_layout(Frame::new(1000.0, 500.0), &demo_notes());
    assert_eq!(layout.placed().count(), 2);
}

// ─── Staff geometry ─────────────────────────────────────────────────

#[test]
fn staff_lines_start_at_a_third_of_the_height() {
    for height in [90.0, 160.0, 414.0] {
        let layout = default_layout(Frame::new(500.0, height), &[]);
        let g = layout.geometry;
        for k in 0..5 {
            let expected = 0.33 * height + k as f64 * height / 15.0;
            assert!((g.staff_line_y(k) - expected).abs() < EPS);
        }
        let staff_ys: Vec<f64> = g.staff_lines().iter().map(|l| l.from.y).collect();
        assert!((staff_ys[0] - 0.33 * height).abs() < EPS);
        assert_eq!(staff_ys.len(), 5);
    }
}

// ─── Unsupported input ──────────────────────────────────────────────

#[test]
fn other_octaves_are_unsupported_never_origin() {
    for octave in [-1, 0, 3, 5, 9] {
        for pitch in Pitch::ALL {
            let layout = compute_layout(
                Frame::new(1000.0, 500.0),
                &notes(&[(Duration::Whole, octave, pitch)]),
                &LayoutConfig::default(),
            )
            .unwrap();
            assert_eq!(
                layout.notes[0].result,
                LayoutResult::Unsupported {
                    reason: Unsupported::PitchOctave { pitch, octave }
                }
            );
            assert!(layout.notes[0].x > 0.0);
        }
    }
}

#[test]
fn short_durations_are_unsupported() {
    for duration in [Duration::Quarter, Duration::Eighth, Duration::Sixteenth] {
        let layout = compute_layout(
            Frame::new(1000.0, 500.0),
            &notes(&[(duration, 4, Pitch::E)]),
            &LayoutConfig::default(),
        )
        .unwrap();
        assert_eq!(
            layout.notes[0].result.clone().into_result(),
            Err(Unsupported::Duration { duration })
        );
    }
}

#[test]
fn widened_range_places_neighbouring_octaves_monotonically() {
    let config = LayoutConfig::with_octaves(3, 5).unwrap();
    let mut staff = Vec::new();
    for octave in 3..=5 {
        staff.extend(whole_notes(&Pitch::ALL, octave));
    }
    let layout = compute_layout(Frame::new(2000.0, 1000.0), &staff, &config).unwrap();
    let ys: Vec<f64> = layout.placed().map(|(_, p)| p.position.y).collect();
    assert_eq!(ys.len(), 21);
    for w in ys.windows(2) {
        assert!(((w[0] - w[1]) - 50.0).abs() < EPS);
    }
}

#[test]
fn unbounded_octave_range_keeps_positions_finite() {
    let config = LayoutConfig::with_octaves(i32::MIN, i32::MAX).unwrap();
    let staff = notes(&[
        (Duration::Whole, i32::MIN, Pitch::A),
        (Duration::Half, 4, Pitch::F),
        (Duration::Whole, i32::MAX, Pitch::G),
    ]);
    let layout = compute_layout(Frame::new(1000.0, 500.0), &staff, &config).unwrap();
    let ys: Vec<f64> = layout.placed().map(|(_, p)| p.position.y).collect();
    assert_eq!(ys.len(), 3);
    assert!(ys.iter().all(|y| y.is_finite()), "{ys:?}");
    assert!((ys[1] - 75.0).abs() < EPS);
    assert!(ys[0] > ys[1] && ys[1] > ys[2]);
}
