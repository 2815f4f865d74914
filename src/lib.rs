//! staffsketch — treble staff layout and SVG rendering for a sight-reading
//! trainer.
//!
//! The layout calculator maps each note's pitch, octave and duration to a
//! pixel position and notehead glyph inside a staff frame; the renderer
//! draws the result as SVG.
//!
//! # Example
//! ```
//! use staffsketch::{compute_layout, demo_notes, Frame, LayoutConfig};
//!
//! let frame = Frame::new(1000.0, 500.0);
//! let layout = compute_layout(frame, &demo_notes(), &LayoutConfig::default()).unwrap();
//! let (_, first) = layout.placed().next().unwrap();
//! assert_eq!((first.position.x.round(), first.position.y.round()), (200.0, 75.0));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use config::{ClefStyle, LayoutConfig, RenderOptions};
pub use error::{Error, Unsupported};
pub use layout::{
    compute_layout, layout_note, staff_frame_in_window, LayoutResult, NoteLayout, NotePlacement,
    StaffLayout,
};
pub use model::*;
pub use renderer::{render_layout_to_svg, render_staff_to_svg, render_window_to_svg};

/// Parse a JSON array of notes, e.g.
/// `[{"duration":"half","octave":4,"pitch":"F"}]`.
pub fn parse_notes_json(json: &str) -> Result<Vec<StaffNote>, Error> {
    let notes: Vec<NoteDescriptor> = serde_json::from_str(json)?;
    Ok(notes.into_iter().map(StaffNote::new).collect())
}

/// Parse notes in the compact `F4:half` form, separated by whitespace or
/// commas.
pub fn parse_notes_compact(text: &str) -> Result<Vec<StaffNote>, Error> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<NoteDescriptor>().map(StaffNote::new))
        .collect()
}

/// Convert a computed layout to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn layout_to_json(layout: &StaffLayout) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(layout)?)
}

/// Parse notes JSON and render a staff of `width` x `height` to SVG.
pub fn render_notes_json_to_svg(json: &str, width: f64, height: f64) -> Result<String, Error> {
    let notes = parse_notes_json(json)?;
    render_staff_to_svg(Frame::new(width, height), &notes, &RenderOptions::default())
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a staff holding the notes in `notes_json` and return SVG as a C
/// string. A null `notes_json` renders the demo notes.
/// The caller must free the returned string with `staffsketch_free_string`.
/// Returns null when the frame is invalid or the JSON cannot be parsed.
///
/// # Safety
/// `notes_json` must be null or a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn staffsketch_render_staff(
    notes_json: *const c_char,
    width: f64,
    height: f64,
) -> *mut c_char {
    let result = if notes_json.is_null() {
        render_staff_to_svg(Frame::new(width, height), &demo_notes(), &RenderOptions::default())
    } else {
        let c_str = unsafe { CStr::from_ptr(notes_json) };
        let json = match c_str.to_str() {
            Ok(s) => s,
            Err(_) => return std::ptr::null_mut(),
        };
        render_notes_json_to_svg(json, width, height)
    };

    match result {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(e) => {
            log::error!("staffsketch_render_staff failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Compute the layout for `notes_json` and return it as a JSON C string.
/// The caller must free the returned string with `staffsketch_free_string`.
///
/// # Safety
/// `notes_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn staffsketch_layout_json(
    notes_json: *const c_char,
    width: f64,
    height: f64,
) -> *mut c_char {
    if notes_json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(notes_json) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let frame = Frame::new(width, height);
    let result = parse_notes_json(json)
        .and_then(|notes| compute_layout(frame, &notes, &LayoutConfig::default()))
        .and_then(|layout| layout_to_json(&layout));

    match result {
        Ok(out) => CString::new(out).unwrap_or_default().into_raw(),
        Err(e) => {
            log::error!("staffsketch_layout_json failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by staffsketch functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a staffsketch function, or null.
#[no_mangle]
pub unsafe extern "C" fn staffsketch_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compact_and_json_forms_agree() {
        let a = parse_notes_compact("F4:half, G4:whole").unwrap();
        let json = r#"[
            {"duration":"half","octave":4,"pitch":"F"},
            {"duration":"whole","octave":4,"pitch":"G"}
        ]"#;
        let b = parse_notes_json(json).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, demo_notes());
    }

    #[test]
    fn compact_reports_bad_token() {
        assert!(matches!(parse_notes_compact("F4:half X9:whole"), Err(Error::InvalidNote(_))));
    }

    #[test]
    fn ffi_round_trip() {
        let json = CString::new(r#"[{"duration":"whole","octave":4,"pitch":"C"}]"#).unwrap();
        let ptr = unsafe { staffsketch_render_staff(json.as_ptr(), 400.0, 200.0) };
        assert!(!ptr.is_null());
        let svg = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { staffsketch_free_string(ptr) };
        assert!(svg.contains("<ellipse"));

        let bad = unsafe { staffsketch_render_staff(json.as_ptr(), 0.0, 200.0) };
        assert!(bad.is_null());
    }

    #[test]
    fn ffi_layout_json() {
        let json = CString::new(r#"[{"duration":"quarter","octave":4,"pitch":"C"}]"#).unwrap();
        let ptr = unsafe { staffsketch_layout_json(json.as_ptr(), 400.0, 200.0) };
        assert!(!ptr.is_null());
        let out = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { staffsketch_free_string(ptr) };
        assert!(out.contains(r#""status": "unsupported""#));
        assert!(out.contains(r#""kind": "duration""#));
    }
}
