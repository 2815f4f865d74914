//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{compute_layout, demo_notes, layout_to_json, parse_notes_json, render_staff_to_svg};
use crate::{Frame, LayoutConfig, RenderOptions};

/// Render a staff of the given size to SVG. A null `notes_json` renders
/// the demo notes.
///
/// Called from Kotlin as:
///   external fun renderStaff(notesJson: String?, width: Float, height: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_staffsketch_app_StaffSketch_renderStaff(
    mut env: JNIEnv,
    _class: JClass,
    notes_json: JString,
    width: jfloat,
    height: jfloat,
) -> jstring {
    let notes = if notes_json.is_null() {
        demo_notes()
    } else {
        let json: String = match env.get_string(&notes_json) {
            Ok(s) => s.into(),
            Err(_) => return std::ptr::null_mut(),
        };
        match parse_notes_json(&json) {
            Ok(notes) => notes,
            Err(e) => {
                log::error!("renderStaff: {e}");
                return std::ptr::null_mut();
            }
        }
    };

    let frame = Frame::new(width as f64, height as f64);
    match render_staff_to_svg(frame, &notes, &RenderOptions::default()) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::error!("renderStaff: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Compute the staff layout and return it as JSON.
///
/// Called from Kotlin as:
///   external fun layoutStaff(notesJson: String, width: Float, height: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_staffsketch_app_StaffSketch_layoutStaff(
    mut env: JNIEnv,
    _class: JClass,
    notes_json: JString,
    width: jfloat,
    height: jfloat,
) -> jstring {
    let json: String = match env.get_string(&notes_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let frame = Frame::new(width as f64, height as f64);
    let result = parse_notes_json(&json)
        .and_then(|notes| compute_layout(frame, &notes, &LayoutConfig::default()))
        .and_then(|layout| layout_to_json(&layout));

    match result {
        Ok(out) => match env.new_string(&out) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::error!("layoutStaff: {e}");
            std::ptr::null_mut()
        }
    }
}
