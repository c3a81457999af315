//! Cursor capture - whether gameplay or UI owns the pointer.
//!
//! The controller ignores input and skips its physics update whenever the
//! cursor is not captured, e.g. while the pause overlay has focus.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

/// Mirror of the primary window's cursor grab.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorCapture {
    /// Pointer locked to the window and hidden; gameplay owns input
    Captured,
    /// Pointer free; UI owns input
    #[default]
    Released,
}

impl CursorCapture {
    pub fn is_captured(&self) -> bool {
        matches!(self, CursorCapture::Captured)
    }
}

/// Run condition: true while gameplay owns the pointer.
pub fn input_captured(capture: Option<Res<CursorCapture>>) -> bool {
    capture.is_some_and(|c| c.is_captured())
}

/// Grab and hide cursor when gameplay takes focus.
pub fn grab_cursor(
    mut capture: ResMut<CursorCapture>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
    *capture = CursorCapture::Captured;
    debug!("Cursor captured");
}

/// Release cursor when gameplay loses focus.
pub fn release_cursor(
    mut capture: ResMut<CursorCapture>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
    *capture = CursorCapture::Released;
    debug!("Cursor released");
}
