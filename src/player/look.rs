//! Mouse-look: yaw on the body, pitch on the camera pivot.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use super::components::*;
use crate::core::CursorCapture;

impl CameraPivot {
    /// Apply one pointer motion sample and return the yaw to apply to the body.
    ///
    /// Screen Y grows downward, so both axes are inverted: moving the mouse
    /// right turns right (negative yaw), moving it up looks up.
    pub fn look(&mut self, relative: Vec2, sensitivity: f32) -> f32 {
        let delta = -relative;
        let limit = PITCH_LIMIT_DEGREES.to_radians();
        self.pitch = (self.pitch + delta.y * sensitivity).clamp(-limit, limit);
        delta.x * sensitivity
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch)
    }
}

/// Handle mouse movement for looking around.
///
/// Every motion event is applied in order; the camera pivot is a child of
/// the player, so yaw carries it along. Motion that arrives while the cursor
/// is released is drained, never applied later.
pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    capture: Res<CursorCapture>,
    config: Res<ControllerConfig>,
    mut player_query: Query<&mut Transform, With<Player>>,
    mut pivot_query: Query<(&mut Transform, &mut CameraPivot), Without<Player>>,
) {
    if !capture.is_captured() {
        mouse_motion.clear();
        return;
    }
    let Ok(mut player_transform) = player_query.get_single_mut() else {
        mouse_motion.clear();
        return;
    };
    let Ok((mut pivot_transform, mut pivot)) = pivot_query.get_single_mut() else {
        mouse_motion.clear();
        return;
    };

    for event in mouse_motion.read() {
        let yaw = pivot.look(event.delta, config.mouse_sensitivity);
        player_transform.rotate_y(yaw);
    }

    pivot_transform.rotation = pivot.rotation();
}
