//! Named input actions bound to keys.

use bevy::prelude::*;

/// Key bindings for the controller's named actions.
#[derive(Resource, Debug, Clone)]
pub struct ActionBindings {
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub move_back: Vec<KeyCode>,
    pub move_forward: Vec<KeyCode>,
    pub interact: Vec<KeyCode>,
    pub shoot: Vec<KeyCode>,
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self {
            move_left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            move_right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            move_back: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            move_forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            interact: vec![KeyCode::KeyE],
            shoot: vec![KeyCode::KeyF],
        }
    }
}

/// Strength of a digital action: 1 while any bound key is held.
fn strength(keyboard: &ButtonInput<KeyCode>, keys: &[KeyCode]) -> f32 {
    if keyboard.any_pressed(keys.iter().copied()) {
        1.0
    } else {
        0.0
    }
}

/// Combine four action strengths into a 2D vector.
///
/// X grows to the right, Y grows forward. The result never exceeds unit
/// length, so diagonals are not faster than straight movement.
pub fn axis_vector(left: f32, right: f32, back: f32, forward: f32) -> Vec2 {
    Vec2::new(right - left, forward - back).clamp_length_max(1.0)
}

impl ActionBindings {
    /// Current move intent, each axis in [-1, 1].
    pub fn move_vector(&self, keyboard: &ButtonInput<KeyCode>) -> Vec2 {
        axis_vector(
            strength(keyboard, &self.move_left),
            strength(keyboard, &self.move_right),
            strength(keyboard, &self.move_back),
            strength(keyboard, &self.move_forward),
        )
    }

    pub fn interact_pressed(&self, keyboard: &ButtonInput<KeyCode>) -> bool {
        keyboard.any_just_pressed(self.interact.iter().copied())
    }

    pub fn shoot_pressed(&self, keyboard: &ButtonInput<KeyCode>) -> bool {
        keyboard.any_just_pressed(self.shoot.iter().copied())
    }
}
