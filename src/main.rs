//! First-person controller demo - entry point.
//!
//! Controls:
//! - WASD / arrows: Move
//! - Mouse: Look around
//! - E: Interact with whatever is under the crosshair
//! - F: Shoot
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "First Person Controller".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics, stepped with the fixed schedule so it matches the controller tick
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())

        .add_plugins(first_person_controller::FirstPersonPlugin)

        .run();
}
