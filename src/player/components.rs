//! Player-related components and controller configuration.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::load_or_default;

/// Location of the controller tuning file.
pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/player/controller.ron";

/// Squared intent length at or below which the player counts as idle.
pub const INTENT_DEADZONE_SQUARED: f32 = 0.1;

/// Camera pitch limit in degrees, short of straight up/down to avoid flipping.
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Camera pivot (the player's "head"). Child of the player entity.
///
/// Yaw lives on the player body; only pitch lives here.
#[derive(Component, Debug, Default)]
pub struct CameraPivot {
    /// Current pitch angle in radians (looking up/down)
    pub pitch: f32,
}

/// Current velocity, owned by the controller and rewritten every physics tick.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MotionState {
    pub velocity: Vec3,
}

/// Whether the per-tick update runs. Toggled by the movement broadcast.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementEnabled(pub bool);

impl Default for MovementEnabled {
    fn default() -> Self {
        Self(true)
    }
}

/// Parameters the controller writes for the animation layer.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    /// Movement cycle blend position: 0 = idle, 1 = full speed
    pub movement_blend: f32,
    /// Shoot condition, cleared by the animation once consumed
    pub shoot: bool,
}

/// Light shown instead of flashing effects when flashing lights are disabled.
#[derive(Component)]
pub struct SteadyLight;

/// Tuning for the first-person controller, loaded from
/// assets/data/player/controller.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Radians of rotation per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Top horizontal speed in units per second
    pub max_speed: f32,
    /// Blend rate when continuing in the current direction
    pub acceleration: f32,
    /// Blend rate when reversing or idle
    pub deceleration: f32,
    /// Constant downward speed while airborne
    pub fall_speed: f32,
    /// Length of the interaction ray
    pub interaction_reach: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.003,
            max_speed: 5.0,
            acceleration: 2.0,
            deceleration: 10.0,
            fall_speed: 9.8,
            interaction_reach: 2.5,
        }
    }
}

impl ControllerConfig {
    /// Load the controller config, falling back to defaults.
    pub fn load() -> Self {
        load_or_default(CONTROLLER_CONFIG_PATH)
    }
}

/// System to load controller config at startup.
pub fn load_controller_config(mut commands: Commands) {
    let config = ControllerConfig::load();
    debug!("Controller config: {:?}", config);
    commands.insert_resource(config);
}
