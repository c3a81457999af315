//! Camera-relative locomotion, run once per physics tick.
//!
//! Velocity is blended toward the desired velocity rather than set directly,
//! with a faster rate when the player keeps going the same way. Collision
//! resolution is left to rapier's character controller.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::input::ActionBindings;

/// Move intent projected into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldIntent {
    /// Unit length while actively moving, zero otherwise
    pub direction: Vec3,
    pub actively_moving: bool,
}

/// Project a 2D move intent onto the camera's horizontal basis.
///
/// `right` and `back` are the pivot's world-space +X and +Z axes. Pitch only
/// tilts `back`, and the vertical component is dropped before the dead-zone
/// test, so strafing is unaffected by where the camera looks.
pub fn world_intent(input: Vec2, right: Vec3, back: Vec3) -> WorldIntent {
    let mut intent = right * input.x - back * input.y;
    intent.y = 0.0;

    if intent.length_squared() > INTENT_DEADZONE_SQUARED {
        WorldIntent {
            direction: intent.normalize(),
            actively_moving: true,
        }
    } else {
        WorldIntent {
            direction: Vec3::ZERO,
            actively_moving: false,
        }
    }
}

impl ControllerConfig {
    /// Blend rate for this tick.
    ///
    /// Continuing along the current velocity gives `acceleration`, reversing
    /// gives `deceleration`, perpendicular lands halfway.
    pub fn blend_rate(&self, intent: &WorldIntent, velocity: Vec3) -> f32 {
        if !intent.actively_moving {
            return self.deceleration;
        }
        let alignment = intent.direction.dot(velocity.normalize_or_zero()) * 0.5 + 0.5;
        self.deceleration + (self.acceleration - self.deceleration) * alignment
    }

    /// Advance velocity by one tick.
    pub fn step_velocity(&self, velocity: Vec3, intent: &WorldIntent, grounded: bool, dt: f32) -> Vec3 {
        let rate = self.blend_rate(intent, velocity);
        let mut next = velocity.lerp(intent.direction * self.max_speed, rate * dt);

        // Constant fall speed rather than integrated gravity
        if !grounded {
            next.y = -self.fall_speed;
        }
        next
    }
}

/// Per-tick locomotion for the player.
pub fn player_locomotion(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    bindings: Res<ActionBindings>,
    keyboard: Res<ButtonInput<KeyCode>>,
    pivot_query: Query<&GlobalTransform, With<CameraPivot>>,
    mut player_query: Query<
        (
            &mut MotionState,
            &mut AnimationParams,
            &mut KinematicCharacterController,
            Option<&KinematicCharacterControllerOutput>,
        ),
        With<Player>,
    >,
) {
    let Ok((mut motion, mut params, mut controller, output)) = player_query.get_single_mut() else {
        return;
    };
    let Ok(pivot) = pivot_query.get_single() else {
        return;
    };

    let dt = time.delta_secs();
    let input = bindings.move_vector(&keyboard);
    let intent = world_intent(input, pivot.right().as_vec3(), pivot.back().as_vec3());

    params.movement_blend = intent.direction.length();

    // Grounded state comes from the previous collision-resolved move
    let grounded = output.is_some_and(|o| o.grounded);
    motion.velocity = config.step_velocity(motion.velocity, &intent, grounded, dt);

    controller.translation = Some(motion.velocity * dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;
    use std::time::Duration;

    fn identity_basis() -> (Vec3, Vec3) {
        (Vec3::X, Vec3::Z)
    }

    #[test]
    fn small_intents_are_zeroed() {
        let (right, back) = identity_basis();
        for input in [Vec2::ZERO, Vec2::new(0.3, 0.0), Vec2::new(0.2, -0.2), Vec2::new(0.0, -0.316)] {
            let intent = world_intent(input, right, back);
            assert_eq!(intent.direction, Vec3::ZERO, "input {input:?}");
            assert!(!intent.actively_moving);
        }
    }

    #[test]
    fn active_intent_has_unit_length() {
        let (right, back) = identity_basis();
        for input in [Vec2::new(0.4, 0.0), Vec2::new(1.0, 1.0), Vec2::new(-0.7, 0.7), Vec2::new(0.0, -1.0)] {
            let intent = world_intent(input, right, back);
            assert!(intent.actively_moving);
            assert!((intent.direction.length() - 1.0).abs() < 1e-5, "input {input:?}");
            assert_eq!(intent.direction.y, 0.0);
        }
    }

    #[test]
    fn forward_input_moves_against_back_axis() {
        let (right, back) = identity_basis();
        let intent = world_intent(Vec2::new(0.0, 1.0), right, back);
        assert!(intent.direction.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn strafe_ignores_camera_pitch() {
        for pitch in [0.0, 0.5, -1.2, 89f32.to_radians()] {
            let pivot = GlobalTransform::from(Transform::from_rotation(Quat::from_rotation_x(pitch)));
            let intent = world_intent(Vec2::new(1.0, 0.0), pivot.right().as_vec3(), pivot.back().as_vec3());
            assert!(intent.direction.abs_diff_eq(Vec3::X, 1e-5), "pitch {pitch}");
        }
    }

    #[test]
    fn forward_under_pitch_stays_horizontal() {
        let pivot = GlobalTransform::from(Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_4)));
        let intent = world_intent(Vec2::new(0.0, 1.0), pivot.right().as_vec3(), pivot.back().as_vec3());
        assert!(intent.actively_moving);
        assert!(intent.direction.abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn blend_rate_follows_alignment() {
        let config = ControllerConfig::default();
        let forward = WorldIntent { direction: Vec3::X, actively_moving: true };

        assert_eq!(config.blend_rate(&forward, Vec3::X * 3.0), config.acceleration);
        assert_eq!(config.blend_rate(&forward, Vec3::NEG_X * 3.0), config.deceleration);

        let halfway = (config.acceleration + config.deceleration) * 0.5;
        assert!((config.blend_rate(&forward, Vec3::Z) - halfway).abs() < 1e-6);
        // Standing still counts as perpendicular
        assert!((config.blend_rate(&forward, Vec3::ZERO) - halfway).abs() < 1e-6);
    }

    #[test]
    fn idle_always_decelerates() {
        let config = ControllerConfig::default();
        let idle = WorldIntent { direction: Vec3::ZERO, actively_moving: false };
        assert_eq!(config.blend_rate(&idle, Vec3::X), config.deceleration);
    }

    #[test]
    fn velocity_approaches_max_speed() {
        let config = ControllerConfig::default();
        let intent = WorldIntent { direction: Vec3::X, actively_moving: true };

        let mut velocity = Vec3::ZERO;
        for _ in 0..600 {
            velocity = config.step_velocity(velocity, &intent, true, 1.0 / 60.0);
        }
        assert!((velocity.x - config.max_speed).abs() < 0.01);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn airborne_forces_fall_speed_without_accumulating() {
        let config = ControllerConfig::default();
        let idle = WorldIntent { direction: Vec3::ZERO, actively_moving: false };

        let mut velocity = Vec3::ZERO;
        for _ in 0..10 {
            velocity = config.step_velocity(velocity, &idle, false, 1.0 / 60.0);
            assert_eq!(velocity.y, -config.fall_speed);
        }
    }

    #[test]
    fn tick_writes_translation_and_blend() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(ControllerConfig::default())
            .init_resource::<ActionBindings>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, player_locomotion);

        app.world_mut().spawn((CameraPivot::default(), GlobalTransform::IDENTITY));
        let player = app
            .world_mut()
            .spawn((
                Player,
                MotionState::default(),
                AnimationParams::default(),
                KinematicCharacterController::default(),
            ))
            .id();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(16));
        app.update();

        let entity = app.world().entity(player);
        assert_eq!(entity.get::<AnimationParams>().unwrap().movement_blend, 1.0);

        let velocity = entity.get::<MotionState>().unwrap().velocity;
        assert!(velocity.x > 0.0);
        // No controller output yet, so the player is treated as airborne
        assert_eq!(velocity.y, -ControllerConfig::default().fall_speed);

        let translation = entity
            .get::<KinematicCharacterController>()
            .unwrap()
            .translation
            .unwrap();
        assert!(translation.x > 0.0 && translation.y < 0.0);
    }
}
