//! Player plugin - locomotion, mouse-look, interaction and viewmodel.

use bevy::prelude::*;

use super::animation::*;
use super::components::*;
use super::interaction::*;
use super::locomotion::player_locomotion;
use super::look::mouse_look;
use super::spawn::despawn_player;
use crate::core::{input_captured, GameState};
use crate::input::ActionBindings;

/// Ordering of the controller's physics-tick work.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerSet {
    /// Velocity update and movement request
    Locomotion,
    /// Ray sample and edge detection, after locomotion
    Interaction,
}

/// Run condition: the player exists and the movement broadcast allows it.
pub fn player_can_move(player_query: Query<&MovementEnabled, With<Player>>) -> bool {
    player_query.get_single().is_ok_and(|enabled| enabled.0)
}

/// Player plugin - handles the first-person controller.
///
/// Spawning is left to whoever builds the level (`spawn_player`); this
/// plugin despawns the player when gameplay ends.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize resources
            .init_resource::<ControllerConfig>()
            .init_resource::<ActionBindings>()
            .add_systems(Startup, load_controller_config)

            // Physics tick: movement, then the interaction ray
            .configure_sets(
                FixedUpdate,
                (PlayerSet::Locomotion, PlayerSet::Interaction)
                    .chain()
                    .run_if(in_state(GameState::InGame))
                    .run_if(input_captured)
                    .run_if(player_can_move),
            )
            .add_systems(FixedUpdate, player_locomotion.in_set(PlayerSet::Locomotion))
            .add_systems(
                FixedUpdate,
                (sample_interaction_ray, detect_interaction_edges)
                    .chain()
                    .in_set(PlayerSet::Interaction),
            )

            // Mouse-look drains motion itself while the cursor is released
            .add_systems(Update, mouse_look)

            // Input handlers keep working while movement is disabled
            .add_systems(
                Update,
                (handle_interact_input, handle_shoot_input)
                    .run_if(in_state(GameState::InGame))
                    .run_if(input_captured),
            )
            .add_systems(
                Update,
                (animate_viewmodel, fade_muzzle_flash, sync_steady_light)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(OnExit(GameState::InGame), despawn_player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CursorCapture, InteractionFound, InteractionLost};
    use bevy::ecs::system::RunSystemOnce;
    use bevy::state::app::StatesPlugin;
    use bevy_rapier3d::prelude::KinematicCharacterController;
    use std::time::Duration;

    /// Player strafing right with an active lever under the crosshair.
    fn tick_app(capture: CursorCapture, enabled: bool) -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .insert_state(GameState::InGame)
            .add_plugins(PlayerPlugin)
            .add_event::<InteractionFound>()
            .add_event::<InteractionLost>()
            .init_resource::<Time>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(capture);

        let lever = app.world_mut().spawn(Interactable::new("Pull")).id();
        let player = app
            .world_mut()
            .spawn((
                Player,
                MotionState::default(),
                AnimationParams::default(),
                KinematicCharacterController::default(),
                MovementEnabled(enabled),
                InteractionEdge::default(),
            ))
            .id();
        app.world_mut().spawn((
            CameraPivot::default(),
            GlobalTransform::IDENTITY,
            InteractionRay { reach: 2.5, hit: Some(lever) },
        ));

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(16));
        app.world_mut().run_schedule(FixedUpdate);

        (app, player)
    }

    fn found_count(app: &App) -> usize {
        app.world().resource::<Events<InteractionFound>>().len()
    }

    #[test]
    fn physics_tick_runs_when_captured_and_enabled() {
        let (app, player) = tick_app(CursorCapture::Captured, true);

        assert!(app.world().get::<MotionState>(player).unwrap().velocity.x > 0.0);
        assert_eq!(found_count(&app), 1);
    }

    #[test]
    fn physics_tick_skipped_while_cursor_released() {
        let (app, player) = tick_app(CursorCapture::Released, true);

        assert_eq!(app.world().get::<MotionState>(player).unwrap().velocity, Vec3::ZERO);
        assert_eq!(app.world().get::<AnimationParams>(player).unwrap().movement_blend, 0.0);
        assert_eq!(found_count(&app), 0);
    }

    #[test]
    fn physics_tick_skipped_while_movement_disabled() {
        let (app, player) = tick_app(CursorCapture::Captured, false);

        assert_eq!(app.world().get::<MotionState>(player).unwrap().velocity, Vec3::ZERO);
        assert_eq!(app.world().get::<AnimationParams>(player).unwrap().movement_blend, 0.0);
        assert_eq!(found_count(&app), 0);
        assert!(!app.world().get::<InteractionEdge>(player).unwrap().was_interactable());
    }

    #[test]
    fn movement_condition_requires_enabled_player() {
        let mut world = World::new();
        assert!(!world.run_system_once(player_can_move).unwrap());

        let player = world.spawn((Player, MovementEnabled::default())).id();
        assert!(world.run_system_once(player_can_move).unwrap());

        world.entity_mut(player).insert(MovementEnabled(false));
        assert!(!world.run_system_once(player_can_move).unwrap());
    }
}
