//! Attaching and detaching the player.
//!
//! Spawning wires up every collaborator the controller needs: the kinematic
//! body, the camera pivot carrying the interaction ray, the viewmodel, and
//! the subscription to the movement broadcast. Despawning the player
//! recursively tears all of it down, subscription included.

use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use bevy_rapier3d::prelude::*;

use super::animation::{MuzzleFlash, Viewmodel, VIEWMODEL_REST};
use super::components::*;
use super::interaction::{InteractionEdge, InteractionRay};
use crate::core::{SetPlayerCanMove, SmoothTransform};

/// Apply the movement broadcast to the player.
fn on_set_player_can_move(
    trigger: Trigger<SetPlayerCanMove>,
    mut player_query: Query<&mut MovementEnabled, With<Player>>,
) {
    let SetPlayerCanMove(can_move) = *trigger.event();
    for mut enabled in player_query.iter_mut() {
        enabled.0 = can_move;
    }
    info!("Player movement {}", if can_move { "enabled" } else { "disabled" });
}

/// Observer subscribing to `SetPlayerCanMove`.
///
/// Spawn it as a child of the player so the subscription is released when
/// the player is despawned.
pub fn movement_subscription() -> Observer {
    Observer::new(on_set_player_can_move)
}

/// Spawn the player entity with camera pivot, viewmodel and lights.
pub fn spawn_player(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
    config: &ControllerConfig,
) -> Entity {
    let player = commands
        .spawn((
            Player,
            MotionState::default(),
            MovementEnabled::default(),
            InteractionEdge::default(),
            AnimationParams::default(),
            Transform::from_translation(position),
            Visibility::default(),
            // Rapier physics components
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.3),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                autostep: Some(CharacterAutostep {
                    max_height: CharacterLength::Absolute(0.4),
                    min_width: CharacterLength::Absolute(0.3),
                    include_dynamic_bodies: false,
                }),
                max_slope_climb_angle: 45_f32.to_radians(),
                min_slope_slide_angle: 30_f32.to_radians(),
                snap_to_ground: Some(CharacterLength::Absolute(0.5)),
                ..default()
            },
        ))
        .id();

    let viewmodel_mesh = meshes.add(Cuboid::new(0.08, 0.08, 0.35));
    let viewmodel_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.22, 0.2),
        perceptual_roughness: 0.8,
        ..default()
    });

    commands.entity(player).with_children(|parent| {
        parent.spawn(movement_subscription());

        // Camera pivot at eye level; also the interaction ray origin
        parent
            .spawn((
                CameraPivot::default(),
                InteractionRay::new(config.interaction_reach),
                Camera3d::default(),
                Camera {
                    clear_color: ClearColorConfig::Custom(Color::srgb(0.08, 0.07, 0.06)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.4, 0.0),
            ))
            .with_children(|pivot| {
                // Non-flashing lantern, shown only with flashing lights disabled
                pivot.spawn((
                    SteadyLight,
                    PointLight {
                        color: Color::srgb(1.0, 0.85, 0.6),
                        intensity: 60000.0,
                        range: 8.0,
                        shadows_enabled: false,
                        ..default()
                    },
                    Transform::from_xyz(0.0, 0.2, 0.0),
                    Visibility::Hidden,
                ));

                pivot
                    .spawn((
                        Viewmodel,
                        Mesh3d(viewmodel_mesh),
                        MeshMaterial3d(viewmodel_material),
                        Transform::from_translation(VIEWMODEL_REST),
                        SmoothTransform::toward(Transform::from_translation(VIEWMODEL_REST), 15.0, 12.0),
                    ))
                    .with_children(|viewmodel| {
                        viewmodel.spawn((
                            MuzzleFlash::default(),
                            PointLight {
                                color: Color::srgb(1.0, 0.8, 0.5),
                                intensity: 200000.0,
                                range: 6.0,
                                shadows_enabled: false,
                                ..default()
                            },
                            Transform::from_xyz(0.0, 0.0, -0.25),
                            Visibility::Hidden,
                        ));
                    });
            });
    });

    info!("Spawned player at {:?}", position);
    player
}

/// Despawn the player and everything attached to it.
pub fn despawn_player(mut commands: Commands, player_query: Query<Entity, With<Player>>) {
    for entity in player_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
