//! World plugin - demo room, props, and attaching the player.

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::{spawn_player, ControllerConfig};

use super::interactables::{close_sign, flicker_lamps, spawn_interactables, OpenSign};
use super::level::{spawn_room, LevelGeometry, RoomLayout};

/// World plugin - handles level setup and prop behaviour.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), setup_level)
            .add_systems(
                Update,
                (close_sign, flicker_lamps).run_if(in_state(GameState::InGame)),
            )
            .add_systems(OnExit(GameState::InGame), cleanup_level);
    }
}

/// Build the room, its props, and spawn the player.
pub fn setup_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ControllerConfig>,
) {
    let layout = RoomLayout::default();
    info!("Building demo room {}x{}", layout.width, layout.depth);

    spawn_room(&mut commands, &mut meshes, &mut materials, &layout);
    spawn_interactables(&mut commands, &mut meshes, &mut materials);
    spawn_player(
        &mut commands,
        &mut meshes,
        &mut materials,
        layout.spawn_point(),
        &config,
    );
}

/// Clean up level entities when leaving InGame state.
fn cleanup_level(mut commands: Commands, level_query: Query<Entity, With<LevelGeometry>>) {
    for entity in level_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<OpenSign>();
}
