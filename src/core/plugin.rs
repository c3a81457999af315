//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::capture::*;
use super::config::{load_accessibility, Accessibility};
use super::events::*;
use super::states::*;
use super::tween::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame) and the Exploring/Paused sub-state
/// - Global events (InteractionFound, InteractionLost)
/// - Cursor capture tracking and the pause toggle
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()
            .init_resource::<CursorCapture>()
            .init_resource::<Accessibility>()

            // Register global events
            .add_event::<InteractionFound>()
            .add_event::<InteractionLost>()

            // Config files are read synchronously at startup, then gameplay begins
            .add_systems(Startup, load_accessibility)
            .add_systems(OnEnter(GameState::Loading), transition_to_in_game)

            // Gameplay owns the cursor only while exploring
            .add_systems(OnEnter(PlayState::Exploring), grab_cursor)
            .add_systems(OnExit(PlayState::Exploring), release_cursor)

            // Pause/unpause with Escape key
            .add_systems(Update, handle_pause_input.run_if(in_state(GameState::InGame)))

            .add_systems(Update, update_smooth_transforms);
    }
}

/// Leave the loading state once startup loaders have run.
fn transition_to_in_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Exploring => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Exploring),
        }
    }
}
