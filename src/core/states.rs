//! Game state definitions that control when the controller is attached.
//!
//! The player only exists while in `GameState::InGame`. Inside it, the
//! `PlayState` sub-state decides whether the controller owns the input.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` while config files are read
/// - Enter `InGame` once loading is done; entering spawns (attaches) the
///   player and leaving despawns (detaches) it
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - reading config data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Cursor captured, the controller receives input
    #[default]
    Exploring,
    /// Pause overlay has focus, cursor released
    Paused,
}
