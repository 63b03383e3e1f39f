//! Global state machine.
//!
//! `InGame` is one play session. Leaving it tears the session down: every
//! entity spawned with `DespawnOnExit(GameState::InGame)` goes away and the
//! event bus queues are cleared.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    /// Entered once the knight's health reaches zero.
    GameOver,
}
