//! HUD state fed by the event bus.
//!
//! Headless on purpose: the numbers live in a resource, and whatever draws
//! them only reads `Hud`.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::combat::resolve_enemy_contacts;
use crate::plugins::events::{HalfSecondTimer, PlayerHealthChanged, ScoreUpdated};
use crate::plugins::score::tally_defeats;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub health: u32,
    pub score: u32,
    /// Half-second periods since the session opened.
    pub half_seconds: u32,
}

impl Hud {
    /// Play clock in whole seconds.
    pub fn seconds(&self) -> u32 {
        self.half_seconds / 2
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Hud>()
        .add_systems(OnEnter(GameState::InGame), reset_hud)
        .add_systems(
            FixedPostUpdate,
            (track_health, track_score, track_clock)
                .after(resolve_enemy_contacts)
                .after(tally_defeats)
                .run_if(in_state(GameState::InGame)),
        );
}

fn reset_hud(mut hud: ResMut<Hud>) {
    *hud = Hud::default();
}

pub fn track_health(mut reader: MessageReader<PlayerHealthChanged>, mut hud: ResMut<Hud>) {
    // Last write in the tick wins.
    if let Some(ev) = reader.read().last() {
        hud.health = ev.health;
    }
}

pub fn track_score(mut reader: MessageReader<ScoreUpdated>, mut hud: ResMut<Hud>) {
    if let Some(ev) = reader.read().last() {
        hud.score = ev.total;
        debug!("score {}", ev.total);
    }
}

pub fn track_clock(mut reader: MessageReader<HalfSecondTimer>, mut hud: ResMut<Hud>) {
    let n = reader.read().count() as u32;
    if n > 0 {
        hud.half_seconds = hud.half_seconds.saturating_add(n);
    }
}
