//! Event bus for one play session.
//!
//! Every named event is a Bevy message. Producers write, any number of
//! listeners read later in the same fixed tick; nothing is deferred to a later
//! frame. Messages from one writer keep their write order.
//!
//! The bus lives exactly as long as `GameState::InGame`: clocks reset on
//! entry, queues are cleared on exit so nothing leaks into the next session.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHealthChanged {
    pub health: u32,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyDefeated {
    pub points: u32,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdated {
    pub total: u32,
}

/// Periodic tick for time-based listeners.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfSecondTimer;

#[derive(Resource, Debug)]
pub struct HalfSecondClock(Timer);

impl Default for HalfSecondClock {
    fn default() -> Self {
        Self(Timer::from_seconds(0.5, TimerMode::Repeating))
    }
}

pub fn plugin(app: &mut App) {
    app.add_message::<PlayerHealthChanged>()
        .add_message::<EnemyDefeated>()
        .add_message::<ScoreUpdated>()
        .add_message::<HalfSecondTimer>()
        .init_resource::<HalfSecondClock>();

    app.add_systems(OnEnter(GameState::InGame), open_session)
        .add_systems(OnExit(GameState::InGame), close_session)
        .add_systems(
            FixedUpdate,
            tick_half_second_clock.run_if(in_state(GameState::InGame)),
        );
}

fn open_session(mut clock: ResMut<HalfSecondClock>) {
    clock.0.reset();
}

/// Drop anything still queued so the next session starts clean.
fn close_session(
    mut health: ResMut<Messages<PlayerHealthChanged>>,
    mut defeated: ResMut<Messages<EnemyDefeated>>,
    mut score: ResMut<Messages<ScoreUpdated>>,
    mut half_second: ResMut<Messages<HalfSecondTimer>>,
) {
    health.clear();
    defeated.clear();
    score.clear();
    half_second.clear();
    info!("play session closed");
}

/// One `HalfSecondTimer` per completed period, even when a long tick spans
/// several.
pub fn tick_half_second_clock(
    time: Res<Time<Fixed>>,
    mut clock: ResMut<HalfSecondClock>,
    mut writer: MessageWriter<HalfSecondTimer>,
) {
    clock.0.tick(time.delta());
    for _ in 0..clock.0.times_finished_this_tick() {
        writer.write(HalfSecondTimer);
    }
}
