//! Tunable gameplay constants.

use std::time::Duration;

use bevy::prelude::*;

use crate::plugins::actor::ActorStats;

/// Default length of the post-hit invincibility window.
pub const KNOCKBACK_WINDOW: Duration = Duration::from_millis(200);

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// One dungeon tile is one meter for the physics solver.
    pub pixels_per_meter: f32,
    pub player: ActorStats,
    /// Sword swing radius around the knight, in pixels.
    pub attack_reach: f32,
    pub knockback_window: Duration,
    /// Seed for enemy wandering. `None` seeds from entropy.
    pub wander_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 16.0,
            player: ActorStats {
                health: 6,
                damage: 5,
                speed: 125.0,
                knock_back: 0.0,
                point_value: 0,
            },
            attack_reach: 24.0,
            knockback_window: KNOCKBACK_WINDOW,
            wander_seed: None,
        }
    }
}
