//! Invincibility & knockback state machine.
//!
//! ```text
//!   Receptive --take_damage--> Invincible { elapsed }
//!       ^                            |
//!       +---- elapsed >= window -----+
//! ```
//!
//! Entering `Invincible` applies the knockback impulse once and marks the actor
//! as hit. While invincible, damage is ignored and the movement policy leaves
//! the velocity alone. The hit marker is the `Invincible` state itself, so the
//! two can't disagree.
//!
//! Only the knight carries a `DamageState`; enemies take damage instantly.

use std::time::Duration;

use bevy::prelude::*;

use crate::plugins::actor::{Health, HealthChange};

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DamageState {
    #[default]
    Receptive,
    Invincible { elapsed: Duration },
}

impl DamageState {
    #[inline]
    pub fn is_receptive(&self) -> bool {
        matches!(self, Self::Receptive)
    }

    /// Visual "hit" marker.
    #[inline]
    pub fn is_hit(&self) -> bool {
        !self.is_receptive()
    }

    /// Advance the invincibility timer. Returns `true` on the tick the actor
    /// becomes receptive again.
    pub fn tick(&mut self, dt: Duration, window: Duration) -> bool {
        let Self::Invincible { elapsed } = self else {
            return false;
        };
        *elapsed += dt;
        if *elapsed >= window {
            *self = Self::Receptive;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invincible or already defeated; nothing changed.
    Ignored,
    Applied(HealthChange),
}

/// Damage entry point for actors with an invincibility window.
///
/// Re-entrant calls while invincible are no-ops: no health change, no second
/// impulse, no timer reset.
pub fn take_damage(
    state: &mut DamageState,
    health: &mut Health,
    velocity: &mut Vec2,
    knockback: Vec2,
    damage: u32,
) -> DamageOutcome {
    if !state.is_receptive() || health.is_depleted() {
        return DamageOutcome::Ignored;
    }

    *velocity = knockback;
    *state = DamageState::Invincible { elapsed: Duration::ZERO };
    DamageOutcome::Applied(health.apply_damage(damage))
}
