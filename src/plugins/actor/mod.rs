//! Actor state shared by the knight and every enemy kind.
//!
//! An actor is plain data: `Health` is gameplay truth, `Actor` holds the
//! numbers the movement and combat rules read, and `Facing` is what the
//! animation side is asked to show this tick.
//!
//! Configuration is validated once, when the parts are built. After that the
//! rest of the simulation treats these values as trusted.

use bevy::prelude::*;
use thiserror::Error;

/// Construction-time contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("actor must start with health above zero")]
    ZeroHealth,
    #[error("speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),
    #[error("knockback must be finite and non-negative, got {0}")]
    InvalidKnockBack(f32),
    #[error("direction change interval must be longer than zero")]
    ZeroDirectionInterval,
}

/// Per-kind configuration record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorStats {
    pub health: u32,
    /// Inflicted on whoever this actor damages.
    pub damage: u32,
    /// Pixels per second.
    pub speed: f32,
    /// Impulse magnitude imparted to the knight on contact. Enemy side only.
    pub knock_back: f32,
    /// Score credited on defeat. Enemy side only.
    pub point_value: u32,
}

impl ActorStats {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.health == 0 {
            return Err(ConfigError::ZeroHealth);
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !self.knock_back.is_finite() || self.knock_back < 0.0 {
            return Err(ConfigError::InvalidKnockBack(self.knock_back));
        }
        Ok(())
    }

    /// Validate, then split into the components an actor entity carries.
    pub fn into_parts(self) -> Result<(Actor, Health), ConfigError> {
        self.validate()?;
        Ok((
            Actor {
                damage: self.damage,
                speed: self.speed,
                knock_back: self.knock_back,
                point_value: self.point_value,
            },
            Health { hp: self.health },
        ))
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub damage: u32,
    pub speed: f32,
    pub knock_back: f32,
    pub point_value: u32,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub hp: u32,
}

/// Result of a single damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthChange {
    Damaged { remaining: u32 },
    /// Health crossed to zero on this call. Reported once per actor.
    Defeated,
    AlreadyDefeated,
}

impl Health {
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.hp == 0
    }

    pub fn apply_damage(&mut self, amount: u32) -> HealthChange {
        if self.is_depleted() {
            return HealthChange::AlreadyDefeated;
        }
        self.hp = self.hp.saturating_sub(amount);
        if self.is_depleted() {
            HealthChange::Defeated
        } else {
            HealthChange::Damaged { remaining: self.hp }
        }
    }
}

/// Idle/moving clip pair for one actor kind.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClips {
    pub idle: &'static str,
    pub run: &'static str,
}

/// What the animation side should play this tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facing {
    pub clip: &'static str,
    pub flip_x: bool,
}

impl Facing {
    pub fn idle(clips: AnimationClips) -> Self {
        Self { clip: clips.idle, flip_x: false }
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(Update, sync_sprite_facing);
}

/// Mirror the requested facing onto the placeholder sprite.
fn sync_sprite_facing(mut q: Query<(&Facing, &mut Sprite), Changed<Facing>>) {
    for (facing, mut sprite) in &mut q {
        sprite.flip_x = facing.flip_x;
    }
}
