//! Movement policies.
//!
//! Two ways an actor decides where to go each fixed tick:
//! - the knight reads four directional keys (`input_velocity`),
//! - enemies wander, redrawing a direction every `change_direction_interval`
//!   (`Wander`).
//!
//! Both produce a velocity whose magnitude is exactly the actor's speed, so a
//! diagonal is never faster than a straight line. Everything here is pure; the
//! systems that write `LinearVelocity` live with the player and enemies.

use std::time::Duration;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::common::tunables::Tunables;
use crate::plugins::actor::{AnimationClips, ConfigError, Facing};

pub const AXIS_DIRECTIONS: [IVec2; 4] = [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y];

pub const DIAGONAL_DIRECTIONS: [IVec2; 4] = [
    IVec2::new(1, 1),
    IVec2::new(1, -1),
    IVec2::new(-1, 1),
    IVec2::new(-1, -1),
];

/// "Is down" state for the four directional axes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirectionalInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionalInput {
    /// Raw axis in {-1, 0, 1}². Left beats right, up beats down.
    pub fn axis(&self) -> IVec2 {
        let x = if self.left {
            -1
        } else if self.right {
            1
        } else {
            0
        };
        let y = if self.up {
            1
        } else if self.down {
            -1
        } else {
            0
        };
        IVec2::new(x, y)
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Scale a grid direction to `speed`, normalising diagonals first.
#[inline]
pub fn direction_velocity(direction: IVec2, speed: f32) -> Vec2 {
    direction.as_vec2().normalize_or_zero() * speed
}

pub fn input_velocity(input: &DirectionalInput, speed: f32) -> Vec2 {
    direction_velocity(input.axis(), speed)
}

/// Clip and flip for the knight. Horizontal keys decide the flip; vertical
/// movement alone keeps whatever flip the knight already had.
pub fn player_animation(input: &DirectionalInput, clips: AnimationClips, current_flip: bool) -> Facing {
    if input.left {
        Facing { clip: clips.run, flip_x: true }
    } else if input.right {
        Facing { clip: clips.run, flip_x: false }
    } else if input.up || input.down {
        Facing { clip: clips.run, flip_x: current_flip }
    } else {
        Facing { clip: clips.idle, flip_x: current_flip }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WanderCapabilities {
    /// Pick a direction at construction instead of standing still for the
    /// first interval.
    pub moves_from_start: bool,
    pub can_be_still: bool,
    pub can_move_diagonally: bool,
}

/// Every direction a wanderer with `caps` may draw.
pub fn legal_directions(caps: WanderCapabilities) -> Vec<IVec2> {
    let mut set = AXIS_DIRECTIONS.to_vec();
    if caps.can_move_diagonally {
        set.extend(DIAGONAL_DIRECTIONS);
    }
    if caps.can_be_still {
        set.push(IVec2::ZERO);
    }
    set
}

/// Uniform draw from `legal`. An empty set yields standing still.
pub fn choose_direction<R: rand::Rng + ?Sized>(legal: &[IVec2], rng: &mut R) -> IVec2 {
    legal.choose(rng).copied().unwrap_or(IVec2::ZERO)
}

/// Randomised-interval wandering state. Owned by one enemy.
#[derive(Component, Debug, Clone)]
pub struct Wander {
    caps: WanderCapabilities,
    interval: Duration,
    direction: IVec2,
    timer: Duration,
}

impl Wander {
    pub fn new<R: rand::Rng + ?Sized>(
        caps: WanderCapabilities,
        interval: Duration,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroDirectionInterval);
        }
        let direction = if caps.moves_from_start {
            choose_direction(&legal_directions(caps), rng)
        } else {
            IVec2::ZERO
        };
        Ok(Self { caps, interval, direction, timer: Duration::ZERO })
    }

    #[inline]
    pub fn direction(&self) -> IVec2 {
        self.direction
    }

    #[inline]
    pub fn timer(&self) -> Duration {
        self.timer
    }

    /// Advance by `dt`. Returns `true` when a new direction was drawn.
    pub fn tick<R: rand::Rng + ?Sized>(&mut self, dt: Duration, rng: &mut R) -> bool {
        self.timer += dt;
        if self.timer < self.interval {
            return false;
        }
        self.timer = Duration::ZERO;
        self.direction = choose_direction(&legal_directions(self.caps), rng);
        true
    }

    pub fn velocity(&self, speed: f32) -> Vec2 {
        direction_velocity(self.direction, speed)
    }

    /// Moving clip for any non-zero direction; flip tracks the sign of x and
    /// holds when x is zero.
    pub fn facing(&self, clips: AnimationClips, current_flip: bool) -> Facing {
        let clip = if self.direction == IVec2::ZERO { clips.idle } else { clips.run };
        let flip_x = match self.direction.x {
            x if x < 0 => true,
            x if x > 0 => false,
            _ => current_flip,
        };
        Facing { clip, flip_x }
    }
}

/// Random source for every wanderer in the session.
#[derive(Resource, Debug)]
pub struct WanderRng(pub StdRng);

impl WanderRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

pub fn plugin(app: &mut App) {
    let seed = app.world().resource::<Tunables>().wander_seed;
    app.insert_resource(WanderRng::from_seed(seed));
}

#[cfg(test)]
mod tests;
