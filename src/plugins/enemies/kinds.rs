//! Per-kind enemy configuration.

use std::time::Duration;

use bevy::prelude::*;

use crate::plugins::actor::{ActorStats, AnimationClips};
use crate::plugins::movement::WanderCapabilities;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Goblin,
    Ogre,
    Demon,
    DemonSmall,
    Necromancer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyConfig {
    pub stats: ActorStats,
    pub change_direction_interval: Duration,
    pub capabilities: WanderCapabilities,
    pub clips: AnimationClips,
    /// Collider size in pixels.
    pub hitbox: Vec2,
    pub tint: Color,
}

impl EnemyKind {
    pub const ALL: [Self; 5] = [
        Self::Goblin,
        Self::Ogre,
        Self::Demon,
        Self::DemonSmall,
        Self::Necromancer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Goblin => "Goblin",
            Self::Ogre => "Ogre",
            Self::Demon => "Demon",
            Self::DemonSmall => "DemonSmall",
            Self::Necromancer => "Necromancer",
        }
    }

    pub fn config(self) -> EnemyConfig {
        match self {
            Self::Goblin => EnemyConfig {
                stats: ActorStats { health: 3, damage: 1, speed: 60.0, knock_back: 150.0, point_value: 5 },
                change_direction_interval: Duration::from_millis(1500),
                capabilities: WanderCapabilities {
                    moves_from_start: true,
                    can_be_still: true,
                    can_move_diagonally: false,
                },
                clips: AnimationClips { idle: "goblin-idle", run: "goblin-run" },
                hitbox: Vec2::new(10.0, 10.0),
                tint: Color::srgb(0.35, 0.7, 0.3),
            },
            Self::Ogre => EnemyConfig {
                stats: ActorStats { health: 12, damage: 2, speed: 35.0, knock_back: 300.0, point_value: 25 },
                change_direction_interval: Duration::from_millis(3000),
                capabilities: WanderCapabilities {
                    moves_from_start: false,
                    can_be_still: true,
                    can_move_diagonally: false,
                },
                clips: AnimationClips { idle: "ogre-idle", run: "ogre-run" },
                hitbox: Vec2::new(20.0, 25.0),
                tint: Color::srgb(0.55, 0.45, 0.3),
            },
            Self::Demon => EnemyConfig {
                stats: ActorStats { health: 8, damage: 3, speed: 45.0, knock_back: 250.0, point_value: 20 },
                change_direction_interval: Duration::from_millis(2500),
                capabilities: WanderCapabilities {
                    moves_from_start: true,
                    can_be_still: false,
                    can_move_diagonally: true,
                },
                clips: AnimationClips { idle: "demon-idle", run: "demon-run" },
                hitbox: Vec2::new(13.0, 20.0),
                tint: Color::srgb(0.85, 0.2, 0.2),
            },
            Self::DemonSmall => EnemyConfig {
                stats: ActorStats { health: 5, damage: 3, speed: 55.0, knock_back: 250.0, point_value: 10 },
                change_direction_interval: Duration::from_millis(2000),
                capabilities: WanderCapabilities {
                    moves_from_start: true,
                    can_be_still: false,
                    can_move_diagonally: true,
                },
                clips: AnimationClips { idle: "demon-small-idle", run: "demon-small-run" },
                hitbox: Vec2::new(10.0, 10.0),
                tint: Color::srgb(0.95, 0.4, 0.3),
            },
            Self::Necromancer => EnemyConfig {
                stats: ActorStats { health: 6, damage: 2, speed: 40.0, knock_back: 200.0, point_value: 15 },
                change_direction_interval: Duration::from_millis(2000),
                capabilities: WanderCapabilities {
                    moves_from_start: false,
                    can_be_still: true,
                    can_move_diagonally: true,
                },
                clips: AnimationClips { idle: "necromancer-idle", run: "necromancer-run" },
                hitbox: Vec2::new(13.0, 20.0),
                tint: Color::srgb(0.5, 0.3, 0.7),
            },
        }
    }
}
