//! Enemies plugin: the dungeon's wandering monsters.
//!
//! Every kind shares one movement rule (`Wander`), parameterised by the table
//! in `kinds`. Enemies have no invincibility window: a hit lands immediately,
//! and the hit that takes health to zero is the only one that reports a
//! defeat.
//!
//! ```text
//! FixedUpdate:      wander            -> LinearVelocity + Facing
//! FixedPostUpdate:  apply_enemy_hits  -> Health, EnemyDefeated, PendingDespawn
//! PostUpdate:       despawn_marked_enemies
//! ```
//!
//! We avoid despawning physics entities inside the fixed step. A defeated
//! enemy stops colliding at once and is despawned later in `PostUpdate`.

pub mod kinds;

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::actor::{Actor, AnimationClips, ConfigError, Facing, Health, HealthChange};
use crate::plugins::events::EnemyDefeated;
use crate::plugins::knockback::DamageState;
use crate::plugins::movement::{Wander, WanderRng};
use crate::plugins::player::tick_invincibility;
use crate::plugins::world::map_to_world;

pub use kinds::{EnemyConfig, EnemyKind};

#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy;

/// Marker: enemy should be removed from the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// Damage dealt to one enemy by the knight's attack path.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyHit {
    pub target: Entity,
    pub damage: u32,
}

/// Where each monster starts, in map coordinates (y down).
const SPAWN_TABLE: [(EnemyKind, Vec2); 5] = [
    (EnemyKind::Goblin, Vec2::new(125.0, 125.0)),
    (EnemyKind::Ogre, Vec2::new(400.0, 350.0)),
    (EnemyKind::Demon, Vec2::new(300.0, 450.0)),
    (EnemyKind::DemonSmall, Vec2::new(200.0, 300.0)),
    (EnemyKind::Necromancer, Vec2::new(250.0, 350.0)),
];

pub fn plugin(app: &mut App) {
    app.add_message::<EnemyHit>();

    app.add_systems(OnEnter(GameState::InGame), spawn_dungeon_enemies);

    app.add_systems(
        FixedUpdate,
        wander
            .after(tick_invincibility)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        apply_enemy_hits.run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        despawn_marked_enemies.run_if(in_state(GameState::InGame)),
    );
}

// -----------------------------------------------------------------------------
// Spawn
// -----------------------------------------------------------------------------

fn enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Player])
}

/// Keep membership as "Enemy" but clear filters so nothing new touches it.
#[inline]
fn non_interacting_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

/// Validate `kind`'s configuration and spawn it at `at` (world coordinates).
pub fn spawn_enemy<R: Rng + ?Sized>(
    commands: &mut Commands,
    kind: EnemyKind,
    at: Vec2,
    rng: &mut R,
) -> Result<Entity, ConfigError> {
    let config = kind.config();
    spawn_enemy_with(commands, kind, &config, at, rng)
}

pub fn spawn_enemy_with<R: Rng + ?Sized>(
    commands: &mut Commands,
    kind: EnemyKind,
    config: &EnemyConfig,
    at: Vec2,
    rng: &mut R,
) -> Result<Entity, ConfigError> {
    let (actor, health) = config.stats.into_parts()?;
    let wander = Wander::new(config.capabilities, config.change_direction_interval, rng)?;
    let facing = wander.facing(config.clips, false);
    let velocity = LinearVelocity(wander.velocity(actor.speed));

    let e = commands
        .spawn((
            Name::new(kind.name()),
            Enemy,
            kind,
            actor,
            health,
            wander,
            config.clips,
            facing,
            Sprite {
                color: config.tint,
                custom_size: Some(config.hitbox),
                ..default()
            },
            Transform::from_translation(at.extend(1.0)),
            RigidBody::Dynamic,
            Collider::rectangle(config.hitbox.x, config.hitbox.y),
            LockedAxes::ROTATION_LOCKED,
            (enemy_layers(), velocity, DespawnOnExit(GameState::InGame)),
        ))
        .id();

    debug!("spawned {} at {at}", kind.name());
    Ok(e)
}

fn spawn_dungeon_enemies(mut commands: Commands, mut rng: ResMut<WanderRng>) -> Result {
    for (kind, at) in SPAWN_TABLE {
        spawn_enemy(&mut commands, kind, map_to_world(at), &mut rng.0)?;
    }
    info!("spawned {} enemies", SPAWN_TABLE.len());
    Ok(())
}

// -----------------------------------------------------------------------------
// Movement
// -----------------------------------------------------------------------------

/// Randomised-interval wandering for every live enemy.
///
/// The timer keeps running while an enemy is being knocked back, but the
/// knockback velocity is left alone.
pub fn wander(
    time: Res<Time<Fixed>>,
    mut rng: ResMut<WanderRng>,
    mut q: Query<
        (
            &Actor,
            &AnimationClips,
            &mut Wander,
            &mut LinearVelocity,
            &mut Facing,
            Option<&DamageState>,
        ),
        (With<Enemy>, Without<PendingDespawn>),
    >,
) {
    let dt: Duration = time.delta();
    for (actor, clips, mut wander, mut vel, mut facing, damage) in &mut q {
        wander.tick(dt, &mut rng.0);
        if damage.is_some_and(DamageState::is_hit) {
            continue;
        }
        vel.0 = wander.velocity(actor.speed);
        let next = wander.facing(*clips, facing.flip_x);
        facing.set_if_neq(next);
    }
}

// -----------------------------------------------------------------------------
// Damage + defeat
// -----------------------------------------------------------------------------

/// Apply `EnemyHit`s. Defeat is reported exactly once per enemy.
pub fn apply_enemy_hits(
    mut hits: MessageReader<EnemyHit>,
    mut commands: Commands,
    mut q: Query<
        (&Name, &Actor, &mut Health, &mut LinearVelocity, &mut CollisionLayers),
        (With<Enemy>, Without<PendingDespawn>),
    >,
    mut defeated: MessageWriter<EnemyDefeated>,
) {
    for hit in hits.read() {
        let Ok((name, actor, mut hp, mut vel, mut layers)) = q.get_mut(hit.target) else {
            continue;
        };

        match hp.apply_damage(hit.damage) {
            HealthChange::Damaged { remaining } => {
                debug!("{name} took {} damage, {remaining} left", hit.damage);
            }
            HealthChange::Defeated => {
                vel.0 = Vec2::ZERO;
                *layers = non_interacting_enemy_layers();
                commands.entity(hit.target).insert(PendingDespawn);
                defeated.write(EnemyDefeated { points: actor.point_value });
                info!("{name} defeated (+{})", actor.point_value);
            }
            HealthChange::AlreadyDefeated => {}
        }
    }
}

/// Despawn enemies marked for removal.
fn despawn_marked_enemies(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
