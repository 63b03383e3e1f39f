//! Player plugin: the knight.
//!
//! Pipeline:
//! - Update: sample input into `PlayerInput`, swing the sword
//! - FixedUpdate: advance the invincibility timer, then apply input velocity
//! - FixedPostUpdate: after contacts are resolved, detect defeat
//!
//! While the knight is invincible after a hit, input is ignored and the
//! knockback impulse keeps the body moving until the window closes.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::actor::{Actor, ActorStats, AnimationClips, ConfigError, Facing, Health};
use crate::plugins::combat::resolve_enemy_contacts;
use crate::plugins::enemies::{Enemy, EnemyHit, PendingDespawn};
use crate::plugins::events::PlayerHealthChanged;
use crate::plugins::knockback::DamageState;
use crate::plugins::movement::{DirectionalInput, input_velocity, player_animation};
use crate::plugins::world::map_to_world;

const KNIGHT_CLIPS: AnimationClips = AnimationClips { idle: "knight-idle", run: "knight-run" };
const KNIGHT_HITBOX: Vec2 = Vec2::new(14.0, 20.0);
const KNIGHT_COLOR: Color = Color::srgb(0.2, 0.75, 0.9);
const HIT_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

#[derive(Component)]
pub struct Player;

/// Terminal marker: the knight's health reached zero.
#[derive(Component, Debug, Clone, Copy)]
pub struct Defeated;

#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PlayerInput {
    pub directions: DirectionalInput,
    /// Attack pressed this frame.
    pub attack: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (gather_input, swing_sword.after(gather_input), apply_hit_tint)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedUpdate,
            (tick_invincibility, apply_movement.after(tick_invincibility))
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            handle_player_defeat
                .after(resolve_enemy_contacts)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut health_changed: MessageWriter<PlayerHealthChanged>,
) -> Result {
    let hp = tunables.player.health;
    spawn_knight(&mut commands, tunables.player, map_to_world(Vec2::new(200.0, 200.0)))?;

    health_changed.write(PlayerHealthChanged { health: hp });
    info!("knight spawned with {hp} health");
    Ok(())
}

/// Validate `stats` and spawn the knight at `at` (world coordinates).
pub fn spawn_knight(commands: &mut Commands, stats: ActorStats, at: Vec2) -> Result<Entity, ConfigError> {
    let (actor, health) = stats.into_parts()?;
    let layers = CollisionLayers::new(Layer::Player, [Layer::World, Layer::Enemy]);

    let e = commands
        .spawn((
            Name::new("Knight"),
            Player,
            actor,
            health,
            DamageState::default(),
            KNIGHT_CLIPS,
            Facing::idle(KNIGHT_CLIPS),
            Sprite {
                color: KNIGHT_COLOR,
                custom_size: Some(KNIGHT_HITBOX),
                ..default()
            },
            Transform::from_translation(at.extend(2.0)),
            RigidBody::Dynamic,
            Collider::rectangle(KNIGHT_HITBOX.x, KNIGHT_HITBOX.y),
            LockedAxes::ROTATION_LOCKED,
            (
                layers,
                LinearVelocity::ZERO,
                CollidingEntities::default(),
                CollisionEventsEnabled,
                DespawnOnExit(GameState::InGame),
            ),
        ))
        .id();
    Ok(e)
}

/// Arrow keys or WASD. A missing keyboard means no movement.
fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        *input = PlayerInput::default();
        return;
    };

    input.directions = DirectionalInput {
        left: keys.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]),
        right: keys.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]),
        up: keys.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]),
        down: keys.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]),
    };
    input.attack = keys.just_pressed(KeyCode::Space);
}

/// Hit every live enemy within reach of the knight.
fn swing_sword(
    input: Res<PlayerInput>,
    tunables: Res<Tunables>,
    q_player: Query<(&Transform, &Actor), (With<Player>, Without<Defeated>)>,
    q_enemies: Query<(Entity, &Transform), (With<Enemy>, Without<PendingDespawn>)>,
    mut hits: MessageWriter<EnemyHit>,
) {
    if !input.attack {
        return;
    }
    let Ok((player_tf, actor)) = q_player.single() else {
        return;
    };

    let origin = player_tf.translation.truncate();
    let reach_sq = tunables.attack_reach * tunables.attack_reach;
    for (enemy, tf) in &q_enemies {
        if tf.translation.truncate().distance_squared(origin) <= reach_sq {
            hits.write(EnemyHit { target: enemy, damage: actor.damage });
        }
    }
}

pub fn tick_invincibility(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut q: Query<&mut DamageState>,
) {
    let dt = time.delta();
    for mut state in &mut q {
        // Skip receptive actors without touching change detection.
        if state.is_receptive() {
            continue;
        }
        if state.tick(dt, tunables.knockback_window) {
            debug!("invincibility window closed");
        }
    }
}

fn apply_movement(
    input: Res<PlayerInput>,
    mut q_player: Query<
        (&Actor, &DamageState, &AnimationClips, &mut LinearVelocity, &mut Facing),
        (With<Player>, Without<Defeated>),
    >,
) {
    let Ok((actor, state, clips, mut vel, mut facing)) = q_player.single_mut() else {
        return;
    };
    if state.is_hit() {
        return;
    }

    vel.0 = input_velocity(&input.directions, actor.speed);
    let next = player_animation(&input.directions, *clips, facing.flip_x);
    facing.set_if_neq(next);
}

/// Freeze the knight and end the session once health is gone.
pub fn handle_player_defeat(
    mut commands: Commands,
    mut q: Query<(Entity, &Health, &mut LinearVelocity), (With<Player>, Without<Defeated>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (e, hp, mut vel) in &mut q {
        if !hp.is_depleted() {
            continue;
        }
        vel.0 = Vec2::ZERO;
        commands.entity(e).insert(Defeated);
        next_state.set(GameState::GameOver);
        info!("knight defeated");
    }
}

fn apply_hit_tint(mut q: Query<(&DamageState, &mut Sprite), (With<Player>, Changed<DamageState>)>) {
    for (state, mut sprite) in &mut q {
        sprite.color = if state.is_hit() { HIT_COLOR } else { KNIGHT_COLOR };
    }
}
