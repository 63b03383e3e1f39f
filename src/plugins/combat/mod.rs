//! Contact damage: knight touches enemy, knight gets hurt.
//!
//! ```text
//!   avian narrow phase ──> CollidingEntities (on the knight)
//!                              │
//!   report_player_contacts ────┘  one ActorContact per overlapping
//!                              │  knight/enemy pair, every fixed tick
//!                              v
//!   resolve_enemy_contacts ──> knockback::take_damage ──> PlayerHealthChanged
//! ```
//!
//! The resolver runs on every tick the bodies overlap, not just the first.
//! The invincibility window is what turns that stream into one hit per window.
//! Each pair is reported once per tick: the knight's contact set is the only
//! source, so there is no second registration to double up.
//!
//! Touching never hurts the enemy.

use avian2d::prelude::*;
use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::actor::{Actor, Health, HealthChange};
use crate::plugins::enemies::{Enemy, PendingDespawn};
use crate::plugins::events::PlayerHealthChanged;
use crate::plugins::knockback::{DamageOutcome, DamageState, take_damage};
use crate::plugins::player::{Defeated, Player};

/// Physics-reported overlap between the knight and one enemy.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorContact {
    pub player: Entity,
    pub enemy: Entity,
}

pub fn plugin(app: &mut App) {
    app.add_message::<ActorContact>();

    app.add_systems(
        FixedPostUpdate,
        (
            report_player_contacts.after(CollisionEventSystems),
            resolve_enemy_contacts.after(report_player_contacts),
        )
            .run_if(in_state(GameState::InGame)),
    );
}

/// Knockback impulse pushing the knight away from the enemy.
///
/// Coincident positions fall back to +x so the result is never NaN.
#[inline]
pub fn knockback_impulse(player_pos: Vec2, enemy_pos: Vec2, magnitude: f32) -> Vec2 {
    (player_pos - enemy_pos).try_normalize().unwrap_or(Vec2::X) * magnitude
}

pub fn report_player_contacts(
    q_player: Query<(Entity, &CollidingEntities), (With<Player>, Without<Defeated>)>,
    q_enemies: Query<&Health, (With<Enemy>, Without<PendingDespawn>)>,
    mut writer: MessageWriter<ActorContact>,
) {
    for (player, colliding) in &q_player {
        for &other in colliding.iter() {
            let Ok(hp) = q_enemies.get(other) else {
                continue;
            };
            if hp.is_depleted() {
                continue;
            }
            writer.write(ActorContact { player, enemy: other });
        }
    }
}

pub fn resolve_enemy_contacts(
    mut contacts: MessageReader<ActorContact>,
    mut q_player: Query<
        (&Transform, &mut Health, &mut DamageState, &mut LinearVelocity),
        (With<Player>, Without<Enemy>, Without<Defeated>),
    >,
    q_enemies: Query<(&Transform, &Actor), (With<Enemy>, Without<Player>, Without<PendingDespawn>)>,
    mut health_changed: MessageWriter<PlayerHealthChanged>,
) {
    for contact in contacts.read() {
        let Ok((player_tf, mut hp, mut state, mut vel)) = q_player.get_mut(contact.player) else {
            continue;
        };
        let Ok((enemy_tf, enemy)) = q_enemies.get(contact.enemy) else {
            continue;
        };

        let impulse = knockback_impulse(
            player_tf.translation.truncate(),
            enemy_tf.translation.truncate(),
            enemy.knock_back,
        );

        match take_damage(&mut state, &mut hp, &mut vel.0, impulse, enemy.damage) {
            DamageOutcome::Applied(HealthChange::Damaged { remaining }) => {
                debug!("knight hit for {}, {remaining} left", enemy.damage);
            }
            DamageOutcome::Applied(HealthChange::Defeated) => {
                debug!("knight hit for {}, no health left", enemy.damage);
            }
            DamageOutcome::Applied(HealthChange::AlreadyDefeated) | DamageOutcome::Ignored => {}
        }

        health_changed.write(PlayerHealthChanged { health: hp.hp });
    }
}
