//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `dungeon_knight::game::configure_headless` installs gameplay plugins.
//! - time advances a fixed 16 ms per update so fixed ticks are predictable.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use dungeon_knight::plugins::enemies::EnemyKind;
use dungeon_knight::plugins::player::Player;

pub fn app_headless() -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so avian's collider machinery has what it needs.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)));

    dungeon_knight::game::configure_headless(&mut app);
    // `App::run` would do this; tests drive `update()` by hand, so finish
    // plugin setup here (avian registers its collision resources in `finish`).
    app.finish();
    app.cleanup();
    app
}

/// Headless app that has entered `InGame` and run a few fixed ticks.
pub fn app_in_game() -> App {
    let mut app = app_headless();
    step(&mut app, 4);
    app
}

pub fn step(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn player(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
        .expect("exactly one knight")
}

pub fn enemy_of_kind(app: &mut App, kind: EnemyKind) -> Entity {
    app.world_mut()
        .query::<(Entity, &EnemyKind)>()
        .iter(app.world())
        .find(|(_, k)| **k == kind)
        .map(|(e, _)| e)
        .expect("enemy kind spawned")
}

/// Despawn every enemy but `keep`, so stray wandering can't touch the knight.
pub fn isolate(app: &mut App, keep: Entity) {
    let others: Vec<Entity> = app
        .world_mut()
        .query_filtered::<Entity, With<EnemyKind>>()
        .iter(app.world())
        .filter(|e| *e != keep)
        .collect();
    for e in others {
        app.world_mut().despawn(e);
    }
}
