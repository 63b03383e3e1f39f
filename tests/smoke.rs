mod common;

use bevy::prelude::*;
use dungeon_knight::common::state::GameState;
use dungeon_knight::plugins::actor::Health;
use dungeon_knight::plugins::enemies::{Enemy, EnemyKind};
use dungeon_knight::plugins::ui::Hud;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();
    common::step(&mut app, 3);
}

#[test]
fn session_opens_with_full_cast() {
    let mut app = common::app_in_game();

    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::InGame);

    let knight = common::player(&mut app);
    assert_eq!(app.world().get::<Health>(knight).unwrap().hp, 6);

    let enemies = app
        .world_mut()
        .query_filtered::<&EnemyKind, With<Enemy>>()
        .iter(app.world())
        .count();
    assert_eq!(enemies, EnemyKind::ALL.len());

    // Initial health reached the HUD through the bus.
    assert_eq!(app.world().resource::<Hud>().health, 6);
}

#[test]
fn half_second_clock_reaches_the_hud() {
    let mut app = common::app_in_game();
    // ~1.1 s of 16 ms frames.
    common::step(&mut app, 70);

    let hud = *app.world().resource::<Hud>();
    assert!(hud.half_seconds >= 2, "{hud:?}");
}
