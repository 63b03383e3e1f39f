//! Feature plugins.

use bevy::prelude::*;

pub mod actor;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod events;
pub mod knockback;
pub mod movement;
pub mod physics;
pub mod player;
pub mod score;
pub mod ui;
pub mod world;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    actor::plugin(app);
    movement::plugin(app);
    events::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    combat::plugin(app);
    score::plugin(app);
    ui::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
