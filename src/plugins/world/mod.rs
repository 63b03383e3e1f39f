//! World plugin: dungeon bounds and floor.
//!
//! The dungeon is laid out in map coordinates (origin top-left, y down, one
//! tile = 16 px). The simulation runs in world coordinates (y up), so every
//! placement goes through `map_to_world`.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

pub const TILE: f32 = 16.0;
pub const MAP_SIZE: Vec2 = Vec2::new(800.0, 560.0);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_walls);
    app.add_systems(OnEnter(GameState::InGame), spawn_floor);
}

/// Map coordinates (y down) to world coordinates (y up).
#[inline]
pub fn map_to_world(p: Vec2) -> Vec2 {
    Vec2::new(p.x, MAP_SIZE.y - p.y)
}

fn spawn_walls(mut commands: Commands) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let thickness = TILE;

    let wall_layers = CollisionLayers::new(Layer::World, [Layer::Player, Layer::Enemy]);

    let mut spawn_wall = |name: &str, center: Vec2, size: Vec2| {
        commands.spawn((
            Name::new(name.to_owned()),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.5)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    };

    let mid = MAP_SIZE * 0.5;
    let horizontal = Vec2::new(MAP_SIZE.x + thickness * 2.0, thickness);
    let vertical = Vec2::new(thickness, MAP_SIZE.y);

    spawn_wall("WallTop", Vec2::new(mid.x, MAP_SIZE.y + thickness * 0.5), horizontal);
    spawn_wall("WallBottom", Vec2::new(mid.x, -thickness * 0.5), horizontal);
    spawn_wall("WallLeft", Vec2::new(-thickness * 0.5, mid.y), vertical);
    spawn_wall("WallRight", Vec2::new(MAP_SIZE.x + thickness * 0.5, mid.y), vertical);
}

/// Checkerboard floor of solid-colour tiles.
fn spawn_floor(mut commands: Commands) {
    let cols = (MAP_SIZE.x / TILE) as i32;
    let rows = (MAP_SIZE.y / TILE) as i32;

    (0..rows)
        .flat_map(|y| (0..cols).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let center = Vec2::new((x as f32 + 0.5) * TILE, (y as f32 + 0.5) * TILE);
            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.14, 0.14, 0.16)
            } else {
                Color::srgb(0.12, 0.12, 0.14)
            };

            commands.spawn((
                Sprite::from_color(color, Vec2::splat(TILE)),
                Transform::from_translation(center.extend(0.0)),
                DespawnOnExit(GameState::InGame),
            ));
        });
}
