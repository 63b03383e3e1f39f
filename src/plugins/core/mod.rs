//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Dungeon backdrop outside the floor.
const BACKDROP: Color = Color::srgb(0.09, 0.07, 0.09);

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default())
        .insert_resource(ClearColor(BACKDROP));
}
