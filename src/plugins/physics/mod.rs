//! Physics plugin: top-down avian setup.
//!
//! No gravity; one tile is one physics meter so avian's internal tolerances
//! scale with the sprites. Contacts feed `CollidingEntities`, which the
//! combat plugin reads every fixed tick.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm))
        .insert_resource(Gravity(Vec2::ZERO));
}
