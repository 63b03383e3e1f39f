//! Follow camera.
//!
//! B0001: a system cannot hold `Query<&Transform>` and `Query<&mut Transform>`
//! unless Bevy can prove they are disjoint. `Without<...>` filters encode
//! that the knight is never the camera.
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera at the knight's start, zoomed in
//! PostUpdate:      ease toward the knight before transform propagation
//! ```

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::player::Player;
use crate::plugins::world::map_to_world;

/// Screen pixels per world pixel.
const ZOOM: f32 = 2.5;

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    let start = map_to_world(Vec2::new(200.0, 200.0));
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera { responsiveness: 5.0 },
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / ZOOM,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(start.extend(999.0)),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Exponential ease, frame-rate independent.
#[inline]
pub fn follow_alpha(responsiveness: f32, dt: f32) -> f32 {
    1.0 - (-responsiveness * dt).exp()
}

fn follow_player(
    time: Res<Time>,
    q_player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Player>>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok((mut tf_cam, cam)) = q_cam.single_mut() else {
        return;
    };

    let alpha = follow_alpha(cam.responsiveness, time.delta_secs());
    let target = tf_player.translation.truncate();
    let current = tf_cam.translation.truncate();
    let next = current.lerp(target, alpha);
    tf_cam.translation.x = next.x;
    tf_cam.translation.y = next.y;
}
