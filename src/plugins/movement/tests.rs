use std::collections::HashSet;
use std::time::Duration;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

const CLIPS: AnimationClips = AnimationClips { idle: "demon-small-idle", run: "demon-small-run" };
const KNIGHT: AnimationClips = AnimationClips { idle: "knight-idle", run: "knight-run" };

fn input(left: bool, right: bool, up: bool, down: bool) -> DirectionalInput {
    DirectionalInput { left, right, up, down }
}

fn wanderer() -> WanderCapabilities {
    WanderCapabilities { moves_from_start: true, can_be_still: false, can_move_diagonally: true }
}

// -----------------------------------------------------------------------------
// Knight input
// -----------------------------------------------------------------------------

#[test]
fn every_key_combination_moves_at_configured_speed() {
    let speed = 125.0;
    for bits in 0u8..16 {
        let i = input(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
        let v = input_velocity(&i, speed);
        if v != Vec2::ZERO {
            assert!((v.length() - speed).abs() < 1e-3, "{i:?} gave {v:?}");
        }
    }
}

#[test]
fn diagonal_is_not_faster_than_axis() {
    let diagonal = input_velocity(&input(false, true, true, false), 125.0);
    let straight = input_velocity(&input(false, true, false, false), 125.0);
    assert!((diagonal.length() - straight.length()).abs() < 1e-3);
    assert!(diagonal.x > 0.0 && diagonal.y > 0.0);
}

#[test]
fn left_beats_right_and_up_beats_down() {
    assert_eq!(input(true, true, false, false).axis(), IVec2::NEG_X);
    assert_eq!(input(false, false, true, true).axis(), IVec2::Y);
    assert_eq!(input(false, false, false, false).axis(), IVec2::ZERO);
}

#[test]
fn no_keys_means_no_movement() {
    assert_eq!(input_velocity(&DirectionalInput::default(), 125.0), Vec2::ZERO);
}

#[test]
fn knight_animation_priorities() {
    let left_and_up = player_animation(&input(true, false, true, false), KNIGHT, false);
    assert_eq!(left_and_up, Facing { clip: "knight-run", flip_x: true });

    let right = player_animation(&input(false, true, false, false), KNIGHT, true);
    assert_eq!(right, Facing { clip: "knight-run", flip_x: false });

    // Vertical-only keeps the previous flip.
    let down = player_animation(&input(false, false, false, true), KNIGHT, true);
    assert_eq!(down, Facing { clip: "knight-run", flip_x: true });

    let idle = player_animation(&DirectionalInput::default(), KNIGHT, true);
    assert_eq!(idle, Facing { clip: "knight-idle", flip_x: true });
}

// -----------------------------------------------------------------------------
// Direction sets
// -----------------------------------------------------------------------------

#[test]
fn legal_direction_sets_follow_capabilities() {
    let axis_only = WanderCapabilities { moves_from_start: true, can_be_still: false, can_move_diagonally: false };
    assert_eq!(legal_directions(axis_only).len(), 4);

    let still = WanderCapabilities { can_be_still: true, ..axis_only };
    let set = legal_directions(still);
    assert_eq!(set.len(), 5);
    assert!(set.contains(&IVec2::ZERO));

    let all = WanderCapabilities { can_be_still: true, can_move_diagonally: true, ..axis_only };
    assert_eq!(legal_directions(all).len(), 9);
}

#[test]
fn choose_direction_stays_in_set_and_covers_it() {
    let mut rng = StdRng::seed_from_u64(7);
    let legal = legal_directions(wanderer());
    let mut seen = HashSet::new();
    for _ in 0..2000 {
        let d = choose_direction(&legal, &mut rng);
        assert!(legal.contains(&d));
        seen.insert(d);
    }
    assert_eq!(seen.len(), legal.len());
}

#[test]
fn choose_direction_replays_with_same_seed() {
    let legal = legal_directions(wanderer());
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let run_a: Vec<_> = (0..32).map(|_| choose_direction(&legal, &mut a)).collect();
    let run_b: Vec<_> = (0..32).map(|_| choose_direction(&legal, &mut b)).collect();
    assert_eq!(run_a, run_b);
}

#[test]
fn empty_set_stands_still() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(choose_direction(&[], &mut rng), IVec2::ZERO);
}

// -----------------------------------------------------------------------------
// Wander
// -----------------------------------------------------------------------------

#[test]
fn zero_interval_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = Wander::new(wanderer(), Duration::ZERO, &mut rng).unwrap_err();
    assert_eq!(err, ConfigError::ZeroDirectionInterval);
}

#[test]
fn late_starter_stands_still_until_first_interval() {
    let mut rng = StdRng::seed_from_u64(3);
    let caps = WanderCapabilities { moves_from_start: false, can_be_still: false, can_move_diagonally: false };
    let mut w = Wander::new(caps, Duration::from_millis(2000), &mut rng).unwrap();
    assert_eq!(w.direction(), IVec2::ZERO);
    assert_eq!(w.velocity(40.0), Vec2::ZERO);

    assert!(!w.tick(Duration::from_millis(1999), &mut rng));
    assert_eq!(w.direction(), IVec2::ZERO);

    assert!(w.tick(Duration::from_millis(1), &mut rng));
    // can_be_still is false, so the first draw always moves.
    assert_ne!(w.direction(), IVec2::ZERO);
    assert_eq!(w.timer(), Duration::ZERO);
}

#[test]
fn early_starter_moves_immediately() {
    let mut rng = StdRng::seed_from_u64(9);
    let w = Wander::new(wanderer(), Duration::from_millis(2000), &mut rng).unwrap();
    assert_ne!(w.direction(), IVec2::ZERO);
}

#[test]
fn redraws_exactly_once_per_interval_window() {
    let mut rng = StdRng::seed_from_u64(0xD00D);
    let mut w = Wander::new(wanderer(), Duration::from_millis(2000), &mut rng).unwrap();

    // 16ms frames for 20 seconds.
    let dt = Duration::from_millis(16);
    let mut elapsed_since_draw = Duration::ZERO;
    let mut draws = 0;
    for _ in 0..1250 {
        elapsed_since_draw += dt;
        if w.tick(dt, &mut rng) {
            draws += 1;
            // Never mid-window.
            assert!(elapsed_since_draw >= Duration::from_millis(2000));
            assert!(elapsed_since_draw < Duration::from_millis(2000) + dt);
            elapsed_since_draw = Duration::ZERO;
        }
    }
    // 125 ticks of 16ms fill one window exactly.
    assert_eq!(draws, 10);
}

#[test]
fn wander_velocity_has_speed_magnitude() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut w = Wander::new(wanderer(), Duration::from_millis(100), &mut rng).unwrap();
    for _ in 0..200 {
        w.tick(Duration::from_millis(100), &mut rng);
        let v = w.velocity(55.0);
        assert!((v.length() - 55.0).abs() < 1e-3);
    }
}

#[test]
fn wander_facing_mirrors_horizontal_sign() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut w = Wander::new(wanderer(), Duration::from_millis(10), &mut rng).unwrap();
    for _ in 0..100 {
        w.tick(Duration::from_millis(10), &mut rng);
        let f = w.facing(CLIPS, true);
        assert_eq!(f.clip, "demon-small-run");
        match w.direction().x {
            x if x < 0 => assert!(f.flip_x),
            x if x > 0 => assert!(!f.flip_x),
            _ => assert!(f.flip_x),
        }
    }

    let still = WanderCapabilities { moves_from_start: false, can_be_still: true, can_move_diagonally: false };
    let w = Wander::new(still, Duration::from_millis(10), &mut rng).unwrap();
    assert_eq!(w.facing(CLIPS, false), Facing { clip: "demon-small-idle", flip_x: false });
}
