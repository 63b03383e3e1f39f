//! Score keeper: turns `EnemyDefeated` into a running `ScoreUpdated` total.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::enemies::apply_enemy_hits;
use crate::plugins::events::{EnemyDefeated, ScoreUpdated};

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub total: u32,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Score>()
        .add_systems(OnEnter(GameState::InGame), reset_score)
        .add_systems(
            FixedPostUpdate,
            tally_defeats
                .after(apply_enemy_hits)
                .run_if(in_state(GameState::InGame)),
        );
}

fn reset_score(mut score: ResMut<Score>) {
    *score = Score::default();
}

pub fn tally_defeats(
    mut defeated: MessageReader<EnemyDefeated>,
    mut score: ResMut<Score>,
    mut writer: MessageWriter<ScoreUpdated>,
) {
    for ev in defeated.read() {
        score.total = score.total.saturating_add(ev.points);
        writer.write(ScoreUpdated { total: score.total });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::{drain_messages, init_messages, run_system_once};

    #[test]
    fn each_defeat_publishes_running_total() {
        let mut world = World::new();
        world.init_resource::<Score>();
        init_messages::<EnemyDefeated>(&mut world);
        init_messages::<ScoreUpdated>(&mut world);

        world.write_message(EnemyDefeated { points: 10 });
        world.write_message(EnemyDefeated { points: 25 });

        run_system_once(&mut world, tally_defeats);

        assert_eq!(world.resource::<Score>().total, 35);
        assert_eq!(
            drain_messages::<ScoreUpdated>(&mut world),
            vec![ScoreUpdated { total: 10 }, ScoreUpdated { total: 35 }]
        );
    }

    #[test]
    fn reset_clears_total() {
        let mut world = World::new();
        world.insert_resource(Score { total: 90 });
        run_system_once(&mut world, reset_score);
        assert_eq!(world.resource::<Score>().total, 0);
    }
}
