//! Battle domain: the math quiz battle against a roster of enemies.

mod components;
mod question;
mod sequence;
mod spawn;
mod state;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::battle::spawn::{cleanup_battle, init_battle_rng, setup_battle};
use crate::battle::state::BattleState;
use crate::battle::systems::{
    animate_fighters, handle_answer_clicks, handle_answer_keys, handle_battle_end,
    refresh_battle_hud, tick_attack_sequence,
};
use crate::core::GameState;

pub struct BattlePlugin;

impl Plugin for BattlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_battle_rng)
            .add_systems(OnEnter(GameState::QuizBattle), setup_battle)
            .add_systems(OnExit(GameState::QuizBattle), cleanup_battle)
            .add_systems(
                Update,
                (
                    handle_answer_keys,
                    handle_answer_clicks,
                    tick_attack_sequence,
                    animate_fighters,
                    refresh_battle_hud,
                    handle_battle_end,
                )
                    .chain()
                    .run_if(
                        in_state(GameState::QuizBattle).and(resource_exists::<BattleState>),
                    ),
            );
    }
}
