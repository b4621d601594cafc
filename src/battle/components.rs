//! Battle domain: components and resources for the quiz battle scene.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::battle::sequence::{AttackSequence, Side};
use crate::battle::state::AnswerOutcome;
use crate::content::{AttackTuning, BattleTuning};

/// Marker for everything spawned by the battle scene
#[derive(Component, Debug)]
pub struct BattleEntity;

/// A combatant sprite
#[derive(Component, Debug)]
pub struct Fighter {
    pub side: Side,
    pub home: Vec2,
    /// Scale before the enemy size modifier and idle breathing
    pub base_scale: f32,
}

#[derive(Component, Debug)]
pub struct QuestionText;

#[derive(Component, Debug)]
pub struct EnemyNameText;

/// Answer button in slot 0..3
#[derive(Component, Debug)]
pub struct AnswerButton {
    pub slot: usize,
}

#[derive(Component, Debug)]
pub struct AnswerLabel {
    pub slot: usize,
}

/// Fill element of the player heart at `index`
#[derive(Component, Debug)]
pub struct PlayerHeartFill {
    pub index: usize,
}

#[derive(Component, Debug)]
pub struct EnemyHeartRow;

#[derive(Component, Debug)]
pub struct EnemyHeart;

/// "Press Enter" prompt shown once the battle is decided
#[derive(Component, Debug)]
pub struct ContinueHint;

/// Gameplay RNG for questions and shakes
#[derive(Resource)]
pub struct BattleRng(pub ChaCha8Rng);

impl BattleRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// The attack sequence in flight, plus what is needed to start the next one.
#[derive(Resource, Debug, Default)]
pub struct BattleAnimation {
    pub sequence: Option<AttackSequence>,
    pub attack: AttackTuning,
    pub player_home: Vec2,
    pub enemy_home: Vec2,
}

impl BattleAnimation {
    pub fn new(tuning: &BattleTuning) -> Self {
        Self {
            sequence: None,
            attack: tuning.attack.clone(),
            player_home: Vec2::from(tuning.player_home),
            enemy_home: Vec2::from(tuning.enemy_home),
        }
    }

    /// Correct answers make the player attack; wrong ones the enemy.
    pub fn start(&mut self, outcome: AnswerOutcome) {
        let sequence = match outcome {
            AnswerOutcome::Correct => {
                AttackSequence::new(Side::Player, self.player_home, self.enemy_home, &self.attack)
            }
            AnswerOutcome::Incorrect => {
                AttackSequence::new(Side::Enemy, self.enemy_home, self.player_home, &self.attack)
            }
        };
        self.sequence = Some(sequence);
    }

    pub fn is_playing(&self) -> bool {
        self.sequence.is_some()
    }
}
