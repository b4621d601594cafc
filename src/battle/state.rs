//! Battle domain: roster progression, health counters and answer resolution.

use bevy::prelude::*;
use rand::Rng;

use crate::battle::question::{Question, generate_question};
use crate::content::{EnemyDifficulty, EnemyProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    Idle,
    AwaitingAnswer,
    /// An attack sequence is playing. Input is locked.
    Resolving(AnswerOutcome),
    Victory,
    Defeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartFill {
    Full,
    Half,
    Empty,
}

#[derive(Resource, Debug)]
pub struct BattleState {
    roster: Vec<EnemyProfile>,
    pub enemy_index: usize,
    pub player_health: f32,
    pub player_hearts: u32,
    pub enemy_health: i32,
    pub question: Option<Question>,
    pub phase: BattlePhase,
}

impl BattleState {
    pub fn new(roster: Vec<EnemyProfile>, player_hearts: u32) -> Self {
        let mut state = Self {
            roster,
            enemy_index: 0,
            player_health: player_hearts as f32,
            player_hearts,
            enemy_health: 0,
            question: None,
            phase: BattlePhase::Idle,
        };
        state.load_enemy(0);
        state
    }

    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    pub fn current_enemy(&self) -> Option<&EnemyProfile> {
        self.roster.get(self.enemy_index)
    }

    pub fn difficulty(&self) -> EnemyDifficulty {
        self.current_enemy()
            .map(|enemy| enemy.difficulty)
            .unwrap_or_default()
    }

    /// Switch to the enemy at `index`. Out-of-range indices are ignored.
    pub fn load_enemy(&mut self, index: usize) -> bool {
        let Some(enemy) = self.roster.get(index) else {
            return false;
        };
        self.enemy_index = index;
        self.enemy_health = enemy.max_hp as i32;
        self.phase = BattlePhase::Idle;
        true
    }

    /// Roll a new question for the current enemy and open input.
    pub fn next_question(&mut self, rng: &mut impl Rng) -> Option<&Question> {
        let difficulty = self.current_enemy()?.difficulty;
        self.question = Some(generate_question(difficulty, rng));
        self.phase = BattlePhase::AwaitingAnswer;
        self.question.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, BattlePhase::Resolving(_))
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, BattlePhase::Victory | BattlePhase::Defeat)
    }

    /// Apply the chosen answer's damage and lock input. Returns `None` when
    /// no question is open.
    pub fn select_answer(&mut self, chosen: &str) -> Option<AnswerOutcome> {
        if self.phase != BattlePhase::AwaitingAnswer {
            return None;
        }
        let question = self.question.as_ref()?;

        let outcome = if question.is_correct(chosen) {
            self.enemy_health -= 1;
            AnswerOutcome::Correct
        } else {
            self.player_health -= self.difficulty().damage_on_miss();
            AnswerOutcome::Incorrect
        };

        self.phase = BattlePhase::Resolving(outcome);
        Some(outcome)
    }

    /// Re-evaluate the battle once the attack sequence has finished.
    pub fn finish_resolution(&mut self, rng: &mut impl Rng) -> BattlePhase {
        if !self.is_animating() {
            return self.phase;
        }

        if self.player_health <= 0.0 {
            self.phase = BattlePhase::Defeat;
        } else if self.enemy_health <= 0 {
            if self.load_enemy(self.enemy_index + 1) {
                self.next_question(rng);
            } else {
                self.phase = BattlePhase::Victory;
            }
        } else {
            self.next_question(rng);
        }
        self.phase
    }

    /// Player hearts: full while health covers the whole heart, half while
    /// it covers part of it.
    pub fn player_heart_fills(&self) -> Vec<HeartFill> {
        (0..self.player_hearts)
            .map(|i| {
                let i = i as f32;
                if self.player_health >= i + 1.0 {
                    HeartFill::Full
                } else if self.player_health > i {
                    HeartFill::Half
                } else {
                    HeartFill::Empty
                }
            })
            .collect()
    }

    /// One heart is shown per remaining enemy hit point.
    pub fn enemy_hearts_shown(&self) -> usize {
        self.enemy_health.max(0) as usize
    }

    pub fn banner(&self) -> String {
        match self.phase {
            BattlePhase::Victory => "VICTORY!".to_string(),
            BattlePhase::Defeat => "GAME OVER".to_string(),
            _ => self
                .question
                .as_ref()
                .map(Question::text)
                .unwrap_or_default(),
        }
    }
}
