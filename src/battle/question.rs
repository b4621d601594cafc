//! Battle domain: arithmetic question generation per difficulty tier.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::content::EnemyDifficulty;

/// Number of answer buttons shown for every question
pub const OPTION_COUNT: usize = 3;
/// Distractors are the correct answer shifted by at most this much
pub const MAX_DISTRACTOR_OFFSET: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "x",
        }
    }

    pub fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub a: i32,
    pub b: i32,
    pub operator: Operator,
    pub answer: i32,
    /// Shuffled answer labels, the correct one included exactly once
    pub options: Vec<String>,
}

impl Question {
    pub fn text(&self) -> String {
        format!("{} {} {} = ?", self.a, self.operator.symbol(), self.b)
    }

    pub fn correct_answer(&self) -> String {
        self.answer.to_string()
    }

    pub fn is_correct(&self, chosen: &str) -> bool {
        chosen == self.correct_answer()
    }
}

/// Roll a question for the given tier.
pub fn generate_question(difficulty: EnemyDifficulty, rng: &mut impl Rng) -> Question {
    let (a, b, operator) = match difficulty {
        EnemyDifficulty::Easy => (
            rng.random_range(1..10),
            rng.random_range(1..10),
            Operator::Add,
        ),
        EnemyDifficulty::Medium => {
            let a = rng.random_range(10..30);
            let b = rng.random_range(1..15);
            let operator = if rng.random_bool(0.5) {
                Operator::Add
            } else {
                Operator::Sub
            };
            (a, b, operator)
        }
        EnemyDifficulty::Hard => (
            rng.random_range(2..10),
            rng.random_range(2..10),
            Operator::Mul,
        ),
        EnemyDifficulty::Boss => (
            rng.random_range(5..12),
            rng.random_range(5..10),
            Operator::Mul,
        ),
    };

    let answer = operator.apply(a, b);
    Question {
        a,
        b,
        operator,
        answer,
        options: build_options(answer, rng),
    }
}

/// The correct answer plus distinct nearby distractors, shuffled.
pub fn build_options(answer: i32, rng: &mut impl Rng) -> Vec<String> {
    let mut options = vec![answer.to_string()];

    while options.len() < OPTION_COUNT {
        let offset = rng.random_range(-MAX_DISTRACTOR_OFFSET..=MAX_DISTRACTOR_OFFSET);
        if offset == 0 {
            continue;
        }
        let fake = (answer + offset).to_string();
        if !options.contains(&fake) {
            options.push(fake);
        }
    }

    options.shuffle(rng);
    options
}
