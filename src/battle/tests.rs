//! Battle domain: tests for question generation, answer resolution and the
//! attack sequence.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::components::BattleAnimation;
use super::question::{Operator, Question, build_options, generate_question};
use super::sequence::{AttackPhase, AttackSequence, Pose, Side};
use super::state::{AnswerOutcome, BattlePhase, BattleState, HeartFill};
use crate::content::{AttackTuning, BattleTuning, EnemyDifficulty, EnemyProfile};

fn enemy(id: &str, max_hp: u32, difficulty: EnemyDifficulty) -> EnemyProfile {
    EnemyProfile {
        id: id.to_string(),
        name: id.to_string(),
        max_hp,
        difficulty,
        size_modifier: 1.0,
        color: [1.0, 1.0, 1.0],
    }
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn correct_option(state: &BattleState) -> String {
    state.question.as_ref().unwrap().correct_answer()
}

fn wrong_option(state: &BattleState) -> String {
    let question = state.question.as_ref().unwrap();
    question
        .options
        .iter()
        .find(|option| !question.is_correct(option))
        .cloned()
        .unwrap()
}

/// Answer and let the attack sequence finish.
fn answer(state: &mut BattleState, chosen: &str, rng: &mut ChaCha8Rng) -> BattlePhase {
    state.select_answer(chosen).unwrap();
    state.finish_resolution(rng)
}

// -----------------------------------------------------------------------------
// Question generation
// -----------------------------------------------------------------------------

#[test]
fn test_easy_questions_add_single_digits() {
    let mut rng = rng();
    for _ in 0..200 {
        let q = generate_question(EnemyDifficulty::Easy, &mut rng);
        assert_eq!(q.operator, Operator::Add);
        assert!((1..10).contains(&q.a));
        assert!((1..10).contains(&q.b));
        assert_eq!(q.answer, q.a + q.b);
    }
}

#[test]
fn test_medium_questions_mix_add_and_subtract() {
    let mut rng = rng();
    let mut saw_add = false;
    let mut saw_sub = false;
    for _ in 0..200 {
        let q = generate_question(EnemyDifficulty::Medium, &mut rng);
        assert!((10..30).contains(&q.a));
        assert!((1..15).contains(&q.b));
        match q.operator {
            Operator::Add => saw_add = true,
            Operator::Sub => saw_sub = true,
            Operator::Mul => panic!("medium questions never multiply"),
        }
        assert_eq!(q.answer, q.operator.apply(q.a, q.b));
    }
    assert!(saw_add && saw_sub);
}

#[test]
fn test_hard_and_boss_questions_multiply() {
    let mut rng = rng();
    for _ in 0..200 {
        let hard = generate_question(EnemyDifficulty::Hard, &mut rng);
        assert_eq!(hard.operator, Operator::Mul);
        assert!((2..10).contains(&hard.a));
        assert!((2..10).contains(&hard.b));

        let boss = generate_question(EnemyDifficulty::Boss, &mut rng);
        assert_eq!(boss.operator, Operator::Mul);
        assert!((5..12).contains(&boss.a));
        assert!((5..10).contains(&boss.b));
        assert_eq!(boss.answer, boss.a * boss.b);
    }
}

#[test]
fn test_question_text_format() {
    let q = Question {
        a: 12,
        b: 7,
        operator: Operator::Sub,
        answer: 5,
        options: vec!["5".into(), "3".into(), "9".into()],
    };
    assert_eq!(q.text(), "12 - 7 = ?");
    assert!(q.is_correct("5"));
    assert!(!q.is_correct("3"));

    let mul = Question {
        operator: Operator::Mul,
        ..q
    };
    assert_eq!(mul.text(), "12 x 7 = ?");
}

#[test]
fn test_options_hold_answer_once_and_distinct_distractors() {
    let mut rng = rng();
    for answer in [-3, 0, 7, 42, 99] {
        for _ in 0..50 {
            let options = build_options(answer, &mut rng);
            assert_eq!(options.len(), 3);

            let correct = answer.to_string();
            assert_eq!(options.iter().filter(|o| **o == correct).count(), 1);

            let mut values: Vec<i32> = options.iter().map(|o| o.parse().unwrap()).collect();
            for value in &values {
                assert!((value - answer).abs() <= 5);
            }
            values.sort();
            values.dedup();
            assert_eq!(values.len(), 3);
        }
    }
}

// -----------------------------------------------------------------------------
// Answer resolution
// -----------------------------------------------------------------------------

#[test]
fn test_new_battle_starts_with_full_health() {
    let state = BattleState::new(vec![enemy("goblin", 2, EnemyDifficulty::Easy)], 3);
    assert_eq!(state.player_health, 3.0);
    assert_eq!(state.enemy_health, 2);
    assert_eq!(state.enemy_index, 0);
    assert_eq!(state.phase, BattlePhase::Idle);
}

#[test]
fn test_correct_answer_hurts_enemy_only() {
    let mut rng = rng();
    let mut state = BattleState::new(vec![enemy("orc", 3, EnemyDifficulty::Medium)], 3);
    state.next_question(&mut rng);

    let chosen = correct_option(&state);
    assert_eq!(state.select_answer(&chosen), Some(AnswerOutcome::Correct));
    assert_eq!(state.enemy_health, 2);
    assert_eq!(state.player_health, 3.0);
    assert!(state.is_animating());
}

#[test]
fn test_wrong_answer_costs_tier_damage() {
    let cases = [
        (EnemyDifficulty::Easy, 2.5),
        (EnemyDifficulty::Medium, 2.0),
        (EnemyDifficulty::Hard, 1.5),
        (EnemyDifficulty::Boss, 1.0),
    ];
    for (difficulty, expected) in cases {
        let mut rng = rng();
        let mut state = BattleState::new(vec![enemy("foe", 3, difficulty)], 3);
        state.next_question(&mut rng);

        let chosen = wrong_option(&state);
        assert_eq!(state.select_answer(&chosen), Some(AnswerOutcome::Incorrect));
        assert_eq!(state.player_health, expected);
        assert_eq!(state.enemy_health, 3);
    }
}

#[test]
fn test_input_locked_while_resolving() {
    let mut rng = rng();
    let mut state = BattleState::new(vec![enemy("goblin", 2, EnemyDifficulty::Easy)], 3);
    state.next_question(&mut rng);

    let chosen = correct_option(&state);
    state.select_answer(&chosen);
    assert_eq!(state.select_answer(&chosen), None);
    assert_eq!(state.enemy_health, 1);
}

#[test]
fn test_boss_falls_on_third_correct_answer() {
    let mut rng = rng();
    let mut state = BattleState::new(vec![enemy("dragon", 3, EnemyDifficulty::Boss)], 3);
    state.next_question(&mut rng);

    let mut phases = Vec::new();
    for _ in 0..3 {
        let chosen = correct_option(&state);
        phases.push(answer(&mut state, &chosen, &mut rng));
    }

    assert_eq!(
        phases,
        vec![
            BattlePhase::AwaitingAnswer,
            BattlePhase::AwaitingAnswer,
            BattlePhase::Victory
        ]
    );
    assert_eq!(state.enemy_health, 0);
    assert_eq!(state.banner(), "VICTORY!");
}

#[test]
fn test_defeated_enemy_brings_next_in_roster() {
    let mut rng = rng();
    let mut state = BattleState::new(
        vec![
            enemy("goblin", 1, EnemyDifficulty::Easy),
            enemy("troll", 3, EnemyDifficulty::Hard),
        ],
        3,
    );
    state.next_question(&mut rng);

    let chosen = correct_option(&state);
    assert_eq!(answer(&mut state, &chosen, &mut rng), BattlePhase::AwaitingAnswer);
    assert_eq!(state.enemy_index, 1);
    assert_eq!(state.enemy_health, 3);
    assert_eq!(state.difficulty(), EnemyDifficulty::Hard);
    assert_eq!(state.question.as_ref().unwrap().operator, Operator::Mul);
}

#[test]
fn test_player_defeat_after_enough_misses() {
    let mut rng = rng();
    let mut state = BattleState::new(vec![enemy("goblin", 2, EnemyDifficulty::Easy)], 3);
    state.next_question(&mut rng);

    let mut last_health = state.player_health;
    for round in 1..=6 {
        let chosen = wrong_option(&state);
        let phase = answer(&mut state, &chosen, &mut rng);
        assert!(state.player_health < last_health);
        last_health = state.player_health;

        if round < 6 {
            assert_eq!(phase, BattlePhase::AwaitingAnswer);
        } else {
            assert_eq!(phase, BattlePhase::Defeat);
        }
    }
    assert_eq!(state.banner(), "GAME OVER");
}

#[test]
fn test_out_of_range_enemy_is_ignored() {
    let mut state = BattleState::new(vec![enemy("goblin", 2, EnemyDifficulty::Easy)], 3);
    assert!(!state.load_enemy(5));
    assert_eq!(state.enemy_index, 0);
    assert_eq!(state.enemy_health, 2);
}

#[test]
fn test_empty_roster_never_opens_a_question() {
    let mut rng = rng();
    let mut state = BattleState::new(Vec::new(), 3);
    assert!(state.current_enemy().is_none());
    assert!(state.next_question(&mut rng).is_none());
    assert_eq!(state.select_answer("1"), None);
}

#[test]
fn test_heart_fills_show_halves() {
    let mut state = BattleState::new(vec![enemy("goblin", 2, EnemyDifficulty::Easy)], 3);

    state.player_health = 2.5;
    assert_eq!(
        state.player_heart_fills(),
        vec![HeartFill::Full, HeartFill::Full, HeartFill::Half]
    );

    state.player_health = 0.5;
    assert_eq!(
        state.player_heart_fills(),
        vec![HeartFill::Half, HeartFill::Empty, HeartFill::Empty]
    );

    state.enemy_health = -1;
    assert_eq!(state.enemy_hearts_shown(), 0);
}

// -----------------------------------------------------------------------------
// Attack sequence
// -----------------------------------------------------------------------------

fn run_sequence(sequence: &mut AttackSequence, rng: &mut ChaCha8Rng) -> Vec<AttackSequence> {
    let mut frames = Vec::new();
    for _ in 0..500 {
        sequence.tick(0.01, rng);
        frames.push(sequence.clone());
        if sequence.is_finished() {
            break;
        }
    }
    frames
}

#[test]
fn test_attack_sequence_returns_everyone_home() {
    let mut rng = rng();
    let tuning = AttackTuning::default();
    let player_home = Vec2::new(-280.0, -40.0);
    let enemy_home = Vec2::new(280.0, -40.0);
    let mut sequence = AttackSequence::new(Side::Player, player_home, enemy_home, &tuning);

    let frames = run_sequence(&mut sequence, &mut rng);
    assert!(sequence.is_finished());
    assert_eq!(sequence.position(Side::Player), player_home);
    assert_eq!(sequence.position(Side::Enemy), enemy_home);
    assert!(!sequence.victim_tinted);
    assert_eq!(sequence.pose(Side::Player), Pose::Idle);

    // Roughly the sum of every phase
    let total = frames.len() as f32 * 0.01;
    assert!(total > 0.5 && total < 1.0, "took {}", total);
}

#[test]
fn test_attack_winds_up_away_and_strikes_in_front_of_victim() {
    let tuning = AttackTuning::default();
    let sequence = AttackSequence::new(
        Side::Enemy,
        Vec2::new(280.0, -40.0),
        Vec2::new(-280.0, -40.0),
        &tuning,
    );

    assert_eq!(sequence.victim(), Side::Player);
    assert!(sequence.wind_up_position().x > 280.0);
    assert_eq!(sequence.strike_position(), Vec2::new(-80.0, -40.0));
}

#[test]
fn test_impact_tints_and_shakes_victim_within_radius() {
    let mut rng = rng();
    let tuning = AttackTuning::default();
    let enemy_home = Vec2::new(280.0, -40.0);
    let mut sequence =
        AttackSequence::new(Side::Player, Vec2::new(-280.0, -40.0), enemy_home, &tuning);

    let frames = run_sequence(&mut sequence, &mut rng);
    let impacts: Vec<_> = frames
        .iter()
        .filter(|f| matches!(f.phase, AttackPhase::Impact { .. }))
        .collect();
    assert!(!impacts.is_empty());

    for frame in impacts {
        assert!(frame.victim_tinted);
        assert_eq!(frame.pose(Side::Enemy), Pose::Hurt);
        assert_eq!(frame.pose(Side::Player), Pose::Attack);
        let offset = frame.position(Side::Enemy) - enemy_home;
        assert!(offset.length() <= tuning.shake_radius + 0.001);
    }
}

#[test]
fn test_impact_shakes_victim_once_per_configured_shake() {
    let mut rng = rng();
    let tuning = AttackTuning::default();
    let enemy_home = Vec2::new(280.0, -40.0);
    let mut sequence =
        AttackSequence::new(Side::Player, Vec2::new(-280.0, -40.0), enemy_home, &tuning);

    let mut positions: Vec<Vec2> = Vec::new();
    let mut impact_frames = 0;
    for _ in 0..2000 {
        sequence.tick(0.005, &mut rng);
        if matches!(sequence.phase, AttackPhase::Impact { .. }) {
            impact_frames += 1;
            let position = sequence.position(Side::Enemy);
            if positions.last() != Some(&position) {
                positions.push(position);
            }
        }
        if sequence.is_finished() {
            break;
        }
    }

    assert!(sequence.is_finished());
    assert_eq!(tuning.shake_count, 6);
    assert_eq!(positions.len() as u32, tuning.shake_count);
    // Each shake holds for at least one interval
    let impact_time = impact_frames as f32 * 0.005;
    assert!(impact_time >= tuning.shake_interval * tuning.shake_count as f32 - 0.001);
}

#[test]
fn test_battle_animation_picks_attacker_from_outcome() {
    let mut animation = BattleAnimation::new(&BattleTuning::default());
    assert!(!animation.is_playing());

    animation.start(AnswerOutcome::Correct);
    assert_eq!(animation.sequence.as_ref().unwrap().attacker, Side::Player);

    animation.start(AnswerOutcome::Incorrect);
    assert_eq!(animation.sequence.as_ref().unwrap().attacker, Side::Enemy);
}
