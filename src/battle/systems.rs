//! Battle domain: answer input, attack playback and HUD refresh.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::battle::components::{
    AnswerButton, AnswerLabel, BattleAnimation, BattleRng, ContinueHint, EnemyHeart,
    EnemyHeartRow, EnemyNameText, Fighter, PlayerHeartFill, QuestionText,
};
use crate::battle::sequence::{Pose, Side};
use crate::battle::spawn::{
    ANSWER_HOVER, ANSWER_IDLE, ANSWER_PRESSED, MUTED_TEXT, PLAYER_COLOR, TEXT_COLOR,
    spawn_enemy_heart,
};
use crate::battle::state::{BattlePhase, BattleState, HeartFill};
use crate::content::rgb;
use crate::core::{ActiveWorld, GameState, WorldCompletedEvent};
use crate::transition::SceneFader;

/// Idle float distance in pixels
const IDLE_FLOAT: f32 = 10.0;
const HURT_TINT: Color = Color::srgb(0.95, 0.15, 0.15);

const ANSWER_KEYS: [(KeyCode, KeyCode); 3] = [
    (KeyCode::Digit1, KeyCode::Numpad1),
    (KeyCode::Digit2, KeyCode::Numpad2),
    (KeyCode::Digit3, KeyCode::Numpad3),
];

/// Resolve the option in `slot` and start the matching attack.
fn submit_answer(state: &mut BattleState, animation: &mut BattleAnimation, slot: usize) {
    if state.phase != BattlePhase::AwaitingAnswer || animation.is_playing() {
        return;
    }
    let Some(chosen) = state
        .question
        .as_ref()
        .and_then(|q| q.options.get(slot))
        .cloned()
    else {
        return;
    };

    if let Some(outcome) = state.select_answer(&chosen) {
        info!("Answered {} ({:?})", chosen, outcome);
        animation.start(outcome);
    }
}

pub(crate) fn handle_answer_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    fader: Res<SceneFader>,
    mut state: ResMut<BattleState>,
    mut animation: ResMut<BattleAnimation>,
) {
    let Some(slot) = ANSWER_KEYS
        .iter()
        .position(|(digit, numpad)| keyboard.just_pressed(*digit) || keyboard.just_pressed(*numpad))
    else {
        return;
    };
    if fader.is_busy() {
        return;
    }
    submit_answer(&mut state, &mut animation, slot);
}

pub(crate) fn handle_answer_clicks(
    mut button_query: Query<(&AnswerButton, &Interaction, &mut BackgroundColor), Changed<Interaction>>,
    mut state: ResMut<BattleState>,
    mut animation: ResMut<BattleAnimation>,
) {
    for (button, interaction, mut bg_color) in &mut button_query {
        match interaction {
            Interaction::Pressed => {
                bg_color.0 = ANSWER_PRESSED;
                submit_answer(&mut state, &mut animation, button.slot);
            }
            Interaction::Hovered => bg_color.0 = ANSWER_HOVER,
            Interaction::None => bg_color.0 = ANSWER_IDLE,
        }
    }
}

pub(crate) fn tick_attack_sequence(
    time: Res<Time>,
    mut state: ResMut<BattleState>,
    mut animation: ResMut<BattleAnimation>,
    mut rng: ResMut<BattleRng>,
    active_world: Res<ActiveWorld>,
    mut completed: MessageWriter<WorldCompletedEvent>,
) {
    let Some(sequence) = animation.sequence.as_mut() else {
        return;
    };
    sequence.tick(time.delta_secs(), &mut rng.0);
    if !sequence.is_finished() {
        return;
    }
    animation.sequence = None;

    let previous_enemy = state.enemy_index;
    match state.finish_resolution(&mut rng.0) {
        BattlePhase::Victory => {
            info!("Victory! All {} enemies defeated", state.roster_len());
            match &active_world.world_id {
                Some(world_id) => {
                    completed.write(WorldCompletedEvent {
                        world_id: world_id.clone(),
                    });
                }
                None => warn!("Battle won outside of a world, no progress to record"),
            }
        }
        BattlePhase::Defeat => info!("Game over on enemy {}", state.enemy_index + 1),
        _ if state.enemy_index != previous_enemy => {
            if let Some(enemy) = state.current_enemy() {
                info!("Next enemy: {} ({:?})", enemy.name, enemy.difficulty);
            }
        }
        _ => {}
    }
}

fn pose_color(base: Color, pose: Pose) -> Color {
    let factor = match pose {
        Pose::Idle => 1.0,
        Pose::Attack => 1.25,
        Pose::Hurt => 0.7,
    };
    let c = base.to_srgba();
    Color::srgb(
        (c.red * factor).min(1.0),
        (c.green * factor).min(1.0),
        (c.blue * factor).min(1.0),
    )
}

/// Idle float-and-breathe, or the attack sequence positions while one plays.
pub(crate) fn animate_fighters(
    time: Res<Time>,
    state: Res<BattleState>,
    animation: Res<BattleAnimation>,
    mut fighters: Query<(&Fighter, &mut Transform, &mut Sprite)>,
) {
    let t = time.elapsed_secs();
    let float_x = (t * 2.0).sin() * IDLE_FLOAT;
    let breath_y = 1.0 + (t * 3.0).sin() * 0.02;
    let breath_x = 1.0 - (t * 3.0).sin() * 0.01;

    let enemy = state.current_enemy();

    for (fighter, mut transform, mut sprite) in &mut fighters {
        let (base_color, scale, mirror) = match fighter.side {
            Side::Player => (PLAYER_COLOR, fighter.base_scale, 1.0),
            Side::Enemy => (
                enemy.map(|e| rgb(e.color)).unwrap_or(Color::WHITE),
                fighter.base_scale * enemy.map_or(1.0, |e| e.size_modifier),
                -1.0,
            ),
        };

        match &animation.sequence {
            Some(sequence) => {
                let position = sequence.position(fighter.side);
                transform.translation.x = position.x;
                transform.translation.y = position.y;
                transform.scale = Vec3::new(scale, scale, 1.0);

                let tinted = sequence.victim_tinted && sequence.victim() == fighter.side;
                sprite.color = if tinted {
                    HURT_TINT
                } else {
                    pose_color(base_color, sequence.pose(fighter.side))
                };
            }
            None => {
                transform.translation.x = fighter.home.x + float_x * mirror;
                transform.translation.y = fighter.home.y;
                transform.scale = Vec3::new(scale * breath_x, scale * breath_y, 1.0);
                sprite.color = base_color;
            }
        }
    }
}

/// Redraw question, answers and hearts once the state settles.
pub(crate) fn refresh_battle_hud(
    mut commands: Commands,
    state: Res<BattleState>,
    mut question_text: Query<&mut Text, With<QuestionText>>,
    mut enemy_name: Query<&mut Text, (With<EnemyNameText>, Without<QuestionText>)>,
    mut labels: Query<
        (&AnswerLabel, &mut Text, &mut TextColor),
        (Without<QuestionText>, Without<EnemyNameText>),
    >,
    mut heart_fills: Query<(&PlayerHeartFill, &mut Node)>,
    enemy_row: Query<Entity, With<EnemyHeartRow>>,
    enemy_hearts: Query<Entity, With<EnemyHeart>>,
    mut hints: Query<&mut Visibility, With<ContinueHint>>,
) {
    if !state.is_changed() || state.is_animating() {
        return;
    }

    for mut text in &mut question_text {
        text.0 = state.banner();
    }

    if let Some(enemy) = state.current_enemy() {
        for mut text in &mut enemy_name {
            text.0 = enemy.name.clone();
        }
    }

    let awaiting = state.phase == BattlePhase::AwaitingAnswer;
    for (label, mut text, mut color) in &mut labels {
        text.0 = state
            .question
            .as_ref()
            .and_then(|q| q.options.get(label.slot))
            .cloned()
            .unwrap_or_default();
        color.0 = if awaiting { TEXT_COLOR } else { MUTED_TEXT };
    }

    let fills = state.player_heart_fills();
    for (fill, mut node) in &mut heart_fills {
        let percent = match fills.get(fill.index) {
            Some(HeartFill::Full) => 100.0,
            Some(HeartFill::Half) => 50.0,
            _ => 0.0,
        };
        node.width = Val::Percent(percent);
    }

    let shown = state.enemy_hearts_shown();
    if enemy_hearts.iter().count() != shown {
        for entity in enemy_hearts.iter() {
            commands.entity(entity).despawn();
        }
        if let Ok(row) = enemy_row.single() {
            commands.entity(row).with_children(|row| {
                for _ in 0..shown {
                    spawn_enemy_heart(row);
                }
            });
        }
    }

    for mut visibility in &mut hints {
        *visibility = if state.is_over() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

/// After victory or defeat, any confirm input returns to world select.
pub(crate) fn handle_battle_end(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    state: Res<BattleState>,
    mut fader: ResMut<SceneFader>,
) {
    if !state.is_over() {
        return;
    }

    let confirmed = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::Space)
        || mouse.just_pressed(MouseButton::Left);
    if confirmed && fader.fade_to(GameState::WorldSelect) {
        info!("Leaving battle for world select");
    }
}
