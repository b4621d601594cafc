//! Battle domain: scene setup and teardown.

use bevy::prelude::*;

use crate::battle::components::{
    AnswerButton, AnswerLabel, BattleAnimation, BattleEntity, BattleRng, ContinueHint,
    EnemyHeart, EnemyHeartRow, EnemyNameText, Fighter, PlayerHeartFill, QuestionText,
};
use crate::battle::question::OPTION_COUNT;
use crate::battle::sequence::Side;
use crate::battle::state::BattleState;
use crate::content::{BattleTuning, ContentRegistry, GameTuning, rgb};
use crate::core::{ActiveWorld, RunConfig};

pub(crate) const PLAYER_COLOR: Color = Color::srgb(0.3, 0.55, 0.95);
pub(crate) const HEART_COLOR: Color = Color::srgb(0.9, 0.2, 0.25);
pub(crate) const ANSWER_IDLE: Color = Color::srgb(0.15, 0.15, 0.22);
pub(crate) const ANSWER_HOVER: Color = Color::srgb(0.22, 0.22, 0.32);
pub(crate) const ANSWER_PRESSED: Color = Color::srgb(0.3, 0.3, 0.45);
pub(crate) const TEXT_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);
pub(crate) const MUTED_TEXT: Color = Color::srgb(0.55, 0.55, 0.65);

const HEART_SIZE: f32 = 32.0;

pub(crate) fn init_battle_rng(mut commands: Commands, run_config: Res<RunConfig>) {
    info!("Battle RNG seeded with {}", run_config.seed);
    commands.insert_resource(BattleRng::from_seed(run_config.seed));
}

pub(crate) fn setup_battle(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
    tuning: Option<Res<GameTuning>>,
    mut rng: ResMut<BattleRng>,
    active_world: Res<ActiveWorld>,
) {
    let tuning = tuning.map(|t| t.battle.clone()).unwrap_or_default();
    let roster = match registry {
        Some(registry) => registry.enemies.clone(),
        None => {
            warn!("Content registry missing, battling the builtin roster");
            ContentRegistry::builtin().enemies
        }
    };

    let mut state = BattleState::new(roster, tuning.player_hearts);
    if state.next_question(&mut rng.0).is_none() {
        warn!("Battle started with an empty enemy roster");
    }
    info!(
        "Battle started from world {:?} against {} enemies",
        active_world.world_id,
        state.roster_len()
    );

    spawn_fighters(&mut commands, &tuning, &state);
    spawn_battle_hud(&mut commands, &state);

    commands.insert_resource(BattleAnimation::new(&tuning));
    commands.insert_resource(state);
}

pub(crate) fn cleanup_battle(
    mut commands: Commands,
    query: Query<Entity, With<BattleEntity>>,
    mut active_world: ResMut<ActiveWorld>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<BattleState>();
    commands.remove_resource::<BattleAnimation>();
    active_world.clear();
}

fn spawn_fighters(commands: &mut Commands, tuning: &BattleTuning, state: &BattleState) {
    let size = Vec2::splat(tuning.sprite_size);

    let player_home = Vec2::from(tuning.player_home);
    commands.spawn((
        BattleEntity,
        Fighter {
            side: Side::Player,
            home: player_home,
            base_scale: tuning.player_size,
        },
        Sprite::from_color(PLAYER_COLOR, size),
        Transform::from_xyz(player_home.x, player_home.y, 1.0)
            .with_scale(Vec3::new(tuning.player_size, tuning.player_size, 1.0)),
    ));

    let enemy_home = Vec2::from(tuning.enemy_home);
    let enemy_color = state
        .current_enemy()
        .map(|enemy| rgb(enemy.color))
        .unwrap_or(Color::WHITE);
    commands.spawn((
        BattleEntity,
        Fighter {
            side: Side::Enemy,
            home: enemy_home,
            base_scale: tuning.enemy_size,
        },
        Sprite {
            flip_x: true,
            ..Sprite::from_color(enemy_color, size)
        },
        Transform::from_xyz(enemy_home.x, enemy_home.y, 1.0),
    ));
}

fn spawn_battle_hud(commands: &mut Commands, state: &BattleState) {
    let enemy_name = state
        .current_enemy()
        .map(|enemy| enemy.name.clone())
        .unwrap_or_default();

    commands
        .spawn((
            BattleEntity,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(24.0)),
                ..default()
            },
        ))
        .with_children(|root| {
            // Hearts and enemy name
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            })
            .with_children(|top| {
                top.spawn(Node {
                    column_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|row| {
                    for index in 0..state.player_hearts as usize {
                        spawn_player_heart(row, index);
                    }
                });

                top.spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::FlexEnd,
                    row_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|column| {
                    column.spawn((
                        EnemyNameText,
                        Text::new(enemy_name),
                        TextFont {
                            font_size: 28.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                    column
                        .spawn((
                            EnemyHeartRow,
                            Node {
                                column_gap: Val::Px(6.0),
                                ..default()
                            },
                        ))
                        .with_children(|row| {
                            for _ in 0..state.enemy_hearts_shown() {
                                spawn_enemy_heart(row);
                            }
                        });
                });
            });

            // Question and answers
            root.spawn(Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            })
            .with_children(|bottom| {
                bottom.spawn((
                    QuestionText,
                    Text::new(state.banner()),
                    TextFont {
                        font_size: 48.0,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));

                bottom
                    .spawn(Node {
                        column_gap: Val::Px(20.0),
                        ..default()
                    })
                    .with_children(|row| {
                        for slot in 0..OPTION_COUNT {
                            let label = state
                                .question
                                .as_ref()
                                .and_then(|q| q.options.get(slot))
                                .cloned()
                                .unwrap_or_default();
                            spawn_answer_button(row, slot, label);
                        }
                    });

                bottom.spawn((
                    ContinueHint,
                    Text::new("Press Enter or click to continue"),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(MUTED_TEXT),
                    Visibility::Hidden,
                ));
            });
        });
}

fn spawn_player_heart(parent: &mut ChildSpawnerCommands, index: usize) {
    parent
        .spawn((
            Node {
                width: Val::Px(HEART_SIZE),
                height: Val::Px(HEART_SIZE),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(HEART_COLOR),
        ))
        .with_children(|heart| {
            heart.spawn((
                PlayerHeartFill { index },
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(HEART_COLOR),
            ));
        });
}

pub(crate) fn spawn_enemy_heart(parent: &mut ChildSpawnerCommands) {
    parent.spawn((
        EnemyHeart,
        Node {
            width: Val::Px(HEART_SIZE * 0.75),
            height: Val::Px(HEART_SIZE * 0.75),
            ..default()
        },
        BackgroundColor(HEART_COLOR),
    ));
}

fn spawn_answer_button(parent: &mut ChildSpawnerCommands, slot: usize, label: String) {
    let key_hint = format!("[{}]", slot + 1);

    parent
        .spawn((
            AnswerButton { slot },
            Button,
            Node {
                width: Val::Px(160.0),
                height: Val::Px(72.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(3.0)),
                ..default()
            },
            BorderColor::all(Color::srgb(0.5, 0.5, 0.7)),
            BackgroundColor(ANSWER_IDLE),
        ))
        .with_children(|button| {
            button.spawn((
                AnswerLabel { slot },
                Text::new(label),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            button.spawn((
                Text::new(key_hint),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
            ));
        });
}
