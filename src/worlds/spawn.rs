//! Worlds domain: world select scene setup and teardown.

use bevy::prelude::*;

use crate::content::{ContentRegistry, GameTuning, WorldDef, WorldTuning};
use crate::juice::{BackgroundWiggle, FadeIn, PressSquish, UiFloat};
use crate::progress::ProgressStore;
use crate::tween::{Oscillation, random_phase};
use crate::worlds::components::{
    SliderRoot, WorldAction, WorldButton, WorldCaption, WorldEntity, WorldOutline,
    WorldProgressText,
};
use crate::worlds::item::WorldItem;
use crate::worlds::slider::WorldSlider;

const SLIDER_Y: f32 = 10.0;
const TITLE_POSITION: Vec2 = Vec2::new(0.0, 250.0);
const HINT_Y: f32 = -230.0;
const OUTLINE_WIDTH: f32 = 8.0;

pub(crate) const NAV_IDLE: Color = Color::srgb(0.18, 0.2, 0.3);
const BACKGROUND_COLOR: Color = Color::srgb(0.07, 0.09, 0.14);
const TEXT_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);
const MUTED_TEXT: Color = Color::srgb(0.6, 0.6, 0.72);

const NAV_SIZE: Vec2 = Vec2::new(72.0, 64.0);
const PLAY_SIZE: Vec2 = Vec2::new(220.0, 64.0);
const BACK_SIZE: Vec2 = Vec2::new(140.0, 48.0);

pub(crate) fn spawn_world_select(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
    tuning: Option<Res<GameTuning>>,
    store: Option<ResMut<ProgressStore>>,
) {
    let tuning = tuning.map(|t| (*t).clone()).unwrap_or_default();
    let worlds = match registry {
        Some(registry) => registry.worlds.clone(),
        None => {
            warn!("Content registry missing, showing the builtin worlds");
            ContentRegistry::builtin().worlds
        }
    };
    let slider = WorldSlider::new(worlds.len(), &tuning.slider);

    commands.spawn((
        WorldEntity,
        BackgroundWiggle::default(),
        Sprite::from_color(BACKGROUND_COLOR, Vec2::new(2600.0, 1800.0)),
        Transform::from_xyz(0.0, 0.0, -10.0),
    ));

    let mut rng = rand::rng();
    commands.spawn((
        WorldEntity,
        UiFloat::new(TITLE_POSITION, Oscillation::default(), random_phase(&mut rng))
            .with_bump()
            .without_hover(),
        Text2d::new("Select a World"),
        TextFont {
            font_size: 64.0,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Transform::from_xyz(TITLE_POSITION.x, TITLE_POSITION.y, 5.0),
    ));

    commands.spawn((
        WorldEntity,
        FadeIn::new(HINT_Y).with_delay(0.3),
        Text2d::new("Left and right to browse, Enter to play"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(MUTED_TEXT.with_alpha(0.0)),
        Transform::from_xyz(0.0, HINT_Y, 5.0),
    ));

    spawn_slider(&mut commands, &worlds, &tuning.worlds, &slider, store);
    spawn_world_hud(&mut commands);

    info!("World select ready with {} worlds", worlds.len());
    commands.insert_resource(slider);
}

pub(crate) fn cleanup_world_select(
    mut commands: Commands,
    query: Query<Entity, With<WorldEntity>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<WorldSlider>();
}

fn spawn_slider(
    commands: &mut Commands,
    worlds: &[WorldDef],
    tuning: &WorldTuning,
    slider: &WorldSlider,
    mut store: Option<ResMut<ProgressStore>>,
) {
    let size = Vec2::splat(tuning.size);
    let mut rng = rand::rng();

    commands
        .spawn((
            WorldEntity,
            SliderRoot,
            Transform::from_xyz(slider.position(), SLIDER_Y, 1.0),
            Visibility::default(),
        ))
        .with_children(|root| {
            for (index, def) in worlds.iter().enumerate() {
                let (locked, fresh) = match store.as_deref_mut() {
                    Some(store) => {
                        if def.start_unlocked {
                            store.ensure_unlocked(&def.save_key);
                        }
                        let fresh = store.take_fresh_unlock(&def.save_key);
                        (!store.is_unlocked(&def.save_key), fresh)
                    }
                    None => (!def.start_unlocked, false),
                };

                let base = Vec2::new(slider.item_x(index), 0.0);
                let selected = index == slider.current();
                let mut item = WorldItem::new(
                    def,
                    index,
                    base,
                    locked,
                    selected,
                    random_phase(&mut rng),
                    tuning,
                );
                if fresh && !locked {
                    info!("World '{}' freshly unlocked", def.name);
                    item.begin_unlock(tuning);
                }
                let color = item.tint(tuning);
                let scale = item.scale;
                let progress = item.progress_label().to_string();

                root.spawn((
                    item,
                    Sprite::from_color(color, size),
                    Transform::from_xyz(base.x, base.y, 1.0)
                        .with_scale(Vec3::new(scale, scale, 1.0)),
                ))
                .with_children(|world| {
                    world.spawn((
                        WorldOutline { index },
                        Sprite::from_color(Color::WHITE, size + Vec2::splat(OUTLINE_WIDTH * 2.0)),
                        Transform::from_xyz(0.0, 0.0, -0.5),
                        Visibility::Hidden,
                    ));
                    world.spawn((
                        WorldCaption { index },
                        Text2d::new(def.name.clone()),
                        TextFont {
                            font_size: 34.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        Transform::from_xyz(0.0, size.y * 0.5 + 36.0, 0.5),
                        Visibility::Hidden,
                    ));
                    world.spawn((
                        WorldCaption { index },
                        WorldProgressText { index },
                        Text2d::new(progress),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(MUTED_TEXT),
                        Transform::from_xyz(0.0, -size.y * 0.5 - 30.0, 0.5),
                        Visibility::Hidden,
                    ));
                });
            }
        });
}

fn spawn_world_hud(commands: &mut Commands) {
    commands
        .spawn((
            WorldEntity,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(28.0)),
                ..default()
            },
        ))
        .with_children(|root| {
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                ..default()
            })
            .with_children(|top| {
                spawn_world_button(top, "Back", WorldAction::Back, BACK_SIZE);
            });

            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                column_gap: Val::Px(24.0),
                ..default()
            })
            .with_children(|bottom| {
                spawn_world_button(bottom, "<", WorldAction::Previous, NAV_SIZE);
                spawn_world_button(bottom, "Play", WorldAction::Play, PLAY_SIZE);
                spawn_world_button(bottom, ">", WorldAction::Next, NAV_SIZE);
            });
        });
}

fn spawn_world_button(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    action: WorldAction,
    size: Vec2,
) {
    parent
        .spawn((
            WorldButton { action },
            Button,
            PressSquish::new(size),
            Node {
                width: Val::Px(size.x),
                height: Val::Px(size.y),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(NAV_IDLE),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}
