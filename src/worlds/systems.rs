//! Worlds domain: slider navigation, play and back, and world visuals.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{GameTuning, WorldTuning};
use crate::core::{ActiveWorld, BackgroundKickEvent, GameState, TitleBumpEvent};
use crate::transition::SceneFader;
use crate::worlds::components::{
    SliderRoot, WorldAction, WorldButton, WorldCaption, WorldOutline, WorldProgressText,
};
use crate::worlds::item::WorldItem;
use crate::worlds::slider::{SlideChange, WorldSlider};
use crate::worlds::spawn::NAV_IDLE;

const DISABLED_ALPHA: f32 = 0.35;

pub(crate) fn handle_world_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<(&WorldButton, &Interaction), Changed<Interaction>>,
    tuning: Option<Res<GameTuning>>,
    mut slider: ResMut<WorldSlider>,
    mut fader: ResMut<SceneFader>,
    mut active_world: ResMut<ActiveWorld>,
    mut items: Query<&mut WorldItem>,
    mut kicks: MessageWriter<BackgroundKickEvent>,
    mut bumps: MessageWriter<TitleBumpEvent>,
) {
    if fader.is_busy() {
        return;
    }

    let mut actions: Vec<WorldAction> = buttons
        .iter()
        .filter(|(_, interaction)| **interaction == Interaction::Pressed)
        .map(|(button, _)| button.action)
        .collect();
    if keyboard.any_just_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
        actions.push(WorldAction::Previous);
    }
    if keyboard.any_just_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
        actions.push(WorldAction::Next);
    }
    if keyboard.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        actions.push(WorldAction::Play);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        actions.push(WorldAction::Back);
    }
    if actions.is_empty() {
        return;
    }

    let tuning = tuning.map(|t| (*t).clone()).unwrap_or_default();
    for action in actions {
        match action {
            WorldAction::Previous => {
                if let Some(change) = slider.previous() {
                    apply_slide(change, &mut items, &tuning.worlds);
                    kicks.write(BackgroundKickEvent {
                        amount: tuning.slider.background_kick,
                    });
                    bumps.write(TitleBumpEvent);
                }
            }
            WorldAction::Next => {
                if let Some(change) = slider.next() {
                    apply_slide(change, &mut items, &tuning.worlds);
                    kicks.write(BackgroundKickEvent {
                        amount: tuning.slider.background_kick,
                    });
                    bumps.write(TitleBumpEvent);
                }
            }
            WorldAction::Play => {
                kicks.write(BackgroundKickEvent {
                    amount: tuning.slider.play_kick,
                });
                let current = slider.current();
                if let Some(mut item) = items.iter_mut().find(|item| item.index == current) {
                    item.bump(&tuning.worlds);
                    play_world(&item, &mut fader, &mut active_world);
                }
            }
            WorldAction::Back => {
                kicks.write(BackgroundKickEvent {
                    amount: tuning.slider.background_kick,
                });
                fader.fade_to(GameState::MainMenu);
            }
        }
        if fader.is_busy() {
            break;
        }
    }
}

fn apply_slide(change: SlideChange, items: &mut Query<&mut WorldItem>, tuning: &WorldTuning) {
    for mut item in items.iter_mut() {
        if item.index == change.from {
            item.deselect(tuning);
        } else if item.index == change.to {
            item.select(tuning);
        }
    }
    debug!("World slider {} -> {}", change.from, change.to);
}

fn play_world(item: &WorldItem, fader: &mut SceneFader, active_world: &mut ActiveWorld) {
    if !item.can_play() {
        debug!("World '{}' is locked", item.name);
        return;
    }
    if item.scene.is_empty() {
        error!("Scene name is empty on world '{}'", item.name);
        return;
    }

    info!("Loading scene: {}", item.scene);
    if fader.fade_to_scene(&item.scene) {
        active_world.enter(item.world_id.clone());
    }
}

pub(crate) fn tick_world_slider(
    time: Res<Time>,
    mut slider: ResMut<WorldSlider>,
    mut roots: Query<&mut Transform, With<SliderRoot>>,
) {
    let x = slider.tick(time.delta_secs());
    for mut transform in &mut roots {
        transform.translation.x = x;
    }
}

pub(crate) fn animate_worlds(
    time: Res<Time>,
    tuning: Option<Res<GameTuning>>,
    mut items: Query<(&mut WorldItem, &mut Transform, &mut Sprite), Without<WorldOutline>>,
    mut outlines: Query<(&WorldOutline, &mut Sprite, &mut Visibility), Without<WorldItem>>,
    mut captions: Query<(&WorldCaption, &mut Visibility), Without<WorldOutline>>,
    mut progress: Query<(&WorldProgressText, &mut Text2d)>,
) {
    let Some(tuning) = tuning else {
        return;
    };
    let tuning = &tuning.worlds;
    let t = time.elapsed_secs();
    let mut rng = rand::rng();

    let mut states: Vec<(usize, bool, Option<Color>, String)> = Vec::new();
    for (mut item, mut transform, mut sprite) in &mut items {
        item.tick(time.delta_secs(), &mut rng);

        let pose = item.pose(t, tuning);
        transform.translation.x = item.base.x + pose.offset.x;
        transform.translation.y = item.base.y + pose.offset.y;
        transform.rotation = Quat::from_rotation_z(pose.rotation.to_radians());
        transform.scale = Vec3::new(pose.scale, pose.scale, 1.0);
        sprite.color = item.tint(tuning);

        states.push((
            item.index,
            item.selected,
            item.outline(t, tuning),
            item.progress_label().to_string(),
        ));
    }

    for (outline, mut sprite, mut visibility) in &mut outlines {
        match states.iter().find(|state| state.0 == outline.index) {
            Some((_, _, Some(color), _)) => {
                sprite.color = *color;
                visibility.set_if_neq(Visibility::Inherited);
            }
            _ => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }

    for (caption, mut visibility) in &mut captions {
        let selected = states
            .iter()
            .any(|state| state.0 == caption.index && state.1);
        visibility.set_if_neq(if selected {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }

    for (label, mut text) in &mut progress {
        if let Some(state) = states.iter().find(|state| state.0 == label.index) {
            if text.0 != state.3 {
                text.0 = state.3.clone();
            }
        }
    }
}

/// Nav buttons dim at the ends of the list; play hides for locked worlds.
pub(crate) fn refresh_world_buttons(
    slider: Res<WorldSlider>,
    items: Query<&WorldItem>,
    mut buttons: Query<(&WorldButton, &mut Visibility, &mut BackgroundColor)>,
) {
    let current_playable = items
        .iter()
        .find(|item| item.index == slider.current())
        .is_some_and(WorldItem::can_play);

    for (button, mut visibility, mut background) in &mut buttons {
        let enabled = match button.action {
            WorldAction::Previous => slider.can_previous(),
            WorldAction::Next => slider.can_next(),
            WorldAction::Play => {
                visibility.set_if_neq(if current_playable {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                });
                current_playable
            }
            WorldAction::Back => true,
        };
        let alpha = if enabled { 1.0 } else { DISABLED_ALPHA };
        background.set_if_neq(BackgroundColor(NAV_IDLE.with_alpha(alpha)));
    }
}
