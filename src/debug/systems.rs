//! Debug domain: hotkeys, panel buttons and the status line.

use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::GameState;
use crate::debug::state::{DebugAction, DebugState};
use crate::debug::ui::{DebugButton, DebugStatusMessage, DebugUI, spawn_debug_ui};
use crate::debug::{reset_progress, unlock_all};
use crate::progress::ProgressStore;
use crate::transition::SceneFader;

const MESSAGE_SECONDS: f32 = 2.5;

/// Toggle the panel with F1 or the backtick key
pub(crate) fn toggle_debug_ui(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    if !keyboard.any_just_pressed([KeyCode::F1, KeyCode::Backquote]) {
        return;
    }

    debug_state.ui_visible = !debug_state.ui_visible;
    if debug_state.ui_visible {
        spawn_debug_ui(&mut commands, &debug_state);
    } else {
        close_panel(&mut commands, &existing_ui);
    }
}

/// Ctrl hotkeys and panel clicks share one dispatch.
pub(crate) fn handle_debug_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<(&DebugButton, &Interaction), Changed<Interaction>>,
    mut debug_state: ResMut<DebugState>,
    mut store: Option<ResMut<ProgressStore>>,
    registry: Option<Res<ContentRegistry>>,
    mut fader: ResMut<SceneFader>,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    let mut actions: Vec<DebugAction> = buttons
        .iter()
        .filter(|(_, interaction)| **interaction == Interaction::Pressed)
        .map(|(button, _)| button.action)
        .collect();

    let ctrl = keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
    if ctrl {
        let hotkeys = [
            (KeyCode::KeyU, DebugAction::UnlockAll),
            (KeyCode::KeyR, DebugAction::ResetProgress),
            (KeyCode::Digit1, DebugAction::WarpToMenu),
            (KeyCode::Digit2, DebugAction::WarpToWorlds),
            (KeyCode::Digit3, DebugAction::WarpToBattle),
        ];
        actions.extend(
            hotkeys
                .into_iter()
                .filter(|(key, _)| keyboard.just_pressed(*key))
                .map(|(_, action)| action),
        );
    }

    for action in actions {
        match action {
            DebugAction::UnlockAll | DebugAction::ResetProgress => {
                let (Some(store), Some(registry)) = (store.as_deref_mut(), registry.as_deref())
                else {
                    warn!("[DEBUG] Progress store or content missing");
                    continue;
                };
                let message = if action == DebugAction::UnlockAll {
                    format!("Unlocked {} items", unlock_all(store, registry))
                } else {
                    format!("Locked {} items", reset_progress(store, registry))
                };
                info!("[DEBUG] {}", message);
                debug_state.set_message(message, MESSAGE_SECONDS);
            }
            DebugAction::WarpToMenu => warp(&mut fader, &mut debug_state, GameState::MainMenu),
            DebugAction::WarpToWorlds => {
                warp(&mut fader, &mut debug_state, GameState::WorldSelect)
            }
            DebugAction::WarpToBattle => {
                warp(&mut fader, &mut debug_state, GameState::QuizBattle)
            }
            DebugAction::Close => {
                debug_state.ui_visible = false;
                close_panel(&mut commands, &existing_ui);
            }
        }
    }
}

fn warp(fader: &mut SceneFader, debug_state: &mut DebugState, target: GameState) {
    if fader.fade_to(target) {
        info!("[DEBUG] Warping to {:?}", target);
        debug_state.set_message(format!("Warp to {:?}", target), MESSAGE_SECONDS);
    } else {
        debug_state.set_message("Transition already running", MESSAGE_SECONDS);
    }
}

fn close_panel(commands: &mut Commands, existing_ui: &Query<Entity, With<DebugUI>>) {
    for entity in existing_ui.iter() {
        commands.entity(entity).despawn();
    }
}

/// Count down the status message and mirror it into the panel
pub(crate) fn update_status_message(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    mut texts: Query<&mut Text, With<DebugStatusMessage>>,
) {
    debug_state.tick_message(time.delta_secs());
    for mut text in &mut texts {
        if text.0 != debug_state.message() {
            text.0 = debug_state.message().to_string();
        }
    }
}
