//! Transition domain: black overlay fades wrapped around scene changes.

mod fader;

#[cfg(test)]
mod tests;

pub use fader::SceneFader;

use bevy::prelude::*;
use bevy::ui::FocusPolicy;

use crate::content::GameTuning;
use crate::core::GameState;

/// Marker for the full-screen fade overlay
#[derive(Component, Debug)]
pub struct FadeOverlay;

pub struct TransitionPlugin;

impl Plugin for TransitionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneFader>()
            .add_systems(Startup, spawn_fade_overlay)
            .add_systems(OnExit(GameState::Boot), configure_fader)
            .add_systems(Update, (tick_scene_fader, update_fade_overlay).chain());
    }
}

fn configure_fader(mut fader: ResMut<SceneFader>, tuning: Option<Res<GameTuning>>) {
    if let Some(tuning) = tuning {
        if !fader.is_busy() {
            *fader = SceneFader::new(&tuning.fader);
        }
    }
}

fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        FadeOverlay,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(Color::BLACK.with_alpha(0.0)),
        FocusPolicy::Pass,
        GlobalZIndex(1000),
    ));
}

fn tick_scene_fader(
    time: Res<Time>,
    mut fader: ResMut<SceneFader>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if let Some(target) = fader.tick(time.delta_secs(), *state.get()) {
        info!("Loading scene: {}", target.scene_name());
        next_state.set(target);
    }
}

fn update_fade_overlay(
    fader: Res<SceneFader>,
    mut overlay: Query<(&mut BackgroundColor, &mut FocusPolicy), With<FadeOverlay>>,
) {
    for (mut bg_color, mut focus) in &mut overlay {
        bg_color.0 = Color::BLACK.with_alpha(fader.alpha);
        *focus = if fader.is_busy() {
            FocusPolicy::Block
        } else {
            FocusPolicy::Pass
        };
    }
}
