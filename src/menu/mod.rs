//! Menu domain: main menu panels, the book shelf and the sound toggle.
//!
//! Panel and zoom bookkeeping lives in [`MenuFlow`] and [`BookSelector`];
//! the systems only copy their state onto nodes, sprites and transforms.

mod book;
mod components;
mod flow;
mod sound;
mod spawn;
mod systems;
mod zoom;


use bevy::prelude::*;

use crate::core::GameState;
use crate::menu::flow::MenuFlow;
use crate::menu::sound::{SoundSetting, gate_menu_music, load_sound_setting, spawn_menu_music};
use crate::menu::spawn::{cleanup_main_menu, spawn_main_menu};
use crate::menu::systems::{
    animate_books, apply_focus_overlay, apply_panel_views, apply_shelf, handle_book_clicks,
    handle_menu_buttons, handle_menu_keys, handle_sound_toggle, sync_sound_toggle,
    tick_menu_flow,
};

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundSetting>()
            .add_systems(Startup, load_sound_setting)
            .add_systems(Update, gate_menu_music)
            .add_systems(OnEnter(GameState::MainMenu), (spawn_main_menu, spawn_menu_music))
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                (
                    handle_menu_buttons,
                    handle_sound_toggle,
                    handle_menu_keys,
                    handle_book_clicks,
                    tick_menu_flow,
                    apply_panel_views,
                    apply_focus_overlay,
                    apply_shelf,
                    animate_books,
                    sync_sound_toggle,
                )
                    .chain()
                    .run_if(in_state(GameState::MainMenu).and(resource_exists::<MenuFlow>)),
            );
    }
}
