//! Menu domain: marker components for the main menu scene.

use bevy::prelude::*;

use crate::menu::flow::MenuPanel;

/// Marker for everything spawned by the main menu scene
#[derive(Component, Debug)]
pub struct MenuEntity;

/// Root node of a menu panel
#[derive(Component, Debug)]
pub struct PanelRoot {
    pub panel: MenuPanel,
}

/// Element whose alpha follows its panel's opacity
#[derive(Component, Debug, Clone, Copy)]
pub struct PanelTint {
    pub panel: MenuPanel,
    pub alpha: f32,
}

/// Element of the book focus overlay
#[derive(Component, Debug, Clone, Copy)]
pub struct FocusTint {
    pub alpha: f32,
}

#[derive(Component, Debug)]
pub struct FocusOverlay;

#[derive(Component, Debug)]
pub struct BookSelectHeader;

/// World-space parent of every book; zoomed as a whole
#[derive(Component, Debug)]
pub struct BookShelf;

/// Glow sprite behind the book at `book_index`
#[derive(Component, Debug)]
pub struct BookOutline {
    pub book_index: usize,
}

/// Name tag under the book at `book_index`
#[derive(Component, Debug)]
pub struct BookLabel {
    pub book_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    About,
    Leaderboard,
    Back,
    Exit,
    FocusPlay,
    FocusBack,
}

#[derive(Component, Debug)]
pub struct MenuButton {
    pub action: MenuAction,
    pub panel: MenuPanel,
}

#[derive(Component, Debug)]
pub struct MenuTitle;

#[derive(Component, Debug)]
pub struct SoundToggle;

#[derive(Component, Debug)]
pub struct SoundToggleLabel;
