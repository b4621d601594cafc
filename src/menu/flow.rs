//! Menu domain: mutually exclusive panels and their cross-fades.

use bevy::prelude::*;

use crate::content::MenuTuning;
use crate::menu::zoom::ZoomFocus;
use crate::tween::Tween;

/// Shortest panel cross-fade
const MIN_TRANSITION: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuPanel {
    Main,
    About,
    Leaderboard,
    BookSelect,
}

impl MenuPanel {
    #[cfg(test)]
    pub const ALL: [MenuPanel; 4] = [
        MenuPanel::Main,
        MenuPanel::About,
        MenuPanel::Leaderboard,
        MenuPanel::BookSelect,
    ];

    fn slot(self) -> usize {
        match self {
            MenuPanel::Main => 0,
            MenuPanel::About => 1,
            MenuPanel::Leaderboard => 2,
            MenuPanel::BookSelect => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelView {
    pub opacity: f32,
    pub interactable: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct PanelTransition {
    from: MenuPanel,
    to: MenuPanel,
    tween: Tween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    ResetZoom,
    ToMain,
    Ignored,
}

/// Panel state for the main menu. Panel cross-fades and the book zoom share
/// one busy flag.
#[derive(Resource, Debug, Clone)]
pub struct MenuFlow {
    current: MenuPanel,
    views: [PanelView; 4],
    transition: Option<PanelTransition>,
    duration: f32,
    pub zoom: ZoomFocus,
}

impl MenuFlow {
    pub fn new(tuning: &MenuTuning, shelf_position: Vec2) -> Self {
        let mut views = [PanelView {
            opacity: 0.0,
            interactable: false,
        }; 4];
        views[MenuPanel::Main.slot()] = PanelView {
            opacity: 1.0,
            interactable: true,
        };

        Self {
            current: MenuPanel::Main,
            views,
            transition: None,
            duration: tuning.transition_duration.max(MIN_TRANSITION),
            zoom: ZoomFocus::new(shelf_position, 1.0, tuning),
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> MenuPanel {
        self.current
    }

    pub fn view(&self, panel: MenuPanel) -> PanelView {
        self.views[panel.slot()]
    }

    pub fn is_interactable(&self, panel: MenuPanel) -> bool {
        self.view(panel).interactable
    }

    pub fn is_busy(&self) -> bool {
        self.transition.is_some() || self.zoom.is_animating()
    }

    /// Cross-fade to `panel`. Ignored while busy or when already there.
    pub fn transition_to(&mut self, panel: MenuPanel) -> bool {
        if self.is_busy() || self.current == panel {
            return false;
        }

        let from = self.current;
        self.views[from.slot()].interactable = false;
        self.views[panel.slot()] = PanelView {
            opacity: 0.0,
            interactable: false,
        };
        self.transition = Some(PanelTransition {
            from,
            to: panel,
            tween: Tween::new(self.duration),
        });
        debug!("Menu fade {:?} -> {:?}", from, panel);
        true
    }

    /// Returns the panel that just became current, if a fade completed.
    pub fn tick(&mut self, delta: f32) -> Option<MenuPanel> {
        self.zoom.tick(delta);

        let transition = self.transition.as_mut()?;
        transition.tween.tick(delta);
        let s = transition.tween.eased(EaseFunction::CubicOut);
        let (from, to) = (transition.from, transition.to);
        let finished = transition.tween.finished();

        self.views[from.slot()].opacity = 1.0 - s;
        self.views[to.slot()].opacity = s;
        if !finished {
            return None;
        }

        self.views[from.slot()] = PanelView {
            opacity: 0.0,
            interactable: false,
        };
        self.views[to.slot()] = PanelView {
            opacity: 1.0,
            interactable: true,
        };
        self.current = to;
        self.transition = None;
        Some(to)
    }

    /// Zoom onto a book. Ignored while any fade or zoom is in flight.
    pub fn focus_on_book(&mut self, index: usize, item_local: Vec2) -> bool {
        if self.is_busy() {
            return false;
        }
        self.zoom.focus_on(index, item_local)
    }

    /// Leave the book focus. Returns the book that was focused.
    pub fn reset_zoom(&mut self) -> Option<usize> {
        if self.is_busy() {
            return None;
        }
        self.zoom.reset()
    }

    /// Back leaves the book focus first, then returns to the main panel.
    pub fn back_action(&self) -> BackAction {
        if self.zoom.is_focused() {
            BackAction::ResetZoom
        } else if self.current != MenuPanel::Main && !self.is_busy() {
            BackAction::ToMain
        } else {
            BackAction::Ignored
        }
    }
}
