//! Worlds domain: marker components for the world select scene.

use bevy::prelude::*;

/// Marker for everything spawned by the world select scene
#[derive(Component, Debug)]
pub struct WorldEntity;

/// Container the slider moves horizontally
#[derive(Component, Debug)]
pub struct SliderRoot;

#[derive(Component, Debug)]
pub struct WorldOutline {
    pub index: usize,
}

/// Name and progress labels, shown only for the selected world
#[derive(Component, Debug)]
pub struct WorldCaption {
    pub index: usize,
}

#[derive(Component, Debug)]
pub struct WorldProgressText {
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldAction {
    Previous,
    Next,
    Play,
    Back,
}

#[derive(Component, Debug)]
pub struct WorldButton {
    pub action: WorldAction,
}
