//! Core domain: events shared between the menu, world select and battle.

use bevy::ecs::message::Message;

/// Event fired when a battle launched from a world is won
#[derive(Debug)]
pub struct WorldCompletedEvent {
    pub world_id: String,
}

impl Message for WorldCompletedEvent {}

/// Event asking the scene background to wiggle
#[derive(Debug)]
pub struct BackgroundKickEvent {
    pub amount: f32,
}

impl Message for BackgroundKickEvent {}

/// Event asking bump-enabled floating titles to hop
#[derive(Debug)]
pub struct TitleBumpEvent;

impl Message for TitleBumpEvent {}
