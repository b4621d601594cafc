//! Juice domain: cursor position in world space and hit-testing for sprites.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Cursor position projected into the 2D world, refreshed every frame.
#[derive(Resource, Debug, Default)]
pub struct PointerState {
    pub world: Option<Vec2>,
}

/// World-space entity that reacts to the cursor inside a rectangle.
#[derive(Component, Debug, Clone, Copy)]
pub struct Clickable {
    pub half_size: Vec2,
}

impl Clickable {
    pub fn new(size: Vec2) -> Self {
        Self {
            half_size: size * 0.5,
        }
    }

    /// Axis-aligned test against the entity's scaled bounds.
    pub fn contains(&self, transform: &GlobalTransform, point: Vec2) -> bool {
        let (scale, _, translation) = transform.to_scale_rotation_translation();
        let local = point - translation.truncate();
        local.x.abs() <= self.half_size.x * scale.x.abs()
            && local.y.abs() <= self.half_size.y * scale.y.abs()
    }
}

pub(crate) fn update_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut pointer: ResMut<PointerState>,
) {
    let world = windows
        .single()
        .ok()
        .and_then(|window| window.cursor_position())
        .and_then(|cursor| {
            let (camera, camera_transform) = cameras.single().ok()?;
            camera.viewport_to_world_2d(camera_transform, cursor).ok()
        });

    if pointer.world != world {
        pointer.world = world;
    }
}
