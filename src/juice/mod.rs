//! Juice domain: small reusable animations for menus and world select.
//!
//! Each effect is a component holding its own timers; the systems here only
//! tick them and copy the result onto `Transform`, colors or node sizes.

mod effects;
mod float;
mod pointer;
mod unlock;


pub use effects::{BackgroundWiggle, FadeIn, PressSquish};
pub use float::UiFloat;
pub use pointer::{Clickable, PointerState};
pub use unlock::{PopCurve, UnlockAnimation};

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{BackgroundKickEvent, TitleBumpEvent};
use crate::juice::pointer::update_pointer;

pub struct JuicePlugin;

impl Plugin for JuicePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_systems(PreUpdate, update_pointer)
            .add_systems(
                Update,
                (
                    bump_floats,
                    animate_floats,
                    tick_fade_ins,
                    squish_buttons,
                    wiggle_backgrounds,
                ),
            );
    }
}

/// Set the alpha of whichever color carriers an entity has.
pub fn apply_alpha(alpha: f32, text_color: Option<&mut TextColor>, sprite: Option<&mut Sprite>) {
    if let Some(text_color) = text_color {
        text_color.0.set_alpha(alpha);
    }
    if let Some(sprite) = sprite {
        sprite.color.set_alpha(alpha);
    }
}

fn bump_floats(mut events: MessageReader<TitleBumpEvent>, mut floats: Query<&mut UiFloat>) {
    if events.read().count() == 0 {
        return;
    }
    for mut float in &mut floats {
        float.trigger_bump();
    }
}

fn animate_floats(
    time: Res<Time>,
    pointer: Res<PointerState>,
    mut floats: Query<(&mut UiFloat, &mut Transform, &GlobalTransform, Option<&Clickable>)>,
) {
    let t = time.elapsed_secs();
    let dt = time.delta_secs();

    for (mut float, mut transform, global, clickable) in &mut floats {
        let hovered = match (clickable, pointer.world) {
            (Some(clickable), Some(point)) => clickable.contains(global, point),
            _ => false,
        };
        float.set_hovering(hovered);

        let pose = float.tick(t, dt);
        transform.translation.x = float.base.x;
        transform.translation.y = float.base.y + pose.offset_y;
        transform.rotation = Quat::from_rotation_z(pose.rotation.to_radians());
        transform.scale = Vec3::new(pose.scale, pose.scale, 1.0);
    }
}

fn tick_fade_ins(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &mut FadeIn,
        &mut Transform,
        Option<&mut TextColor>,
        Option<&mut Sprite>,
    )>,
) {
    for (entity, mut fade, mut transform, mut text_color, mut sprite) in &mut query {
        let (alpha, y) = fade.tick(time.delta_secs());
        transform.translation.y = y;
        apply_alpha(alpha, text_color.as_deref_mut(), sprite.as_deref_mut());

        if fade.is_finished() {
            commands.entity(entity).remove::<FadeIn>();
        }
    }
}

fn squish_buttons(mut buttons: Query<(&PressSquish, &Interaction, &mut Node), Changed<Interaction>>) {
    for (squish, interaction, mut node) in &mut buttons {
        let size = squish.size_for(*interaction);
        node.width = Val::Px(size.x);
        node.height = Val::Px(size.y);
    }
}

fn wiggle_backgrounds(
    time: Res<Time>,
    mut kicks: MessageReader<BackgroundKickEvent>,
    mut backgrounds: Query<(&mut BackgroundWiggle, &mut Transform)>,
) {
    let total: f32 = kicks.read().map(|kick| kick.amount).sum();

    for (mut wiggle, mut transform) in &mut backgrounds {
        if total > 0.0 {
            wiggle.kick(total);
        }
        if wiggle.is_resting() {
            continue;
        }
        let degrees = wiggle.tick(time.delta_secs());
        transform.rotation = Quat::from_rotation_z(degrees.to_radians());
    }
}
