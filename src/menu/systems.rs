//! Menu domain: panel fades, buttons, book selection and visuals.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::GameTuning;
use crate::core::{BackgroundKickEvent, TitleBumpEvent};
use crate::juice::{Clickable, PointerState};
use crate::menu::book::{BookSelector, Outline};
use crate::menu::components::{
    BookLabel, BookOutline, BookSelectHeader, BookShelf, FocusOverlay, FocusTint, MenuAction,
    MenuButton, PanelRoot, PanelTint, SoundToggle, SoundToggleLabel,
};
use crate::menu::flow::{BackAction, MenuFlow, MenuPanel};
use crate::menu::sound::SoundSetting;
use crate::progress::ProgressStore;
use crate::transition::SceneFader;

/// Kick applied to the background by every main menu button
const BUTTON_KICK: f32 = 1.0;

pub(crate) fn tick_menu_flow(time: Res<Time>, mut flow: ResMut<MenuFlow>) {
    if let Some(panel) = flow.tick(time.delta_secs()) {
        debug!("Menu panel {:?} active", panel);
    }
}

pub(crate) fn apply_panel_views(
    flow: Res<MenuFlow>,
    mut roots: Query<(&PanelRoot, &mut Visibility)>,
    mut tinted: Query<(
        &PanelTint,
        Option<&mut BackgroundColor>,
        Option<&mut TextColor>,
    )>,
) {
    for (root, mut visibility) in &mut roots {
        let shown = flow.view(root.panel).opacity > 0.0;
        visibility.set_if_neq(if shown {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }

    for (tint, background, text_color) in &mut tinted {
        let alpha = tint.alpha * flow.view(tint.panel).opacity;
        if let Some(mut background) = background {
            background.0.set_alpha(alpha);
        }
        if let Some(mut text_color) = text_color {
            text_color.0.set_alpha(alpha);
        }
    }
}

pub(crate) fn apply_focus_overlay(
    flow: Res<MenuFlow>,
    mut overlay: Query<&mut Visibility, With<FocusOverlay>>,
    mut header: Query<&mut Visibility, (With<BookSelectHeader>, Without<FocusOverlay>)>,
    mut tinted: Query<(&FocusTint, Option<&mut BackgroundColor>, Option<&mut TextColor>)>,
) {
    let zoom = &flow.zoom;

    for mut visibility in &mut overlay {
        visibility.set_if_neq(if zoom.overlay_alpha > 0.0 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
    for mut visibility in &mut header {
        visibility.set_if_neq(if zoom.header_visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }

    let opacity = flow.view(MenuPanel::BookSelect).opacity;
    for (tint, background, text_color) in &mut tinted {
        let alpha = tint.alpha * zoom.overlay_alpha * opacity;
        if let Some(mut background) = background {
            background.0.set_alpha(alpha);
        }
        if let Some(mut text_color) = text_color {
            text_color.0.set_alpha(alpha);
        }
    }
}

pub(crate) fn handle_menu_buttons(
    buttons: Query<(&MenuButton, &Interaction), Changed<Interaction>>,
    mut flow: ResMut<MenuFlow>,
    mut fader: ResMut<SceneFader>,
    mut books: Query<&mut BookSelector>,
    mut bumps: MessageWriter<TitleBumpEvent>,
    mut kicks: MessageWriter<BackgroundKickEvent>,
    mut exit: MessageWriter<AppExit>,
) {
    for (button, interaction) in &buttons {
        if *interaction != Interaction::Pressed || fader.is_busy() {
            continue;
        }
        let interactable = match button.action {
            MenuAction::FocusPlay | MenuAction::FocusBack => {
                flow.zoom.overlay_interactable && flow.is_interactable(button.panel)
            }
            _ => flow.is_interactable(button.panel),
        };
        if !interactable {
            continue;
        }

        if button.panel == MenuPanel::Main {
            bumps.write(TitleBumpEvent);
            kicks.write(BackgroundKickEvent {
                amount: BUTTON_KICK,
            });
        }

        match button.action {
            MenuAction::Play => {
                flow.transition_to(MenuPanel::BookSelect);
            }
            MenuAction::About => {
                flow.transition_to(MenuPanel::About);
            }
            MenuAction::Leaderboard => {
                flow.transition_to(MenuPanel::Leaderboard);
            }
            MenuAction::Back | MenuAction::FocusBack => go_back(&mut flow, &mut books),
            MenuAction::FocusPlay => play_focused_book(&flow, &books, &mut fader),
            MenuAction::Exit => {
                info!("Exit requested from main menu");
                exit.write(AppExit::Success);
            }
        }
    }
}

pub(crate) fn handle_menu_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    fader: Res<SceneFader>,
    mut flow: ResMut<MenuFlow>,
    mut books: Query<&mut BookSelector>,
) {
    if keyboard.just_pressed(KeyCode::Escape) && !fader.is_busy() {
        go_back(&mut flow, &mut books);
    }
}

pub(crate) fn handle_sound_toggle(
    buttons: Query<&Interaction, (Changed<Interaction>, With<SoundToggle>)>,
    flow: Res<MenuFlow>,
    store: Option<ResMut<ProgressStore>>,
    mut sound: ResMut<SoundSetting>,
    mut kicks: MessageWriter<BackgroundKickEvent>,
    mut bumps: MessageWriter<TitleBumpEvent>,
) {
    let Some(mut store) = store else {
        return;
    };
    for interaction in &buttons {
        if *interaction != Interaction::Pressed || !flow.is_interactable(MenuPanel::Main) {
            continue;
        }
        sound.toggle(&mut store);
        info!("Sound {}", if sound.enabled { "on" } else { "off" });
        bumps.write(TitleBumpEvent);
        kicks.write(BackgroundKickEvent {
            amount: BUTTON_KICK,
        });
    }
}

pub(crate) fn sync_sound_toggle(
    sound: Res<SoundSetting>,
    mut buttons: Query<&mut BackgroundColor, With<SoundToggle>>,
    mut labels: Query<&mut Text, With<SoundToggleLabel>>,
) {
    if !sound.is_changed() {
        return;
    }
    for mut background in &mut buttons {
        let alpha = background.0.alpha();
        background.0 = sound.color().with_alpha(alpha);
    }
    for mut text in &mut labels {
        text.0 = sound.label().to_string();
    }
}

pub(crate) fn handle_book_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerState>,
    fader: Res<SceneFader>,
    mut flow: ResMut<MenuFlow>,
    mut books: Query<(&mut BookSelector, &Clickable, &GlobalTransform)>,
) {
    if !mouse.just_pressed(MouseButton::Left) || fader.is_busy() {
        return;
    }
    if !flow.is_interactable(MenuPanel::BookSelect) {
        return;
    }
    let Some(point) = pointer.world else {
        return;
    };

    let busy = flow.is_busy();
    let clicked = books
        .iter()
        .filter(|(book, clickable, global)| {
            book.accepts_click(busy) && clickable.contains(global, point)
        })
        .map(|(book, _, _)| (book.index, book.base, book.selected))
        .next();
    let Some((index, base, selected)) = clicked else {
        return;
    };

    if selected {
        reset_focus(&mut flow, books.iter_mut().map(|(book, _, _)| book));
        return;
    }
    if !flow.focus_on_book(index, base) {
        return;
    }

    let fade_out = flow.zoom.sibling_fade_out_duration();
    for (mut book, _, _) in &mut books {
        if book.index == index {
            book.select();
            info!("Book '{}' selected", book.name);
        } else {
            book.fade.fade_to(0.0, fade_out);
        }
    }
}

pub(crate) fn apply_shelf(
    flow: Res<MenuFlow>,
    mut shelves: Query<(&mut Transform, &mut Visibility), With<BookShelf>>,
) {
    let zoom = &flow.zoom;
    let shown = flow.view(MenuPanel::BookSelect).opacity > 0.0;

    for (mut transform, mut visibility) in &mut shelves {
        transform.translation.x = zoom.root_position.x;
        transform.translation.y = zoom.root_position.y;
        transform.scale = Vec3::new(zoom.root_scale, zoom.root_scale, 1.0);
        visibility.set_if_neq(if shown {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
}

pub(crate) fn animate_books(
    time: Res<Time>,
    tuning: Option<Res<GameTuning>>,
    flow: Res<MenuFlow>,
    mut books: Query<(&mut BookSelector, &mut Transform, &mut Sprite), Without<BookOutline>>,
    mut outlines: Query<
        (&BookOutline, &mut Sprite, &mut Visibility),
        Without<BookSelector>,
    >,
    mut labels: Query<(&BookLabel, &mut TextColor)>,
) {
    let Some(tuning) = tuning else {
        return;
    };
    let tuning = &tuning.books;
    let t = time.elapsed_secs();
    let dt = time.delta_secs();
    let opacity = flow.view(MenuPanel::BookSelect).opacity;
    let size = Vec2::from(tuning.size);
    let mut rng = rand::rng();

    let mut glows: Vec<(usize, Option<Outline>, f32)> = Vec::new();
    for (mut book, mut transform, mut sprite) in &mut books {
        book.tick(dt, &mut rng);

        let pose = book.pose(t, tuning);
        transform.translation.x = book.base.x + pose.offset.x;
        transform.translation.y = book.base.y + pose.offset.y;
        transform.rotation = Quat::from_rotation_z(pose.rotation.to_radians());
        transform.scale = Vec3::new(pose.scale, pose.scale, 1.0);

        let alpha = book.fade.alpha * opacity;
        sprite.color = book.tint(tuning).with_alpha(alpha);
        glows.push((book.index, book.outline(t, tuning), alpha));
    }

    for (outline, mut sprite, mut visibility) in &mut outlines {
        let glow = glows.iter().find(|(index, _, _)| *index == outline.book_index);
        match glow {
            Some((_, Some(glow), alpha)) => {
                sprite.color = glow.color.with_alpha(*alpha);
                sprite.custom_size = Some(size + Vec2::splat(glow.distance * 2.0));
                visibility.set_if_neq(Visibility::Inherited);
            }
            _ => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }

    for (label, mut text_color) in &mut labels {
        if let Some((_, _, alpha)) = glows.iter().find(|(index, _, _)| *index == label.book_index) {
            text_color.0.set_alpha(*alpha);
        }
    }
}

/// Back leaves the book focus first, then the current panel.
fn go_back(flow: &mut MenuFlow, books: &mut Query<&mut BookSelector>) {
    match flow.back_action() {
        BackAction::ResetZoom => reset_focus(flow, books.iter_mut()),
        BackAction::ToMain => {
            flow.transition_to(MenuPanel::Main);
        }
        BackAction::Ignored => debug!("Back ignored while the menu is busy"),
    }
}

fn reset_focus<'a>(flow: &mut MenuFlow, books: impl Iterator<Item = Mut<'a, BookSelector>>) {
    let Some(selected) = flow.reset_zoom() else {
        return;
    };
    let fade_in = flow.zoom.sibling_fade_in_duration();
    for mut book in books {
        if book.index == selected {
            book.deselect();
        } else {
            book.fade.fade_to(1.0, fade_in);
        }
    }
}

fn play_focused_book(flow: &MenuFlow, books: &Query<&mut BookSelector>, fader: &mut SceneFader) {
    let scene = flow
        .zoom
        .selected
        .and_then(|selected| books.iter().find(|book| book.index == selected))
        .map(|book| book.scene.as_str())
        .filter(|scene| !scene.is_empty());

    match scene {
        Some(scene) => {
            info!("Loading scene: {}", scene);
            fader.fade_to_scene(scene);
        }
        None => error!("No book selected or its scene is not set"),
    }
}
