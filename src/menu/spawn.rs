//! Menu domain: main menu scene setup and teardown.

use bevy::prelude::*;

use crate::content::{BookDef, BookTuning, ContentRegistry, GameTuning};
use crate::juice::{BackgroundWiggle, Clickable, PressSquish, UiFloat};
use crate::menu::book::BookSelector;
use crate::menu::components::{
    BookLabel, BookOutline, BookSelectHeader, BookShelf, FocusOverlay, FocusTint, MenuAction,
    MenuButton, MenuEntity, MenuTitle, PanelRoot, PanelTint, SoundToggle, SoundToggleLabel,
};
use crate::menu::flow::{MenuFlow, MenuPanel};
use crate::menu::sound::SoundSetting;
use crate::progress::ProgressStore;
use crate::tween::{Oscillation, random_phase};

pub(crate) const SHELF_POSITION: Vec2 = Vec2::new(0.0, -30.0);
const TITLE_POSITION: Vec2 = Vec2::new(0.0, 210.0);

pub(crate) const BUTTON_IDLE: Color = Color::srgb(0.18, 0.2, 0.3);
const BACKGROUND_COLOR: Color = Color::srgb(0.09, 0.1, 0.16);
const CARD_COLOR: Color = Color::srgb(0.12, 0.13, 0.2);
const TEXT_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);
const MUTED_TEXT: Color = Color::srgb(0.6, 0.6, 0.72);

const BUTTON_SIZE: Vec2 = Vec2::new(260.0, 56.0);
const SMALL_BUTTON_SIZE: Vec2 = Vec2::new(160.0, 48.0);
const LEADERBOARD_ROWS: usize = 5;

/// Any tint marker a menu element carries.
trait Tint: Component + Copy {}
impl Tint for PanelTint {}
impl Tint for FocusTint {}

pub(crate) fn spawn_main_menu(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
    tuning: Option<Res<GameTuning>>,
    store: Option<ResMut<ProgressStore>>,
    sound: Res<SoundSetting>,
) {
    let tuning = tuning.map(|t| (*t).clone()).unwrap_or_default();
    let books = match registry {
        Some(registry) => registry.books.clone(),
        None => {
            warn!("Content registry missing, shelving the builtin books");
            ContentRegistry::builtin().books
        }
    };

    commands.spawn((
        MenuEntity,
        BackgroundWiggle::default(),
        Sprite::from_color(BACKGROUND_COLOR, Vec2::new(2600.0, 1800.0)),
        Transform::from_xyz(0.0, 0.0, -10.0),
    ));

    let mut rng = rand::rng();
    commands.spawn((
        MenuEntity,
        MenuTitle,
        PanelTint {
            panel: MenuPanel::Main,
            alpha: 1.0,
        },
        UiFloat::new(
            TITLE_POSITION,
            Oscillation {
                float_amplitude: 10.0,
                float_speed: 1.0,
                rot_amplitude: 2.0,
                rot_speed: 0.5,
                scale_amplitude: 0.02,
                scale_speed: 0.8,
            },
            random_phase(&mut rng),
        )
        .with_bump(),
        Clickable::new(Vec2::new(520.0, 110.0)),
        Text2d::new("QUESTED"),
        TextFont {
            font_size: 96.0,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Transform::from_xyz(TITLE_POSITION.x, TITLE_POSITION.y, 5.0),
    ));

    spawn_shelf(&mut commands, &books, &tuning.books, store);
    spawn_main_panel(&mut commands, *sound);
    spawn_about_panel(&mut commands);
    spawn_leaderboard_panel(&mut commands);
    spawn_book_select_panel(&mut commands);

    commands.insert_resource(MenuFlow::new(&tuning.menu, SHELF_POSITION));
    info!("Main menu ready with {} books", books.len());
}

pub(crate) fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MenuEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<MenuFlow>();
}

fn spawn_shelf(
    commands: &mut Commands,
    books: &[BookDef],
    tuning: &BookTuning,
    mut store: Option<ResMut<ProgressStore>>,
) {
    let size = Vec2::from(tuning.size);
    let mut rng = rand::rng();
    let center = (books.len().saturating_sub(1)) as f32 * 0.5;

    commands
        .spawn((
            MenuEntity,
            BookShelf,
            Transform::from_xyz(SHELF_POSITION.x, SHELF_POSITION.y, 1.0),
            Visibility::Hidden,
        ))
        .with_children(|shelf| {
            for (index, def) in books.iter().enumerate() {
                let (locked, fresh) = match store.as_deref_mut() {
                    Some(store) => {
                        if def.start_unlocked {
                            store.ensure_unlocked(&def.save_key);
                        }
                        let fresh = store.take_fresh_unlock(&def.save_key);
                        (!store.is_unlocked(&def.save_key), fresh)
                    }
                    None => (!def.start_unlocked, false),
                };

                let base = Vec2::new((index as f32 - center) * tuning.spacing, 0.0);
                let mut selector =
                    BookSelector::new(def, index, base, locked, random_phase(&mut rng));
                if fresh && !locked {
                    info!("Book '{}' freshly unlocked", def.name);
                    selector.begin_unlock(tuning);
                }
                let color = selector.tint(tuning);

                shelf
                    .spawn((
                        selector,
                        Clickable::new(size),
                        Sprite::from_color(color, size),
                        Transform::from_xyz(base.x, base.y, 1.0),
                    ))
                    .with_children(|book| {
                        book.spawn((
                            BookOutline { book_index: index },
                            Sprite::from_color(Color::WHITE, size),
                            Transform::from_xyz(0.0, 0.0, -0.5),
                            Visibility::Hidden,
                        ));
                        book.spawn((
                            BookLabel { book_index: index },
                            Text2d::new(def.name.clone()),
                            TextFont {
                                font_size: 28.0,
                                ..default()
                            },
                            TextColor(TEXT_COLOR),
                            Transform::from_xyz(0.0, -size.y * 0.5 - 28.0, 0.5),
                        ));
                    });
            }
        });
}

fn panel_root(panel: MenuPanel, justify: JustifyContent) -> impl Bundle {
    let visibility = if panel == MenuPanel::Main {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    (
        MenuEntity,
        PanelRoot { panel },
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            flex_direction: FlexDirection::Column,
            justify_content: justify,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(40.0)),
            row_gap: Val::Px(14.0),
            ..default()
        },
        visibility,
    )
}

fn panel_tint(panel: MenuPanel) -> PanelTint {
    PanelTint { panel, alpha: 1.0 }
}

fn spawn_main_panel(commands: &mut Commands, sound: SoundSetting) {
    let tint = panel_tint(MenuPanel::Main);

    commands
        .spawn(panel_root(MenuPanel::Main, JustifyContent::FlexEnd))
        .with_children(|root| {
            spawn_button(root, "Play", MenuAction::Play, MenuPanel::Main, BUTTON_SIZE, tint);
            spawn_button(root, "About", MenuAction::About, MenuPanel::Main, BUTTON_SIZE, tint);
            spawn_button(
                root,
                "Leaderboard",
                MenuAction::Leaderboard,
                MenuPanel::Main,
                BUTTON_SIZE,
                tint,
            );

            root.spawn((
                SoundToggle,
                tint,
                Button,
                PressSquish::new(BUTTON_SIZE),
                button_node(BUTTON_SIZE),
                BackgroundColor(sound.color()),
            ))
            .with_children(|button| {
                button.spawn((
                    SoundToggleLabel,
                    tint,
                    Text::new(sound.label()),
                    TextFont {
                        font_size: 26.0,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
            });

            spawn_button(root, "Exit", MenuAction::Exit, MenuPanel::Main, BUTTON_SIZE, tint);
        });
}

fn spawn_about_panel(commands: &mut Commands) {
    let panel = MenuPanel::About;
    let tint = panel_tint(panel);

    commands
        .spawn(panel_root(panel, JustifyContent::Center))
        .with_children(|root| {
            root.spawn((card_node(), tint, BackgroundColor(CARD_COLOR)))
                .with_children(|card| {
                    spawn_text(card, "About", 44.0, TEXT_COLOR, tint);
                    spawn_text(
                        card,
                        "Answer math questions to defeat the monsters of each world.\n\
                         Pick the right answer and your hero strikes.\n\
                         Pick the wrong one and the enemy hits back.",
                        22.0,
                        MUTED_TEXT,
                        tint,
                    );
                    spawn_button(card, "Back", MenuAction::Back, panel, SMALL_BUTTON_SIZE, tint);
                });
        });
}

fn spawn_leaderboard_panel(commands: &mut Commands) {
    let panel = MenuPanel::Leaderboard;
    let tint = panel_tint(panel);

    commands
        .spawn(panel_root(panel, JustifyContent::Center))
        .with_children(|root| {
            root.spawn((card_node(), tint, BackgroundColor(CARD_COLOR)))
                .with_children(|card| {
                    spawn_text(card, "Leaderboard", 44.0, TEXT_COLOR, tint);
                    for rank in 1..=LEADERBOARD_ROWS {
                        spawn_text(card, &format!("{rank}.  ---"), 24.0, MUTED_TEXT, tint);
                    }
                    spawn_button(card, "Back", MenuAction::Back, panel, SMALL_BUTTON_SIZE, tint);
                });
        });
}

fn spawn_book_select_panel(commands: &mut Commands) {
    let panel = MenuPanel::BookSelect;
    let tint = panel_tint(panel);
    let focus_tint = FocusTint { alpha: 1.0 };

    commands
        .spawn(panel_root(panel, JustifyContent::SpaceBetween))
        .with_children(|root| {
            root.spawn((
                BookSelectHeader,
                Node {
                    width: Val::Percent(100.0),
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    ..default()
                },
            ))
            .with_children(|header| {
                spawn_button(header, "Back", MenuAction::Back, panel, SMALL_BUTTON_SIZE, tint);
                spawn_text(header, "Choose a Book", 40.0, TEXT_COLOR, tint);
                // Keeps the title centered
                header.spawn(Node {
                    width: Val::Px(SMALL_BUTTON_SIZE.x),
                    ..default()
                });
            });

            root.spawn((
                FocusOverlay,
                Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(24.0),
                    ..default()
                },
                Visibility::Hidden,
            ))
            .with_children(|overlay| {
                spawn_button(
                    overlay,
                    "Play",
                    MenuAction::FocusPlay,
                    panel,
                    BUTTON_SIZE,
                    focus_tint,
                );
                spawn_button(
                    overlay,
                    "Back",
                    MenuAction::FocusBack,
                    panel,
                    SMALL_BUTTON_SIZE,
                    focus_tint,
                );
            });
        });
}

fn card_node() -> Node {
    Node {
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        row_gap: Val::Px(16.0),
        padding: UiRect::all(Val::Px(32.0)),
        max_width: Val::Px(720.0),
        ..default()
    }
}

fn button_node(size: Vec2) -> Node {
    Node {
        width: Val::Px(size.x),
        height: Val::Px(size.y),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

fn spawn_text(
    parent: &mut ChildSpawnerCommands,
    text: &str,
    font_size: f32,
    color: Color,
    tint: impl Tint,
) {
    parent.spawn((
        tint,
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
    ));
}

fn spawn_button(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    action: MenuAction,
    panel: MenuPanel,
    size: Vec2,
    tint: impl Tint,
) {
    parent
        .spawn((
            MenuButton { action, panel },
            tint,
            Button,
            PressSquish::new(size),
            button_node(size),
            BackgroundColor(BUTTON_IDLE),
        ))
        .with_children(|button| {
            spawn_text(button, label, 26.0, TEXT_COLOR, tint);
        });
}
