//! Debug domain: dev tools panel layout.

use bevy::prelude::*;

use crate::debug::state::{DebugAction, DebugState};

const PANEL_COLOR: Color = Color::srgba(0.08, 0.08, 0.12, 0.95);
const BUTTON_COLOR: Color = Color::srgb(0.2, 0.2, 0.28);
const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
const TITLE_COLOR: Color = Color::srgb(0.95, 0.75, 0.3);
const MUTED_TEXT: Color = Color::srgb(0.6, 0.6, 0.7);
const STATUS_COLOR: Color = Color::srgb(0.5, 0.9, 0.5);

/// Marker for the dev tools panel root
#[derive(Component, Debug)]
pub struct DebugUI;

/// Marker for the status message text
#[derive(Component, Debug)]
pub struct DebugStatusMessage;

#[derive(Component, Debug)]
pub struct DebugButton {
    pub action: DebugAction,
}

pub(crate) fn spawn_debug_ui(commands: &mut Commands, debug_state: &DebugState) {
    commands
        .spawn((
            DebugUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(16.0),
                width: Val::Px(300.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(6.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
            BorderColor::all(Color::srgb(0.45, 0.38, 0.2)),
            GlobalZIndex(900),
        ))
        .with_children(|panel| {
            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Text::new("DEV TOOLS"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(TITLE_COLOR),
                    ));
                    spawn_debug_button(row, "X", DebugAction::Close);
                });

            panel.spawn((
                Text::new("F1 or ` to toggle, Ctrl+Key for hotkeys"),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
            ));

            panel.spawn((
                DebugStatusMessage,
                Text::new(debug_state.message()),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(STATUS_COLOR),
                Node {
                    min_height: Val::Px(16.0),
                    ..default()
                },
            ));

            spawn_section(
                panel,
                "Progress",
                &[
                    ("Unlock All [Ctrl+U]", DebugAction::UnlockAll),
                    ("Reset [Ctrl+R]", DebugAction::ResetProgress),
                ],
            );
            spawn_section(
                panel,
                "Warp",
                &[
                    ("Menu [Ctrl+1]", DebugAction::WarpToMenu),
                    ("Worlds [Ctrl+2]", DebugAction::WarpToWorlds),
                    ("Battle [Ctrl+3]", DebugAction::WarpToBattle),
                ],
            );
        });
}

fn spawn_section(parent: &mut ChildSpawnerCommands, title: &str, buttons: &[(&str, DebugAction)]) {
    parent.spawn((
        Text::new(title),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(TITLE_COLOR),
        Node {
            margin: UiRect::top(Val::Px(6.0)),
            ..default()
        },
    ));

    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(6.0),
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|row| {
            for (label, action) in buttons {
                spawn_debug_button(row, label, *action);
            }
        });
}

fn spawn_debug_button(parent: &mut ChildSpawnerCommands, label: &str, action: DebugAction) {
    parent
        .spawn((
            DebugButton { action },
            Button,
            Node {
                padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
            BorderColor::all(Color::srgb(0.35, 0.35, 0.45)),
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size: 11.0,
                ..default()
            },
            TextColor(TEXT_COLOR),
        ));
}
