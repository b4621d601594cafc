//! Menu domain: persisted sound on/off setting and the menu music it gates.

use bevy::prelude::*;

use crate::menu::components::MenuEntity;
use crate::progress::ProgressStore;

pub const SOUND_KEY: &str = "Quested_Sound";

const MENU_MUSIC: &str = "audio/menu_theme.wav";

const SOUND_ON_COLOR: Color = Color::srgb(0.2, 0.45, 0.9);
const SOUND_OFF_COLOR: Color = Color::srgb(0.85, 0.25, 0.25);

/// Looping background music owned by the main menu
#[derive(Component, Debug)]
pub struct MenuMusic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCommand {
    Play,
    Pause,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundSetting {
    pub enabled: bool,
}

impl Default for SoundSetting {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SoundSetting {
    pub fn from_store(store: &ProgressStore) -> Self {
        Self {
            enabled: store.flag_or(SOUND_KEY, true),
        }
    }

    pub fn toggle(&mut self, store: &mut ProgressStore) {
        self.enabled = !self.enabled;
        store.set_flag(SOUND_KEY, self.enabled);
    }

    /// Looping playback for newly spawned music, paused while sound is off.
    pub fn playback(self) -> PlaybackSettings {
        if self.enabled {
            PlaybackSettings::LOOP
        } else {
            PlaybackSettings::LOOP.paused()
        }
    }

    /// What a music sink in the given state needs to match the setting.
    pub fn music_command(self, paused: bool) -> Option<MusicCommand> {
        match (self.enabled, paused) {
            (true, true) => Some(MusicCommand::Play),
            (false, false) => Some(MusicCommand::Pause),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        if self.enabled { "Sound: On" } else { "Sound: Off" }
    }

    pub fn color(self) -> Color {
        if self.enabled {
            SOUND_ON_COLOR
        } else {
            SOUND_OFF_COLOR
        }
    }
}

pub(crate) fn load_sound_setting(mut commands: Commands, store: Option<Res<ProgressStore>>) {
    let setting = store
        .map(|store| SoundSetting::from_store(&store))
        .unwrap_or_default();
    info!("Sound {}", if setting.enabled { "on" } else { "off" });
    commands.insert_resource(setting);
}

pub(crate) fn spawn_menu_music(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    setting: Res<SoundSetting>,
) {
    commands.spawn((
        MenuEntity,
        MenuMusic,
        AudioPlayer::new(asset_server.load(MENU_MUSIC)),
        setting.playback(),
    ));
}

/// Pause or resume the menu music whenever it disagrees with the setting.
/// The sink only appears once the track has loaded.
pub(crate) fn gate_menu_music(
    setting: Res<SoundSetting>,
    music: Query<&AudioSink, With<MenuMusic>>,
) {
    for sink in &music {
        match setting.music_command(sink.is_paused()) {
            Some(MusicCommand::Play) => sink.play(),
            Some(MusicCommand::Pause) => sink.pause(),
            None => {}
        }
    }
}
