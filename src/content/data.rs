//! Content data definitions deserialized from RON files in assets/data/.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tween::Oscillation;

/// Wrapper for list-style data files: `( items: [ ... ] )`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub items: Vec<T>,
}

/// RGB triple in 0..1, used in data files instead of engine colors.
pub type Rgb = [f32; 3];

pub fn rgb(color: Rgb) -> Color {
    Color::srgb(color[0], color[1], color[2])
}

// -----------------------------------------------------------------------------
// Battle content
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, Reflect)]
pub enum EnemyDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Boss,
}

impl EnemyDifficulty {
    /// Player health lost when answering this tier's question wrong.
    pub fn damage_on_miss(self) -> f32 {
        match self {
            EnemyDifficulty::Easy => 0.5,
            EnemyDifficulty::Medium => 1.0,
            EnemyDifficulty::Hard => 1.5,
            EnemyDifficulty::Boss => 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct EnemyProfile {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    pub difficulty: EnemyDifficulty,
    /// Lets bosses render bigger than goblins.
    #[serde(default = "default_size_modifier")]
    pub size_modifier: f32,
    pub color: Rgb,
}

fn default_size_modifier() -> f32 {
    1.0
}

// -----------------------------------------------------------------------------
// Menu and world select content
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct BookDef {
    pub id: String,
    pub name: String,
    pub save_key: String,
    pub scene: String,
    #[serde(default)]
    pub start_unlocked: bool,
    pub color: Rgb,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct WorldDef {
    pub id: String,
    pub name: String,
    pub save_key: String,
    pub scene: String,
    #[serde(default)]
    pub start_unlocked: bool,
    /// Progress label, e.g. "0/15"
    pub progress: String,
    pub color: Rgb,
    /// Save key unlocked when this world's battle is won
    #[serde(default)]
    pub unlocks: Option<String>,
}

// -----------------------------------------------------------------------------
// Tuning
// -----------------------------------------------------------------------------

/// Single-struct tuning file. Every section falls back to its defaults.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameTuning {
    pub battle: BattleTuning,
    pub menu: MenuTuning,
    pub books: BookTuning,
    pub worlds: WorldTuning,
    pub slider: SliderTuning,
    pub fader: FaderTuning,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BattleTuning {
    pub player_hearts: u32,
    pub player_size: f32,
    pub enemy_size: f32,
    /// Base sprite edge in pixels before size scaling
    pub sprite_size: f32,
    pub player_home: [f32; 2],
    pub enemy_home: [f32; 2],
    pub attack: AttackTuning,
}

impl Default for BattleTuning {
    fn default() -> Self {
        Self {
            player_hearts: 3,
            player_size: 0.5,
            enemy_size: 0.5,
            sprite_size: 320.0,
            player_home: [-280.0, -40.0],
            enemy_home: [280.0, -40.0],
            attack: AttackTuning::default(),
        }
    }
}

/// Attack sequence timings and distances. Distances are in pixels.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AttackTuning {
    pub anticipation: f32,
    pub lunge: f32,
    pub shake_count: u32,
    pub shake_interval: f32,
    pub shake_radius: f32,
    pub hold: f32,
    pub return_time: f32,
    pub wind_up_distance: f32,
    /// How far in front of the victim the attacker stops
    pub strike_distance: f32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            anticipation: 0.1,
            lunge: 0.1,
            shake_count: 6,
            shake_interval: 0.03,
            shake_radius: 30.0,
            hold: 0.1,
            return_time: 0.1,
            wind_up_distance: 50.0,
            strike_distance: 200.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuTuning {
    pub transition_duration: f32,
    pub focus_scale: f32,
    pub focus_duration: f32,
    pub focus_ui_duration: f32,
}

impl Default for MenuTuning {
    fn default() -> Self {
        Self {
            transition_duration: 0.25,
            focus_scale: 1.5,
            focus_duration: 0.5,
            focus_ui_duration: 0.2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BookTuning {
    pub spacing: f32,
    pub size: [f32; 2],
    pub locked_color: Rgb,
    pub shake_duration: f32,
    pub max_shake: f32,
    pub pop_duration: f32,
    pub pop_scale: f32,
    pub outline_hue_speed: f32,
    pub outline_saturation: f32,
    pub outline_value: f32,
    pub min_outline_distance: f32,
    pub max_outline_distance: f32,
    pub outline_distance_speed: f32,
    pub idle: Oscillation,
    pub selected: Oscillation,
}

impl Default for BookTuning {
    fn default() -> Self {
        Self {
            spacing: 240.0,
            size: [150.0, 200.0],
            locked_color: [0.5, 0.5, 0.5],
            shake_duration: 1.5,
            max_shake: 8.0,
            pop_duration: 0.3,
            pop_scale: 1.2,
            outline_hue_speed: 0.5,
            outline_saturation: 1.0,
            outline_value: 1.0,
            min_outline_distance: 2.0,
            max_outline_distance: 4.0,
            outline_distance_speed: 1.5,
            idle: Oscillation::default(),
            selected: Oscillation {
                float_amplitude: 2.0,
                float_speed: 0.5,
                rot_amplitude: 1.0,
                rot_speed: 0.2,
                scale_amplitude: 0.02,
                scale_speed: 0.25,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldTuning {
    pub size: f32,
    pub locked_color: Rgb,
    pub selected_color: Rgb,
    pub unselected_color: Rgb,
    pub selected_scale: f32,
    pub scale_duration: f32,
    pub bump_scale: f32,
    pub bump_duration: f32,
    pub shake_duration: f32,
    pub max_shake: f32,
    pub pop_duration: f32,
    pub pop_overshoot: f32,
    pub outline_hue_speed: f32,
    pub outline_saturation: f32,
    pub outline_value: f32,
    pub float: Oscillation,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            size: 220.0,
            locked_color: [0.3, 0.3, 0.3],
            selected_color: [1.0, 1.0, 1.0],
            unselected_color: [0.6, 0.6, 0.6],
            selected_scale: 1.2,
            scale_duration: 0.2,
            bump_scale: 1.15,
            bump_duration: 0.15,
            shake_duration: 1.5,
            max_shake: 20.0,
            pop_duration: 0.3,
            pop_overshoot: 1.3,
            outline_hue_speed: 0.5,
            outline_saturation: 1.0,
            outline_value: 1.0,
            float: Oscillation {
                float_amplitude: 3.0,
                float_speed: 0.8,
                rot_amplitude: 0.5,
                rot_speed: 0.5,
                scale_amplitude: 0.0,
                scale_speed: 0.0,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderTuning {
    pub slide_duration: f32,
    pub spacing: f32,
    pub background_kick: f32,
    pub play_kick: f32,
}

impl Default for SliderTuning {
    fn default() -> Self {
        Self {
            slide_duration: 0.4,
            spacing: 420.0,
            background_kick: 4.0,
            play_kick: 6.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FaderTuning {
    pub fade_out: f32,
    pub fade_in: f32,
    pub hold: f32,
}

impl Default for FaderTuning {
    fn default() -> Self {
        Self {
            fade_out: 0.35,
            fade_in: 0.25,
            hold: 0.03,
        }
    }
}
