//! Game balance and start-of-game templates
//!
//! Everything here is plain data. The defaults are the shipped balance;
//! a JSON file may override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize, de};

use crate::consts::FRAMES_PER_SECOND;

/// Tunable gameplay numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Pixels the player moves per frame for each held direction
    pub player_speed: f32,
    /// Shuriken speed (pixels/frame)
    pub projectile_speed: f32,
    /// Distance a shuriken flies before it is discarded
    pub projectile_max_range: f32,
    /// Shuriken hitbox edge length
    pub projectile_size: f32,
    /// Edge length of the shrunk player/enemy contact box (before enemy scale)
    pub contact_box_size: f32,
    /// Enemies closer than this start chasing
    pub aggro_radius: f32,
    /// Per-axis pursuit step (pixels/frame)
    pub pursuit_step: f32,
    /// Grace frames after the player takes contact damage
    pub damage_cooldown_frames: u32,
    /// Where the player is placed when a level is cleared
    pub respawn_point: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 2.0,
            projectile_speed: 3.0,
            projectile_max_range: 100.0,
            projectile_size: 8.0,
            contact_box_size: 8.0,
            aggro_radius: 50.0,
            pursuit_step: 1.0,
            damage_cooldown_frames: FRAMES_PER_SECOND,
            respawn_point: crate::map_center(),
        }
    }
}

impl Tuning {
    fn validate(&self) -> Result<(), serde_json::Error> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.projectile_speed) {
            return Err(de::Error::custom(format!(
                "projectile_speed must be positive, got {}",
                self.projectile_speed
            )));
        }
        if !positive(self.projectile_max_range) {
            return Err(de::Error::custom(format!(
                "projectile_max_range must be positive, got {}",
                self.projectile_max_range
            )));
        }
        Ok(())
    }
}

/// Initial player state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTemplate {
    pub pos: Vec2,
    pub health: u32,
}

/// Initial potion placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotionTemplate {
    pub pos: Vec2,
    pub heal: u32,
}

/// Immutable templates the game is rebuilt from on restart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartLayout {
    pub player: PlayerTemplate,
    pub potions: Vec<PotionTemplate>,
}

impl Default for StartLayout {
    fn default() -> Self {
        Self {
            player: PlayerTemplate {
                pos: Vec2::new(50.0, 50.0),
                health: 3,
            },
            potions: vec![PotionTemplate {
                pos: Vec2::new(210.0, 100.0),
                heal: 1,
            }],
        }
    }
}

/// Full game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tuning: Tuning,
    pub start: StartLayout,
}

impl GameConfig {
    /// Parse a configuration from JSON; absent fields keep their defaults.
    ///
    /// Shuriken speed and range must be positive and finite, otherwise a
    /// thrown shuriken would never expire.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.tuning.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read config {}: {}", path.display(), e);
                log::info!("Using default config");
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Malformed config {}: {}", path.display(), e);
                log::info!("Using default config");
                Self::default()
            }
        }
    }
}
