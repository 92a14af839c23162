//! Game state and core simulation types
//!
//! One `GameState` owns everything the frame step mutates. There are no
//! globals; a restart is just a fresh state built from the same config.

use serde::{Deserialize, Serialize};

use super::entity::EntityStore;
use super::input::{FrameInput, InputSampler};
use super::level;
use crate::tuning::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation running
    #[default]
    Active,
    /// Player died; only a restart request is honoured
    GameOver,
}

/// Things that happened during the last step, for audio/HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired,
    /// A shuriken struck the enemy at `index`
    EnemyHit { index: usize, health: u32 },
    EnemyKilled { index: usize },
    PlayerHurt { health: u32 },
    PotionCollected { heal: u32, health: u32 },
    /// Level at `level` (0-based) was cleared
    LevelCleared { level: u32 },
    BossAppeared,
    GameOver,
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance numbers and the immutable start templates
    pub config: GameConfig,
    /// Every live entity
    pub entities: EntityStore,
    pub phase: GamePhase,
    /// Current level (0-based index into the level table)
    pub level: u32,
    /// Steps since the last reset
    pub frame_count: u64,
    /// Fire-button latch
    pub input: InputSampler,
    /// Events recorded during the most recent step
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// New game with the shipped balance
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// New game from a config: player and potions from the start
    /// templates, enemies from the first level
    pub fn with_config(config: GameConfig) -> Self {
        let entities = EntityStore::from_templates(&config.start, level::roster(0));
        Self {
            config,
            entities,
            phase: GamePhase::Active,
            level: 0,
            frame_count: 0,
            input: InputSampler::new(),
            events: Vec::new(),
        }
    }

    /// Advance one frame
    pub fn step(&mut self, input: &FrameInput) {
        super::tick::tick(self, input);
    }

    /// Rebuild everything from the templates, whatever level was reached
    pub fn reset(&mut self) {
        *self = Self::with_config(std::mem::take(&mut self.config));
        log::info!("Game restarted");
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Level number as shown to the player (1-based)
    pub fn display_level(&self) -> u32 {
        self.level + 1
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
