//! Level table and level progression
//!
//! Levels are fixed data. Past the end of the table nothing spawns, so
//! the roster stays empty and no further transition ever happens.

use glam::Vec2;

use super::entity::Enemy;
use super::state::{GameEvent, GameState};

/// One enemy in a level layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub health: u32,
    pub scale: f32,
}

impl EnemySpawn {
    const fn new(x: f32, y: f32, health: u32, scale: f32) -> Self {
        Self { x, y, health, scale }
    }

    pub fn spawn(&self) -> Enemy {
        Enemy::new(Vec2::new(self.x, self.y), self.health, self.scale)
    }
}

/// A level's enemy layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelLayout {
    pub enemies: &'static [EnemySpawn],
    /// Announce a boss when this level loads
    pub boss: bool,
}

/// Level layouts, indexed by 0-based level
pub const LEVELS: &[LevelLayout] = &[
    // Two skeletons
    LevelLayout {
        enemies: &[
            EnemySpawn::new(100.0, 100.0, 10, 1.0),
            EnemySpawn::new(150.0, 50.0, 10, 1.0),
        ],
        boss: false,
    },
    // One double-size skeleton in the middle of the map
    LevelLayout {
        enemies: &[EnemySpawn::new(160.0, 120.0, 50, 2.0)],
        boss: true,
    },
];

pub fn layout(level: u32) -> Option<&'static LevelLayout> {
    LEVELS.get(level as usize)
}

/// Fresh enemy roster for a level; empty past the end of the table
pub fn roster(level: u32) -> Vec<Enemy> {
    layout(level)
        .map(|layout| layout.enemies.iter().map(EnemySpawn::spawn).collect())
        .unwrap_or_default()
}

/// True iff there is at least one enemy and every enemy is dead
pub fn all_enemies_defeated(enemies: &[Enemy]) -> bool {
    !enemies.is_empty() && enemies.iter().all(|e| !e.is_alive())
}

/// Move to the next level: clear shurikens, recentre the player and
/// swap in the next roster. Player health and cooldown are kept.
pub fn advance(state: &mut GameState) {
    let cleared = state.level;
    state.level += 1;
    log::info!(
        "Level {} completed! Loading level {}...",
        cleared + 1,
        state.level + 1
    );
    state.emit(GameEvent::LevelCleared { level: cleared });

    state.entities.projectiles.clear();
    state.entities.player.pos = state.config.tuning.respawn_point;
    state.entities.replace_enemies(roster(state.level));

    match layout(state.level) {
        Some(layout) if layout.boss => {
            log::info!("Boss enemy appeared!");
            state.emit(GameEvent::BossAppeared);
        }
        Some(_) => {}
        None => log::info!("No more levels; the arena stays empty"),
    }
}
