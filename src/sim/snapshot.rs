//! Read-only view handed to the renderer each frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Enemy, Player, Potion, Projectile};
use super::state::GameState;

/// Fraction of a health bar to fill (0 when `max` is 0)
pub fn health_fraction(health: u32, max: u32) -> f32 {
    if max == 0 {
        0.0
    } else {
        health as f32 / max as f32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub health: u32,
    pub max_health: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub health: u32,
    pub max_health: u32,
    pub scale: f32,
    /// Corpses are drawn as a head only, without a health bar
    pub alive: bool,
    /// Sprite edge length in pixels
    pub extent: f32,
}

/// Everything the renderer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub potions: Vec<Vec2>,
    pub projectiles: Vec<Vec2>,
    /// 0-based level index
    pub level: u32,
    /// Level number shown in the HUD
    pub display_level: u32,
    pub game_over: bool,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.entities.player;
        Self {
            player: PlayerView {
                pos: player.pos,
                health: player.health,
                max_health: player.max_health,
            },
            enemies: state
                .entities
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    health: e.health,
                    max_health: e.max_health,
                    scale: e.scale,
                    alive: e.is_alive(),
                    extent: e.extent(),
                })
                .collect(),
            potions: state.entities.potions.iter().map(|p| p.pos).collect(),
            projectiles: state.entities.projectiles.iter().map(|p| p.pos).collect(),
            level: state.level,
            display_level: state.display_level(),
            game_over: state.is_game_over(),
        }
    }
}

/// Any drawable entity, for renderers that walk everything uniformly
#[derive(Debug, Clone, Copy)]
pub enum Sprite<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    Potion(&'a Potion),
    Projectile(&'a Projectile),
}

impl Sprite<'_> {
    /// Top-left anchor of the sprite
    pub fn pos(&self) -> Vec2 {
        match self {
            Sprite::Player(p) => p.pos,
            Sprite::Enemy(e) => e.pos,
            Sprite::Potion(p) => p.pos,
            Sprite::Projectile(p) => p.pos,
        }
    }
}

impl GameState {
    /// Drawables in paint order: player, enemies, shurikens, potions
    pub fn sprites(&self) -> impl Iterator<Item = Sprite<'_>> {
        let e = &self.entities;
        std::iter::once(Sprite::Player(&e.player))
            .chain(e.enemies.iter().map(Sprite::Enemy))
            .chain(e.projectiles.iter().map(Sprite::Projectile))
            .chain(e.potions.iter().map(Sprite::Potion))
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}
