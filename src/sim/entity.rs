//! Entity data model and the store that owns every live entity
//!
//! Entities do not share a base type. Each one embeds a `pos`; hitboxes
//! come from `collision`, and systems work on the concrete types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::{PotionTemplate, StartLayout};

/// The ninja
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the 16x16 sprite
    pub pos: Vec2,
    pub health: u32,
    pub max_health: u32,
    /// Frames left before contact damage may apply again
    pub damage_cooldown: u32,
}

impl Player {
    pub fn new(pos: Vec2, health: u32) -> Self {
        Self {
            pos,
            health,
            max_health: health,
            damage_cooldown: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Centre of the sprite, where shurikens are thrown from
    pub fn center(&self) -> Vec2 {
        self.pos + crate::sprite_center_offset()
    }
}

/// A skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub health: u32,
    pub max_health: u32,
    /// Sprite and hitbox scale (1.0 = 16x16)
    pub scale: f32,
    /// Chases the player inside the aggro radius
    pub follows_player: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, health: u32, scale: f32) -> Self {
        Self {
            pos,
            health,
            max_health: health,
            scale,
            follows_player: true,
        }
    }

    /// Dead enemies stay in the roster as inert corpses until the level changes
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Edge length of the drawn sprite
    pub fn extent(&self) -> f32 {
        crate::consts::SPRITE_SIZE * self.scale
    }
}

/// A healing potion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    pub pos: Vec2,
    pub heal: u32,
}

impl From<&PotionTemplate> for Potion {
    fn from(template: &PotionTemplate) -> Self {
        Self {
            pos: template.pos,
            heal: template.heal,
        }
    }
}

/// A thrown shuriken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Anchor of the shuriken box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Distance flown so far
    pub traveled: f32,
    pub max_range: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, max_range: f32) -> Self {
        Self {
            pos,
            vel,
            traveled: 0.0,
            max_range,
        }
    }

    /// Move one frame and accumulate the distance flown
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.traveled += self.vel.length();
    }

    pub fn out_of_range(&self) -> bool {
        self.traveled >= self.max_range
    }
}

/// Owner of every live entity
///
/// Collections keep insertion order; systems remove by index while
/// iterating (reverse order for shurikens, index rewind for potions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityStore {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub potions: Vec<Potion>,
    pub projectiles: Vec<Projectile>,
}

impl EntityStore {
    /// Build a fresh store from the start templates and an enemy roster
    pub fn from_templates(start: &StartLayout, enemies: Vec<Enemy>) -> Self {
        Self {
            player: Player::new(start.player.pos, start.player.health),
            enemies,
            potions: start.potions.iter().map(Potion::from).collect(),
            projectiles: Vec::new(),
        }
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    pub fn spawn_projectile(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn remove_potion(&mut self, index: usize) -> Potion {
        self.potions.remove(index)
    }

    /// Replace the enemy roster (level change)
    pub fn replace_enemies(&mut self, enemies: Vec<Enemy>) {
        self.enemies = enemies;
    }
}
