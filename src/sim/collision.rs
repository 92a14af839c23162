//! Axis-aligned rectangle collision
//!
//! Every entity is a box anchored at its top-left corner. Overlap uses
//! strict inequalities, so boxes that only share an edge do not collide.
//!
//! Three hitbox profiles are used:
//! - full sprite box (player vs potion, shuriken vs enemy)
//! - shuriken box (8x8 at the shuriken position)
//! - shrunk contact box, centred inside the sprite (player vs enemy damage)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SPRITE_SIZE;

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box with the given edge length
    pub fn square(min: Vec2, edge: f32) -> Self {
        Self::new(min, Vec2::splat(edge))
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// A box of `size` centred inside this one
    pub fn centered(&self, size: Vec2) -> Self {
        Self::new(self.min + (self.size - size) / 2.0, size)
    }
}

/// True iff the two boxes intersect with positive area
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.min.x < b_max.x && a_max.x > b.min.x && a.min.y < b_max.y && a_max.y > b.min.y
}

/// Full sprite box for an entity drawn at `scale`
#[inline]
pub fn sprite_box(pos: Vec2, scale: f32) -> Aabb {
    Aabb::square(pos, SPRITE_SIZE * scale)
}

/// Shrunk contact box of edge `contact_size`, centred in the scaled sprite
#[inline]
pub fn contact_box(pos: Vec2, scale: f32, contact_size: f32) -> Aabb {
    sprite_box(pos, scale).centered(Vec2::splat(contact_size))
}

/// Player vs potion: both full 16x16 sprite boxes
pub fn player_touches_potion(player_pos: Vec2, potion_pos: Vec2) -> bool {
    overlaps(&sprite_box(player_pos, 1.0), &sprite_box(potion_pos, 1.0))
}

/// Shuriken vs enemy: the shuriken's own box against the enemy's full scaled box
pub fn projectile_hits_enemy(
    projectile_pos: Vec2,
    projectile_size: f32,
    enemy_pos: Vec2,
    enemy_scale: f32,
) -> bool {
    overlaps(
        &Aabb::square(projectile_pos, projectile_size),
        &sprite_box(enemy_pos, enemy_scale),
    )
}

/// Player vs enemy contact damage, using the shrunk centred boxes
pub fn player_enemy_contact(
    player_pos: Vec2,
    enemy_pos: Vec2,
    enemy_scale: f32,
    contact_size: f32,
) -> bool {
    overlaps(
        &contact_box(player_pos, 1.0, contact_size),
        &contact_box(enemy_pos, enemy_scale, contact_size),
    )
}
