//! Enemy pursuit and contact with the player

use glam::Vec2;

use super::collision::player_enemy_contact;
use super::combat::apply_contact_damage;
use super::entity::{Enemy, EntityStore};
use super::state::GameState;

/// Step toward `target` by `step` on each axis independently, so
/// diagonal pursuit is faster than axial pursuit.
pub fn pursue(enemy: &mut Enemy, target: Vec2, step: f32) {
    if enemy.pos.x < target.x {
        enemy.pos.x += step;
    } else if enemy.pos.x > target.x {
        enemy.pos.x -= step;
    }
    if enemy.pos.y < target.y {
        enemy.pos.y += step;
    } else if enemy.pos.y > target.y {
        enemy.pos.y -= step;
    }
}

/// Move living enemies toward a nearby player, then apply contact damage.
///
/// Each enemy pursues before its own contact test, and the cooldown is
/// re-read for every enemy so one frame deals at most one point.
pub fn update(state: &mut GameState) {
    let GameState {
        entities,
        config,
        phase,
        events,
        ..
    } = state;
    let EntityStore {
        player, enemies, ..
    } = entities;
    let tuning = &config.tuning;

    for enemy in enemies.iter_mut().filter(|e| e.is_alive()) {
        if enemy.follows_player && enemy.pos.distance(player.pos) < tuning.aggro_radius {
            pursue(enemy, player.pos, tuning.pursuit_step);
        }

        if player_enemy_contact(player.pos, enemy.pos, enemy.scale, tuning.contact_box_size) {
            apply_contact_damage(player, phase, tuning.damage_cooldown_frames, events);
        }
    }
}
