//! Contact damage, cooldown and death
//!
//! Enemies have no damage grace period; the player gets
//! `damage_cooldown_frames` of invulnerability after every contact hit.

use super::entity::{Enemy, Player};
use super::state::{GameEvent, GamePhase};

/// Count the cooldown down by one frame, never below zero
pub fn tick_cooldown(player: &mut Player) {
    player.damage_cooldown = player.damage_cooldown.saturating_sub(1);
}

/// Resolve one enemy's contact with the player.
///
/// Called per touching enemy, so the cooldown set by the first hit of a
/// frame blocks every later enemy in the same frame. Returns true if
/// damage was applied.
pub fn apply_contact_damage(
    player: &mut Player,
    phase: &mut GamePhase,
    cooldown_frames: u32,
    events: &mut Vec<GameEvent>,
) -> bool {
    if player.damage_cooldown > 0 || !player.is_alive() {
        return false;
    }

    player.health -= 1;
    player.damage_cooldown = cooldown_frames;
    log::debug!(
        "Player took damage! Health: {}/{}",
        player.health,
        player.max_health
    );
    events.push(GameEvent::PlayerHurt {
        health: player.health,
    });

    if !player.is_alive() {
        *phase = GamePhase::GameOver;
        log::info!("Game Over! You lost!");
        events.push(GameEvent::GameOver);
    }
    true
}

/// Take one point of shuriken damage. Returns true if this killed the enemy.
pub fn damage_enemy(enemy: &mut Enemy) -> bool {
    if !enemy.is_alive() {
        return false;
    }
    enemy.health -= 1;
    log::debug!("Enemy hit! Health: {}/{}", enemy.health, enemy.max_health);
    !enemy.is_alive()
}
