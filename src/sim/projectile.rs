//! Shurikens: spawning, flight, hits and pruning

use glam::Vec2;

use super::collision::projectile_hits_enemy;
use super::combat::damage_enemy;
use super::entity::{EntityStore, Player, Projectile};
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Launch velocity: the heading normalised to `speed`, rightward when idle
pub fn launch_velocity(heading: Vec2, speed: f32) -> Vec2 {
    if heading == Vec2::ZERO {
        Vec2::new(speed, 0.0)
    } else {
        heading.normalize() * speed
    }
}

/// Build a shuriken thrown from the player's sprite centre
pub fn throw(player: &Player, heading: Vec2, tuning: &Tuning) -> Projectile {
    Projectile::new(
        player.center(),
        launch_velocity(heading, tuning.projectile_speed),
        tuning.projectile_max_range,
    )
}

/// Spawn a shuriken for this frame's fire edge
pub fn fire(state: &mut GameState, heading: Vec2) {
    let projectile = throw(&state.entities.player, heading, &state.config.tuning);
    state.entities.spawn_projectile(projectile);
    state.emit(GameEvent::ProjectileFired);
}

/// Advance every shuriken, resolve hits and drop spent ones.
///
/// Walks the list back to front so removal never skips an element. A
/// shuriken damages at most the first living enemy it overlaps.
pub fn update(state: &mut GameState) {
    let GameState {
        entities, config, events, ..
    } = state;
    let EntityStore {
        projectiles,
        enemies,
        ..
    } = entities;
    let size = config.tuning.projectile_size;

    for i in (0..projectiles.len()).rev() {
        let projectile = &mut projectiles[i];
        projectile.advance();

        let hit = enemies.iter_mut().enumerate().find(|(_, enemy)| {
            enemy.is_alive() && projectile_hits_enemy(projectile.pos, size, enemy.pos, enemy.scale)
        });

        let hit_enemy = match hit {
            Some((index, enemy)) => {
                let killed = damage_enemy(enemy);
                events.push(GameEvent::EnemyHit {
                    index,
                    health: enemy.health,
                });
                if killed {
                    events.push(GameEvent::EnemyKilled { index });
                }
                true
            }
            None => false,
        };

        if hit_enemy || projectile.out_of_range() {
            projectiles.remove(i);
        }
    }
}
