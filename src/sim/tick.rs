//! Fixed-step frame update
//!
//! One call per rendered frame. System order is part of the contract:
//! input, player movement, shurikens, enemies (pursuit then contact),
//! pickups, level check. In GameOver only the restart request is read.

use super::input::FrameInput;
use super::state::{GameEvent, GamePhase, GameState};
use super::{combat, enemy, level, pickup, projectile};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &FrameInput) {
    state.events.clear();
    state.frame_count += 1;

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset();
            state.emit(GameEvent::Restarted);
        }
        return;
    }

    combat::tick_cooldown(&mut state.entities.player);

    let sampled = state.input.sample(input, state.config.tuning.player_speed);
    state.entities.player.pos += sampled.displacement;
    if sampled.fire {
        projectile::fire(state, sampled.heading);
    }

    projectile::update(state);
    enemy::update(state);

    // A fatal hit ends the frame's simulation
    if state.phase == GamePhase::GameOver {
        return;
    }

    pickup::update(state);

    if level::all_enemies_defeated(&state.entities.enemies) {
        level::advance(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Enemy, Potion};
    use glam::Vec2;
    use proptest::prelude::*;

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    fn fire() -> FrameInput {
        FrameInput {
            fire: true,
            ..Default::default()
        }
    }

    fn restart() -> FrameInput {
        FrameInput {
            restart: true,
            ..Default::default()
        }
    }

    /// A state with no enemies in reach and no potions
    fn quiet_state() -> GameState {
        let mut state = GameState::new();
        state.entities.potions.clear();
        state.entities.enemies = vec![Enemy::new(Vec2::new(300.0, 220.0), 10, 1.0)];
        state
    }

    #[test]
    fn test_player_moves_two_per_key() {
        let mut state = quiet_state();
        let input = FrameInput {
            right: true,
            down: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.entities.player.pos, Vec2::new(52.0, 52.0));
        assert_eq!(state.frame_count, 1);
    }

    #[test]
    fn test_fire_direction() {
        let mut state = quiet_state();
        tick(&mut state, &fire());
        assert_eq!(state.entities.projectiles[0].vel, Vec2::new(3.0, 0.0));
        assert!(state.events.contains(&GameEvent::ProjectileFired));

        // Held: no second shuriken
        tick(&mut state, &fire());
        assert_eq!(state.entities.projectiles.len(), 1);

        tick(&mut state, &idle());
        let up_fire = FrameInput {
            up: true,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &up_fire);
        assert_eq!(state.entities.projectiles.len(), 2);
        assert_eq!(state.entities.projectiles[1].vel, Vec2::new(0.0, -3.0));
    }

    #[test]
    fn test_projectile_spawns_at_moved_position() {
        let mut state = quiet_state();
        let input = FrameInput {
            left: true,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        // Thrown from (48,50)+(8,8), then flies one frame leftward
        assert_eq!(state.entities.projectiles[0].pos, Vec2::new(53.0, 58.0));
        assert_eq!(state.entities.projectiles[0].traveled, 3.0);
    }

    #[test]
    fn test_cooldown_counts_down_each_active_frame() {
        let mut state = quiet_state();
        state.entities.player.damage_cooldown = 3;
        tick(&mut state, &idle());
        assert_eq!(state.entities.player.damage_cooldown, 2);
        tick(&mut state, &idle());
        tick(&mut state, &idle());
        assert_eq!(state.entities.player.damage_cooldown, 0);
        tick(&mut state, &idle());
        assert_eq!(state.entities.player.damage_cooldown, 0);
    }

    #[test]
    fn test_continuous_contact_hits_once_per_cooldown() {
        let mut state = quiet_state();
        state.entities.player.health = 10;
        state.entities.player.max_health = 10;
        state.entities.enemies = vec![Enemy::new(Vec2::new(50.0, 50.0), 10, 1.0)];

        tick(&mut state, &idle());
        assert_eq!(state.entities.player.health, 9);
        assert_eq!(state.entities.player.damage_cooldown, 60);

        // 59 more frames of overlap: cooldown 59..=1 at contact time
        for _ in 0..59 {
            tick(&mut state, &idle());
            assert_eq!(state.entities.player.health, 9);
        }
        assert_eq!(state.entities.player.damage_cooldown, 1);

        tick(&mut state, &idle());
        assert_eq!(state.entities.player.health, 8);
        assert_eq!(state.entities.player.damage_cooldown, 60);
    }

    #[test]
    fn test_death_and_frozen_game_over() {
        let mut state = quiet_state();
        state.entities.player.health = 1;
        state.entities.enemies = vec![Enemy::new(Vec2::new(50.0, 50.0), 10, 1.0)];

        tick(&mut state, &idle());
        assert_eq!(state.entities.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver));

        let frozen = state.entities.clone();
        let moving_fire = FrameInput {
            right: true,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &moving_fire);
        tick(&mut state, &idle());
        assert_eq!(state.entities, frozen);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.frame_count, 3);
    }

    #[test]
    fn test_fatal_frame_skips_pickups() {
        let mut state = quiet_state();
        state.entities.player.health = 1;
        state.entities.enemies = vec![Enemy::new(Vec2::new(50.0, 50.0), 10, 1.0)];
        state.entities.potions = vec![Potion {
            pos: Vec2::new(50.0, 50.0),
            heal: 1,
        }];

        tick(&mut state, &idle());
        assert_eq!(state.entities.player.health, 0);
        assert_eq!(state.entities.potions.len(), 1);
    }

    #[test]
    fn test_enemy_killed_by_shuriken_deals_no_contact() {
        let mut state = quiet_state();
        state
            .entities
            .enemies
            .push(Enemy::new(Vec2::new(52.0, 52.0), 1, 1.0));

        tick(&mut state, &fire());

        let enemy = &state.entities.enemies[1];
        assert_eq!(enemy.health, 0);
        assert_eq!(enemy.pos, Vec2::new(52.0, 52.0));
        assert_eq!(state.entities.player.health, 3);
        assert_eq!(state.entities.player.damage_cooldown, 0);
        assert_eq!(state.phase, GamePhase::Active);
        assert!(state.events.contains(&GameEvent::EnemyKilled { index: 1 }));
        assert!(!state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerHurt { .. })));
    }

    #[test]
    fn test_restart_restores_templates() {
        let mut state = GameState::new();

        // Clear two levels, then die
        for _ in 0..2 {
            for enemy in &mut state.entities.enemies {
                enemy.health = 0;
            }
            tick(&mut state, &idle());
        }
        assert_eq!(state.level, 2);
        assert!(state.entities.enemies.is_empty());
        state.entities.potions.clear();
        state.entities.player.health = 0;
        state.phase = GamePhase::GameOver;
        tick(&mut state, &fire());
        assert!(state.is_game_over());

        // Without a restart request nothing happens
        tick(&mut state, &idle());
        assert!(state.is_game_over());

        tick(&mut state, &restart());
        let fresh = GameState::new();
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.level, 0);
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.entities, fresh.entities);
        assert_eq!(state.events, vec![GameEvent::Restarted]);

        // Fire latch was cleared, so the first press after restart fires
        tick(&mut state, &fire());
        assert_eq!(state.entities.projectiles.len(), 1);
    }

    #[test]
    fn test_level_clear_transition() {
        let mut state = GameState::new();
        state.entities.player.health = 2;
        state.entities.player.damage_cooldown = 30;
        tick(&mut state, &fire());
        assert_eq!(state.entities.projectiles.len(), 1);

        for enemy in &mut state.entities.enemies {
            enemy.health = 0;
        }
        tick(&mut state, &idle());

        assert_eq!(state.level, 1);
        assert_eq!(state.display_level(), 2);
        assert_eq!(state.entities.enemies.len(), 1);
        let boss = &state.entities.enemies[0];
        assert_eq!(boss.pos, Vec2::new(160.0, 120.0));
        assert_eq!((boss.health, boss.max_health, boss.scale), (50, 50, 2.0));
        assert!(state.entities.projectiles.is_empty());
        assert_eq!(state.entities.player.pos, Vec2::new(160.0, 120.0));
        assert_eq!(state.entities.player.health, 2);
        assert_eq!(state.entities.player.damage_cooldown, 28);
        assert!(state.events.contains(&GameEvent::BossAppeared));
    }

    #[test]
    fn test_no_transition_past_last_level() {
        let mut state = GameState::new();
        for _ in 0..2 {
            for enemy in &mut state.entities.enemies {
                enemy.health = 0;
            }
            tick(&mut state, &idle());
        }
        assert_eq!(state.level, 2);
        for _ in 0..10 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.level, 2);
        assert!(state.entities.enemies.is_empty());
    }

    #[test]
    fn test_shuriken_kills_enemy() {
        let mut state = quiet_state();
        // 60px away: outside the aggro radius, so it stands still
        state.entities.enemies = vec![Enemy::new(Vec2::new(110.0, 50.0), 2, 1.0)];

        // Two throws; each lands on the 15th frame of flight
        tick(&mut state, &fire());
        tick(&mut state, &idle());
        tick(&mut state, &fire());
        for _ in 0..13 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.entities.enemies[0].health, 1);
        assert_eq!(state.entities.projectiles.len(), 1);

        tick(&mut state, &idle());
        assert_eq!(state.entities.enemies.len(), 1);
        assert!(state.entities.projectiles.is_empty());
        // Last enemy down: the next level loaded this frame
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_identical_inputs_are_deterministic() {
        let inputs = [fire(), idle(), FrameInput { right: true, ..idle() }, fire()];
        let mut a = GameState::new();
        let mut b = GameState::new();
        for _ in 0..50 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }
        assert_eq!(a.entities, b.entities);
        assert_eq!(a.frame_count, b.frame_count);
    }

    fn arb_input() -> impl Strategy<Value = FrameInput> {
        (any::<[bool; 6]>()).prop_map(|[left, right, up, down, fire, restart]| FrameInput {
            left,
            right,
            up,
            down,
            fire,
            restart,
        })
    }

    proptest! {
        #[test]
        fn prop_player_bounds_hold(inputs in prop::collection::vec(arb_input(), 1..400)) {
            let mut state = GameState::new();
            let cooldown_max = state.config.tuning.damage_cooldown_frames;
            for input in &inputs {
                let before = state.entities.player.damage_cooldown;
                let was_active = state.phase == GamePhase::Active;
                tick(&mut state, input);
                let player = &state.entities.player;
                prop_assert!(player.damage_cooldown <= cooldown_max);
                if was_active && state.phase == GamePhase::Active && before > 0 {
                    // Either counted down by one, or a fresh hit re-armed it
                    prop_assert!(
                        player.damage_cooldown == before - 1
                            || player.damage_cooldown == cooldown_max
                    );
                }
                prop_assert_eq!(player.health == 0, state.phase == GamePhase::GameOver);
                for enemy in &state.entities.enemies {
                    prop_assert!(enemy.health <= enemy.max_health);
                }
            }
        }
    }
}
