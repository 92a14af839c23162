//! Ninja Arena native entry point
//!
//! Runs the simulation headless with a scripted pilot and prints the final
//! render snapshot as JSON. Usage: `ninja-arena [config.json] [map.json]`

use glam::Vec2;

use ninja_arena::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use ninja_arena::sim::{FrameInput, GameEvent, GameState};
use ninja_arena::{GameConfig, TileMap};

/// Frames to simulate (one minute at 60 fps)
const DEMO_FRAMES: u64 = 60 * 60;

/// Throw a shuriken every this many frames while an enemy is in sight
const FIRE_INTERVAL: u64 = 10;

/// Scripted input: close in on the nearest living enemy and keep throwing,
/// restart on game over
fn pilot(state: &GameState) -> FrameInput {
    if state.is_game_over() {
        return FrameInput {
            restart: true,
            ..Default::default()
        };
    }

    let player = state.entities.player.pos;
    let target = state
        .entities
        .living_enemies()
        .map(|e| e.pos)
        .min_by(|a, b| {
            a.distance(player)
                .partial_cmp(&b.distance(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = target else {
        return FrameInput::default();
    };

    // Hold a little way off so shurikens land before contact does
    let delta = target - player;
    let throwing = state.frame_count.is_multiple_of(FIRE_INTERVAL);
    let mut dir = if delta.length() > 40.0 {
        Vec2::new(axis(delta.x), axis(delta.y))
    } else {
        Vec2::ZERO
    };
    if throwing && dir == Vec2::ZERO {
        // Face the target along its dominant axis
        dir = if delta.x.abs() > delta.y.abs() {
            Vec2::new(axis(delta.x), 0.0)
        } else {
            Vec2::new(0.0, axis(delta.y))
        };
    }

    FrameInput {
        left: dir.x < 0.0,
        right: dir.x > 0.0,
        up: dir.y < 0.0,
        down: dir.y > 0.0,
        fire: throwing,
        restart: false,
    }
}

/// -1, 0 or 1, ignoring sub-pixel offsets
fn axis(v: f32) -> f32 {
    if v > 0.5 {
        1.0
    } else if v < -0.5 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ninja Arena (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };

    let (width, height) = match args.next().map(TileMap::load) {
        Some(Ok(map)) => map.bounds(),
        Some(Err(e)) => {
            log::error!("Failed to load map: {}", e);
            (SCREEN_WIDTH, SCREEN_HEIGHT)
        }
        None => (SCREEN_WIDTH, SCREEN_HEIGHT),
    };
    log::info!("World bounds: {}x{}", width, height);

    let mut state = GameState::with_config(config);
    let mut deaths = 0u32;

    for _ in 0..DEMO_FRAMES {
        let input = pilot(&state);
        state.step(&input);

        for event in &state.events {
            match event {
                GameEvent::LevelCleared { level } => {
                    log::info!("Cleared level {} at frame {}", level + 1, state.frame_count)
                }
                GameEvent::GameOver => deaths += 1,
                _ => log::trace!("{:?}", event),
            }
        }
    }

    log::info!(
        "Finished {} frames on level {} with {} game over(s)",
        DEMO_FRAMES,
        state.display_level(),
        deaths
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser front end drives GameState::step directly
}
