//! Per-frame input sampling
//!
//! Input is sampled once per frame, never queued. The fire button is
//! edge-triggered against the previous sampled frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Raw device state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Throw a shuriken (Space)
    pub fire: bool,
    /// Restart after game over (R)
    pub restart: bool,
}

/// What the simulation acts on this frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SampledInput {
    /// Sum of every held direction, applied to the player's position
    pub displacement: Vec2,
    /// Last held key per axis; aims the shuriken
    pub heading: Vec2,
    /// True only on the frame fire goes from released to pressed
    pub fire: bool,
}

/// Turns raw input into movement and an edge-triggered fire signal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSampler {
    fire_held: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample one frame. `speed` is the per-key step in pixels.
    pub fn sample(&mut self, raw: &FrameInput, speed: f32) -> SampledInput {
        let mut displacement = Vec2::ZERO;
        let mut heading = Vec2::ZERO;

        // Keys are applied left, right, up, down; a later key on the
        // same axis wins the heading but both move the player.
        if raw.left {
            displacement.x -= speed;
            heading.x = -speed;
        }
        if raw.right {
            displacement.x += speed;
            heading.x = speed;
        }
        if raw.up {
            displacement.y -= speed;
            heading.y = -speed;
        }
        if raw.down {
            displacement.y += speed;
            heading.y = speed;
        }

        let fire = raw.fire && !self.fire_held;
        self.fire_held = raw.fire;

        SampledInput {
            displacement,
            heading,
            fire,
        }
    }

    /// Forget the previous fire state (restart)
    pub fn clear(&mut self) {
        self.fire_held = false;
    }

    pub fn fire_held(&self) -> bool {
        self.fire_held
    }
}
