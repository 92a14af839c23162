//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step, one call per frame
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod enemy;
pub mod entity;
pub mod input;
pub mod level;
pub mod pickup;
pub mod projectile;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps};
pub use entity::{Enemy, EntityStore, Player, Potion, Projectile};
pub use input::{FrameInput, InputSampler, SampledInput};
pub use level::{LEVELS, all_enemies_defeated, roster};
pub use snapshot::{RenderSnapshot, Sprite, health_fraction};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
