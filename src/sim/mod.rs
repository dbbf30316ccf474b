//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clamped deltas only
//! - Seeded RNG only
//! - Obstacles kept in spawn (left-to-right) order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod effects;
pub mod input;
pub mod obstacle;
pub mod player;
pub mod score;
pub mod state;
pub mod tick;

pub use clock::{Clock, clamp_delta};
pub use collision::{Rect, check as check_collision};
pub use effects::{Effect, EffectEmitter, ShakeWindow};
pub use input::{InputEvent, InputQueue, InputSource};
pub use obstacle::{Obstacle, ObstacleField, spawn_range};
pub use player::{PlayerBody, Spin};
pub use score::ScoreTracker;
pub use state::{GamePhase, World, WorldSnapshot};
pub use tick::{handle_input, tick};
