//! Gate Flyer - a side-scrolling gate-flying reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `settings`: Per-session simulation configuration and variant presets
//! - `session`: Host-facing wrapper (clock, input queue, snapshots)
//!
//! Rendering, asset loading and device input wiring live outside this crate.
//! Hosts push abstract input events, call `Session::tick` once per display
//! refresh, then draw the returned snapshot and play the drained effects.

pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::{Capabilities, ConfigError, SimulationConfig, Variant};

/// Default configuration constants (the richest observed variant)
pub mod consts {
    /// Largest single integration step (seconds)
    pub const MAX_DELTA: f32 = 0.033;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 800.0;
    /// Ground band at the bottom of the canvas
    pub const GROUND_HEIGHT: f32 = 80.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_Y: f32 = 280.0;
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 44.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 950.0;
    /// Upward velocity assigned on flap (pixels/s, negative is up)
    pub const FLAP_IMPULSE: f32 = -350.0;

    /// Obstacle defaults
    pub const PIPE_WIDTH: f32 = 110.0;
    pub const PIPE_GAP: f32 = 180.0;
    pub const PIPE_SPEED: f32 = 180.0;
    /// Seconds between spawns
    pub const PIPE_INTERVAL: f32 = 2.0;
    /// Minimum distance between a gap and the ceiling or ground
    pub const GAP_MARGIN: f32 = 50.0;

    /// Score period that triggers a milestone
    pub const MILESTONE_PERIOD: u32 = 10;

    /// Cosmetic effect windows (seconds)
    pub const SHAKE_DURATION: f32 = 0.1;
    pub const SHAKE_MAGNITUDE: f32 = 8.0;
    pub const SPIN_DURATION: f32 = 0.8;
}
