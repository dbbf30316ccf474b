//! World state and read-only snapshots
//!
//! Everything a session mutates lives in `World`; hosts only ever see
//! `WorldSnapshot` copies taken after a tick.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::{EffectEmitter, ShakeWindow};
use super::obstacle::{Obstacle, ObstacleField};
use super::player::PlayerBody;
use super::score::ScoreTracker;
use crate::settings::SimulationConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input; background keeps scrolling
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, frozen until the next input
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct World {
    pub config: SimulationConfig,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: PlayerBody,
    pub field: ObstacleField,
    pub score: ScoreTracker,
    pub shake: ShakeWindow,
    /// Parallax ground offset in `(-canvas_width, 0]`
    pub ground_offset: f32,
    /// Keyboard key is down and has already flapped
    pub key_held: bool,
    /// Set by a Start/GameOver transition, cleared at the next tick
    pub input_locked: bool,
    pub effects: EffectEmitter,
}

impl World {
    /// Create a world in the Start phase
    pub fn new(config: SimulationConfig, seed: u64) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid simulation config");
        Self {
            player: PlayerBody::new(&config),
            config,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            field: ObstacleField::new(),
            score: ScoreTracker::new(),
            shake: ShakeWindow::default(),
            ground_offset: 0.0,
            key_held: false,
            input_locked: false,
            effects: EffectEmitter::new(),
        }
    }

    /// Return every mutable field to its initial value.
    ///
    /// The RNG keeps its stream so the next run gets fresh obstacles.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Start;
        self.player = PlayerBody::new(&self.config);
        self.field.clear();
        self.score.reset();
        self.shake = ShakeWindow::default();
        self.ground_offset = 0.0;
        self.key_held = false;
        self.input_locked = false;
        self.effects.clear();
        log::info!("Session reset");
    }

    /// Reset and restart the obstacle RNG from `seed`
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.reset();
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Move to `phase`, logging the transition
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!(
                "Phase {:?} -> {:?} (score {})",
                self.phase,
                phase,
                self.score.value
            );
            self.phase = phase;
        }
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            phase: self.phase,
            player: self.player.clone(),
            obstacles: self.field.obstacles.clone(),
            score: self.score.value,
            ground_offset: self.ground_offset,
            shake_remaining: self.shake.remaining,
            shake_magnitude: if self.shake.is_active() {
                self.config.shake_magnitude
            } else {
                0.0
            },
        }
    }
}

/// Immutable view handed to the renderer after each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub phase: GamePhase,
    pub player: PlayerBody,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub ground_offset: f32,
    /// Seconds left in the shake window (0 when inactive)
    pub shake_remaining: f32,
    /// Jitter amplitude the renderer should use this frame
    pub shake_magnitude: f32,
}

impl WorldSnapshot {
    pub fn is_shaking(&self) -> bool {
        self.shake_remaining > 0.0
    }

    pub fn is_spinning(&self) -> bool {
        self.player.is_spinning()
    }

    /// First obstacle the player has not yet cleared
    pub fn next_unpassed(&self) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| !o.passed)
    }
}
