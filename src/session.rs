//! Host-facing session
//!
//! Bundles the clock, the input queue and the world. A host pushes input as
//! it arrives, calls `tick` once per display refresh with its timestamp, then
//! renders the snapshot and plays the drained effects.

use crate::settings::{ConfigError, SimulationConfig};
use crate::sim::clock::Clock;
use crate::sim::effects::Effect;
use crate::sim::input::{InputEvent, InputQueue};
use crate::sim::state::{GamePhase, World, WorldSnapshot};
use crate::sim::tick::tick;

pub struct Session {
    clock: Clock,
    inputs: InputQueue,
    world: World,
}

impl Session {
    /// Validate `config` and create a session in the Start phase
    pub fn new(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("New session (seed {seed})");
        Ok(Self {
            clock: Clock::new(config.max_delta),
            inputs: InputQueue::new(),
            world: World::new(config, seed),
        })
    }

    /// Queue an input for the next tick; false if the queue was full
    pub fn push_input(&mut self, event: InputEvent) -> bool {
        self.inputs.push(event)
    }

    /// Advance one frame using the host timestamp (milliseconds)
    pub fn tick(&mut self, now_ms: f64) -> WorldSnapshot {
        let dt = self.clock.next_delta(now_ms);
        self.step(dt)
    }

    /// Advance one frame by an explicit delta (seconds), clamped like the clock
    pub fn step(&mut self, dt: f32) -> WorldSnapshot {
        let dt = if dt.is_nan() {
            0.0
        } else {
            dt.clamp(0.0, self.clock.max_delta())
        };
        let inputs = self.inputs.drain();
        tick(&mut self.world, &inputs, dt);
        self.world.snapshot()
    }

    /// Effects raised by the latest tick, in order
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        self.world.effects.drain()
    }

    /// Back to the initial Start state; pending input is discarded
    pub fn reset(&mut self) {
        self.inputs.clear();
        self.clock.resync();
        self.world.reset();
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.world.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.world.config
    }
}
