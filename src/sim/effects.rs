//! Feedback notifications for the render and audio layers
//!
//! The simulation only says *that* something happened; drawing the jitter or
//! playing the sound is up to the host.

use serde::{Deserialize, Serialize};

/// One feedback notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Player flapped (sound cue)
    Flap,
    /// An obstacle was passed; carries the new score
    Score { score: u32 },
    /// Score reached a multiple of the milestone period
    Milestone { score: u32 },
    /// Player collided; the run is over
    Hit,
}

/// Ordered buffer of the effects raised during the latest tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectEmitter {
    pending: Vec<Effect>,
}

impl EffectEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, effect: Effect) {
        self.pending.push(effect);
    }

    pub fn pending(&self) -> &[Effect] {
        &self.pending
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Take every pending effect, leaving the buffer empty
    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending)
    }
}

/// Countdown window during which the renderer jitters its draw offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShakeWindow {
    pub remaining: f32,
}

impl ShakeWindow {
    pub fn start(&mut self, duration: f32) {
        self.remaining = duration;
    }

    pub fn advance(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut emitter = EffectEmitter::new();
        emitter.emit(Effect::Score { score: 10 });
        emitter.emit(Effect::Milestone { score: 10 });
        emitter.emit(Effect::Hit);
        assert_eq!(
            emitter.drain(),
            vec![
                Effect::Score { score: 10 },
                Effect::Milestone { score: 10 },
                Effect::Hit
            ]
        );
        assert!(emitter.pending().is_empty());
    }

    #[test]
    fn test_shake_window_closes() {
        let mut shake = ShakeWindow::default();
        assert!(!shake.is_active());
        shake.start(0.1);
        shake.advance(0.05);
        assert!(shake.is_active());
        shake.advance(0.06);
        assert!(!shake.is_active());
        assert_eq!(shake.remaining, 0.0);
    }
}
