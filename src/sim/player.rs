//! The controlled body
//!
//! Moves vertically only; the world scrolls around it.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::collision::Rect;
use crate::settings::SimulationConfig;

/// Cosmetic full-turn spin played on score milestones
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub elapsed: f32,
    pub duration: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Top-left corner; `x` never changes during a session
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    /// Radians, presentation only
    pub rotation: f32,
    pub spin: Option<Spin>,
}

impl PlayerBody {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            pos: Vec2::new(config.player_x, config.player_start_y),
            vel: Vec2::ZERO,
            width: config.player_width,
            height: config.player_height,
            rotation: 0.0,
            spin: None,
        }
    }

    /// Semi-implicit Euler step: velocity first, then position with the new velocity
    #[inline]
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        self.vel.y += gravity * dt;
        self.pos.y += self.vel.y * dt;
    }

    /// Overwrite vertical velocity with the (upward) impulse
    #[inline]
    pub fn flap(&mut self, impulse: f32) {
        self.vel.y = impulse;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::new(self.width, self.height))
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Restart the spin from zero rotation
    pub fn start_spin(&mut self, duration: f32) {
        self.spin = Some(Spin {
            elapsed: 0.0,
            duration,
        });
        self.rotation = 0.0;
    }

    /// Advance the spin linearly from 0 to a full turn, then clear it
    pub fn advance_spin(&mut self, dt: f32) {
        let Some(spin) = self.spin.as_mut() else {
            return;
        };
        spin.elapsed += dt;
        if spin.elapsed >= spin.duration {
            self.spin = None;
            self.rotation = 0.0;
        } else {
            self.rotation = TAU * spin.elapsed / spin.duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn player() -> PlayerBody {
        PlayerBody::new(&SimulationConfig::default())
    }

    #[test]
    fn test_new_player_at_start() {
        let p = player();
        assert_eq!(p.pos, Vec2::new(PLAYER_X, PLAYER_Y));
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.rotation, 0.0);
        assert!(!p.is_spinning());
    }

    #[test]
    fn test_integrate_keeps_x() {
        let mut p = player();
        for _ in 0..30 {
            p.integrate(0.016, GRAVITY);
        }
        assert_eq!(p.pos.x, PLAYER_X);
        assert!(p.pos.y > PLAYER_Y);
    }

    #[test]
    fn test_spin_runs_full_turn_then_clears() {
        let mut p = player();
        p.start_spin(SPIN_DURATION);
        p.advance_spin(0.4);
        assert!((p.rotation - std::f32::consts::PI).abs() < 1e-4);
        assert!(p.is_spinning());
        p.advance_spin(0.4);
        assert_eq!(p.rotation, 0.0);
        assert!(!p.is_spinning());
    }

    proptest! {
        #[test]
        fn prop_integrate_is_semi_implicit(
            y in 0.0f32..720.0,
            vy in -500.0f32..500.0,
            dt in 0.0f32..0.033,
        ) {
            let mut p = player();
            p.pos.y = y;
            p.vel.y = vy;
            p.integrate(dt, GRAVITY);
            let expected_v = vy + GRAVITY * dt;
            prop_assert_eq!(p.vel.y, expected_v);
            prop_assert_eq!(p.pos.y, y + expected_v * dt);
        }

        #[test]
        fn prop_flap_overwrites(vy in -2000.0f32..2000.0) {
            let mut p = player();
            p.vel.y = vy;
            p.flap(FLAP_IMPULSE);
            prop_assert_eq!(p.vel.y, FLAP_IMPULSE);
        }
    }
}
