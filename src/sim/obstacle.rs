//! Obstacles and the scrolling field that owns them

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::SimulationConfig;

/// A gated obstacle: a top barrier and a bottom barrier around a gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Leading (left) edge
    pub x: f32,
    pub width: f32,
    /// Bottom of the top barrier
    pub gap_top: f32,
    /// Top of the bottom barrier, always `gap_top + gap`
    pub gap_bottom: f32,
    /// Set once the trailing edge has crossed the player
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, width: f32, gap_top: f32, gap: f32) -> Self {
        Self {
            x,
            width,
            gap_top,
            gap_bottom: gap_top + gap,
            passed: false,
        }
    }

    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    pub fn gap_center(&self) -> f32 {
        (self.gap_top + self.gap_bottom) * 0.5
    }

    /// Top barrier from the ceiling down to the gap
    pub fn top_rect(&self) -> Rect {
        Rect::new(
            Vec2::new(self.x, 0.0),
            Vec2::new(self.trailing_edge(), self.gap_top),
        )
    }

    /// Bottom barrier from the gap down to the playfield bottom
    pub fn bottom_rect(&self, ground_y: f32) -> Rect {
        Rect::new(
            Vec2::new(self.x, self.gap_bottom),
            Vec2::new(self.trailing_edge(), ground_y),
        )
    }
}

/// Range `[lo, hi]` for a new obstacle's `gap_top`.
///
/// Nominally `[margin, ground_y - gap - margin]`. When the margins do not fit,
/// the range collapses onto the highest legal value, never below zero and never
/// pushing the gap bottom past the ground.
pub fn spawn_range(ground_y: f32, gap: f32, margin: f32) -> (f32, f32) {
    let max_top = (ground_y - gap).max(0.0);
    let lo = margin.max(0.0).min(max_top);
    let hi = (ground_y - gap - margin).clamp(lo, max_top);
    (lo, hi)
}

/// Ordered obstacles (spawn order == left-to-right order)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
    /// Seconds since the last spawn
    pub spawn_timer: f32,
    #[serde(skip)]
    warned_degenerate: bool,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }

    /// Push an obstacle at the right end of the field
    pub fn spawn_at(&mut self, x: f32, gap_top: f32, config: &SimulationConfig) {
        debug_assert!(
            self.obstacles.last().is_none_or(|last| last.x <= x),
            "obstacles must be spawned left to right"
        );
        self.obstacles
            .push(Obstacle::new(x, config.pipe_width, gap_top, config.pipe_gap));
    }

    /// Spawn at the right edge with a random gap position
    pub fn spawn<R: Rng>(&mut self, config: &SimulationConfig, rng: &mut R) {
        let (lo, hi) = spawn_range(config.ground_y(), config.pipe_gap, config.gap_margin);
        let gap_top = if hi > lo {
            rng.random_range(lo..hi)
        } else {
            if !self.warned_degenerate {
                log::warn!(
                    "Obstacle spawn range is degenerate (gap {}, ground {}), pinning gap top to {}",
                    config.pipe_gap,
                    config.ground_y(),
                    lo
                );
                self.warned_degenerate = true;
            }
            lo
        };
        log::debug!("Spawned obstacle with gap top {:.1}", gap_top);
        self.spawn_at(config.canvas_width, gap_top, config);
    }

    /// Scroll, mark crossings, cull, then spawn.
    ///
    /// Returns how many obstacles the player passed this step.
    pub fn advance<R: Rng>(
        &mut self,
        dt: f32,
        config: &SimulationConfig,
        player_x: f32,
        rng: &mut R,
    ) -> u32 {
        for obstacle in &mut self.obstacles {
            obstacle.x -= config.pipe_speed * dt;
        }

        // Mark crossings before culling so a fast scroll cannot skip a score
        let mut passed = 0;
        for obstacle in self.obstacles.iter_mut().filter(|o| !o.passed) {
            if obstacle.trailing_edge() < player_x {
                obstacle.passed = true;
                passed += 1;
            }
        }

        self.obstacles.retain(|o| o.trailing_edge() > 0.0);

        self.spawn_timer += dt;
        if self.spawn_timer >= config.pipe_interval {
            self.spawn_timer = 0.0;
            self.spawn(config, rng);
        }
        passed
    }
}
