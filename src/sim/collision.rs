//! Collision detection
//!
//! Axis-aligned tests only: the player box against the playfield bounds and
//! against the two barriers of every obstacle. Pure functions, no state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::player::PlayerBody;

/// Axis-aligned rectangle (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Player touches the ground or the ceiling
#[inline]
pub fn out_of_bounds(player: &PlayerBody, ground_y: f32) -> bool {
    player.pos.y + player.height >= ground_y || player.pos.y <= 0.0
}

/// Player overlaps the top barrier (ceiling to gap top) or the bottom
/// barrier (gap bottom to ground)
pub fn hits_obstacle(player: &PlayerBody, obstacle: &Obstacle, ground_y: f32) -> bool {
    let body = player.bounds();
    body.overlaps(&obstacle.top_rect()) || body.overlaps(&obstacle.bottom_rect(ground_y))
}

/// Full collision check for one tick; stops at the first hit
pub fn check(player: &PlayerBody, obstacles: &[Obstacle], ground_y: f32) -> bool {
    out_of_bounds(player, ground_y)
        || obstacles
            .iter()
            .any(|o| hits_obstacle(player, o, ground_y))
}
