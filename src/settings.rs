//! Simulation configuration and variant presets
//!
//! Fixed at session construction; the simulation never mutates it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while building or loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number")]
    NotFinite { field: &'static str },
    #[error("`{field}` must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("flap impulse must point upward (negative), got {0}")]
    FlapNotUpward(f32),
    #[error("gap of {gap} leaves no room above ground at y = {ground_y}")]
    GapTooLarge { gap: f32, ground_y: f32 },
    #[error("player does not fit inside the playfield")]
    PlayerOutOfBounds,
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Known game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// 600x800 canvas with every feedback feature enabled
    #[default]
    Classic,
    /// 400x600 canvas, no shake, spin or ground scroll
    Compact,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Compact => "Compact",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "full" => Some(Variant::Classic),
            "compact" | "small" => Some(Variant::Compact),
            _ => None,
        }
    }

    /// Configuration for this variant
    pub fn config(&self) -> SimulationConfig {
        match self {
            Variant::Classic => SimulationConfig::default(),
            Variant::Compact => SimulationConfig {
                canvas_width: 400.0,
                canvas_height: 600.0,
                player_x: 60.0,
                player_start_y: 200.0,
                player_width: 51.0,
                player_height: 36.0,
                pipe_width: 100.0,
                pipe_interval: 1.8,
                capabilities: Capabilities {
                    ground_scroll: false,
                    shake: false,
                    spin_milestone: false,
                    keyboard_edge_trigger: true,
                    input_lock: false,
                },
                ..SimulationConfig::default()
            },
        }
    }
}

/// Optional feedback and input features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Parallax ground band scrolls while not in GameOver
    pub ground_scroll: bool,
    /// Camera shake window opens on collision
    pub shake: bool,
    /// Milestone effect plus player spin every `milestone_period` points
    pub spin_milestone: bool,
    /// A held key flaps once until it is released
    pub keyboard_edge_trigger: bool,
    /// Swallow further presses in the same tick after Start/GameOver input
    pub input_lock: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            ground_scroll: true,
            shake: true,
            spin_milestone: true,
            keyboard_edge_trigger: true,
            input_lock: true,
        }
    }
}

/// Immutable per-session simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === Playfield ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Height of the ground band; the playfield ends where it starts
    pub ground_height: f32,
    /// Ground band scroll speed (pixels/s)
    pub ground_speed: f32,

    // === Player ===
    pub player_x: f32,
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub gravity: f32,
    pub flap_impulse: f32,

    // === Obstacles ===
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub pipe_interval: f32,
    pub gap_margin: f32,

    // === Feedback ===
    pub milestone_period: u32,
    pub shake_duration: f32,
    pub shake_magnitude: f32,
    pub spin_duration: f32,

    // === Timing ===
    /// Largest delta a single tick may integrate (seconds)
    pub max_delta: f32,

    pub capabilities: Capabilities,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_height: GROUND_HEIGHT,
            ground_speed: PIPE_SPEED,

            player_x: PLAYER_X,
            player_start_y: PLAYER_Y,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            pipe_interval: PIPE_INTERVAL,
            gap_margin: GAP_MARGIN,

            milestone_period: MILESTONE_PERIOD,
            shake_duration: SHAKE_DURATION,
            shake_magnitude: SHAKE_MAGNITUDE,
            spin_duration: SPIN_DURATION,

            max_delta: MAX_DELTA,

            capabilities: Capabilities::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a configuration from a variant preset
    pub fn from_variant(variant: Variant) -> Self {
        variant.config()
    }

    /// Parse a JSON document; missing fields fall back to the Classic defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::default().with_json_overrides(json)
    }

    /// Apply a partial JSON document on top of this configuration.
    ///
    /// Nested objects (`capabilities`) are merged key by key, so an override
    /// only touches the fields it names.
    pub fn with_json_overrides(&self, json: &str) -> Result<Self, ConfigError> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(self)?;
        merge_json(&mut merged, overrides);
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Y coordinate of the playfield bottom (top of the ground band)
    pub fn ground_y(&self) -> f32 {
        self.canvas_height - self.ground_height
    }

    /// Effective shake duration (zero when the capability is off)
    pub fn effective_shake_duration(&self) -> f32 {
        if self.capabilities.shake {
            self.shake_duration
        } else {
            0.0
        }
    }

    /// Check every field for values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("ground_height", self.ground_height),
            ("ground_speed", self.ground_speed),
            ("player_x", self.player_x),
            ("player_start_y", self.player_start_y),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            ("pipe_interval", self.pipe_interval),
            ("gap_margin", self.gap_margin),
            ("shake_duration", self.shake_duration),
            ("shake_magnitude", self.shake_magnitude),
            ("spin_duration", self.spin_duration),
            ("max_delta", self.max_delta),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }

        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            ("pipe_interval", self.pipe_interval),
            ("shake_duration", self.shake_duration),
            ("spin_duration", self.spin_duration),
            ("max_delta", self.max_delta),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NotPositive { field, value });
        }

        let non_negative = [
            ("ground_height", self.ground_height),
            ("ground_speed", self.ground_speed),
            ("gap_margin", self.gap_margin),
            ("shake_magnitude", self.shake_magnitude),
        ];
        if let Some(&(field, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::Negative { field, value });
        }

        if self.milestone_period == 0 {
            return Err(ConfigError::NotPositive {
                field: "milestone_period",
                value: 0.0,
            });
        }

        if self.flap_impulse >= 0.0 {
            return Err(ConfigError::FlapNotUpward(self.flap_impulse));
        }

        let ground_y = self.ground_y();
        if self.pipe_gap >= ground_y {
            return Err(ConfigError::GapTooLarge {
                gap: self.pipe_gap,
                ground_y,
            });
        }

        let player_fits = self.player_x > 0.0
            && self.player_x + self.player_width <= self.canvas_width
            && self.player_start_y > 0.0
            && self.player_start_y + self.player_height < ground_y;
        if !player_fits {
            return Err(ConfigError::PlayerOutOfBounds);
        }

        Ok(())
    }
}

fn merge_json(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic() {
        let config = SimulationConfig::default();
        assert_eq!(config, Variant::Classic.config());
        assert_eq!(config.ground_y(), 720.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_compact_variant_is_valid() {
        let config = SimulationConfig::from_variant(Variant::Compact);
        assert_eq!(config.canvas_width, 400.0);
        assert_eq!(config.canvas_height, 600.0);
        assert!(!config.capabilities.shake);
        assert_eq!(config.effective_shake_duration(), 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("COMPACT"), Some(Variant::Compact));
        assert_eq!(Variant::from_str("classic"), Some(Variant::Classic));
        assert_eq!(Variant::from_str("huge"), None);
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config = SimulationConfig::from_json(
            r#"{ "pipe_gap": 200.0, "capabilities": { "shake": false } }"#,
        )
        .unwrap();
        assert_eq!(config.pipe_gap, 200.0);
        assert_eq!(config.gravity, GRAVITY);
        assert!(!config.capabilities.shake);
        assert!(config.capabilities.spin_milestone);
    }

    #[test]
    fn test_json_overrides_apply_over_variant() {
        let compact = Variant::Compact.config();
        let config = compact
            .with_json_overrides(r#"{ "pipe_gap": 150.0, "capabilities": { "shake": true } }"#)
            .unwrap();
        assert_eq!(config.pipe_gap, 150.0);
        assert_eq!(config.canvas_width, 400.0);
        assert_eq!(config.player_width, 51.0);
        assert!(config.capabilities.shake);
        assert!(!config.capabilities.ground_scroll);

        let config = compact.with_json_overrides("{}").unwrap();
        assert_eq!(config, compact);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = SimulationConfig {
            flap_impulse: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FlapNotUpward(_))
        ));

        let config = SimulationConfig {
            pipe_gap: 900.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapTooLarge { .. })
        ));

        let config = SimulationConfig {
            pipe_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "pipe_speed", .. })
        ));

        let config = SimulationConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "gravity" })
        ));

        let config = SimulationConfig {
            ground_speed: -180.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "ground_speed", .. })
        ));

        // The player must sit right of the cull line to ever be passed
        let config = SimulationConfig {
            player_x: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PlayerOutOfBounds)
        ));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        assert!(matches!(
            SimulationConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
