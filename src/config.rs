//! Tunables for the motion resolver, probe and game state.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Physics and gameplay constants, in pixels and pixels-per-tick.
///
/// Every field has a default, so a JSON file only needs to list overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to `velocity.y` every living tick.
    pub gravity: f32,
    /// Horizontal speed change per tick while left/right is held.
    pub run_accel: f32,
    pub max_run_speed: f32,
    /// |vx| below this snaps to zero.
    pub stop_threshold: f32,
    /// Multiplier applied to `velocity.x` every tick.
    pub damping: f32,
    /// Negative is up.
    pub jump_impulse: f32,
    pub ladder_step: f32,
    /// Replaces an upward `velocity.y` when the head touches a ceiling.
    pub ceiling_release: f32,
    pub death_impulse: f32,
    /// Degrees per tick.
    pub death_spin: f32,

    /// Outward offset applied to every probe sample.
    pub contact_skin: f32,
    pub side_samples: usize,
    pub above_samples: usize,
    pub below_samples: usize,

    pub actor_width: f32,
    pub actor_height: f32,
    pub pickup_size: f32,

    /// Events beyond this are dropped until the host drains the buffer.
    pub max_events: usize,
    pub enable_timing: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            run_accel: 1.0,
            max_run_speed: 5.0,
            stop_threshold: 1.0,
            damping: 0.9,
            jump_impulse: -5.0,
            ladder_step: 5.0,
            ceiling_release: 0.01,
            death_impulse: -10.0,
            death_spin: 20.0,

            contact_skin: 1.0,
            side_samples: 6,
            above_samples: 6,
            below_samples: 10,

            actor_width: 24.0,
            actor_height: 32.0,
            pickup_size: 16.0,

            max_events: 64,
            enable_timing: false,
        }
    }
}

impl PhysicsConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Reject values the per-tick code cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &'static str| {
            Err(ConfigError::Invalid { field, reason })
        };
        if !(self.max_run_speed >= 0.0) {
            return invalid("max_run_speed", "must be >= 0");
        }
        if !(self.stop_threshold >= 0.0) {
            return invalid("stop_threshold", "must be >= 0");
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return invalid("damping", "must be in (0, 1]");
        }
        if !(self.contact_skin >= 0.0) {
            return invalid("contact_skin", "must be >= 0");
        }
        if self.side_samples == 0 {
            return invalid("side_samples", "must be nonzero");
        }
        if self.above_samples == 0 {
            return invalid("above_samples", "must be nonzero");
        }
        if self.below_samples == 0 {
            return invalid("below_samples", "must be nonzero");
        }
        if !(self.actor_width > 0.0 && self.actor_height > 0.0) {
            return invalid("actor_width", "actor size must be positive");
        }
        Ok(())
    }

    pub fn actor_size(&self) -> Vec2 {
        Vec2::new(self.actor_width, self.actor_height)
    }

    pub fn pickup_extent(&self) -> Vec2 {
        Vec2::splat(self.pickup_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = PhysicsConfig::from_json_str(r#"{ "gravity": 0.5, "below_samples": 4 }"#).unwrap();
        assert_eq!(cfg.gravity, 0.5);
        assert_eq!(cfg.below_samples, 4);
        assert_eq!(cfg.max_run_speed, PhysicsConfig::default().max_run_speed);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PhysicsConfig::from_json_str("{ gravity: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let cases = [
            (r#"{ "max_run_speed": -1.0 }"#, "max_run_speed"),
            (r#"{ "stop_threshold": -0.5 }"#, "stop_threshold"),
            (r#"{ "damping": 0.0 }"#, "damping"),
            (r#"{ "damping": 1.5 }"#, "damping"),
            (r#"{ "contact_skin": -1.0 }"#, "contact_skin"),
            (r#"{ "side_samples": 0 }"#, "side_samples"),
            (r#"{ "above_samples": 0 }"#, "above_samples"),
            (r#"{ "below_samples": 0 }"#, "below_samples"),
            (r#"{ "actor_height": 0.0 }"#, "actor_width"),
        ];
        for (json, expected) in cases {
            match PhysicsConfig::from_json_str(json) {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected, "{json}"),
                other => panic!("{json}: expected Invalid, got {other:?}"),
            }
        }
        assert!(PhysicsConfig::default().validate().is_ok());
        assert!(PhysicsConfig::from_json_str(r#"{ "damping": 1.0, "max_run_speed": 0.0 }"#).is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = PhysicsConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
