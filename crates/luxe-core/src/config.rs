//! Runtime tuning for the effects, with defaults taken from [`crate::constants`].
//!
//! Overrides arrive as `(key, value)` string pairs so a host can source them from
//! markup attributes without knowing the field types.

use crate::constants::*;
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub smoothing: f32,
    pub dot_offset: f32,
    pub outline_offset: f32,
    pub glow_offset: f32,
    pub reveal_threshold: f32,
    pub preload_delay: Duration,
    /// Start cursor, hover and reveal only once the preloader has finished.
    pub gate_on_preload: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING_FACTOR,
            dot_offset: DOT_OFFSET_PX,
            outline_offset: OUTLINE_OFFSET_PX,
            glow_offset: GLOW_OFFSET_PX,
            reveal_threshold: REVEAL_THRESHOLD_PX,
            preload_delay: Duration::from_millis(PRELOAD_DELAY_MS),
            gate_on_preload: GATE_ON_PRELOAD,
        }
    }
}

pub const OVERRIDE_KEYS: [&str; 7] = [
    "smoothing",
    "dot-offset",
    "outline-offset",
    "glow-offset",
    "reveal-threshold",
    "preload-ms",
    "gate-on-preload",
];

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::Parse {
        key: key.to_string(),
        value: value.to_string(),
    })
}

impl EffectsConfig {
    /// Apply one string override and re-validate the result.
    pub fn with_override(mut self, key: &str, value: &str) -> Result<Self, ConfigError> {
        match key {
            "smoothing" => self.smoothing = parse(key, value)?,
            "dot-offset" => self.dot_offset = parse(key, value)?,
            "outline-offset" => self.outline_offset = parse(key, value)?,
            "glow-offset" => self.glow_offset = parse(key, value)?,
            "reveal-threshold" => self.reveal_threshold = parse(key, value)?,
            "preload-ms" => self.preload_delay = Duration::from_millis(parse(key, value)?),
            "gate-on-preload" => self.gate_on_preload = parse(key, value)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        self.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::Invalid {
                key: "smoothing",
                reason: "must be in (0, 1]",
            });
        }
        let lengths = [
            ("dot-offset", self.dot_offset),
            ("outline-offset", self.outline_offset),
            ("glow-offset", self.glow_offset),
            ("reveal-threshold", self.reveal_threshold),
        ];
        for (key, v) in lengths {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::Invalid {
                    key,
                    reason: "must be a finite, non-negative pixel length",
                });
            }
        }
        if self.preload_delay > Duration::from_millis(PRELOAD_DELAY_MAX_MS) {
            return Err(ConfigError::Invalid {
                key: "preload-ms",
                reason: "exceeds the longest timer delay",
            });
        }
        Ok(self)
    }
}
