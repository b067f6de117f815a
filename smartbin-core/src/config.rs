//! Economy tuning grouped into one serializable value.
use crate::constants::{
    ACCEPTANCE_THRESHOLD, CONFIDENCE_MAX, CONFIDENCE_MIN, DEFAULT_USERNAME, LOG_CAPACITY,
    REWARD_FLOOR, REWARD_SCALE, STARTING_BALANCE, STARTING_POINTS, STORAGE_KEY,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("log capacity must be at least 1")]
    ZeroLogCapacity,
    #[error("confidence range {min:.2}..={max:.2} must sit inside 0..=1 with min <= max")]
    ConfidenceRange { min: f64, max: f64 },
    #[error("acceptance threshold must be between 0 and 1 (got {0:.2})")]
    Threshold(f64),
    #[error("reward scale must be finite and non-negative (got {0})")]
    RewardScale(f64),
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("default username must not be empty")]
    EmptyUsername,
}

/// Every knob of the economy. Missing JSON fields fall back to the constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub storage_key: String,
    pub default_username: String,
    pub starting_points: u64,
    pub starting_balance: u64,
    pub log_capacity: usize,
    pub confidence_min: f64,
    pub confidence_max: f64,
    pub acceptance_threshold: f64,
    pub reward_floor: u64,
    pub reward_scale: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            default_username: DEFAULT_USERNAME.to_string(),
            starting_points: STARTING_POINTS,
            starting_balance: STARTING_BALANCE,
            log_capacity: LOG_CAPACITY,
            confidence_min: CONFIDENCE_MIN,
            confidence_max: CONFIDENCE_MAX,
            acceptance_threshold: ACCEPTANCE_THRESHOLD,
            reward_floor: REWARD_FLOOR,
            reward_scale: REWARD_SCALE,
        }
    }
}

impl EconomyConfig {
    /// Parse a config document; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed; validation is separate.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values the economy cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.default_username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::ZeroLogCapacity);
        }
        let unit = 0.0..=1.0;
        if !unit.contains(&self.confidence_min)
            || !unit.contains(&self.confidence_max)
            || self.confidence_min > self.confidence_max
        {
            return Err(ConfigError::ConfidenceRange {
                min: self.confidence_min,
                max: self.confidence_max,
            });
        }
        if !unit.contains(&self.acceptance_threshold) {
            return Err(ConfigError::Threshold(self.acceptance_threshold));
        }
        if !self.reward_scale.is_finite() || self.reward_scale < 0.0 {
            return Err(ConfigError::RewardScale(self.reward_scale));
        }
        Ok(())
    }

    /// Points granted for a correct detection at `confidence`:
    /// `max(floor, floor(confidence * scale))`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn reward_for(&self, confidence: f64) -> u64 {
        let scaled = (confidence.clamp(0.0, 1.0) * self.reward_scale).floor();
        (scaled as u64).max(self.reward_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(EconomyConfig::default().validate(), Ok(()));
    }

    #[test]
    fn reward_has_floor() {
        let cfg = EconomyConfig::default();
        assert_eq!(cfg.reward_for(0.76), 7);
        assert_eq!(cfg.reward_for(0.99), 9);
        assert_eq!(cfg.reward_for(1.0), 10);
        assert_eq!(cfg.reward_for(0.2), 5);
        assert_eq!(cfg.reward_for(0.0), 5);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EconomyConfig::from_json(r#"{ "starting_balance": 0, "log_capacity": 20 }"#)
            .unwrap();
        assert_eq!(cfg.starting_balance, 0);
        assert_eq!(cfg.log_capacity, 20);
        assert_eq!(cfg.default_username, "Sushanth");
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let cfg = EconomyConfig {
            log_capacity: 0,
            ..EconomyConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroLogCapacity));

        let cfg = EconomyConfig {
            confidence_min: 0.9,
            confidence_max: 0.8,
            ..EconomyConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ConfidenceRange { .. })
        ));

        let cfg = EconomyConfig {
            acceptance_threshold: 1.5,
            ..EconomyConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Threshold(1.5)));

        let cfg = EconomyConfig {
            storage_key: "  ".into(),
            ..EconomyConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyStorageKey));
    }
}
