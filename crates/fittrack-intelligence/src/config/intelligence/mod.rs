// ABOUTME: Intelligence configuration root combining readiness, trend, strength, and biological sections
// ABOUTME: Provides defaults matching the adaptive engine and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration
//!
//! Every tunable constant used by the scorers lives here so a caller can
//! override the canonical table without touching the algorithms.

mod biological;
mod error;
mod readiness;
mod trend;

pub use biological::{BiologicalPenaltyConfig, HabitPenalties};
pub use error::ConfigError;
pub use readiness::{
    ConsistencyTargets, FatigueThresholds, ReadinessConfig, RecoverySignals,
    READINESS_SCORE_CEILING, READINESS_SCORE_FLOOR,
};
pub use trend::{StrengthConfig, WeightTrendConfig};

use serde::{Deserialize, Serialize};

/// Configuration for every derived-state computation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// Readiness scoring table
    pub readiness: ReadinessConfig,
    /// Body-weight trend settings
    pub trend: WeightTrendConfig,
    /// One-rep max settings
    pub strength: StrengthConfig,
    /// Weekly workout-day targets
    pub consistency: ConsistencyTargets,
    /// Profile-derived penalties
    pub biological: BiologicalPenaltyConfig,
}

impl IntelligenceConfig {
    /// Parse a configuration document; missing sections take their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and any validation error
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the readiness base score
    #[must_use]
    pub fn with_base_score(mut self, base_score: f64) -> Self {
        self.readiness.base_score = base_score;
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any section holds an impossible combination
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_readiness()?;
        self.validate_trend()?;
        self.validate_strength()?;
        self.validate_biological()?;

        if self.consistency.window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "consistency window_days must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_readiness(&self) -> Result<(), ConfigError> {
        let readiness = &self.readiness;
        let bounds = [readiness.base_score, readiness.min_score, readiness.max_score];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "readiness base_score, min_score, and max_score must be finite",
            ));
        }
        if readiness.min_score < READINESS_SCORE_FLOOR
            || readiness.max_score > READINESS_SCORE_CEILING
        {
            return Err(ConfigError::InvalidRange(
                "readiness min_score and max_score must lie within 1-10",
            ));
        }
        if readiness.min_score >= readiness.max_score {
            return Err(ConfigError::InvertedThresholds(
                "readiness min_score must be < max_score",
            ));
        }
        if !(readiness.min_score..=readiness.max_score).contains(&readiness.base_score) {
            return Err(ConfigError::InvalidRange(
                "readiness base_score must lie within [min_score, max_score]",
            ));
        }
        if readiness.fatigue.low >= readiness.fatigue.high {
            return Err(ConfigError::InvertedThresholds(
                "fatigue low threshold must be < high threshold",
            ));
        }
        if readiness.fatigue.window_days == 0 || readiness.recovery.window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "fatigue and recovery windows must be at least 1 day",
            ));
        }
        let adjustments = [
            readiness.fatigue.high_penalty,
            readiness.fatigue.low_bonus,
            readiness.adverse_trend_penalty,
            readiness.favorable_trend_bonus,
            readiness.insufficient_consistency_penalty,
            readiness.sufficient_consistency_bonus,
            readiness.recovery_penalty,
        ];
        if adjustments.iter().any(|a| !a.is_finite() || *a < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "readiness adjustments must be finite and non-negative",
            ));
        }
        Ok(())
    }

    fn validate_trend(&self) -> Result<(), ConfigError> {
        if self.trend.window_days < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "weight trend window_days must be at least 2",
            ));
        }
        if self.trend.stability_band_kg_per_week < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "stability_band_kg_per_week must be non-negative",
            ));
        }
        Ok(())
    }

    fn validate_strength(&self) -> Result<(), ConfigError> {
        if self.strength.epley_divisor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "epley_divisor must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.strength.rir_correction_per_rep) {
            return Err(ConfigError::InvalidRange(
                "rir_correction_per_rep must be between 0 and 1",
            ));
        }
        if self.strength.trend_slope_band < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_slope_band must be non-negative",
            ));
        }
        Ok(())
    }

    fn validate_biological(&self) -> Result<(), ConfigError> {
        let bio = &self.biological;
        if !bio.cap.is_finite() || bio.cap < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "biological penalty cap must be finite and non-negative",
            ));
        }
        for habit in [bio.smoking, bio.alcohol] {
            if habit.occasionally > habit.weekly || habit.weekly > habit.daily {
                return Err(ConfigError::InvertedThresholds(
                    "habit penalties must not decrease with frequency",
                ));
            }
        }
        Ok(())
    }
}
