// ABOUTME: Configuration module for fittrack-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (readiness table, trend windows, strength constants)
pub mod intelligence;

pub use intelligence::{
    BiologicalPenaltyConfig, ConfigError, ConsistencyTargets, FatigueThresholds, HabitPenalties,
    IntelligenceConfig, ReadinessConfig, RecoverySignals, StrengthConfig, WeightTrendConfig,
    READINESS_SCORE_CEILING, READINESS_SCORE_FLOOR,
};
