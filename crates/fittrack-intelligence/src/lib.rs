// ABOUTME: Derived-state engine for fittrack: streaks, forecasts, readiness, and achievements
// ABOUTME: Pure functions over workout, progress, and profile data supplied through source traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fittrack Intelligence
//!
//! Everything here is a deterministic computation over in-memory records:
//!
//! - **streak**: consecutive-day counter with one-day grace
//! - **`statistical_analysis`**: ordinary least squares with safe degenerate handling
//! - **`weight_trend`**: body-weight forecast over a recent window
//! - **`strength_progress`**: Epley one-rep max with RIR correction and forecasting
//! - **readiness**: weighted-adjustment readiness score (1-10)
//! - **achievements**: catalog and unlock predicates
//!
//! Collaborator data arrives through the traits in [`sources`]; persistence and
//! caching belong to the caller.

/// Re-export of the core crate for downstream convenience
pub use fittrack_core as core;

/// Achievement catalog and unlock predicates
pub mod achievements;
/// Intelligence configuration (readiness table, trend windows, strength constants)
pub mod config;
/// Readiness factors and scorer
pub mod readiness;
/// Collaborator capability traits
pub mod sources;
/// Linear regression
pub mod statistical_analysis;
/// Streak state machine
pub mod streak;
/// One-rep max estimation and forecasting
pub mod strength_progress;
/// Body-weight trend forecasting
pub mod weight_trend;

pub use achievements::{AchievementCatalog, AchievementRules, DerivedState};
pub use config::IntelligenceConfig;
pub use readiness::{
    ConsistencyStatus, ReadinessAdjustment, ReadinessAssessment, ReadinessComponent,
    ReadinessFactors, ReadinessScorer, TrainingIntensity,
};
pub use sources::{ProfileSource, ProgressSource, WorkoutSource};
pub use statistical_analysis::{
    RegressionError, RegressionFit, RegressionPoint, StatisticalAnalyzer,
};
pub use streak::StreakCounter;
pub use strength_progress::{
    OneRepMaxForecast, OneRepMaxPoint, StrengthProgressAnalyzer, StrengthTrend,
};
pub use weight_trend::{TrendAlignment, WeightDirection, WeightForecast, WeightTrendAnalyzer};
