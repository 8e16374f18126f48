// ABOUTME: Main library entry point for fittrack
// ABOUTME: Key-value persistence, trackers, caching, configuration, and the check-cycle engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fittrack
//!
//! Local-first fitness tracking core. Workout, weight, and profile data live in a
//! key-value store of JSON documents; this crate derives:
//!
//! - a daily workout streak with one-day grace
//! - least-squares forecasts for body weight and one-rep max
//! - a 1-10 readiness score
//! - one-time achievement unlocks
//!
//! ## Architecture
//!
//! - **`fittrack-core`**: errors, constants, dates, and models
//! - **`fittrack-intelligence`**: pure derived-state algorithms
//! - **this crate**: storage, trackers, cache, configuration, logging, and [`engine::FitnessEngine`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use fittrack::engine::FitnessEngine;
//! use fittrack::storage::InMemoryStore;
//! use fittrack::models::WorkoutRecord;
//! use fittrack::dates::local_date_key;
//! use chrono::Local;
//!
//! let now = Local::now();
//! let mut engine = FitnessEngine::with_defaults(InMemoryStore::new());
//! engine.log_workout(WorkoutRecord::completed(local_date_key(&now), 7.0))?;
//! let report = engine.run_check(&now);
//! println!("streak: {}", report.streak.current_streak);
//! # Ok::<(), fittrack::errors::AppError>(())
//! ```

/// Readiness cache
pub mod cache;
/// Environment configuration
pub mod config;
/// Check-cycle engine
pub mod engine;
/// Error types
pub mod errors;
/// Logging setup
pub mod logging;
/// Key-value stores
pub mod storage;
/// Persistent trackers
pub mod trackers;

/// Constants shared across the workspace
pub use fittrack_core::constants;
/// Calendar-day utilities
pub use fittrack_core::dates;
/// Domain models
pub use fittrack_core::models;
/// Derived-state algorithms
pub use fittrack_intelligence as intelligence;
