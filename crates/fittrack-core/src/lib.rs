// ABOUTME: Core types and constants for the fittrack workout tracker
// ABOUTME: Foundation crate with error handling, calendar-day math, models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fittrack Core
//!
//! Foundation crate providing shared types and constants for the fittrack
//! streak, readiness, and achievement engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `StorageError`
//! - **constants**: Application-wide constants organized by domain
//! - **dates**: Calendar-day keys and day differences
//! - **models**: Workout, progress, profile, streak, and achievement records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Calendar-day keys (`YYYY-MM-DD`) and day-difference math
pub mod dates;

/// Core data models persisted by the trackers
pub mod models;
