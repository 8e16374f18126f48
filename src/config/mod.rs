// ABOUTME: Configuration management module for storage, cache, and scoring settings
// ABOUTME: Handles environment configs and re-exports intelligence configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for fittrack
//!
//! - **Environment**: store location, cache sizing, quota, and overrides from environment variables
//! - **Intelligence**: scoring tables and trend constants from `fittrack-intelligence`

/// Environment configuration
pub mod environment;

pub use environment::AppConfig;
pub use fittrack_intelligence::config::{ConfigError, IntelligenceConfig};
