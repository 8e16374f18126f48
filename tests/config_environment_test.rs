// ABOUTME: Unit tests for environment configuration
// ABOUTME: Validates defaults, overrides, malformed values, and catalog loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::config::environment::{
    AppConfig, ACHIEVEMENTS_PATH_VAR, DATA_PATH_VAR, READINESS_BASE_VAR,
    READINESS_CACHE_CAPACITY_VAR, READINESS_TTL_VAR, STORAGE_QUOTA_VAR,
};
use fittrack::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

const ALL_VARS: [&str; 6] = [
    DATA_PATH_VAR,
    READINESS_TTL_VAR,
    READINESS_CACHE_CAPACITY_VAR,
    STORAGE_QUOTA_VAR,
    ACHIEVEMENTS_PATH_VAR,
    READINESS_BASE_VAR,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(config.data_path.ends_with("store.json"));
    assert!(config.intelligence_config().is_ok());
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var(DATA_PATH_VAR, "/tmp/fittrack-test/store.json");
    env::set_var(READINESS_TTL_VAR, "30");
    env::set_var(READINESS_CACHE_CAPACITY_VAR, "4");
    env::set_var(STORAGE_QUOTA_VAR, "1024");
    env::set_var(READINESS_BASE_VAR, "6.5");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.data_path, PathBuf::from("/tmp/fittrack-test/store.json"));
    assert_eq!(config.readiness_ttl, Duration::from_secs(30));
    assert_eq!(config.cache_config().max_entries, 4);
    assert_eq!(config.storage_quota_bytes, 1024);

    let intelligence = config.intelligence_config().unwrap();
    assert!((intelligence.readiness.base_score - 6.5).abs() < f64::EPSILON);
    clear_env();
}

#[test]
#[serial]
fn test_malformed_number_is_config_error() {
    clear_env();
    env::set_var(READINESS_TTL_VAR, "soon");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_base_score_rejected() {
    clear_env();
    env::set_var(READINESS_BASE_VAR, "42");
    let config = AppConfig::from_env().unwrap();
    let err = config.intelligence_config().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_achievement_catalog_from_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("achievements.json");
    fs::write(
        &path,
        r#"[{"id": "first_step", "title": "First Step", "type": "workout"}]"#,
    )
    .unwrap();
    env::set_var(ACHIEVEMENTS_PATH_VAR, &path);

    let catalog = AppConfig::from_env().unwrap().achievement_catalog().unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains("first_step"));

    env::set_var(ACHIEVEMENTS_PATH_VAR, dir.path().join("missing.json"));
    let err = AppConfig::from_env()
        .unwrap()
        .achievement_catalog()
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
    clear_env();
}
