// ABOUTME: Tests for the in-memory and JSON file key-value stores
// ABOUTME: Covers quotas, typed helpers, atomic persistence, and malformed documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use fittrack::errors::StorageError;
use fittrack::models::StreakState;
use fittrack::storage::{
    entry_size, load_json, load_or_default, save_json, InMemoryStore, JsonFileStore,
    KeyValueStore,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_memory_store_quota_exceeded() {
    let mut store = InMemoryStore::with_quota(entry_size("a", "12345"));
    store.set("a", "12345").unwrap();

    let err = store.set("b", "x").unwrap_err();
    assert!(err.is_quota_exceeded());
    assert!(matches!(err, StorageError::QuotaExceeded { ref key, .. } if key == "b"));
    assert!(store.get("b").unwrap().is_none());

    // Replacing with a value of the same size still fits
    store.set("a", "54321").unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("54321"));
}

#[test]
fn test_memory_store_remove_and_keys() {
    let mut store = InMemoryStore::new();
    store.set("b", "2").unwrap();
    store.set("a", "1").unwrap();
    assert_eq!(store.keys(), vec!["a".to_owned(), "b".to_owned()]);

    store.remove("a").unwrap();
    store.remove("missing").unwrap();
    assert_eq!(store.keys(), vec!["b".to_owned()]);
    assert_eq!(store.used_bytes(), entry_size("b", "2"));
}

#[test]
fn test_typed_helpers() {
    let mut store = InMemoryStore::new();
    let state = StreakState {
        current_streak: 4,
        longest_streak: 9,
        ..StreakState::default()
    };
    save_json(&mut store, "streak", &state).unwrap();
    let loaded: Option<StreakState> = load_json(&store, "streak").unwrap();
    assert_eq!(loaded, Some(state));

    store.set("streak", "{\"currentStreak\": \"many\"}").unwrap();
    let err = load_json::<_, StreakState>(&store, "streak").unwrap_err();
    assert!(matches!(err, StorageError::Corrupted { .. }));

    let fallback: StreakState = load_or_default(&store, "streak");
    assert_eq!(fallback, StreakState::default());
}

#[test]
fn test_file_store_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("store.json");

    let mut store = JsonFileStore::open(&path)?;
    store.set("greeting", "\"hello\"")?;
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    let reopened = JsonFileStore::open(&path)?;
    assert_eq!(reopened.get("greeting")?.as_deref(), Some("\"hello\""));
    assert_eq!(reopened.path(), path.as_path());
    Ok(())
}

#[test]
fn test_file_store_missing_file_starts_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::open(dir.path().join("absent.json"))?;
    assert!(store.keys().is_empty());
    Ok(())
}

#[test]
fn test_file_store_moves_malformed_document_aside() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("store.json");
    fs::write(&path, "{ this is not json")?;

    let store = JsonFileStore::open(&path)?;
    assert!(store.keys().is_empty());
    assert!(dir.path().join("store.json.corrupt").exists());
    Ok(())
}

#[test]
fn test_file_store_quota_leaves_disk_untouched() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("store.json");

    let mut store = JsonFileStore::open(&path)?.with_quota(entry_size("k", "v"));
    store.set("k", "v")?;
    let before = fs::read_to_string(&path)?;

    let err = store.set("other", "value").unwrap_err();
    assert!(err.is_quota_exceeded());
    assert_eq!(fs::read_to_string(&path)?, before);
    Ok(())
}

#[test]
fn test_file_store_remove_persists() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("store.json");

    let mut store = JsonFileStore::open(&path)?;
    store.set("a", "1")?;
    store.set("b", "2")?;
    store.remove("a")?;

    let reopened = JsonFileStore::open(&path)?;
    assert_eq!(reopened.keys(), vec!["b".to_owned()]);
    Ok(())
}
