// ABOUTME: Tests for achievement unlocks, progress counters, notifications, and resets
// ABOUTME: Exercises the tracker directly and the catalog validation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use fittrack::constants::{achievement_ids, storage_keys};
use fittrack::errors::ErrorCode;
use fittrack::intelligence::achievements::{AchievementCatalog, DerivedState};
use fittrack::models::{AchievementDefinition, AchievementType};
use fittrack::storage::{InMemoryStore, KeyValueStore};
use fittrack::trackers::AchievementTracker;

fn tracker(store: &InMemoryStore) -> AchievementTracker {
    AchievementTracker::load(store, AchievementCatalog::default())
}

#[test]
fn test_unlock_is_stamped_once() {
    let mut store = InMemoryStore::new();
    let mut tracker = tracker(&store);
    let first = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();

    assert!(tracker.unlock(&mut store, achievement_ids::TEN_WORKOUTS, first));
    assert!(!tracker.unlock(
        &mut store,
        achievement_ids::TEN_WORKOUTS,
        first + Duration::days(1)
    ));

    let record = tracker.unlock_record(achievement_ids::TEN_WORKOUTS).unwrap();
    assert_eq!(record.unlocked_at, first);

    let reloaded = AchievementTracker::load(&store, AchievementCatalog::default());
    assert_eq!(
        reloaded
            .unlock_record(achievement_ids::TEN_WORKOUTS)
            .unwrap()
            .unlocked_at,
        first
    );
}

#[test]
fn test_unknown_id_changes_nothing() {
    let mut store = InMemoryStore::new();
    let mut tracker = tracker(&store);
    assert!(!tracker.unlock(&mut store, "moon_landing", Utc::now()));
    assert!(!tracker.set_progress(&mut store, "moon_landing", 3));
    assert!(tracker.unlocks().is_empty());
    assert!(store.get(storage_keys::ACHIEVEMENT_UNLOCKS).unwrap().is_none());
}

#[test]
fn test_malformed_stored_unlocks_load_as_empty() {
    let mut store = InMemoryStore::new();
    store
        .set(storage_keys::ACHIEVEMENT_UNLOCKS, "[1, 2, oops")
        .unwrap();
    store.set(storage_keys::ACHIEVEMENT_PROGRESS, "42").unwrap();

    let tracker = tracker(&store);
    assert!(tracker.unlocks().is_empty());
    assert!(tracker.progress(achievement_ids::TEN_WORKOUTS).is_none());
}

#[test]
fn test_check_all_unlocks_in_check_order() {
    let mut store = InMemoryStore::new();
    let mut tracker = tracker(&store);
    let state = DerivedState {
        profile_complete: true,
        total_workouts: 10,
        current_streak: 7,
        completed_goals: 1,
        days_since_first_use: Some(2),
        premium_visited: false,
        weight_toward_goal: true,
    };

    let unlocked = tracker.check_all(&mut store, &state, Utc::now());
    assert_eq!(
        unlocked,
        vec![
            achievement_ids::PROFILE_COMPLETE,
            achievement_ids::FIRST_WORKOUT,
            achievement_ids::TEN_WORKOUTS,
            achievement_ids::THREE_DAY_STREAK,
            achievement_ids::WEEK_STREAK,
            achievement_ids::WEIGHT_PROGRESS,
            achievement_ids::FIRST_GOAL,
        ]
    );
    assert!(!tracker.is_unlocked(achievement_ids::MONTH_STREAK));
    assert!(!tracker.is_unlocked(achievement_ids::PRIVACY_GUARDIAN));

    // Second pass unlocks nothing new
    assert!(tracker.check_all(&mut store, &state, Utc::now()).is_empty());
}

#[test]
fn test_progress_counters_are_capped_at_target() {
    let mut store = InMemoryStore::new();
    let mut tracker = tracker(&store);
    let state = DerivedState {
        total_workouts: 25,
        current_streak: 12,
        ..DerivedState::default()
    };
    tracker.check_all(&mut store, &state, Utc::now());

    assert_eq!(tracker.progress(achievement_ids::TEN_WORKOUTS), Some(10));
    assert_eq!(tracker.progress(achievement_ids::THREE_DAY_STREAK), Some(3));
    assert_eq!(tracker.progress(achievement_ids::MONTH_STREAK), Some(12));
    assert!(tracker.progress(achievement_ids::FIRST_WORKOUT).is_none());
}

#[test]
fn test_privacy_guardian_requires_no_premium_visit() {
    let mut store = InMemoryStore::new();
    let mut tracker = tracker(&store);
    let visited = DerivedState {
        days_since_first_use: Some(45),
        premium_visited: true,
        ..DerivedState::default()
    };
    tracker.check_all(&mut store, &visited, Utc::now());
    assert!(!tracker.is_unlocked(achievement_ids::PRIVACY_GUARDIAN));

    let abstained = DerivedState {
        premium_visited: false,
        ..visited
    };
    let unlocked = tracker.check_all(&mut store, &abstained, Utc::now());
    assert_eq!(unlocked, vec![achievement_ids::PRIVACY_GUARDIAN]);
}

#[test]
fn test_notifications_and_reset() {
    let mut store = InMemoryStore::new();
    let mut tracker = tracker(&store);
    let now = Utc::now();
    tracker.unlock(&mut store, achievement_ids::FIRST_WORKOUT, now);
    tracker.unlock(&mut store, achievement_ids::PROFILE_COMPLETE, now);

    let pending: Vec<&str> = tracker
        .pending_notifications()
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(
        pending,
        vec![
            achievement_ids::PROFILE_COMPLETE,
            achievement_ids::FIRST_WORKOUT
        ]
    );

    assert!(tracker.mark_notified(&mut store, achievement_ids::FIRST_WORKOUT));
    assert!(!tracker.mark_notified(&mut store, achievement_ids::FIRST_WORKOUT));
    assert_eq!(tracker.pending_notifications().len(), 1);

    tracker.reset(&mut store);
    assert!(tracker.unlocks().is_empty());
    assert!(store.get(storage_keys::ACHIEVEMENT_UNLOCKS).unwrap().is_none());
    assert!(store.get(storage_keys::ACHIEVEMENT_PROGRESS).unwrap().is_none());
    assert!(tracker.unlock(&mut store, achievement_ids::FIRST_WORKOUT, now));
}

#[test]
fn test_catalog_rejects_duplicates_and_empty_ids() {
    let duplicate = AchievementCatalog::new(vec![
        AchievementDefinition::new("a", "A", "", AchievementType::Workout),
        AchievementDefinition::new("a", "A again", "", AchievementType::Profile),
    ])
    .unwrap_err();
    assert_eq!(duplicate.code, ErrorCode::ResourceAlreadyExists);

    let empty = AchievementCatalog::new(vec![AchievementDefinition::new(
        " ",
        "Blank",
        "",
        AchievementType::Workout,
    )])
    .unwrap_err();
    assert_eq!(empty.code, ErrorCode::InvalidInput);
}

#[test]
fn test_catalog_from_json_and_missing_threshold() {
    let catalog = AchievementCatalog::from_json(
        r#"[
            {"id": "five", "title": "Five", "type": "workout_count", "threshold": 5},
            {"id": "broken", "title": "Broken", "type": "streak"}
        ]"#,
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);

    let state = DerivedState {
        total_workouts: 5,
        current_streak: 100,
        ..DerivedState::default()
    };
    assert!(catalog.evaluate("five", &state).unwrap());
    assert!(!catalog.evaluate("broken", &state).unwrap());
    assert_eq!(
        catalog.evaluate("nope", &state).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}
