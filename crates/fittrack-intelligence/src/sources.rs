// ABOUTME: Capability traits the scorers use to read collaborator data
// ABOUTME: Workout, progress, and profile sources with slice-backed implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Collaborator capabilities
//!
//! Readiness and achievement inputs are gathered through these traits. The
//! root crate implements them for its trackers; tests and benches use the
//! slice implementations below.

use fittrack_core::dates::DayKey;
use fittrack_core::models::{ProgressPoint, UserProfile, WorkoutRecord};

/// Read access to the workout log
pub trait WorkoutSource {
    /// Every record in insertion order
    fn all(&self) -> &[WorkoutRecord];

    /// The last record appended, completed or not
    fn most_recent(&self) -> Option<&WorkoutRecord> {
        self.all().last()
    }

    /// Whether a completed workout exists on `day`
    fn has_completed_on(&self, day: DayKey) -> bool {
        self.all().iter().any(|w| w.completed && w.date == day)
    }

    /// Number of completed workouts
    fn completed_count(&self) -> usize {
        self.all().iter().filter(|w| w.completed).count()
    }
}

/// Read access to the body-weight log
pub trait ProgressSource {
    /// Every entry, oldest first
    fn entries(&self) -> &[ProgressPoint];

    /// Entries dated within the last `days` days ending `today`, oldest first
    fn since(&self, today: DayKey, days: u32) -> Vec<ProgressPoint> {
        let Some(start) = today.offset_days(-(i64::from(days) - 1)) else {
            return Vec::new();
        };
        let mut window: Vec<ProgressPoint> = self
            .entries()
            .iter()
            .filter(|p| p.date >= start && p.date <= today)
            .copied()
            .collect();
        window.sort_by_key(|p| p.date);
        window
    }
}

/// Read access to the stored profile
pub trait ProfileSource {
    /// The profile, if one was ever saved
    fn profile(&self) -> Option<&UserProfile>;
}

impl WorkoutSource for [WorkoutRecord] {
    fn all(&self) -> &[WorkoutRecord] {
        self
    }
}

impl WorkoutSource for Vec<WorkoutRecord> {
    fn all(&self) -> &[WorkoutRecord] {
        self
    }
}

impl ProgressSource for [ProgressPoint] {
    fn entries(&self) -> &[ProgressPoint] {
        self
    }
}

impl ProgressSource for Vec<ProgressPoint> {
    fn entries(&self) -> &[ProgressPoint] {
        self
    }
}

impl ProfileSource for Option<UserProfile> {
    fn profile(&self) -> Option<&UserProfile> {
        self.as_ref()
    }
}

impl ProfileSource for UserProfile {
    fn profile(&self) -> Option<&UserProfile> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_since_is_inclusive_and_sorted() {
        let log = vec![
            ProgressPoint::new(day("2024-03-10"), 80.0),
            ProgressPoint::new(day("2024-02-01"), 82.0),
            ProgressPoint::new(day("2024-03-01"), 81.0),
        ];
        let window = log.since(day("2024-03-14"), 14);
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].date, day("2024-03-01"));
        assert_eq!(window[1].date, day("2024-03-10"));
    }

    #[test]
    fn test_has_completed_on_ignores_unfinished() {
        let mut unfinished = WorkoutRecord::completed(day("2024-03-02"), 5.0);
        unfinished.completed = false;
        let log = vec![WorkoutRecord::completed(day("2024-03-01"), 5.0), unfinished];
        assert!(log.has_completed_on(day("2024-03-01")));
        assert!(!log.has_completed_on(day("2024-03-02")));
        assert_eq!(log.completed_count(), 1);
    }
}
