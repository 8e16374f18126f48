// ABOUTME: Body-weight progress entry appended by the user
// ABOUTME: Entries feed the weight trend regression and the weight-progress achievement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::dates::DayKey;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A body-weight measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    /// Local calendar day of the measurement
    pub date: DayKey,
    /// Body weight in kilograms
    pub weight: f64,
}

impl ProgressPoint {
    /// Create an entry
    #[must_use]
    pub const fn new(date: DayKey, weight: f64) -> Self {
        Self { date, weight }
    }

    /// Reject non-positive or non-finite weights
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the weight is not a positive finite number
    pub fn validate(&self) -> AppResult<()> {
        if self.weight.is_finite() && self.weight > 0.0 {
            Ok(())
        } else {
            Err(AppError::out_of_range(format!(
                "Body weight {} must be a positive number",
                self.weight
            )))
        }
    }
}
