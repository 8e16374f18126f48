// ABOUTME: Error handling for fittrack, re-exported from the core crate
// ABOUTME: Shared by storage, trackers, configuration, and the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! `AppError` carries an `ErrorCode`, a message, optional context, and an
//! optional source. Storage backends return the narrower `StorageError`,
//! which converts into `AppError`.

pub use fittrack_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, StorageError,
};
