// ABOUTME: Core types shared by the Bloomwell library and CLI
// ABOUTME: Data models and the unified error type, free of I/O and runtime dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

#![deny(unsafe_code)]

//! # Bloomwell Core
//!
//! Plain data types shared across the workspace:
//! - [`models`]: caregiving profile input and recommendation output
//! - [`errors`]: `ErrorCode`, `AppError`, and the `AppResult` alias

/// Unified error handling
pub mod errors;

/// Profile and recommendation data models
pub mod models;
