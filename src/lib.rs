// ABOUTME: Main library entry point for the Bloomwell maternal wellness toolkit
// ABOUTME: Fitness guidance, kick counting, contraction timing, and rewards over plain data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

#![deny(unsafe_code)]

//! # Bloomwell
//!
//! Pure, in-process building blocks for a pregnancy wellness app.
//!
//! ## Features
//!
//! - **Fitness guidance**: trimester, condition, and symptom aware exercise
//!   recommendations with a six-step daily plan
//! - **Kick counter**: fetal movement sessions with a window alert
//! - **Contraction timer**: duration and interval tracking with the 5-1-1 alert
//! - **Rewards**: points ledger with derived levels
//!
//! Nothing here performs I/O or reads the clock. Profiles come from the
//! caller and results go back to the caller; timestamps are passed in.
//!
//! ## Example Usage
//!
//! ```rust
//! use bloomwell::intelligence::CaregivingProfileExt;
//! use bloomwell::models::CaregivingProfile;
//!
//! let profile = CaregivingProfile::from_json_str(
//!     r#"{"trimester": "2nd trimester", "medical": {"bp": true}, "symptoms": "mild dizziness"}"#,
//! )?
//! .unwrap_or_default();
//!
//! let plan = profile.build_plan();
//! assert_eq!(plan.daily_plan.len(), 6);
//! assert_eq!(plan.warnings.len(), 3);
//! # Ok::<(), bloomwell::errors::AppError>(())
//! ```

pub use bloomwell_core::{errors, models};

/// Configuration management from environment variables
pub mod config;

/// Application constants and clinical defaults
pub mod constants;

/// Contraction timing and labor alert
pub mod contractions;

/// Output format abstraction (JSON, TOON)
pub mod formatters;

/// Personalized guidance engines
pub mod intelligence;

/// Fetal movement counting
pub mod kick_counter;

/// Production logging and structured output
pub mod logging;

/// Points and levels gamification
pub mod rewards;
