// ABOUTME: Configuration module entry point
// ABOUTME: Re-exports environment-driven settings for logging, output, and feature thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

/// Environment variable parsing and typed settings
pub mod environment;

pub use environment::{
    BloomwellConfig, ContractionConfig, KickCounterConfig, LogFormat, LoggingConfig,
    RewardsConfig,
};
