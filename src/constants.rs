// ABOUTME: Application constants: environment variable names and clinical defaults
// ABOUTME: Central place for thresholds used by the kick counter, contraction timer, and rewards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

/// Environment variable names read by [`crate::config::BloomwellConfig::from_env`]
pub mod env_config {
    /// Tracing filter directive (e.g. `info`, `bloomwell=debug`)
    pub const LOG_LEVEL: &str = "BLOOMWELL_LOG_LEVEL";
    /// Log output format: `pretty`, `compact`, or `json`
    pub const LOG_FORMAT: &str = "BLOOMWELL_LOG_FORMAT";
    /// Default CLI output format: `json` or `toon`
    pub const OUTPUT_FORMAT: &str = "BLOOMWELL_OUTPUT_FORMAT";
    /// Kicks required to complete a counting session
    pub const KICK_TARGET: &str = "BLOOMWELL_KICK_TARGET";
    /// Minutes allowed to reach the kick target
    pub const KICK_WINDOW_MINUTES: &str = "BLOOMWELL_KICK_WINDOW_MINUTES";
    /// Maximum average start-to-start interval for the labor alert
    pub const CONTRACTION_INTERVAL_MINUTES: &str = "BLOOMWELL_CONTRACTION_INTERVAL_MINUTES";
    /// Minimum average contraction duration for the labor alert
    pub const CONTRACTION_DURATION_SECONDS: &str = "BLOOMWELL_CONTRACTION_DURATION_SECONDS";
    /// Trailing window the labor alert pattern must cover
    pub const CONTRACTION_WINDOW_MINUTES: &str = "BLOOMWELL_CONTRACTION_WINDOW_MINUTES";
    /// Points needed per rewards level
    pub const POINTS_PER_LEVEL: &str = "BLOOMWELL_POINTS_PER_LEVEL";
}

/// Fetal movement counting defaults
pub mod kick_counter {
    /// Movements to feel within the window
    pub const DEFAULT_TARGET_KICKS: u32 = 10;
    /// Window to reach the target
    pub const DEFAULT_WINDOW_MINUTES: i64 = 120;
}

/// Contraction timing defaults (the 5-1-1 rule)
pub mod contractions {
    /// Contractions at most this many minutes apart, start to start
    pub const DEFAULT_MAX_INTERVAL_MINUTES: i64 = 5;
    /// Each lasting at least this many seconds
    pub const DEFAULT_MIN_DURATION_SECONDS: i64 = 60;
    /// Sustained for this many minutes
    pub const DEFAULT_WINDOW_MINUTES: i64 = 60;
}

/// Rewards ledger defaults
pub mod rewards {
    /// Points required to advance one level
    pub const DEFAULT_POINTS_PER_LEVEL: u64 = 100;
    /// Level of a brand-new ledger
    pub const STARTING_LEVEL: u64 = 1;
}

/// Presentation defaults
pub mod display {
    /// Items per list shown in the compact plan view
    pub const PREVIEW_ITEMS: usize = 4;
}
