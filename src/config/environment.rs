// ABOUTME: Environment-based configuration for the Bloomwell library and CLI
// ABOUTME: Parses logging, output, kick counter, contraction, and rewards settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

//! Environment-only configuration.
//!
//! Every setting has a default, so an empty environment produces a working
//! configuration. Present-but-invalid values are rejected with
//! `ErrorCode::ConfigError` instead of being silently replaced.

use std::env;
use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{contractions, env_config, kick_counter, rewards};
use crate::errors::{AppError, AppResult};
use crate::formatters::OutputFormat;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable output
    #[default]
    Pretty,
    /// Single-line human-readable output
    Compact,
    /// Structured JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Unknown log format '{other}' (expected pretty, compact, or json)"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::default(),
        }
    }
}

/// Fetal movement counting configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickCounterConfig {
    /// Movements required to complete a session
    pub target_kicks: u32,
    /// Minutes allowed to reach the target
    pub window_minutes: i64,
}

impl KickCounterConfig {
    /// Counting window as a duration, saturating when out of range
    #[must_use]
    pub fn window(&self) -> Duration {
        saturating_minutes(self.window_minutes)
    }
}

impl Default for KickCounterConfig {
    fn default() -> Self {
        Self {
            target_kicks: kick_counter::DEFAULT_TARGET_KICKS,
            window_minutes: kick_counter::DEFAULT_WINDOW_MINUTES,
        }
    }
}

/// Contraction alert thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractionConfig {
    /// Maximum average start-to-start interval in minutes
    pub max_interval_minutes: i64,
    /// Minimum average duration in seconds
    pub min_duration_seconds: i64,
    /// Trailing window the pattern must cover, in minutes
    pub window_minutes: i64,
}

impl ContractionConfig {
    /// Maximum average interval as a duration
    #[must_use]
    pub fn max_interval(&self) -> Duration {
        saturating_minutes(self.max_interval_minutes)
    }

    /// Minimum average duration as a duration
    #[must_use]
    pub fn min_duration(&self) -> Duration {
        Duration::try_seconds(self.min_duration_seconds)
            .unwrap_or_else(|| saturated(self.min_duration_seconds))
    }

    /// Observation window as a duration
    #[must_use]
    pub fn window(&self) -> Duration {
        saturating_minutes(self.window_minutes)
    }
}

impl Default for ContractionConfig {
    fn default() -> Self {
        Self {
            max_interval_minutes: contractions::DEFAULT_MAX_INTERVAL_MINUTES,
            min_duration_seconds: contractions::DEFAULT_MIN_DURATION_SECONDS,
            window_minutes: contractions::DEFAULT_WINDOW_MINUTES,
        }
    }
}

/// Rewards configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsConfig {
    /// Points required per level
    pub points_per_level: u64,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            points_per_level: rewards::DEFAULT_POINTS_PER_LEVEL,
        }
    }
}

/// Complete Bloomwell configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloomwellConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Default output format for rendered results
    pub output_format: OutputFormat,
    /// Kick counter settings
    pub kick_counter: KickCounterConfig,
    /// Contraction timer settings
    pub contractions: ContractionConfig,
    /// Rewards settings
    pub rewards: RewardsConfig,
}

impl BloomwellConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any variable is set to an unparseable or
    /// out-of-range value.
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let logging = LoggingConfig {
            level: env::var(env_config::LOG_LEVEL).unwrap_or(defaults.logging.level),
            format: env_or(env_config::LOG_FORMAT, defaults.logging.format)?,
        };

        let output_format = env::var(env_config::OUTPUT_FORMAT)
            .ok()
            .map_or(Ok(defaults.output_format), |raw| {
                OutputFormat::parse_strict(&raw).ok_or_else(|| {
                    AppError::config(format!(
                        "{} must be json or toon, got '{raw}'",
                        env_config::OUTPUT_FORMAT
                    ))
                })
            })?;

        let kick_counter = KickCounterConfig {
            target_kicks: env_or(env_config::KICK_TARGET, defaults.kick_counter.target_kicks)?,
            window_minutes: env_or(
                env_config::KICK_WINDOW_MINUTES,
                defaults.kick_counter.window_minutes,
            )?,
        };

        let contractions = ContractionConfig {
            max_interval_minutes: env_or(
                env_config::CONTRACTION_INTERVAL_MINUTES,
                defaults.contractions.max_interval_minutes,
            )?,
            min_duration_seconds: env_or(
                env_config::CONTRACTION_DURATION_SECONDS,
                defaults.contractions.min_duration_seconds,
            )?,
            window_minutes: env_or(
                env_config::CONTRACTION_WINDOW_MINUTES,
                defaults.contractions.window_minutes,
            )?,
        };

        let rewards = RewardsConfig {
            points_per_level: env_or(
                env_config::POINTS_PER_LEVEL,
                defaults.rewards.points_per_level,
            )?,
        };

        let config = Self {
            logging,
            output_format,
            kick_counter,
            contractions,
            rewards,
        };
        config.validate()?;

        debug!(
            log_format = %config.logging.format,
            output_format = %config.output_format,
            kick_target = config.kick_counter.target_kicks,
            points_per_level = config.rewards.points_per_level,
            "Configuration loaded from environment"
        );

        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first out-of-range setting.
    pub fn validate(&self) -> AppResult<()> {
        if self.kick_counter.target_kicks == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_config::KICK_TARGET
            )));
        }
        let positive_minutes = [
            (env_config::KICK_WINDOW_MINUTES, self.kick_counter.window_minutes),
            (
                env_config::CONTRACTION_INTERVAL_MINUTES,
                self.contractions.max_interval_minutes,
            ),
            (
                env_config::CONTRACTION_DURATION_SECONDS,
                self.contractions.min_duration_seconds,
            ),
            (
                env_config::CONTRACTION_WINDOW_MINUTES,
                self.contractions.window_minutes,
            ),
        ];
        if let Some((name, value)) = positive_minutes.iter().find(|(_, value)| *value <= 0) {
            return Err(AppError::config(format!(
                "{name} must be positive, got {value}"
            )));
        }
        let representable = [
            (
                env_config::KICK_WINDOW_MINUTES,
                Duration::try_minutes(self.kick_counter.window_minutes),
            ),
            (
                env_config::CONTRACTION_INTERVAL_MINUTES,
                Duration::try_minutes(self.contractions.max_interval_minutes),
            ),
            (
                env_config::CONTRACTION_DURATION_SECONDS,
                Duration::try_seconds(self.contractions.min_duration_seconds),
            ),
            (
                env_config::CONTRACTION_WINDOW_MINUTES,
                Duration::try_minutes(self.contractions.window_minutes),
            ),
        ];
        if let Some((name, _)) = representable.iter().find(|(_, duration)| duration.is_none()) {
            return Err(AppError::config(format!(
                "{name} is too large to represent as a duration"
            )));
        }
        if self.rewards.points_per_level == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_config::POINTS_PER_LEVEL
            )));
        }
        Ok(())
    }
}

/// Minutes as a duration, clamped to the representable range
fn saturating_minutes(minutes: i64) -> Duration {
    Duration::try_minutes(minutes).unwrap_or_else(|| saturated(minutes))
}

const fn saturated(value: i64) -> Duration {
    if value < 0 {
        Duration::MIN
    } else {
        Duration::MAX
    }
}

/// Read and parse an environment variable, falling back to `default` when unset
fn env_or<T>(name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid value '{raw}' for {name}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => {
            Err(AppError::config(format!("{name} is not valid UTF-8")))
        }
    }
}
