// ABOUTME: Contraction timer tracking duration and start-to-start intervals
// ABOUTME: Evaluates the 5-1-1 pattern over a trailing window to decide when to call a provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

//! # Contraction Timer
//!
//! Contractions are timed with explicit `start`/`stop` calls. Intervals are
//! measured start to start. The summary applies the 5-1-1 rule by default:
//! contractions about 5 minutes apart, each lasting about 1 minute, for at
//! least 1 hour.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ContractionConfig;
use crate::errors::{AppError, AppResult};

/// One completed contraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contraction {
    /// Start time
    pub started_at: DateTime<Utc>,
    /// End time
    pub ended_at: DateTime<Utc>,
}

impl Contraction {
    /// How long the contraction lasted
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.ended_at - self.started_at
    }
}

/// Aggregate over the trailing observation window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractionSummary {
    /// Contractions starting inside the window
    pub count: usize,
    /// Mean duration in seconds, if any contraction is in the window
    pub average_duration_seconds: Option<f64>,
    /// Mean start-to-start interval in seconds, if at least two are in the window
    pub average_interval_seconds: Option<f64>,
    /// Whether a contraction is currently being timed
    pub in_progress: bool,
    /// The configured pattern holds across the whole window
    pub call_provider: bool,
}

/// Start/stop contraction timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractionTimer {
    thresholds: ContractionConfig,
    completed: Vec<Contraction>,
    running_since: Option<DateTime<Utc>>,
}

impl Default for ContractionTimer {
    fn default() -> Self {
        Self::new(ContractionConfig::default())
    }
}

impl ContractionTimer {
    /// Create a timer with the given alert thresholds
    #[must_use]
    pub const fn new(thresholds: ContractionConfig) -> Self {
        Self {
            thresholds,
            completed: Vec::new(),
            running_since: None,
        }
    }

    /// Begin timing a contraction
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a contraction is already running or `at`
    /// precedes the end of the previous contraction.
    pub fn start(&mut self, at: DateTime<Utc>) -> AppResult<()> {
        if let Some(since) = self.running_since {
            return Err(AppError::invalid_input(format!(
                "A contraction started at {since} is still being timed"
            )));
        }
        if let Some(last) = self.completed.last() {
            if at < last.ended_at {
                return Err(AppError::invalid_input(format!(
                    "Contraction start {at} overlaps the previous one ending {}",
                    last.ended_at
                )));
            }
        }
        self.running_since = Some(at);
        Ok(())
    }

    /// Finish timing the running contraction
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if nothing is running or `at` precedes its start.
    pub fn stop(&mut self, at: DateTime<Utc>) -> AppResult<Contraction> {
        let started_at = self
            .running_since
            .ok_or_else(|| AppError::invalid_input("No contraction is being timed"))?;
        if at < started_at {
            return Err(AppError::invalid_input(format!(
                "Contraction end {at} precedes its start {started_at}"
            )));
        }
        let contraction = Contraction {
            started_at,
            ended_at: at,
        };
        self.running_since = None;
        self.completed.push(contraction);
        debug!(
            duration_seconds = contraction.duration().num_seconds(),
            total = self.completed.len(),
            "Contraction recorded"
        );
        Ok(contraction)
    }

    /// Record a contraction whose start and end are already known
    ///
    /// # Errors
    ///
    /// Same as [`Self::start`] followed by [`Self::stop`]. On error the timer
    /// is left unchanged.
    pub fn record(&mut self, contraction: Contraction) -> AppResult<Contraction> {
        if contraction.ended_at < contraction.started_at {
            return Err(AppError::invalid_input(format!(
                "Contraction end {} precedes its start {}",
                contraction.ended_at, contraction.started_at
            )));
        }
        self.start(contraction.started_at)?;
        self.stop(contraction.ended_at)
    }

    /// Completed contractions, oldest first
    #[must_use]
    pub fn contractions(&self) -> &[Contraction] {
        &self.completed
    }

    /// Start-to-start interval between contraction `index` and the one before it
    #[must_use]
    pub fn interval_before(&self, index: usize) -> Option<Duration> {
        let previous = self.completed.get(index.checked_sub(1)?)?;
        let current = self.completed.get(index)?;
        Some(current.started_at - previous.started_at)
    }

    /// Whether a contraction is currently running
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Summarize contractions in the window ending at `now`
    #[must_use]
    pub fn summary(&self, now: DateTime<Utc>) -> ContractionSummary {
        let window_start = now
            .checked_sub_signed(self.thresholds.window())
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let recent: Vec<&Contraction> = self
            .completed
            .iter()
            .filter(|c| c.started_at >= window_start && c.started_at <= now)
            .collect();

        let average_duration = mean(recent.iter().map(|c| c.duration()));
        let average_interval = mean(
            recent
                .windows(2)
                .map(|pair| pair[1].started_at - pair[0].started_at),
        );

        // The pattern must span the window: the earliest contraction counted
        // sits at its start, give or take one interval.
        let covers_window = recent.first().is_some_and(|first| {
            first.started_at - window_start <= self.thresholds.max_interval()
        });
        let call_provider = covers_window
            && average_interval.is_some_and(|interval| interval <= self.thresholds.max_interval())
            && average_duration.is_some_and(|duration| duration >= self.thresholds.min_duration());

        if call_provider {
            info!(
                count = recent.len(),
                "Contraction pattern meets the call-your-provider threshold"
            );
        }

        ContractionSummary {
            count: recent.len(),
            average_duration_seconds: average_duration.map(seconds),
            average_interval_seconds: average_interval.map(seconds),
            in_progress: self.is_running(),
            call_provider,
        }
    }
}

fn mean(durations: impl Iterator<Item = Duration>) -> Option<Duration> {
    let (total, count) = durations.fold((Duration::zero(), 0_i32), |(total, count), d| {
        (total.checked_add(&d).unwrap_or(Duration::MAX), count + 1)
    });
    (count > 0).then(|| total / count)
}

fn seconds(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / 1000.0
}
