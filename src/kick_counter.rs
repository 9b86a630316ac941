// ABOUTME: Fetal movement counting session with elapsed-time threshold alert
// ABOUTME: Records kicks against a target and flags sessions that exceed the counting window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

//! # Kick Counter
//!
//! A session counts movements toward a target (default 10) within a window
//! (default two hours). Timestamps are supplied by the caller, so a session
//! can be replayed from a stored log and tested without a clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::KickCounterConfig;
use crate::errors::{AppError, AppResult};

/// Progress after recording a kick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickProgress {
    /// Kicks recorded so far
    pub count: u32,
    /// Kicks still needed
    pub remaining: u32,
    /// Whether this kick completed the session
    pub target_reached: bool,
}

/// Session state at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickStatus {
    /// Session identifier
    pub session_id: Uuid,
    /// Kicks recorded
    pub count: u32,
    /// Session target
    pub target: u32,
    /// Kicks still needed
    pub remaining: u32,
    /// Seconds from start to `now`, or to the target kick once reached
    pub elapsed_seconds: i64,
    /// Target reached
    pub target_reached: bool,
    /// Window elapsed without reaching the target; contact a provider
    pub alert: bool,
}

/// One fetal movement counting session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KickSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    target: u32,
    window: Duration,
    kicks: Vec<DateTime<Utc>>,
}

impl KickSession {
    /// Start a session
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `target` is zero or `window` is not positive.
    pub fn start(started_at: DateTime<Utc>, target: u32, window: Duration) -> AppResult<Self> {
        if target == 0 {
            return Err(AppError::invalid_input("Kick target must be at least 1"));
        }
        if window <= Duration::zero() {
            return Err(AppError::invalid_input("Kick window must be positive"));
        }
        let session = Self {
            id: Uuid::new_v4(),
            started_at,
            target,
            window,
            kicks: Vec::new(),
        };
        debug!(session_id = %session.id, target, window_minutes = window.num_minutes(), "Kick session started");
        Ok(session)
    }

    /// Start a session using configured target and window
    ///
    /// # Errors
    ///
    /// Same as [`Self::start`].
    pub fn start_with_config(
        started_at: DateTime<Utc>,
        config: &KickCounterConfig,
    ) -> AppResult<Self> {
        Self::start(started_at, config.target_kicks, config.window())
    }

    /// Record one movement
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the session already reached its target, or
    /// when `at` precedes the session start or the previous kick.
    pub fn record_kick(&mut self, at: DateTime<Utc>) -> AppResult<KickProgress> {
        if self.is_complete() {
            return Err(AppError::invalid_input(format!(
                "Session already reached its target of {} kicks",
                self.target
            )));
        }
        let earliest = self.kicks.last().copied().unwrap_or(self.started_at);
        if at < earliest {
            return Err(AppError::invalid_input(format!(
                "Kick at {at} is earlier than {earliest}"
            )));
        }

        self.kicks.push(at);
        let progress = KickProgress {
            count: self.count(),
            remaining: self.remaining(),
            target_reached: self.is_complete(),
        };
        debug!(session_id = %self.id, count = progress.count, "Kick recorded");
        Ok(progress)
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Session start
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Recorded kick timestamps
    #[must_use]
    pub fn kicks(&self) -> &[DateTime<Utc>] {
        &self.kicks
    }

    /// Kicks recorded
    #[must_use]
    pub fn count(&self) -> u32 {
        u32::try_from(self.kicks.len()).unwrap_or(u32::MAX)
    }

    /// Kicks still needed
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.target.saturating_sub(self.count())
    }

    /// Whether the target has been reached
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.count() >= self.target
    }

    /// Time taken to reach the target, if reached
    #[must_use]
    pub fn time_to_target(&self) -> Option<Duration> {
        self.kicks
            .get(self.target as usize - 1)
            .map(|at| *at - self.started_at)
    }

    /// Evaluate the session at `now`.
    ///
    /// Elapsed time stops at the kick that reached the target. `now` before
    /// the session start counts as zero elapsed.
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> KickStatus {
        let elapsed = self
            .time_to_target()
            .unwrap_or_else(|| (now - self.started_at).max(Duration::zero()));
        let target_reached = self.is_complete();
        let alert = !target_reached && elapsed >= self.window;

        if alert {
            warn!(
                session_id = %self.id,
                count = self.count(),
                target = self.target,
                "Kick target not reached within window"
            );
        }

        KickStatus {
            session_id: self.id,
            count: self.count(),
            target: self.target,
            remaining: self.remaining(),
            elapsed_seconds: elapsed.num_seconds(),
            target_reached,
            alert,
        }
    }
}
