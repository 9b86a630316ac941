// ABOUTME: `kicks` command: replays a kick counting log and reports session status
// ABOUTME: Input is {started_at, kicks[], now?, target?, window_minutes?}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

use bloomwell::config::KickCounterConfig;
use bloomwell::errors::{AppError, AppResult};
use bloomwell::kick_counter::{KickSession, KickStatus};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct KickLog {
    started_at: DateTime<Utc>,
    #[serde(default)]
    kicks: Vec<DateTime<Utc>>,
    now: Option<DateTime<Utc>>,
    target: Option<u32>,
    window_minutes: Option<i64>,
}

/// Replay the log; log values override configured defaults
pub fn run(input: &str, config: &KickCounterConfig, now: DateTime<Utc>) -> AppResult<KickStatus> {
    let log: KickLog = serde_json::from_str(input)
        .map_err(|e| AppError::invalid_format(format!("Invalid kick log: {e}")))?;

    let target = log.target.unwrap_or(config.target_kicks);
    let window = match log.window_minutes {
        Some(minutes) => Duration::try_minutes(minutes).ok_or_else(|| {
            AppError::invalid_input(format!("Kick window of {minutes} minutes is out of range"))
        })?,
        None => config.window(),
    };

    let mut session = KickSession::start(log.started_at, target, window)?;
    for kick in log.kicks {
        session.record_kick(kick)?;
    }
    Ok(session.status(log.now.unwrap_or(now)))
}
