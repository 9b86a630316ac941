// ABOUTME: `contractions` command: replays timed contractions and evaluates the labor alert
// ABOUTME: Input is {contractions: [{started_at, ended_at}], now?}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

use bloomwell::config::ContractionConfig;
use bloomwell::contractions::{Contraction, ContractionSummary, ContractionTimer};
use bloomwell::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ContractionLog {
    #[serde(default)]
    contractions: Vec<Contraction>,
    now: Option<DateTime<Utc>>,
}

/// Replay the log and summarize at `now` (or the log's own `now`)
pub fn run(
    input: &str,
    config: ContractionConfig,
    now: DateTime<Utc>,
) -> AppResult<ContractionSummary> {
    let log: ContractionLog = serde_json::from_str(input)
        .map_err(|e| AppError::invalid_format(format!("Invalid contraction log: {e}")))?;

    let mut timer = ContractionTimer::new(config);
    for contraction in log.contractions {
        timer.record(contraction)?;
    }
    Ok(timer.summary(log.now.unwrap_or(now)))
}
