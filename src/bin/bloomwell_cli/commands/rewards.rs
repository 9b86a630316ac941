// ABOUTME: `rewards` command: replays reward events and reports ledger totals
// ABOUTME: Input is an array of {action, at} or {points, reason, at} entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

use bloomwell::config::RewardsConfig;
use bloomwell::errors::{AppError, AppResult};
use bloomwell::rewards::{AwardOutcome, LedgerSummary, RewardAction, RewardsLedger};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RewardEvent {
    Action {
        action: RewardAction,
        at: DateTime<Utc>,
    },
    Custom {
        points: u64,
        reason: String,
        at: DateTime<Utc>,
    },
}

/// Ledger totals plus the outcome of each replayed event
#[derive(Debug, Serialize)]
pub struct RewardsReport {
    /// Ledger totals after every event
    pub summary: LedgerSummary,
    /// Outcome of each event, in log order
    pub awards: Vec<AwardOutcome>,
}

/// Replay the events into a fresh ledger
pub fn run(input: &str, config: &RewardsConfig) -> AppResult<RewardsReport> {
    let events: Vec<RewardEvent> = serde_json::from_str(input)
        .map_err(|e| AppError::invalid_format(format!("Invalid rewards log: {e}")))?;

    let mut ledger = RewardsLedger::from_config(config)?;
    let awards = events
        .into_iter()
        .map(|event| match event {
            RewardEvent::Action { action, at } => Ok(ledger.award(action, at)),
            RewardEvent::Custom { points, reason, at } => ledger.award_points(points, &reason, at),
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(RewardsReport {
        summary: ledger.summary(),
        awards,
    })
}
