// ABOUTME: Points and levels ledger for wellness activity gamification
// ABOUTME: Awards fixed points per action, keeps an audit history, and derives the current level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

//! # Rewards Ledger
//!
//! Points only ever increase. The level is derived, never stored:
//! `level = points / points_per_level + 1`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::RewardsConfig;
use crate::constants::rewards::STARTING_LEVEL;
use crate::errors::{AppError, AppResult};

/// Activity that earns points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardAction {
    /// Opened the app and logged how the day is going
    DailyCheckIn,
    /// Finished a daily exercise plan
    WorkoutCompleted,
    /// Finished a kick counting session
    KickSessionCompleted,
    /// Posted in the community forum
    CommunityPost,
    /// Tended the virtual garden
    GardenWatered,
    /// Booked a marketplace service
    MarketplaceBooking,
}

impl RewardAction {
    /// Points granted for this action
    #[must_use]
    pub const fn points(&self) -> u64 {
        match self {
            Self::DailyCheckIn => 10,
            Self::WorkoutCompleted => 15,
            Self::KickSessionCompleted => 20,
            Self::CommunityPost | Self::GardenWatered => 5,
            Self::MarketplaceBooking => 25,
        }
    }

    /// Snake-case name used in history entries
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DailyCheckIn => "daily_check_in",
            Self::WorkoutCompleted => "workout_completed",
            Self::KickSessionCompleted => "kick_session_completed",
            Self::CommunityPost => "community_post",
            Self::GardenWatered => "garden_watered",
            Self::MarketplaceBooking => "marketplace_booking",
        }
    }
}

/// One awarded amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Why the points were awarded
    pub reason: String,
    /// Points added
    pub points: u64,
    /// When the points were earned
    pub awarded_at: DateTime<Utc>,
}

/// Result of a single award
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardOutcome {
    /// Points added by this award
    pub points_awarded: u64,
    /// Running total after the award
    pub total_points: u64,
    /// Level before the award
    pub previous_level: u64,
    /// Level after the award
    pub level: u64,
    /// Whether the award crossed a level boundary
    pub leveled_up: bool,
}

/// Snapshot of a ledger for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Total points
    pub total_points: u64,
    /// Current level
    pub level: u64,
    /// Points still needed for the next level
    pub points_to_next_level: u64,
    /// Number of awards recorded
    pub entries: usize,
}

/// Points ledger with derived level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardsLedger {
    points: u64,
    points_per_level: u64,
    history: Vec<RewardEntry>,
}

impl RewardsLedger {
    /// Create an empty ledger
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `points_per_level` is zero.
    pub fn new(points_per_level: u64) -> AppResult<Self> {
        if points_per_level == 0 {
            return Err(AppError::invalid_input(
                "points_per_level must be at least 1",
            ));
        }
        Ok(Self {
            points: 0,
            points_per_level,
            history: Vec::new(),
        })
    }

    /// Create an empty ledger from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configured points per level is zero.
    pub fn from_config(config: &RewardsConfig) -> AppResult<Self> {
        Self::new(config.points_per_level)
    }

    /// Award the fixed points for an action
    pub fn award(&mut self, action: RewardAction, at: DateTime<Utc>) -> AwardOutcome {
        self.credit(action.points(), action.as_str().to_owned(), at)
    }

    /// Award a custom amount
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `points` is zero or `reason` is blank.
    pub fn award_points(
        &mut self,
        points: u64,
        reason: &str,
        at: DateTime<Utc>,
    ) -> AppResult<AwardOutcome> {
        if points == 0 {
            return Err(AppError::invalid_input("Award must be at least 1 point"));
        }
        if reason.trim().is_empty() {
            return Err(AppError::invalid_input("Award reason must not be blank"));
        }
        Ok(self.credit(points, reason.trim().to_owned(), at))
    }

    fn credit(&mut self, points: u64, reason: String, at: DateTime<Utc>) -> AwardOutcome {
        let previous_level = self.level();
        self.points = self.points.saturating_add(points);
        let level = self.level();

        debug!(reason = %reason, points, total = self.points, "Points awarded");
        if level > previous_level {
            info!(previous_level, level, total = self.points, "Rewards level up");
        }

        self.history.push(RewardEntry {
            id: Uuid::new_v4(),
            reason,
            points,
            awarded_at: at,
        });

        AwardOutcome {
            points_awarded: points,
            total_points: self.points,
            previous_level,
            level,
            leveled_up: level > previous_level,
        }
    }

    /// Total points
    #[must_use]
    pub const fn points(&self) -> u64 {
        self.points
    }

    /// Current level, starting at 1. Saturates at `u64::MAX`.
    #[must_use]
    pub const fn level(&self) -> u64 {
        (self.points / self.points_per_level).saturating_add(STARTING_LEVEL)
    }

    /// Points still needed to reach the next level; zero once points are pinned
    /// at `u64::MAX`
    #[must_use]
    pub const fn points_to_next_level(&self) -> u64 {
        if self.points == u64::MAX {
            return 0;
        }
        self.points_per_level - self.points % self.points_per_level
    }

    /// Awards in the order they were recorded
    #[must_use]
    pub fn history(&self) -> &[RewardEntry] {
        &self.history
    }

    /// Display snapshot
    #[must_use]
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            total_points: self.points,
            level: self.level(),
            points_to_next_level: self.points_to_next_level(),
            entries: self.history.len(),
        }
    }
}
