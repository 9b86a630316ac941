// ABOUTME: Recommendation result model produced by the fitness rule engine
// ABOUTME: Ordered recommendations, warnings, fixed contraindications, and a six-step daily plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

use serde::{Deserialize, Serialize};

/// Number of steps in every daily micro-plan
pub const DAILY_PLAN_STEPS: usize = 6;

/// Number of canonical contraindications
pub const CONTRAINDICATION_COUNT: usize = 5;

/// Personalized exercise guidance derived from a caregiving profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Flagged cautions: trimester items, then condition items, then symptom items
    pub warnings: Vec<String>,
    /// Guidance: baseline items, then trimester item, then condition items
    pub recommendations: Vec<String>,
    /// Danger signs that mean "stop exercising", identical for every profile
    pub contraindications: Vec<String>,
    /// Ordered exercise steps for today
    pub daily_plan: [String; DAILY_PLAN_STEPS],
}

impl RecommendationResult {
    /// Whether any caution was raised
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Keep only the first `limit` entries of each list for compact display
    #[must_use]
    pub fn preview(&self, limit: usize) -> PlanPreview {
        let take = |items: &[String]| items.iter().take(limit).cloned().collect::<Vec<_>>();
        PlanPreview {
            warnings: take(&self.warnings),
            recommendations: take(&self.recommendations),
            contraindications: take(&self.contraindications),
            daily_plan: take(&self.daily_plan),
        }
    }
}

/// Display-sized slice of a [`RecommendationResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPreview {
    /// Leading warnings
    pub warnings: Vec<String>,
    /// Leading recommendations
    pub recommendations: Vec<String>,
    /// Leading contraindications
    pub contraindications: Vec<String>,
    /// Leading daily plan steps
    pub daily_plan: Vec<String>,
}
