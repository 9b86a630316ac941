// ABOUTME: `plan` command: builds exercise guidance from a caregiving profile
// ABOUTME: Accepts a profile JSON object (or null) and optionally trims lists for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

use bloomwell::errors::AppResult;
use bloomwell::intelligence::build_plan;
use bloomwell::models::CaregivingProfile;
use serde_json::Value;
use tracing::info;

/// Build a plan from profile JSON; `limit` keeps the first N items of each list
pub fn run(input: &str, limit: Option<usize>) -> AppResult<Value> {
    let profile = CaregivingProfile::from_json_str(input)?;
    let plan = build_plan(profile.as_ref());

    info!(
        trimester = profile
            .as_ref()
            .and_then(|p| p.trimester)
            .map_or("unknown", |t| t.as_str()),
        conditions = profile
            .as_ref()
            .map_or(0, |p| p.medical_conditions.active().len()),
        warnings = plan.warnings.len(),
        recommendations = plan.recommendations.len(),
        "Built fitness plan"
    );

    let value = match limit {
        Some(limit) => serde_json::to_value(plan.preview(limit))?,
        None => serde_json::to_value(&plan)?,
    };
    Ok(value)
}
