// ABOUTME: Shared data models for the Bloomwell workspace
// ABOUTME: Re-exports profile inputs and recommendation outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

mod plan;
mod profile;

pub use plan::{PlanPreview, RecommendationResult, CONTRAINDICATION_COUNT, DAILY_PLAN_STEPS};
pub use profile::{CaregivingProfile, Condition, MedicalConditions, Trimester};
