// ABOUTME: Guidance engines that turn profile data into personalized advice
// ABOUTME: Hosts the pregnancy-aware fitness rule engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

/// Pregnancy-aware exercise recommendations
pub mod fitness_rules;

pub use fitness_rules::{build_plan, CaregivingProfileExt};
