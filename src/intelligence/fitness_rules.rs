// ABOUTME: Pregnancy-aware fitness rule engine mapping a caregiving profile to exercise guidance
// ABOUTME: Ordered, additive decision table producing recommendations, warnings, and a daily plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

//! # Fitness Rule Engine
//!
//! [`build_plan`] evaluates a fixed sequence of independent rules against a
//! [`CaregivingProfile`] and concatenates their effects:
//!
//! 1. baseline recommendations (always)
//! 2. trimester-specific guidance
//! 3. condition-specific guidance
//! 4. symptom-triggered cautions
//! 5. the six-step daily plan
//! 6. the fixed contraindication list
//!
//! No rule suppresses another. The function is pure: it reads only its
//! argument and allocates fresh output, so it can be called from any thread
//! and memoized freely.
//!
//! ```rust
//! use bloomwell::intelligence::fitness_rules::build_plan;
//! use bloomwell_core::models::{CaregivingProfile, Condition, Trimester};
//!
//! let profile = CaregivingProfile::new()
//!     .with_trimester(Trimester::Second)
//!     .with_condition(Condition::Bp)
//!     .with_symptoms("mild dizziness");
//! let plan = build_plan(Some(&profile));
//! assert_eq!(plan.warnings.len(), 3);
//! ```

use bloomwell_core::models::{
    CaregivingProfile, Condition, MedicalConditions, RecommendationResult, Trimester,
    CONTRAINDICATION_COUNT, DAILY_PLAN_STEPS,
};

/// Baseline recommendations emitted for every profile
pub mod baseline {
    /// Warm-up guidance
    pub const WARM_UP: &str =
        "Warm up for 5-10 minutes and keep effort at a level where you can still hold a conversation.";
    /// Hydration and overheating guidance
    pub const HYDRATION: &str =
        "Stay well hydrated and avoid exercising in hot, humid conditions to prevent overheating.";
}

/// Trimester-driven recommendations and warnings
pub mod by_trimester {
    /// First trimester recommendation
    pub const FIRST_RECOMMENDATION: &str =
        "Light walking, gentle mobility work and prenatal yoga are good choices in the first trimester.";
    /// Second trimester warning
    pub const SECOND_WARNING: &str =
        "Avoid lying flat on your back for long periods after week 20; use an incline or side-lying positions instead.";
    /// Second trimester recommendation
    pub const SECOND_RECOMMENDATION: &str =
        "Keep walking daily and add mobility drills such as hip circles, side-lying leg lifts and pelvic tilts.";
    /// Third trimester recommendation
    pub const THIRD_RECOMMENDATION: &str =
        "Prefer short activity bouts with breathing practice and pelvic-floor relaxation in the third trimester.";
}

/// Condition-driven guidance
pub mod by_condition {
    /// Diabetes recommendation
    pub const DIABETES: &str =
        "Take a light 10-15 minute walk after meals to help manage blood sugar.";
    /// Anemia warning
    pub const ANEMIA: &str =
        "Anemia reported: keep exercise low intensity and stop if you feel unusually tired or breathless.";
    /// Hypertension warning
    pub const BP: &str =
        "High blood pressure reported: avoid holding your breath while straining and avoid lying flat on your back.";
    /// Epilepsy warning
    pub const EPILEPSY: &str =
        "Epilepsy reported: avoid overheating and flashing lights, and exercise with someone nearby.";
    /// Asthma warning
    pub const ASTHMA: &str =
        "Asthma reported: keep your inhaler with you and avoid known triggers such as cold air or pollen.";
}

/// Symptom-triggered warnings
pub mod by_symptom {
    /// Substring that triggers the dizziness warning
    pub const DIZZINESS_TRIGGER: &str = "dizz";
    /// Substring that triggers the bleeding warning
    pub const BLEEDING_TRIGGER: &str = "bleed";
    /// Dizziness warning
    pub const DIZZINESS: &str =
        "You reported dizziness recently: exercise seated or near support and stop at the first sign of light-headedness.";
    /// Bleeding warning
    pub const BLEEDING: &str =
        "You reported bleeding: stop exercising and contact your doctor or midwife before resuming.";
}

/// Daily plan step texts
pub mod daily_plan {
    /// Slot 1
    pub const WARM_UP: &str = "Warm-up: 5 minutes of marching in place with arm swings.";
    /// Slot 2
    pub const BREATHING: &str =
        "Breathing: 2 minutes of slow diaphragmatic breathing, exhaling longer than you inhale.";
    /// Slot 3 when in the second trimester
    pub const SIDE_LYING_HIP_ABDUCTION: &str =
        "Side-lying hip abduction: 2 sets of 10 lifts per side, head supported on a pillow.";
    /// Slot 3 otherwise
    pub const WALL_PELVIC_TILT: &str =
        "Wall pelvic tilts: 2 sets of 10, standing with your back against a wall.";
    /// Slot 4
    pub const CAT_COW: &str = "Cat-cow: 8 slow rounds, then rest 1 minute in child's pose.";
    /// Slot 5 when diabetes is flagged
    pub const POST_MEAL_WALK: &str = "Post-meal walk: 10-15 minutes at an easy pace after your main meal.";
    /// Slot 5 otherwise
    pub const EASY_WALK: &str = "Easy walk for 10-20 minutes, or seated marching if walking is uncomfortable.";
    /// Slot 6
    pub const COOL_DOWN: &str = "Cool-down: gentle stretches for 5 minutes, then drink a glass of water.";
}

/// Danger signs meaning exercise should stop entirely, in display order
pub const CONTRAINDICATIONS: [&str; CONTRAINDICATION_COUNT] = [
    "Vaginal bleeding or leakage of fluid",
    "Severe headache or changes in vision",
    "Chest pain or shortness of breath at rest",
    "Painful regular contractions or reduced fetal movement",
    "Dizziness or fainting during activity",
];

/// Build personalized exercise guidance for a profile.
///
/// `None` and sparse profiles are valid and produce the baseline-only
/// result. The caller's profile is never modified.
#[must_use]
pub fn build_plan(profile: Option<&CaregivingProfile>) -> RecommendationResult {
    let empty = CaregivingProfile::default();
    let profile = profile.unwrap_or(&empty);
    let trimester = profile.trimester;
    let conditions = &profile.medical_conditions;

    let mut recommendations = vec![baseline::WARM_UP.to_owned(), baseline::HYDRATION.to_owned()];
    let mut warnings = Vec::new();

    apply_trimester_rules(trimester, &mut recommendations, &mut warnings);
    apply_condition_rules(conditions, &mut recommendations, &mut warnings);
    apply_symptom_rules(profile.symptoms(), &mut warnings);

    RecommendationResult {
        warnings,
        recommendations,
        contraindications: CONTRAINDICATIONS.iter().map(|&s| s.to_owned()).collect(),
        daily_plan: daily_steps(trimester, conditions).map(str::to_owned),
    }
}

/// Method-call form of [`build_plan`]
pub trait CaregivingProfileExt {
    /// Build personalized exercise guidance for this profile
    fn build_plan(&self) -> RecommendationResult;
}

impl CaregivingProfileExt for CaregivingProfile {
    fn build_plan(&self) -> RecommendationResult {
        build_plan(Some(self))
    }
}

fn apply_trimester_rules(
    trimester: Option<Trimester>,
    recommendations: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    match trimester {
        Some(Trimester::First) => recommendations.push(by_trimester::FIRST_RECOMMENDATION.to_owned()),
        Some(Trimester::Second) => {
            warnings.push(by_trimester::SECOND_WARNING.to_owned());
            recommendations.push(by_trimester::SECOND_RECOMMENDATION.to_owned());
        }
        Some(Trimester::Third) => recommendations.push(by_trimester::THIRD_RECOMMENDATION.to_owned()),
        None => {}
    }
}

fn apply_condition_rules(
    conditions: &MedicalConditions,
    recommendations: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    for condition in conditions.active() {
        match condition {
            Condition::Diabetes => recommendations.push(by_condition::DIABETES.to_owned()),
            Condition::Anemia => warnings.push(by_condition::ANEMIA.to_owned()),
            Condition::Bp => warnings.push(by_condition::BP.to_owned()),
            Condition::Epilepsy => warnings.push(by_condition::EPILEPSY.to_owned()),
            Condition::Asthma => warnings.push(by_condition::ASTHMA.to_owned()),
        }
    }
}

fn apply_symptom_rules(symptoms_text: &str, warnings: &mut Vec<String>) {
    let normalized = symptoms_text.to_lowercase();
    if normalized.contains(by_symptom::DIZZINESS_TRIGGER) {
        warnings.push(by_symptom::DIZZINESS.to_owned());
    }
    if normalized.contains(by_symptom::BLEEDING_TRIGGER) {
        warnings.push(by_symptom::BLEEDING.to_owned());
    }
}

const fn daily_steps(
    trimester: Option<Trimester>,
    conditions: &MedicalConditions,
) -> [&'static str; DAILY_PLAN_STEPS] {
    let mobility = if matches!(trimester, Some(Trimester::Second)) {
        daily_plan::SIDE_LYING_HIP_ABDUCTION
    } else {
        daily_plan::WALL_PELVIC_TILT
    };
    let walk = if conditions.diabetes {
        daily_plan::POST_MEAL_WALK
    } else {
        daily_plan::EASY_WALK
    };
    [
        daily_plan::WARM_UP,
        daily_plan::BREATHING,
        mobility,
        daily_plan::CAT_COW,
        walk,
        daily_plan::COOL_DOWN,
    ]
}
