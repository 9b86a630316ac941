// ABOUTME: Integration tests for the pregnancy-aware fitness rule engine
// ABOUTME: Covers rule ordering, trimester classification, condition flags, symptoms, and purity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bloomwell::errors::ErrorCode;
use bloomwell::intelligence::fitness_rules::{
    baseline, build_plan, by_condition, by_symptom, by_trimester, daily_plan, CONTRAINDICATIONS,
};
use bloomwell::intelligence::CaregivingProfileExt;
use bloomwell::models::{CaregivingProfile, Condition, MedicalConditions, Trimester};
use proptest::prelude::*;
use serde_json::json;

const TRIMESTER_STRINGS: [&str; 4] = [
    by_trimester::FIRST_RECOMMENDATION,
    by_trimester::SECOND_WARNING,
    by_trimester::SECOND_RECOMMENDATION,
    by_trimester::THIRD_RECOMMENDATION,
];

fn profile_from(value: serde_json::Value) -> Option<CaregivingProfile> {
    CaregivingProfile::from_json_value(value).expect("profile should parse")
}

fn all_output(plan: &bloomwell::models::RecommendationResult) -> Vec<&str> {
    plan.warnings
        .iter()
        .chain(&plan.recommendations)
        .map(String::as_str)
        .collect()
}

#[test]
fn test_end_to_end_second_trimester_bp_dizziness() {
    let profile = profile_from(json!({
        "trimester": "2nd trimester",
        "medical": { "bp": true },
        "symptoms": "mild dizziness"
    }));
    let plan = build_plan(profile.as_ref());

    assert_eq!(
        plan.warnings,
        vec![
            by_trimester::SECOND_WARNING,
            by_condition::BP,
            by_symptom::DIZZINESS
        ]
    );
    assert_eq!(
        plan.recommendations,
        vec![
            baseline::WARM_UP,
            baseline::HYDRATION,
            by_trimester::SECOND_RECOMMENDATION
        ]
    );
    assert_eq!(plan.daily_plan[2], daily_plan::SIDE_LYING_HIP_ABDUCTION);
    assert_eq!(plan.daily_plan[4], daily_plan::EASY_WALK);
    assert_eq!(plan.contraindications, CONTRAINDICATIONS);
}

#[test]
fn test_absent_and_empty_profiles_yield_baseline_only() {
    let expected_plan = [
        daily_plan::WARM_UP,
        daily_plan::BREATHING,
        daily_plan::WALL_PELVIC_TILT,
        daily_plan::CAT_COW,
        daily_plan::EASY_WALK,
        daily_plan::COOL_DOWN,
    ];

    for plan in [
        build_plan(None),
        build_plan(Some(&CaregivingProfile::new())),
        build_plan(profile_from(json!({})).as_ref()),
        build_plan(profile_from(json!(null)).as_ref()),
    ] {
        assert!(plan.warnings.is_empty());
        assert!(!plan.has_warnings());
        assert_eq!(plan.recommendations, vec![baseline::WARM_UP, baseline::HYDRATION]);
        assert_eq!(plan.daily_plan, expected_plan);
        assert_eq!(plan.contraindications.len(), 5);
    }
}

#[test]
fn test_trimester_labels_select_exclusive_guidance() {
    let cases = [
        ("1st", vec![by_trimester::FIRST_RECOMMENDATION]),
        (
            "2nd",
            vec![by_trimester::SECOND_WARNING, by_trimester::SECOND_RECOMMENDATION],
        ),
        (
            "second",
            vec![by_trimester::SECOND_WARNING, by_trimester::SECOND_RECOMMENDATION],
        ),
        ("3rd", vec![by_trimester::THIRD_RECOMMENDATION]),
        ("", vec![]),
        ("twenty weeks", vec![]),
        ("unknown", vec![]),
    ];

    for (label, expected) in cases {
        let plan = build_plan(profile_from(json!({ "trimester": label })).as_ref());
        let output = all_output(&plan);
        for text in TRIMESTER_STRINGS {
            assert_eq!(
                output.contains(&text),
                expected.contains(&text),
                "label {label:?} and {text:?}"
            );
        }
    }
}

#[test]
fn test_trimester_classification() {
    assert_eq!(Trimester::from_label("1"), Some(Trimester::First));
    assert_eq!(Trimester::from_label("2nd trimester"), Some(Trimester::Second));
    assert_eq!(Trimester::from_label("Second"), Some(Trimester::Second));
    assert_eq!(Trimester::from_label("THIRD"), Some(Trimester::Third));
    assert_eq!(Trimester::from_label("3rd"), Some(Trimester::Third));
    assert_eq!(Trimester::from_label(" 2nd"), None);
    assert_eq!(Trimester::from_label("4th"), None);
    assert_eq!(Trimester::from_label(""), None);
    assert_eq!(Trimester::from_label("twenty weeks"), None);
    assert_eq!(Trimester::from_label("secondary care"), Some(Trimester::Second));
    assert_eq!(Trimester::from_label("thirdly"), Some(Trimester::Third));

    let numeric = profile_from(json!({ "trimester": 3 })).unwrap();
    assert_eq!(numeric.trimester, Some(Trimester::Third));

    let boolean = profile_from(json!({ "trimester": true })).unwrap();
    assert_eq!(boolean.trimester, None);
}

#[test]
fn test_trimester_serializes_to_reparseable_label() {
    for trimester in [Trimester::First, Trimester::Second, Trimester::Third] {
        assert_eq!(Trimester::from_label(trimester.as_str()), Some(trimester));
        assert_eq!(trimester.to_string(), trimester.as_str());
    }

    let profile = CaregivingProfile::new().with_trimester(Trimester::Second);
    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["trimester"], "second");
    assert_eq!(profile_from(value).unwrap(), profile);
}

#[test]
fn test_condition_additivity() {
    let profile = profile_from(json!({
        "medicalConditions": { "diabetes": true, "anemia": true }
    }));
    let plan = build_plan(profile.as_ref());
    let output = all_output(&plan);

    assert!(plan.recommendations.iter().any(|r| r == by_condition::DIABETES));
    assert!(plan.warnings.iter().any(|w| w == by_condition::ANEMIA));
    for absent in [by_condition::BP, by_condition::EPILEPSY, by_condition::ASTHMA] {
        assert!(!output.contains(&absent));
    }
}

#[test]
fn test_all_conditions_appear_exactly_once_in_order() {
    let profile = Condition::ALL
        .into_iter()
        .fold(CaregivingProfile::new(), CaregivingProfile::with_condition);
    let plan = profile.build_plan();
    let output = all_output(&plan);

    for text in [
        by_condition::DIABETES,
        by_condition::ANEMIA,
        by_condition::BP,
        by_condition::EPILEPSY,
        by_condition::ASTHMA,
    ] {
        assert_eq!(output.iter().filter(|s| **s == text).count(), 1, "{text}");
    }
    assert_eq!(
        plan.warnings,
        vec![
            by_condition::ANEMIA,
            by_condition::BP,
            by_condition::EPILEPSY,
            by_condition::ASTHMA
        ]
    );
    assert_eq!(plan.recommendations.last().unwrap(), by_condition::DIABETES);
    assert_eq!(plan.daily_plan[4], daily_plan::POST_MEAL_WALK);
}

#[test]
fn test_condition_flags_accept_hypertension_alias_and_ignore_unknown_keys() {
    let profile = profile_from(json!({
        "medical_conditions": { "hypertension": true, "migraine": true },
        "favouriteColour": "green"
    }))
    .unwrap();

    assert!(profile.medical_conditions.has(Condition::Bp));
    assert_eq!(profile.medical_conditions.active(), vec![Condition::Bp]);
}

#[test]
fn test_null_medical_conditions_default_to_none() {
    let profile = profile_from(json!({ "medicalConditions": null })).unwrap();
    assert_eq!(profile.medical_conditions, MedicalConditions::default());
}

#[test]
fn test_symptom_matching_is_case_insensitive() {
    let dizzy = build_plan(Some(&CaregivingProfile::new().with_symptoms("Feeling DIZZY today")));
    assert_eq!(dizzy.warnings, vec![by_symptom::DIZZINESS]);

    let bleeding = build_plan(Some(
        &CaregivingProfile::new().with_symptoms("Some Bleeding and dizziness"),
    ));
    assert_eq!(
        bleeding.warnings,
        vec![by_symptom::DIZZINESS, by_symptom::BLEEDING]
    );

    let fine = build_plan(Some(&CaregivingProfile::new().with_symptoms("no issues")));
    assert!(fine.warnings.is_empty());
}

#[test]
fn test_symptoms_accept_camel_case_field() {
    let profile = profile_from(json!({ "symptomsText": "bleeding" })).unwrap();
    assert_eq!(profile.symptoms(), "bleeding");
    assert_eq!(profile.build_plan().warnings, vec![by_symptom::BLEEDING]);
}

#[test]
fn test_non_object_profiles_are_rejected() {
    for value in [json!(42), json!("2nd"), json!([1, 2]), json!(true)] {
        let err = CaregivingProfile::from_json_value(value).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    let err = CaregivingProfile::from_json_str("{ not json").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);

    assert_eq!(CaregivingProfile::from_json_str("  \n").unwrap(), None);
    assert_eq!(CaregivingProfile::from_json_str("null").unwrap(), None);
}

#[test]
fn test_wrong_typed_fields_are_invalid_input() {
    for raw in [
        r#"{"medical":{"diabetes":"yes"}}"#,
        r#"{"symptoms":42}"#,
        r#"{"medical":"x"}"#,
    ] {
        let err = CaregivingProfile::from_json_str(raw).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "{raw}");
    }
}

#[test]
fn test_preview_limits_each_list() {
    let profile = Condition::ALL
        .into_iter()
        .fold(
            CaregivingProfile::new().with_trimester(Trimester::Second),
            CaregivingProfile::with_condition,
        );
    let preview = profile.build_plan().preview(4);

    assert_eq!(preview.warnings.len(), 4);
    assert_eq!(preview.recommendations.len(), 4);
    assert_eq!(preview.contraindications, CONTRAINDICATIONS[..4]);
    assert_eq!(preview.daily_plan.len(), 4);
}

fn arb_profile() -> impl Strategy<Value = CaregivingProfile> {
    (
        prop::option::of(prop_oneof![
            Just(Trimester::First),
            Just(Trimester::Second),
            Just(Trimester::Third)
        ]),
        prop::array::uniform5(any::<bool>()),
        prop::option::of(".{0,40}"),
    )
        .prop_map(|(trimester, flags, symptoms)| {
            let mut profile = CaregivingProfile {
                trimester,
                symptoms_text: symptoms,
                ..CaregivingProfile::default()
            };
            for (condition, flag) in Condition::ALL.into_iter().zip(flags) {
                profile.medical_conditions.set(condition, flag);
            }
            profile
        })
}

proptest! {
    #[test]
    fn prop_contraindications_and_baseline_are_invariant(profile in arb_profile()) {
        let plan = build_plan(Some(&profile));
        prop_assert_eq!(&plan.contraindications, &CONTRAINDICATIONS);
        prop_assert_eq!(&plan.recommendations[0], baseline::WARM_UP);
        prop_assert_eq!(&plan.recommendations[1], baseline::HYDRATION);
    }

    #[test]
    fn prop_daily_plan_slots_follow_flags(profile in arb_profile()) {
        let plan = build_plan(Some(&profile));
        let expected_mobility = if profile.trimester == Some(Trimester::Second) {
            daily_plan::SIDE_LYING_HIP_ABDUCTION
        } else {
            daily_plan::WALL_PELVIC_TILT
        };
        let expected_walk = if profile.medical_conditions.diabetes {
            daily_plan::POST_MEAL_WALK
        } else {
            daily_plan::EASY_WALK
        };
        prop_assert_eq!(plan.daily_plan.len(), 6);
        prop_assert_eq!(&plan.daily_plan[2], expected_mobility);
        prop_assert_eq!(&plan.daily_plan[4], expected_walk);
    }

    #[test]
    fn prop_build_plan_is_pure(profile in arb_profile()) {
        let snapshot = profile.clone();
        let first = build_plan(Some(&profile));
        let second = build_plan(Some(&profile));
        prop_assert_eq!(first, second);
        prop_assert_eq!(profile, snapshot);
    }

    #[test]
    fn prop_arbitrary_extra_keys_never_fail(key in "[a-z]{1,12}", value in any::<i64>()) {
        prop_assume!(!["trimester", "medical", "symptoms"].contains(&key.as_str()));
        let profile = CaregivingProfile::from_json_value(json!({ key: value }));
        prop_assert!(profile.is_ok());
        let plan = build_plan(profile.unwrap().as_ref());
        prop_assert_eq!(plan.recommendations.len(), 2);
    }
}
