// ABOUTME: Caregiving profile input model consumed by the fitness rule engine
// ABOUTME: Trimester classification, medical condition flags, and free-text symptoms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Pregnancy trimester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trimester {
    /// Weeks 1 through 13
    First,
    /// Weeks 14 through 27
    Second,
    /// Week 28 onwards
    Third,
}

/// Ordinal words accepted as a label prefix in addition to the leading digit
const ORDINAL_PREFIXES: [(&str, Trimester); 3] = [
    ("first", Trimester::First),
    ("second", Trimester::Second),
    ("third", Trimester::Third),
];

impl Trimester {
    /// Classify a free-form trimester label.
    ///
    /// The label is lowercased and matched on its leading character: `"1st"`,
    /// `"2nd trimester"` and `"3"` all classify. Labels spelled out as ordinal
    /// words (`"Second"`) classify as well. Ordinal words match as prefixes,
    /// so `"secondary care"` and `"thirdly"` also classify. Anything else,
    /// including the empty string and `"twenty weeks"`, yields `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.to_lowercase();
        match normalized.chars().next()? {
            '1' => Some(Self::First),
            '2' => Some(Self::Second),
            '3' => Some(Self::Third),
            _ => ORDINAL_PREFIXES
                .iter()
                .find(|(word, _)| normalized.starts_with(word))
                .map(|(_, trimester)| *trimester),
        }
    }

    /// Trimester number (1-3)
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Lowercase name used in serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnosed condition recognized by the rule engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Diabetes, including gestational diabetes
    Diabetes,
    /// Anemia
    Anemia,
    /// Hypertension
    Bp,
    /// Epilepsy
    Epilepsy,
    /// Asthma
    Asthma,
}

impl Condition {
    /// All recognized conditions in rule evaluation order
    pub const ALL: [Self; 5] = [
        Self::Diabetes,
        Self::Anemia,
        Self::Bp,
        Self::Epilepsy,
        Self::Asthma,
    ];
}

/// Named medical condition flags. Absent keys deserialize as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalConditions {
    /// Diabetes / GDM
    pub diabetes: bool,
    /// Anemia
    pub anemia: bool,
    /// Hypertension
    #[serde(alias = "hypertension")]
    pub bp: bool,
    /// Epilepsy
    pub epilepsy: bool,
    /// Asthma
    pub asthma: bool,
}

impl MedicalConditions {
    /// Whether a condition is flagged
    #[must_use]
    pub const fn has(&self, condition: Condition) -> bool {
        match condition {
            Condition::Diabetes => self.diabetes,
            Condition::Anemia => self.anemia,
            Condition::Bp => self.bp,
            Condition::Epilepsy => self.epilepsy,
            Condition::Asthma => self.asthma,
        }
    }

    /// Set or clear a condition flag
    pub fn set(&mut self, condition: Condition, value: bool) {
        let flag = match condition {
            Condition::Diabetes => &mut self.diabetes,
            Condition::Anemia => &mut self.anemia,
            Condition::Bp => &mut self.bp,
            Condition::Epilepsy => &mut self.epilepsy,
            Condition::Asthma => &mut self.asthma,
        };
        *flag = value;
    }

    /// Flagged conditions in evaluation order
    #[must_use]
    pub fn active(&self) -> Vec<Condition> {
        Condition::ALL
            .into_iter()
            .filter(|condition| self.has(*condition))
            .collect()
    }
}

/// Self-reported pregnancy profile snapshot.
///
/// Every field is optional. Field names are accepted in both `snake_case`
/// and the `camelCase` spelling used by web clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaregivingProfile {
    /// Classified trimester; unrecognized labels become `None`
    #[serde(deserialize_with = "deserialize_trimester")]
    pub trimester: Option<Trimester>,
    /// Diagnosed condition flags
    #[serde(
        alias = "medicalConditions",
        alias = "medical",
        deserialize_with = "deserialize_null_default"
    )]
    pub medical_conditions: MedicalConditions,
    /// Free-text description of current symptoms
    #[serde(alias = "symptomsText", alias = "symptoms")]
    pub symptoms_text: Option<String>,
}

impl CaregivingProfile {
    /// Create an empty profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trimester
    #[must_use]
    pub const fn with_trimester(mut self, trimester: Trimester) -> Self {
        self.trimester = Some(trimester);
        self
    }

    /// Set the trimester from a free-form label
    #[must_use]
    pub fn with_trimester_label(mut self, label: &str) -> Self {
        self.trimester = Trimester::from_label(label);
        self
    }

    /// Flag a condition
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.medical_conditions.set(condition, true);
        self
    }

    /// Set the symptom notes
    #[must_use]
    pub fn with_symptoms(mut self, symptoms: impl Into<String>) -> Self {
        self.symptoms_text = Some(symptoms.into());
        self
    }

    /// Symptom notes, empty when absent
    #[must_use]
    pub fn symptoms(&self) -> &str {
        self.symptoms_text.as_deref().unwrap_or_default()
    }

    /// Parse a profile from an already-decoded JSON value.
    ///
    /// `null` means "no profile" and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value is neither `null` nor an object, or
    /// if a recognized field has an unusable type.
    pub fn from_json_value(value: Value) -> AppResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Object(_) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| AppError::invalid_input(format!("Invalid profile field: {e}"))),
            other => Err(AppError::invalid_input(format!(
                "Profile must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse a profile from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed JSON and otherwise the same
    /// errors as [`Self::from_json_value`].
    pub fn from_json_str(input: &str) -> AppResult<Option<Self>> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        let value: Value = serde_json::from_str(input)
            .map_err(|e| AppError::invalid_format(format!("Profile is not valid JSON: {e}")))?;
        Self::from_json_value(value)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Accept any scalar label; numbers are classified by their decimal text.
fn deserialize_trimester<'de, D>(deserializer: D) -> Result<Option<Trimester>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(label)) => Trimester::from_label(&label),
        Some(Value::Number(number)) => Trimester::from_label(&number.to_string()),
        _ => None,
    })
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
