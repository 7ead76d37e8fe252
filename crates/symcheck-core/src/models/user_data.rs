use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
            Gender::Other => f.write_str("other"),
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(CoreError::UnknownVariant {
                kind: "gender",
                value: s.to_string(),
            }),
        }
    }
}

/// Form values arrive loosely typed: an unselected gender is `""` and some
/// clients send the age as a number.
mod lenient {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    use super::Gender;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AgeInput {
        Text(String),
        Number(f64),
    }

    pub(super) fn age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Option::<AgeInput>::deserialize(deserializer)? {
            Some(AgeInput::Text(text)) => text,
            Some(AgeInput::Number(n)) => n.to_string(),
            None => String::new(),
        })
    }

    pub(super) fn gender<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Gender>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => {
                raw.parse().map(Some).map_err(D::Error::custom)
            }
            _ => Ok(None),
        }
    }
}

/// What the user reported about themselves: the matching query.
///
/// `age` is kept as the raw form input; the engine treats anything that does
/// not parse as a number the same as a missing age.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct UserData {
    #[serde(deserialize_with = "lenient::age")]
    pub age: String,
    #[serde(deserialize_with = "lenient::gender")]
    #[ts(optional)]
    pub gender: Option<Gender>,
    pub symptoms: Vec<String>,
    /// How long symptoms have lasted, in days. Zero means not reported.
    pub duration: f64,
    pub family_history: Vec<String>,
    pub past_medical_conditions: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

impl UserData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_symptoms(mut self, symptoms: &[&str]) -> Self {
        self.symptoms = symptoms.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_duration(mut self, days: f64) -> Self {
        self.duration = days;
        self
    }

    pub fn with_family_history(mut self, entries: &[&str]) -> Self {
        self.family_history = entries.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_past_conditions(mut self, entries: &[&str]) -> Self {
        self.past_medical_conditions = entries.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_medications(mut self, entries: &[&str]) -> Self {
        self.medications = entries.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_allergies(mut self, entries: &[&str]) -> Self {
        self.allergies = entries.iter().map(|s| s.to_string()).collect();
        self
    }

    /// The age as a number, or `None` if it is blank or not numeric.
    pub fn parsed_age(&self) -> Option<f64> {
        self.age
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|age| age.is_finite())
    }

    pub fn has_symptom(&self, id: &str) -> bool {
        self.symptoms.iter().any(|s| s == id)
    }

    /// Checks the fields the assessment form requires before matching:
    /// a numeric age, a gender and at least one symptom.
    ///
    /// The engine itself never calls this; it accepts partial input.
    pub fn validate_required(&self) -> Result<(), CoreError> {
        if self.age.trim().is_empty() {
            return Err(CoreError::MissingField("age".to_string()));
        }
        if self.parsed_age().is_none() {
            return Err(CoreError::InvalidAge(self.age.clone()));
        }
        if self.gender.is_none() {
            return Err(CoreError::MissingField("gender".to_string()));
        }
        if self.symptoms.is_empty() {
            return Err(CoreError::NoSymptoms);
        }
        Ok(())
    }
}
