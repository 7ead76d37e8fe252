use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::user_data::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// How soon someone matching a condition should see a clinician.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MedicalAttention {
    #[serde(rename = "immediately")]
    Immediately,
    #[serde(rename = "within_24_hours")]
    Within24Hours,
    #[serde(rename = "within_week")]
    WithinWeek,
    #[serde(rename = "self_care")]
    SelfCare,
}

/// Inclusive age bounds, in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeRange {
    pub min: f64,
    pub max: f64,
}

impl AgeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: f64) -> bool {
        age >= self.min && age <= self.max
    }

    /// Distance from `age` to the nearer bound; zero inside the range.
    pub fn distance(&self, age: f64) -> f64 {
        if age < self.min {
            self.min - age
        } else if age > self.max {
            age - self.max
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GenderAffinity {
    Male,
    Female,
    Any,
}

impl GenderAffinity {
    pub fn admits(&self, gender: Gender) -> bool {
        matches!(
            (self, gender),
            (GenderAffinity::Any, _)
                | (GenderAffinity::Male, Gender::Male)
                | (GenderAffinity::Female, Gender::Female)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub age_range: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub gender: Option<GenderAffinity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MedicationEffect {
    /// Taking the medication makes the condition more likely.
    Positive,
    /// Taking the medication makes the condition less likely.
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationConsideration {
    pub name: String,
    pub effect: MedicationEffect,
}

/// A candidate diagnosis in the condition catalog.
///
/// Every `Vec` field is optional in the catalog format; an empty list means
/// the factor is not declared and plays no part in scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub symptoms: Vec<String>,
    pub severity: Severity,
    pub seek_medical_attention: MedicalAttention,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub risk_factors: Option<RiskFactors>,
    /// Expected duration of symptoms, in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub typical_duration: Option<f64>,
    #[serde(default)]
    pub family_history_factors: Vec<String>,
    #[serde(default)]
    pub related_conditions: Vec<String>,
    #[serde(default)]
    pub medication_considerations: Vec<MedicationConsideration>,
    #[serde(default)]
    pub allergy_considerations: Vec<String>,
}

impl Condition {
    /// A condition with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symptoms: &[&str],
        severity: Severity,
        seek_medical_attention: MedicalAttention,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            severity,
            seek_medical_attention,
            risk_factors: None,
            typical_duration: None,
            family_history_factors: Vec::new(),
            related_conditions: Vec::new(),
            medication_considerations: Vec::new(),
            allergy_considerations: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_age_range(mut self, min: f64, max: f64) -> Self {
        self.risk_factors.get_or_insert_with(RiskFactors::default).age_range =
            Some(AgeRange::new(min, max));
        self
    }

    pub fn with_gender(mut self, gender: GenderAffinity) -> Self {
        self.risk_factors.get_or_insert_with(RiskFactors::default).gender = Some(gender);
        self
    }

    pub fn with_typical_duration(mut self, days: f64) -> Self {
        self.typical_duration = Some(days);
        self
    }

    pub fn with_family_history(mut self, factors: &[&str]) -> Self {
        self.family_history_factors = factors.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_related_conditions(mut self, conditions: &[&str]) -> Self {
        self.related_conditions = conditions.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_medication(mut self, name: impl Into<String>, effect: MedicationEffect) -> Self {
        self.medication_considerations.push(MedicationConsideration {
            name: name.into(),
            effect,
        });
        self
    }

    pub fn with_allergies(mut self, allergies: &[&str]) -> Self {
        self.allergy_considerations = allergies.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn age_range(&self) -> Option<AgeRange> {
        self.risk_factors.as_ref().and_then(|r| r.age_range)
    }

    pub fn gender_affinity(&self) -> Option<GenderAffinity> {
        self.risk_factors.as_ref().and_then(|r| r.gender)
    }
}
