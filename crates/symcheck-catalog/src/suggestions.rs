use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use symcheck_core::models::condition::Condition;
use ts_rs::TS;

/// Pick-list values for the free-text history fields of the assessment
/// form, taken from what the condition catalog can actually match on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Suggestions {
    pub family_history: Vec<String>,
    pub past_medical_conditions: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

impl Suggestions {
    /// Distinct values, sorted alphabetically.
    pub fn from_conditions(conditions: &[Condition]) -> Self {
        let mut family_history = BTreeSet::new();
        let mut past = BTreeSet::new();
        let mut medications = BTreeSet::new();
        let mut allergies = BTreeSet::new();

        for condition in conditions {
            family_history.extend(condition.family_history_factors.iter().cloned());
            past.extend(condition.related_conditions.iter().cloned());
            medications.extend(
                condition
                    .medication_considerations
                    .iter()
                    .map(|m| m.name.clone()),
            );
            allergies.extend(condition.allergy_considerations.iter().cloned());
        }

        Self {
            family_history: family_history.into_iter().collect(),
            past_medical_conditions: past.into_iter().collect(),
            medications: medications.into_iter().collect(),
            allergies: allergies.into_iter().collect(),
        }
    }
}
