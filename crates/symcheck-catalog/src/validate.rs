use std::collections::HashSet;

use symcheck_core::models::condition::Condition;

use crate::error::CatalogError;
use crate::symptoms::SymptomCatalog;

/// Integrity checks for a single condition record.
pub(crate) fn condition(
    condition: &Condition,
    symptoms: &SymptomCatalog,
) -> Result<(), CatalogError> {
    if condition.symptoms.is_empty() {
        return Err(CatalogError::NoSymptoms(condition.id.clone()));
    }

    if let Some(missing) = condition.symptoms.iter().find(|id| !symptoms.contains(id)) {
        return Err(CatalogError::DanglingSymptom {
            condition_id: condition.id.clone(),
            symptom_id: missing.clone(),
        });
    }

    let mut listed = HashSet::new();
    if let Some(repeated) = condition.symptoms.iter().find(|id| !listed.insert(id.as_str())) {
        return Err(CatalogError::RepeatedSymptom {
            condition_id: condition.id.clone(),
            symptom_id: repeated.clone(),
        });
    }

    if let Some(range) = condition.age_range()
        && (!range.min.is_finite() || !range.max.is_finite() || range.min > range.max)
    {
        return Err(CatalogError::InvalidAgeRange {
            condition_id: condition.id.clone(),
            min: range.min,
            max: range.max,
        });
    }

    if let Some(days) = condition.typical_duration
        && !(days.is_finite() && days > 0.0)
    {
        return Err(CatalogError::InvalidDuration {
            condition_id: condition.id.clone(),
            days,
        });
    }

    Ok(())
}

pub(crate) fn warn_duplicate_conditions(conditions: &[Condition]) {
    let mut seen = HashSet::new();
    for condition in conditions {
        if !seen.insert(condition.id.as_str()) {
            tracing::warn!(
                condition_id = %condition.id,
                "duplicate condition id in catalog, keeping both entries"
            );
        }
    }
}

/// Symptoms no condition refers to. They can be selected but never match.
pub(crate) fn warn_unreferenced_symptoms(symptoms: &SymptomCatalog, conditions: &[Condition]) {
    let referenced: HashSet<&str> = conditions
        .iter()
        .flat_map(|c| c.symptoms.iter().map(String::as_str))
        .collect();
    for symptom in symptoms.iter() {
        if !referenced.contains(symptom.id.as_str()) {
            tracing::warn!(symptom_id = %symptom.id, "symptom is not used by any condition");
        }
    }
}
