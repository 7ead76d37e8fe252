//! Per-factor score contributions.
//!
//! Each function returns zero when the condition does not declare the
//! factor or the user did not report it; none of them can fail.

use symcheck_core::models::condition::{Condition, MedicationEffect};
use symcheck_core::models::user_data::UserData;

use crate::weights::{
    AGE_DECAY_SPAN, AGE_PARTIAL_BAND, FAMILY_HISTORY_BOOST, OTHER_FACTOR_SHARE,
    PAST_CONDITION_BOOST, W_AGE, W_ALLERGY, W_DURATION, W_FAMILY, W_GENDER, W_MEDICATION, W_PAST,
    W_SYMPTOM,
};

pub(crate) fn age(condition: &Condition, user: &UserData) -> f64 {
    let (Some(range), Some(age)) = (condition.age_range(), user.parsed_age()) else {
        return 0.0;
    };
    if range.contains(age) {
        return W_AGE;
    }

    // The band gates eligibility; the decay formula alone would still be
    // positive out to AGE_DECAY_SPAN.
    let distance = range.distance(age);
    if distance <= AGE_PARTIAL_BAND {
        W_AGE * (1.0 - distance / AGE_DECAY_SPAN)
    } else {
        0.0
    }
}

pub(crate) fn gender(condition: &Condition, user: &UserData) -> f64 {
    match (condition.gender_affinity(), user.gender) {
        (Some(affinity), Some(gender)) if affinity.admits(gender) => W_GENDER,
        _ => 0.0,
    }
}

pub(crate) fn duration(condition: &Condition, user: &UserData) -> f64 {
    let Some(typical) = condition.typical_duration else {
        return 0.0;
    };
    if user.duration > 0.0 && typical > 0.0 {
        W_DURATION * (user.duration.min(typical) / user.duration.max(typical))
    } else {
        0.0
    }
}

pub(crate) fn family_history(condition: &Condition, user: &UserData) -> f64 {
    share_present(&condition.family_history_factors, &user.family_history)
        .map_or(0.0, |share| W_FAMILY * share * FAMILY_HISTORY_BOOST)
}

pub(crate) fn past_conditions(condition: &Condition, user: &UserData) -> f64 {
    share_present(&condition.related_conditions, &user.past_medical_conditions)
        .map_or(0.0, |share| W_PAST * share * PAST_CONDITION_BOOST)
}

/// Signed sum over every medication consideration the user's list hits.
pub(crate) fn medications(condition: &Condition, user: &UserData) -> f64 {
    condition
        .medication_considerations
        .iter()
        .filter(|consideration| {
            user.medications
                .iter()
                .any(|reported| medication_matches(reported, &consideration.name))
        })
        .map(|consideration| match consideration.effect {
            MedicationEffect::Positive => W_MEDICATION,
            MedicationEffect::Negative => -W_MEDICATION,
        })
        .sum()
}

pub(crate) fn allergies(condition: &Condition, user: &UserData) -> f64 {
    share_present(&condition.allergy_considerations, &user.allergies)
        .map_or(0.0, |share| W_ALLERGY * share)
}

/// Normalization base for the match percentage.
///
/// Only factors the condition declares count. Medications and allergies are
/// not part of it, so they can push the score past this base.
pub(crate) fn max_score(condition: &Condition) -> f64 {
    let symptoms_max = condition.symptoms.len() as f64 * W_SYMPTOM;

    let mut other_max = 0.0;
    if condition.age_range().is_some() {
        other_max += W_AGE;
    }
    if condition.gender_affinity().is_some() {
        other_max += W_GENDER;
    }
    if condition.typical_duration.is_some() {
        other_max += W_DURATION;
    }
    other_max += condition.family_history_factors.len() as f64 * W_FAMILY;
    other_max += condition.related_conditions.len() as f64 * W_PAST;

    symptoms_max + other_max * OTHER_FACTOR_SHARE
}

/// Fraction of `declared` found verbatim in `reported`, or `None` when
/// nothing matches.
fn share_present(declared: &[String], reported: &[String]) -> Option<f64> {
    if declared.is_empty() || reported.is_empty() {
        return None;
    }
    let hits = declared
        .iter()
        .filter(|item| reported.iter().any(|r| r == *item))
        .count();
    (hits > 0).then(|| hits as f64 / declared.len() as f64)
}

/// Case-insensitive substring match in either direction. Blank entries
/// never match.
fn medication_matches(reported: &str, name: &str) -> bool {
    let reported = reported.trim().to_lowercase();
    let name = name.trim().to_lowercase();
    if reported.is_empty() || name.is_empty() {
        return false;
    }
    reported.contains(&name) || name.contains(&reported)
}
