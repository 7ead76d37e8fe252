use symcheck_core::SymptomLookup;
use symcheck_core::models::condition::Condition;
use symcheck_core::models::matched::MatchedCondition;
use symcheck_core::models::user_data::UserData;

use crate::factors;
use crate::weights::{MAX_RESULTS, MIN_MATCH_PERCENTAGE, W_SYMPTOM};

/// Filtering and truncation applied to a match run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Matches must score strictly above this percentage.
    pub min_percentage: u8,
    pub max_results: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_percentage: MIN_MATCH_PERCENTAGE,
            max_results: MAX_RESULTS,
        }
    }
}

/// Rank `conditions` against what the user reported.
///
/// Keeps matches above 10 %, ordered by raw score (highest first, catalog
/// order on ties), at most six of them.
pub fn match_conditions<S>(
    user: &UserData,
    conditions: &[Condition],
    symptoms: &S,
) -> Vec<MatchedCondition>
where
    S: SymptomLookup + ?Sized,
{
    match_conditions_with(user, conditions, symptoms, MatchOptions::default())
}

pub fn match_conditions_with<S>(
    user: &UserData,
    conditions: &[Condition],
    symptoms: &S,
    options: MatchOptions,
) -> Vec<MatchedCondition>
where
    S: SymptomLookup + ?Sized,
{
    let mut scored: Vec<(&Condition, f64, u8)> = conditions
        .iter()
        .map(|condition| {
            let score = raw_score(user, condition);
            (condition, score, percentage(score, factors::max_score(condition)))
        })
        .filter(|&(_, _, pct)| pct > options.min_percentage)
        .collect();

    // Stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(options.max_results);

    tracing::debug!(
        evaluated = conditions.len(),
        returned = scored.len(),
        selected_symptoms = user.symptoms.len(),
        "condition match complete"
    );

    scored
        .into_iter()
        .map(|(condition, score, pct)| build_match(user, condition, symptoms, score, pct))
        .collect()
}

/// Score a single condition without filtering.
pub fn score_condition<S>(
    user: &UserData,
    condition: &Condition,
    symptoms: &S,
) -> MatchedCondition
where
    S: SymptomLookup + ?Sized,
{
    let score = raw_score(user, condition);
    let pct = percentage(score, factors::max_score(condition));
    build_match(user, condition, symptoms, score, pct)
}

fn raw_score(user: &UserData, condition: &Condition) -> f64 {
    let symptom_hits = condition
        .symptoms
        .iter()
        .filter(|id| user.has_symptom(id))
        .count();

    let score = symptom_hits as f64 * W_SYMPTOM
        + factors::age(condition, user)
        + factors::gender(condition, user)
        + factors::duration(condition, user)
        + factors::family_history(condition, user)
        + factors::past_conditions(condition, user)
        + factors::medications(condition, user)
        + factors::allergies(condition, user);

    tracing::trace!(condition_id = %condition.id, symptom_hits, score, "scored condition");
    score
}

/// `score / max` as a whole percentage, clamped to 0–100. A condition with
/// nothing to score against is 0 %.
fn percentage(score: f64, max: f64) -> u8 {
    if max <= 0.0 || !score.is_finite() {
        return 0;
    }
    (score / max * 100.0).round().clamp(0.0, 100.0) as u8
}

fn build_match<S>(
    user: &UserData,
    condition: &Condition,
    symptoms: &S,
    score: f64,
    pct: u8,
) -> MatchedCondition
where
    S: SymptomLookup + ?Sized,
{
    let mut matched_symptoms = Vec::new();
    let mut not_matched_symptoms = Vec::new();
    for id in &condition.symptoms {
        let name = display_name(symptoms, id, &condition.id);
        if user.has_symptom(id) {
            matched_symptoms.push(name);
        } else {
            not_matched_symptoms.push(name);
        }
    }

    MatchedCondition {
        condition: condition.clone(),
        match_percentage: pct,
        matched_symptoms,
        not_matched_symptoms,
        score,
    }
}

fn display_name<S>(symptoms: &S, id: &str, condition_id: &str) -> String
where
    S: SymptomLookup + ?Sized,
{
    match symptoms.symptom_name(id) {
        Some(name) => name.to_string(),
        None => {
            tracing::warn!(
                symptom_id = id,
                condition_id,
                "symptom missing from catalog, using id as name"
            );
            humanize_id(id)
        }
    }
}

/// `"sore_throat"` → `"Sore Throat"`.
pub fn humanize_id(id: &str) -> String {
    id.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
