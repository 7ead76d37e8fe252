use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use uuid::Uuid;

use symcheck_catalog::Catalog;
use symcheck_core::display::DisplayInfo;
use symcheck_core::models::matched::MatchedCondition;
use symcheck_core::models::user_data::UserData;
use symcheck_matching::match_conditions;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AssessedCondition {
    #[serde(flatten)]
    matched: MatchedCondition,
    display: DisplayInfo,
}

/// The outcome of one assessment. Nothing is stored; `id` only ties the
/// response to its log lines.
#[derive(Serialize)]
pub struct AssessmentResponse {
    id: Uuid,
    created_at: jiff::Timestamp,
    matches: Vec<AssessedCondition>,
}

pub async fn create_assessment(
    State(state): State<AppState>,
    payload: Result<Json<UserData>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let Json(user) = payload?;
    user.validate_required()?;

    let id = Uuid::new_v4();
    let catalog: &Catalog = &state.catalog;
    let matches: Vec<AssessedCondition> =
        match_conditions(&user, catalog.conditions().all(), catalog)
            .into_iter()
            .map(|matched| AssessedCondition {
                display: DisplayInfo::for_condition(&matched.condition),
                matched,
            })
            .collect();

    tracing::info!(
        assessment_id = %id,
        symptoms = user.symptoms.len(),
        matches = matches.len(),
        top_match = matches.first().map(|m| m.matched.condition.id.as_str()),
        "assessment complete"
    );

    Ok(Json(AssessmentResponse {
        id,
        created_at: jiff::Timestamp::now(),
        matches,
    }))
}
