use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use symcheck_core::display::DisplayInfo;
use symcheck_core::models::condition::{Condition, MedicalAttention, Severity};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ConditionSummary {
    id: String,
    name: String,
    severity: Severity,
    seek_medical_attention: MedicalAttention,
}

#[derive(Serialize)]
pub struct ConditionDetail {
    #[serde(flatten)]
    condition: Condition,
    display: DisplayInfo,
}

pub async fn list_conditions(State(state): State<AppState>) -> Json<Vec<ConditionSummary>> {
    let conditions = state
        .catalog
        .conditions()
        .all()
        .iter()
        .map(|c| ConditionSummary {
            id: c.id.clone(),
            name: c.name.clone(),
            severity: c.severity,
            seek_medical_attention: c.seek_medical_attention,
        })
        .collect();
    Json(conditions)
}

pub async fn get_condition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConditionDetail>, ApiError> {
    let condition = state
        .catalog
        .conditions()
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("condition not found: {id}")))?;

    Ok(Json(ConditionDetail {
        display: DisplayInfo::for_condition(condition),
        condition: condition.clone(),
    }))
}
