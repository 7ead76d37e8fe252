use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use symcheck_core::models::symptom::{Symptom, SymptomCategory};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CategoryGroup {
    category: SymptomCategory,
    label: &'static str,
    symptoms: Vec<Symptom>,
}

pub async fn list_symptoms(State(state): State<AppState>) -> Json<Vec<Symptom>> {
    Json(state.catalog.symptoms().as_slice().to_vec())
}

pub async fn list_by_category(State(state): State<AppState>) -> Json<Vec<CategoryGroup>> {
    let groups = state
        .catalog
        .symptoms()
        .by_category()
        .into_iter()
        .map(|(category, members)| CategoryGroup {
            category,
            label: category.label(),
            symptoms: members.into_iter().cloned().collect(),
        })
        .collect();
    Json(groups)
}

pub async fn get_symptom(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Symptom>, ApiError> {
    let symptom = state
        .catalog
        .symptoms()
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("symptom not found: {id}")))?;
    Ok(Json(symptom.clone()))
}
