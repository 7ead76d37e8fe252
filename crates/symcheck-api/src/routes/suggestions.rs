use axum::Json;
use axum::extract::State;

use symcheck_catalog::Suggestions;

use crate::state::AppState;

pub async fn list_suggestions(State(state): State<AppState>) -> Json<Suggestions> {
    Json(state.catalog.suggestions())
}
