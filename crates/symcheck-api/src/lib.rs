//! symcheck-api library root.
//!
//! The router lives here so integration tests can drive it directly,
//! without binding a socket.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/symptoms", get(routes::symptoms::list_symptoms))
        .route("/symptoms/by-category", get(routes::symptoms::list_by_category))
        .route("/symptoms/{id}", get(routes::symptoms::get_symptom))
        .route("/conditions", get(routes::conditions::list_conditions))
        .route("/conditions/{id}", get(routes::conditions::get_condition))
        .route("/suggestions", get(routes::suggestions::list_suggestions))
        .route("/assessments", post(routes::assessments::create_assessment))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
