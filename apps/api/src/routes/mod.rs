pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/jobs", get(handlers::handle_jobs_summary))
        .route("/api/v1/match", post(handlers::handle_match_resume))
        .route("/api/v1/match/skills", post(handlers::handle_match_skills))
        .with_state(state)
}
