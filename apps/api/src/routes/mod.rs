pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Generation API
        .route(
            "/api/generate-resume",
            post(handlers::handle_generate_resume),
        )
        .route(
            "/api/improve-resume",
            post(handlers::handle_improve_resume),
        )
        .route("/api/cover-letter", post(handlers::handle_cover_letter))
        .route("/api/score-resume", post(handlers::handle_score_resume))
}
