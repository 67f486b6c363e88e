pub mod error;
pub mod models;
pub mod review;


// Re-exports
pub use error::AppError;
pub use models::*;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

/// Full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(review::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Health handler (simple, keep here)
pub async fn health_handler(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_reviews: state.review_store.len().await,
    })
}

async fn not_found_handler() -> AppError {
    AppError::NotFound
}
