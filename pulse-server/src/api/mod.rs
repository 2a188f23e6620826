pub mod error;
pub mod metrics;
pub mod pages;

pub use error::{ApiError, ApiResult};

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Build the read-only API router over a generated dataset.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Raw series
        .route("/metrics/current", get(metrics::get_current))
        .route("/metrics/followers", get(metrics::get_followers))
        .route("/metrics/engagement", get(metrics::get_engagement))
        .route("/metrics/posts", get(metrics::get_posts))
        .route("/metrics/growth", get(metrics::get_growth))
        // Page summaries
        .route("/pages/:name", get(pages::get_page))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health_check() -> &'static str {
    "OK"
}
