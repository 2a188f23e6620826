use axum::{
    extract::{Query, State},
    Json,
};
use pulse_types::{AccountMetrics, ContentType, EngagementSample, FollowerSample, GrowthMetrics, PostRecord};
use serde::Deserialize;

use crate::{
    api::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Deserialize)]
pub struct GetPostsQuery {
    #[serde(default, rename = "type")]
    content_type: Option<String>,
}

/// GET /metrics/current - Current account snapshot
pub async fn get_current(State(state): State<AppState>) -> Json<AccountMetrics> {
    Json(state.dataset.current_metrics().clone())
}

/// GET /metrics/followers - Daily follower history, oldest first
pub async fn get_followers(State(state): State<AppState>) -> Json<Vec<FollowerSample>> {
    Json(state.dataset.follower_history().to_vec())
}

/// GET /metrics/engagement - Daily engagement history, oldest first
pub async fn get_engagement(State(state): State<AppState>) -> Json<Vec<EngagementSample>> {
    Json(state.dataset.engagement_history().to_vec())
}

/// GET /metrics/posts - Recent posts, newest first (optionally filtered by `?type=`)
pub async fn get_posts(
    State(state): State<AppState>,
    Query(query): Query<GetPostsQuery>,
) -> ApiResult<Json<Vec<PostRecord>>> {
    let posts = state.dataset.recent_posts();

    let Some(raw) = query.content_type.as_deref() else {
        return Ok(Json(posts.to_vec()));
    };
    let content_type = ContentType::parse(raw).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "Invalid content type '{}'. Use {}",
            raw,
            ContentType::ALL.map(|t| t.as_str()).join(", ")
        ))
    })?;

    let filtered: Vec<PostRecord> = posts
        .iter()
        .filter(|post| post.content_type == content_type)
        .cloned()
        .collect();
    tracing::debug!(content_type = content_type.as_str(), count = filtered.len(), "Filtered posts");

    Ok(Json(filtered))
}

/// GET /metrics/growth - Weekly and monthly follower growth
pub async fn get_growth(State(state): State<AppState>) -> ApiResult<Json<GrowthMetrics>> {
    Ok(Json(state.dataset.growth_metrics()?))
}
