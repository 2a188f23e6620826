use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::{ApiError, ApiResult},
    pages::{build_page, Page, PageSummary},
    state::AppState,
};

/// GET /pages/:name - Derived summary for one dashboard page
pub async fn get_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<PageSummary>> {
    let page = Page::parse(&name).ok_or_else(|| {
        ApiError::NotFound(format!(
            "Unknown page '{}'. Valid pages: overview, followers, engagement, comments, reach",
            name
        ))
    })?;

    Ok(Json(build_page(page, &state.dataset)?))
}
