// src/presentation/http/controllers/analytics.rs
use crate::application::dto::AnalyticsDto;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/analytics/me",
    responses(
        (status = 200, description = "Engagement totals over the caller's articles.", body = AnalyticsDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn my_analytics(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<AnalyticsDto>> {
    state
        .services
        .analytics_queries
        .my_analytics(&user)
        .await
        .into_http()
        .map(Json)
}
