mod health;
mod recommendation;
mod skills;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;

use crate::response::{json_error, AppError};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/recommendation",
            get(recommendation::recommend).fallback(fallback_handler),
        )
        .nest("/api/skills", skills::router())
        .nest("/health", health::router())
        .nest("/api/health", health::router())
        .fallback(fallback_handler)
        .with_state(state)
}

/// Parse an optional ISO-8601 calendar date from a query parameter.
pub(crate) fn parse_date_param(
    name: &str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<NaiveDate>().map(Some).map_err(|_| {
        AppError::validation(format!(
            "{name} must be an ISO-8601 date (YYYY-MM-DD), got {raw:?}"
        ))
    })
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "route does not exist").into_response()
}
