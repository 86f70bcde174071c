use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::response::Response;
use serde::Deserialize;

use crate::response::{ok, AppError};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    strength: Option<String>,
}

pub async fn recommend(
    query: Result<Query<RecommendationQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;

    let raw = query
        .strength
        .ok_or_else(|| AppError::validation("strength is required"))?;
    let strength = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::validation(format!("strength must be a number, got {raw:?}")))?;

    Ok(ok(skill_decay_algo::recommend(strength)))
}
