use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use serde::Deserialize;

use skill_decay_algo::{compute_decay, days_elapsed, summarize_all, SkillRecord};

use super::parse_date_param;
use crate::response::{ok, AppError};
use crate::services::chart::render_decay_chart;
use crate::services::dashboard::{build_dashboard, find_skill};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_skills))
        .route("/overview", get(overview))
        .route("/:name", get(get_skill))
        .route("/:name/dashboard", get(dashboard))
        .route("/:name/chart.svg", get(chart))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationQuery {
    last_practice: Option<String>,
    today: Option<String>,
}

/// Longest curve (in days) a request may ask for, about 100 years
pub const MAX_CURVE_DAYS: u32 = 36_500;

struct EvaluationDates {
    last_practice: Option<NaiveDate>,
    today: NaiveDate,
}

impl EvaluationDates {
    /// Effective last practice date for `record`, bounded by [`MAX_CURVE_DAYS`].
    fn last_practice_for(&self, record: &SkillRecord) -> Result<NaiveDate, AppError> {
        let last_practice = self.last_practice.unwrap_or(record.last_practice_date);
        ensure_curve_span(last_practice, self.today)?;
        Ok(last_practice)
    }
}

/// The curve holds one sample per elapsed day, so the span is capped.
fn ensure_curve_span(last_practice: NaiveDate, today: NaiveDate) -> Result<(), AppError> {
    let span = days_elapsed(last_practice, today);
    if span > MAX_CURVE_DAYS {
        return Err(AppError::validation(format!(
            "{last_practice} is {span} days before {today}; at most {MAX_CURVE_DAYS} days are supported"
        )));
    }
    Ok(())
}

fn resolve_dates(
    state: &AppState,
    query: Result<Query<EvaluationQuery>, QueryRejection>,
) -> Result<EvaluationDates, AppError> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;

    let last_practice = parse_date_param("lastPractice", query.last_practice.as_deref())?;
    let today = parse_date_param("today", query.today.as_deref())?
        .unwrap_or_else(|| state.today());

    if let Some(last_practice) = last_practice {
        ensure_curve_span(last_practice, today)?;
    }

    Ok(EvaluationDates {
        last_practice,
        today,
    })
}

async fn list_skills(State(state): State<AppState>) -> Response {
    let records: Vec<&SkillRecord> = state.skills().iter().collect();
    ok(records)
}

async fn overview(
    State(state): State<AppState>,
    query: Result<Query<EvaluationQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let dates = resolve_dates(&state, query)?;
    for record in state.skills().iter() {
        dates.last_practice_for(record)?;
    }

    let summary = summarize_all(state.skills(), dates.today).map_err(|err| {
        // records are validated at load time
        AppError::internal(format!("overview evaluation failed: {err}"))
    })?;

    Ok(ok(summary))
}

async fn get_skill(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let record = find_skill(state.skills(), &name)?;
    Ok(ok(record))
}

async fn dashboard(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EvaluationQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let dates = resolve_dates(&state, query)?;
    let record = find_skill(state.skills(), &name)?;
    let last_practice = dates.last_practice_for(record)?;

    let view = build_dashboard(state.skills(), &name, Some(last_practice), dates.today)?;
    Ok(ok(view))
}

async fn chart(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EvaluationQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let dates = resolve_dates(&state, query)?;
    let record = find_skill(state.skills(), &name)?;

    let last_practice = dates.last_practice_for(record)?;
    let curve = compute_decay(record.decay_rate, last_practice, dates.today)
        .map_err(|err| AppError::validation(err.to_string()))?;

    let svg = render_decay_chart(&curve.curve_samples);
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}
