#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use skill_decay_algo::SkillSet;
use skill_decay_backend::state::{AppState, FixedClock};

pub const SKILL_DATA: &str = r#"{
    "Python": {"last_practice": "2024-01-15", "decay_rate": 0.05},
    "Machine Learning": {"last_practice": "2024-01-10", "decay_rate": 0.07},
    "Guitar": {"last_practice": "2023-06-01", "decay_rate": 0.02},
    "Latin": {"last_practice": "2020-01-01", "decay_rate": 0}
}"#;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 25).unwrap()
}

pub fn create_test_app() -> Router {
    let skills = SkillSet::from_json_str(SKILL_DATA).unwrap();
    let state = AppState::with_clock(skills, Arc::new(FixedClock(today())));
    skill_decay_backend::create_app(state)
}

pub async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
