pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::services::skills::{load_skill_set, SkillDataError};
use crate::state::AppState;

pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Load the skill data named by the config and build the router around it.
pub async fn create_app_from_config(config: &Config) -> Result<axum::Router, SkillDataError> {
    let skills = load_skill_set(&config.skill_data_path).await?;
    Ok(create_app(AppState::new(skills)))
}
