use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use trash_cleaner_service::RunOutcome;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{
    ProgressResponse, RunResponse, SettingsResponse, StatusData, UpdateSettingsRequest,
};

pub async fn get_progress(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let progress = state.cleanup_service.progress().await?;
    Ok(Json(progress.into()))
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Result<Json<StatusData>, ApiError> {
    let status = state.cleanup_service.status().await?;
    Ok(Json(status.into()))
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, ApiError> {
    state.cleanup_service.set_enabled(req.enabled).await?;
    Ok(Json(SettingsResponse { enabled: req.enabled }))
}

/// Manual trigger: re-baseline, then run one batch if the campaign is enabled.
pub async fn run_now(State(state): State<Arc<AppState>>) -> Result<Json<RunResponse>, ApiError> {
    let result = state.cleanup_service.trigger_manual().await?;
    Ok(Json(RunResponse { message: run_message(&result), result }))
}

const fn run_message(outcome: &RunOutcome) -> &'static str {
    match *outcome {
        RunOutcome::Ran { .. } => "Manual cleanup triggered.",
        RunOutcome::Skipped => "Auto clean is disabled; nothing deleted.",
        RunOutcome::Busy => "A cleanup batch is already running.",
        RunOutcome::StoreUnavailable => "Store unavailable; nothing deleted.",
    }
}
