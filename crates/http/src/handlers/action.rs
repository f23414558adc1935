//! Polling endpoint used by the dashboard: `POST /api/action`.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{ActionEnvelope, ActionRequest, ProgressData, StatusData};

pub const GET_PROGRESS: &str = "get_progress";
pub const GET_STATUS: &str = "get_status";

pub async fn dispatch_action(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActionRequest>,
) -> Result<Response, ApiError> {
    match req.action.as_str() {
        GET_PROGRESS => {
            let progress = state.cleanup_service.progress().await?;
            Ok(Json(ActionEnvelope::ok(ProgressData::from(progress))).into_response())
        },
        GET_STATUS => {
            let status = state.cleanup_service.status().await?;
            Ok(Json(ActionEnvelope::ok(StatusData::from(status))).into_response())
        },
        other => Err(ApiError::BadRequest(format!("unknown action: {other}"))),
    }
}
