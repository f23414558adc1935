//! Request and response bodies.

use serde::{Deserialize, Serialize};
use trash_cleaner_core::{CampaignState, Progress, StatusSnapshot};
use trash_cleaner_service::RunOutcome;

/// Body of `POST /api/action`.
#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub action: String,
}

/// `{"success": true, "data": ...}` envelope of the action endpoint.
#[derive(Debug, Serialize)]
pub struct ActionEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ActionEnvelope<T> {
    pub const fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

#[derive(Debug, Serialize)]
pub struct ProgressData {
    pub total_trash: u64,
    pub current_trash: u64,
}

impl From<Progress> for ProgressData {
    fn from(p: Progress) -> Self {
        Self { total_trash: p.total, current_trash: p.remaining }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusData {
    pub enabled: bool,
    pub state: CampaignState,
    pub last_run: String,
    /// Unix seconds of the next scheduled run.
    pub next_run: Option<i64>,
}

impl From<StatusSnapshot> for StatusData {
    fn from(s: StatusSnapshot) -> Self {
        Self {
            enabled: s.enabled,
            state: s.state,
            last_run: s.last_run,
            next_run: s.next_run.map(|t| t.timestamp()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub total: u64,
    pub remaining: u64,
    pub processed: u64,
    pub percent: u8,
    pub complete: bool,
}

impl From<Progress> for ProgressResponse {
    fn from(p: Progress) -> Self {
        Self {
            total: p.total,
            remaining: p.remaining,
            processed: p.processed,
            percent: p.percent,
            complete: p.is_complete(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub message: &'static str,
    pub result: RunOutcome,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
