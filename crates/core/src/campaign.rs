//! Campaign domain types: item identifiers, setting keys and status projections.

use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::LAST_RUN_NEVER;
use crate::error::CoreError;

/// Identifier of an item in the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Persisted settings owned by the cleaner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    /// Whether a campaign is active.
    EnableAutoClean,
    /// Human-readable summary of the most recent batch.
    LastRun,
    /// Trash count captured at campaign start; `0` means no baseline.
    TotalTrash,
}

impl SettingKey {
    pub const ALL: [Self; 3] = [Self::EnableAutoClean, Self::LastRun, Self::TotalTrash];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::EnableAutoClean => "enable_auto_clean",
            Self::LastRun => "last_run",
            Self::TotalTrash => "total_trash",
        }
    }

    /// Value written at install time when the key is absent.
    #[must_use]
    pub const fn default_value(&self) -> &'static str {
        match *self {
            Self::EnableAutoClean => "0",
            Self::LastRun => LAST_RUN_NEVER,
            Self::TotalTrash => "0",
        }
    }
}

impl Display for SettingKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Encode a boolean setting the way it is stored.
#[must_use]
pub const fn encode_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Decode a stored boolean. Anything unrecognised reads as `false`.
#[must_use]
pub fn decode_bool(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Decode a stored non-negative count. Blank values read as zero.
pub fn decode_count(key: SettingKey, raw: &str) -> Result<u64, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| CoreError::InvalidSetting { key: key.as_str(), value: raw.to_owned() })
}

/// Summary line stored after every batch, e.g. `2026-10-17 09:30:00 (Deleted 250 items)`.
#[must_use]
pub fn format_last_run(at: DateTime<Local>, deleted: u64) -> String {
    format!("{} (Deleted {deleted} items)", at.format("%Y-%m-%d %H:%M:%S"))
}

/// Whether the campaign is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignState {
    /// `enabled = false`; scheduled ticks are no-ops.
    Idle,
    /// `enabled = true`; batches run and follow-ups are scheduled.
    Running,
}

impl CampaignState {
    #[must_use]
    pub const fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Running } else { Self::Idle }
    }
}

/// Read-only status projection served to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub enabled: bool,
    pub state: CampaignState,
    pub last_run: String,
    pub next_run: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decode_bool_accepts_common_truthy_values() {
        for raw in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(decode_bool(raw), "{raw} should be true");
        }
        for raw in ["0", "", "false", "no", "2"] {
            assert!(!decode_bool(raw), "{raw} should be false");
        }
    }

    #[test]
    fn decode_count_blank_is_zero() {
        assert_eq!(decode_count(SettingKey::TotalTrash, "").unwrap(), 0);
        assert_eq!(decode_count(SettingKey::TotalTrash, " 300 ").unwrap(), 300);
    }

    #[test]
    fn decode_count_rejects_negative() {
        let err = decode_count(SettingKey::TotalTrash, "-4").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidSetting { key: "total_trash", value: "-4".to_owned() }
        );
    }

    #[test]
    fn last_run_format_matches_dashboard() {
        let at = Local.with_ymd_and_hms(2026, 10, 17, 9, 30, 5).unwrap();
        assert_eq!(format_last_run(at, 250), "2026-10-17 09:30:05 (Deleted 250 items)");
    }

    #[test]
    fn install_defaults_leave_campaign_idle() {
        assert!(!decode_bool(SettingKey::EnableAutoClean.default_value()));
        assert_eq!(SettingKey::LastRun.default_value(), "Never");
        assert_eq!(SettingKey::TotalTrash.default_value(), "0");
    }

    #[test]
    fn campaign_state_follows_enabled_flag() {
        assert_eq!(CampaignState::from_enabled(true), CampaignState::Running);
        assert_eq!(serde_json::to_value(CampaignState::from_enabled(false)).unwrap(), "idle");
    }
}
