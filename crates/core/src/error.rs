use thiserror::Error;

/// Errors raised while decoding persisted settings or configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
