//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body:
//! `{"error": "message"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use trash_cleaner_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns a static message.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 503 Service Unavailable: a store is temporarily unreachable.
    ServiceUnavailable(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_transient() {
            return Self::ServiceUnavailable("store temporarily unavailable".to_owned());
        }
        Self::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use trash_cleaner_core::CoreError;
    use trash_cleaner_storage::StorageError;

    use super::*;

    #[test]
    fn transient_store_errors_are_503() {
        let err = ApiError::from(ServiceError::Storage(StorageError::Join("busy".to_owned())));
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn config_errors_are_500() {
        let err = ApiError::from(ServiceError::Config(CoreError::InvalidConfig("bad".to_owned())));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
