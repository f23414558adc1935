//! Embedded admin dashboard served at `/`.
//!
//! Polls `/api/action` for progress every 3 s and for status every 10 s.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

pub const VIEWER_HTML: &str = include_str!("viewer.html");

pub async fn serve_viewer() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(VIEWER_HTML))
        .into_response()
}
