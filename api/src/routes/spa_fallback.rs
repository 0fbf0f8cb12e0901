//! Single-page-app fallback.
//!
//! Anything the router and the static directory cannot serve (unknown path,
//! unsupported method, even `GET /ask`) gets `index.html` with status 200.

use std::path::PathBuf;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::error_handler::AppError;

/// Reads the entry document fresh on every call.
pub async fn serve_index(index: PathBuf) -> Response {
    match tokio::fs::read(&index).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], bytes).into_response(),
        Err(source) => AppError::MissingFrontend {
            path: index,
            source,
        }
        .into_response(),
    }
}
