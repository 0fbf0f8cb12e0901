//! POST /ask — answers in persona, optionally enriched.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult, GENERATION_FAILED},
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3000/ask \
///   -H 'content-type: application/json' \
///   -d '{"text":"Wer war Karl der Große?"}'
/// ```
pub async fn ask(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    let Json(body) = payload.map_err(|e| AppError::from_rejection(e, GENERATION_FAILED))?;
    let text = body.text.unwrap_or_default();
    info!(%text, "ask received");

    let out = state
        .pipeline
        .ask(&text)
        .await
        .map_err(AppError::Generation)?;

    info!(
        answer = %out.answer,
        enriched = !out.passage.is_empty(),
        "ask answered"
    );

    Ok(Json(AskResponse { answer: out.answer }))
}
