//! POST /tts — audio + lipsync straight from the synthesis upstream.

use std::sync::Arc;

use ai_llm_service::SpeechPayload;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult, SYNTHESIS_FAILED},
    routes::tts::tts_request::TtsRequest,
};

/// Handler: POST /tts
///
/// Responds with `{ "audio": "<base64>", "lipsync": <as received> }`.
pub async fn tts(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TtsRequest>, JsonRejection>,
) -> AppResult<Json<SpeechPayload>> {
    let Json(body) = payload.map_err(|e| AppError::from_rejection(e, SYNTHESIS_FAILED))?;
    let text = body.text.unwrap_or_default();
    info!(text_len = text.len(), "tts received");

    let speech = state
        .llm
        .synthesize(&text)
        .await
        .map_err(AppError::Synthesis)?;

    Ok(Json(speech))
}
