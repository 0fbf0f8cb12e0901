use std::path::PathBuf;

use ai_llm_service::AiLlmError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use persona::PersonaError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Message shown to the front-end when the model call fails.
pub const GENERATION_FAILED: &str = "Fehler beim Abrufen der KI-Antwort.";
/// Message shown to the front-end when speech synthesis fails.
pub const SYNTHESIS_FAILED: &str = "Fehler bei der Sprachausgabe.";
/// Message for request bodies that are not JSON at all.
pub const BAD_REQUEST: &str = "Ungültige Anfrage.";
const INTERNAL: &str = "Interner Serverfehler.";

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("invalid configuration: {0}")]
    Config(#[source] AiLlmError),

    #[error("pipeline setup failed: {0}")]
    Setup(#[source] PersonaError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    #[error("front-end entry document unavailable: {}", .path.display())]
    MissingFrontend {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Request / upstream ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unreadable request body: {detail}")]
    UnreadableBody {
        /// Client-facing message of the route that received the body.
        public: &'static str,
        detail: String,
    },

    #[error(transparent)]
    Generation(PersonaError),

    #[error("speech synthesis failed: {0}")]
    Synthesis(#[source] AiLlmError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Setup(_)
            | AppError::Bind(_)
            | AppError::Server(_)
            | AppError::MissingFrontend { .. }
            | AppError::UnreadableBody { .. }
            | AppError::Generation(_)
            | AppError::Synthesis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Sorts a JSON body rejection. Unparsable JSON is a 400; a wrong
    /// shape or a missing content type fails the route like any other
    /// error and answers with its `public` message.
    pub fn from_rejection(err: JsonRejection, public: &'static str) -> Self {
        if matches!(err, JsonRejection::JsonSyntaxError(_)) {
            return AppError::BadRequest(err.body_text());
        }
        AppError::UnreadableBody {
            public,
            detail: err.body_text(),
        }
    }

    /// Text the client gets. Upstream and parser details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(_) => BAD_REQUEST.to_string(),
            AppError::UnreadableBody { public, .. } => public.to_string(),
            AppError::Generation(_) => GENERATION_FAILED.to_string(),
            AppError::Synthesis(_) => SYNTHESIS_FAILED.to_string(),
            _ => INTERNAL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, detail = ?self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;
