//! HTTP surface of the persona relay.
//!
//! Routes:
//! - `POST /ask` → persona answer (`{ "answer" }` or `{ "error" }`)
//! - `POST /tts` → audio + lipsync pass-through
//! - everything else → static front-end, falling back to `index.html`

use std::sync::Arc;

pub mod core;
pub mod error_handler;
mod routes;

use ai_llm_service::LlmService;
use axum::{Router, handler::HandlerWithoutStateExt, routing::post};
use persona::PersonaConfig;
use tokio::signal;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

pub use crate::core::app_state::{AppState, ServerConfig};
pub use crate::error_handler::{AppError, AppResult};
pub use crate::routes::spa_fallback::serve_index;

use crate::routes::{ask::ask_route::ask, tts::tts_route::tts};

/// Builds the full router for the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let index = state.index_file();
    let spa = move || serve_index(index.clone());

    // Static files first; misses and non-GET methods land on index.html.
    let static_files = ServeDir::new(&state.frontend_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(spa.into_service());

    Router::new()
        .route("/ask", post(ask).fallback_service(static_files.clone()))
        .route("/tts", post(tts).fallback_service(static_files.clone()))
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Loads configuration from the environment, binds, and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let server = ServerConfig::from_env();

    let llm = Arc::new(LlmService::from_env().map_err(AppError::Config)?);
    {
        let (chat, speech) = llm.profiles();
        info!(
            model = %chat.model,
            endpoint = %chat.endpoint,
            api_key_set = chat.api_key.is_some(),
            tts_configured = speech.endpoint.is_some(),
            "upstream profiles loaded"
        );
    }

    let pipeline = persona::build_pipeline(&PersonaConfig::from_env(), llm.clone())
        .map_err(AppError::Setup)?;
    let state = Arc::new(AppState::new(pipeline, llm, server.frontend_dir.clone()));

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((server.host.as_str(), server.port))
        .await
        .map_err(AppError::Bind)?;
    info!(
        host = %server.host,
        port = server.port,
        frontend = %server.frontend_dir.display(),
        "server listening"
    );

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
