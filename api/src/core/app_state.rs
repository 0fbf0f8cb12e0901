use std::{path::PathBuf, sync::Arc};

use ai_llm_service::{
    LlmService,
    error_handler::{env_opt, env_or},
};
use persona::AnswerPipeline;

/// Default bind port when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Shared state for all HTTP handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// `/ask` pipeline (detect → enrich → respond → shape).
    pub pipeline: AnswerPipeline,
    /// Upstream clients; `/tts` talks to it directly.
    pub llm: Arc<LlmService>,
    /// Directory with the static front-end; must contain `index.html`.
    pub frontend_dir: PathBuf,
}

impl AppState {
    pub fn new(pipeline: AnswerPipeline, llm: Arc<LlmService>, frontend_dir: PathBuf) -> Self {
        Self {
            pipeline,
            llm,
            frontend_dir,
        }
    }

    /// Path of the single-page-app entry document.
    pub fn index_file(&self) -> PathBuf {
        self.frontend_dir.join("index.html")
    }
}

/// Listener and static-file settings.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
}

impl ServerConfig {
    /// Load from environment variables.
    ///
    /// - `HOST` (default `0.0.0.0`)
    /// - `PORT` (default `3000`; invalid values fall back to the default)
    /// - `FRONTEND_DIR` (default `frontend`)
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_port(env_opt("PORT").as_deref()),
            frontend_dir: PathBuf::from(env_or("FRONTEND_DIR", "frontend")),
        }
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|v| v.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_override_and_fallback() {
        assert_eq!(parse_port(None), 3000);
        assert_eq!(parse_port(Some("8080")), 8080);
        assert_eq!(parse_port(Some(" 8081 ")), 8081);
        assert_eq!(parse_port(Some("nope")), 3000);
        assert_eq!(parse_port(Some("70000")), 3000);
    }

    #[test]
    fn blank_server_vars_fall_back_to_defaults() {
        // Only test in this crate that touches these variables.
        unsafe {
            std::env::set_var("HOST", "  ");
            std::env::set_var("PORT", "");
            std::env::set_var("FRONTEND_DIR", " ");
        }
        let cfg = ServerConfig::from_env();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.frontend_dir, PathBuf::from("frontend"));

        unsafe {
            std::env::remove_var("HOST");
            std::env::remove_var("PORT");
            std::env::remove_var("FRONTEND_DIR");
        }
    }
}
