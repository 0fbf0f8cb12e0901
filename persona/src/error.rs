//! Typed errors for the persona crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersonaError {
    /// The language-model call failed (network, auth, quota, bad payload).
    #[error("generation failed: {0}")]
    Generation(#[from] ai_llm_service::AiLlmError),

    /// Building the enrichment HTTP client failed at startup.
    #[error("enrichment client setup failed: {0}")]
    EnrichmentSetup(#[source] reqwest::Error),
}

/// Lookup failures. Never leave the crate: the enricher maps them to an
/// empty passage.
#[derive(Debug, Error)]
pub(crate) enum EnrichmentError {
    #[error("empty topic")]
    EmptyTopic,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("summary has no extract")]
    MissingExtract,
}
