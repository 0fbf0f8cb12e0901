//! Best-effort encyclopedia lookup.
//!
//! One GET per call, no retry. Whatever goes wrong, the caller gets an
//! empty passage and the request continues without enrichment.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::{EnrichmentError, PersonaError},
    shaping::first_sentences,
};

/// Sentences kept from a summary extract.
pub const ENRICHMENT_SENTENCES: usize = 3;

const USER_AGENT: &str = concat!("barbarossa-backend/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    extract: Option<String>,
}

/// Client for a REST summary endpoint (`{base}/{topic}` → `{ "extract": ... }`).
#[derive(Clone, Debug)]
pub struct EnrichmentClient {
    http: reqwest::Client,
    base: String,
}

impl EnrichmentClient {
    /// Construct a client for the given summary base URL.
    ///
    /// # Errors
    /// Returns [`PersonaError::EnrichmentSetup`] if the HTTP client cannot be built.
    pub fn new(base: &str) -> Result<Self, PersonaError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(PersonaError::EnrichmentSetup)?;
        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Returns up to three sentences about `topic`, or `""` on any failure.
    pub async fn passage(&self, topic: &str) -> String {
        match self.try_passage(topic).await {
            Ok(p) => {
                debug!(topic, passage_len = p.len(), "enrichment passage fetched");
                p
            }
            Err(EnrichmentError::EmptyTopic) => String::new(),
            Err(e) => {
                warn!(topic, error = %e, "enrichment unavailable, continuing without it");
                String::new()
            }
        }
    }

    async fn try_passage(&self, topic: &str) -> Result<String, EnrichmentError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(EnrichmentError::EmptyTopic);
        }

        let url = format!("{}/{}", self.base, urlencoding::encode(topic));
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status { status, url });
        }

        let summary: SummaryResponse = resp.json().await?;
        let extract = summary
            .extract
            .filter(|e| !e.trim().is_empty())
            .ok_or(EnrichmentError::MissingExtract)?;

        Ok(first_sentences(&extract, ENRICHMENT_SENTENCES))
    }
}
