//! Speech synthesis pass-through.
//!
//! POSTs `{ "text", "voice" }` to the configured endpoint and hands back the
//! `audio` (base64) and `lipsync` (viseme timeline) fields untouched. The
//! shape of `lipsync` belongs to the upstream API and is never inspected.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::{
    config::speech_config::SpeechConfig,
    error_handler::{
        AiLlmError, ConfigError, HttpError, Provider, ProviderError, ProviderErrorKind,
        is_http_url, make_snippet,
    },
};

/// Audio plus mouth-movement timeline, exactly as the upstream returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechPayload {
    /// Base64-encoded audio bytes.
    pub audio: String,
    /// Opaque viseme timeline.
    #[serde(default)]
    pub lipsync: Value,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    voice: &'a str,
}

/// Thin client for the external synthesis endpoint.
#[derive(Debug)]
pub struct SpeechService {
    client: reqwest::Client,
    url: String,
    voice: String,
}

impl SpeechService {
    /// Creates a new [`SpeechService`].
    ///
    /// # Errors
    /// - [`ConfigError::MissingVar`] if no endpoint is configured
    /// - [`AiLlmError::Provider`] with `InvalidEndpoint` if it is not http(s)
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: &SpeechConfig) -> Result<Self, AiLlmError> {
        let url = cfg
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingVar("TTS_URL"))?;

        if !is_http_url(url) {
            return Err(ProviderError::new(
                Provider::Speech,
                ProviderErrorKind::InvalidEndpoint(url.to_string()),
            )
            .into());
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(key) = cfg.api_key.as_deref() {
            let value = header::HeaderValue::from_str(&format!("Bearer {key}")).map_err(|e| {
                ProviderError::new(
                    Provider::Speech,
                    ProviderErrorKind::Decode(format!("invalid API key header: {e}")),
                )
            })?;
            headers.insert(header::AUTHORIZATION, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        info!(endpoint = %url, voice = %cfg.voice, "SpeechService initialized");

        Ok(Self {
            client: builder.build()?,
            url: url.to_string(),
            voice: cfg.voice.clone(),
        })
    }

    /// Requests audio and lipsync data for `text`.
    ///
    /// # Errors
    /// - [`AiLlmError::HttpTransport`] for client/network failures
    /// - [`AiLlmError::Provider`] with `HttpStatus` for non-2xx responses
    /// - [`AiLlmError::Provider`] with `Decode` if `audio` is missing
    pub async fn synthesize(&self, text: &str) -> Result<SpeechPayload, AiLlmError> {
        let started = Instant::now();
        debug!(text_len = text.len(), voice = %self.voice, "POST {}", self.url);

        let resp = self
            .client
            .post(&self.url)
            .json(&SpeechRequest {
                text,
                voice: &self.voice,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let snippet = make_snippet(&resp.text().await.unwrap_or_default());
            error!(
                %status,
                url = %self.url,
                %snippet,
                latency_ms = started.elapsed().as_millis(),
                "speech synthesis returned non-success status"
            );
            return Err(ProviderError::new(
                Provider::Speech,
                ProviderErrorKind::HttpStatus(HttpError {
                    status,
                    url: self.url.clone(),
                    snippet,
                }),
            )
            .into());
        }

        let payload: SpeechPayload = resp.json().await.map_err(|e| {
            ProviderError::new(
                Provider::Speech,
                ProviderErrorKind::Decode(format!("serde error: {e}; expected `audio`")),
            )
        })?;

        info!(
            audio_len = payload.audio.len(),
            latency_ms = started.elapsed().as_millis(),
            "speech synthesis completed"
        );

        Ok(payload)
    }
}
