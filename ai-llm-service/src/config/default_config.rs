//! Default model configs loaded from environment variables.
//!
//! Two profiles exist:
//!
//! - **Chat**   → OpenAI chat completions used for persona answers
//! - **Speech** → external text-to-speech endpoint returning audio + lipsync
//!
//! Generation parameters (temperature, token bound) are fixed constants of
//! the persona; only the model, the endpoint and the token bound can be
//! overridden from the environment.
//!
//! # Environment variables
//!
//! Chat:
//! - `OPENAI_API_KEY`   = credential (optional at startup, required per call)
//! - `OPENAI_BASE_URL`  = API base, default `https://api.openai.com`
//! - `OPENAI_MODEL`     = model id, default `gpt-4o-mini`
//! - `LLM_MAX_TOKENS`   = optional max tokens, default `200`, clamped to `200..=250`
//! - `LLM_TIMEOUT_SECS` = optional request timeout (u64)
//!
//! Speech:
//! - `TTS_URL`          = full synthesis endpoint (optional)
//! - `TTS_API_KEY`      = optional bearer token
//! - `TTS_TIMEOUT_SECS` = optional request timeout (u64)

use crate::{
    config::{llm_model_config::LlmModelConfig, speech_config::SpeechConfig},
    error_handler::{
        AiLlmError, env_opt, env_opt_u32, env_opt_u64, env_or, validate_http_endpoint,
    },
};
use tracing::warn;

/// Default OpenAI API base.
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com";

/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Upper bound on generated tokens for a persona answer.
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// Largest token bound `LLM_MAX_TOKENS` may raise the default to.
pub const CEILING_MAX_TOKENS: u32 = 250;

/// Sampling temperature of the persona.
pub const PERSONA_TEMPERATURE: f32 = 0.8;

/// The one voice every synthesis request uses.
pub const FIXED_VOICE: &str = "onyx";

/// Persona chat profile with the fixed generation parameters.
pub fn persona_chat(endpoint: &str, api_key: Option<String>) -> LlmModelConfig {
    LlmModelConfig {
        model: DEFAULT_CHAT_MODEL.to_string(),
        endpoint: endpoint.to_string(),
        api_key,
        max_tokens: Some(DEFAULT_MAX_TOKENS),
        temperature: Some(PERSONA_TEMPERATURE),
        top_p: None,
        timeout_secs: None,
    }
}

/// Constructs the chat profile from the environment.
///
/// A missing `OPENAI_API_KEY` is **not** an error here; it surfaces as a
/// generation failure on the first request.
///
/// # Errors
/// - [`crate::error_handler::ConfigError::InvalidFormat`] if `OPENAI_BASE_URL` is not http(s)
/// - [`crate::error_handler::ConfigError::InvalidNumber`] for bad `LLM_MAX_TOKENS` / `LLM_TIMEOUT_SECS`
pub fn config_openai_chat() -> Result<LlmModelConfig, AiLlmError> {
    let endpoint = env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_ENDPOINT);
    validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

    let mut cfg = persona_chat(&endpoint, env_opt("OPENAI_API_KEY"));
    cfg.model = env_or("OPENAI_MODEL", DEFAULT_CHAT_MODEL);
    if let Some(max) = env_opt_u32("LLM_MAX_TOKENS")? {
        cfg.max_tokens = Some(clamp_max_tokens(max));
    }
    cfg.timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?;

    Ok(cfg)
}

/// Keeps an overridden token bound inside the persona's answer length.
fn clamp_max_tokens(requested: u32) -> u32 {
    let clamped = requested.clamp(DEFAULT_MAX_TOKENS, CEILING_MAX_TOKENS);
    if clamped != requested {
        warn!(requested, clamped, "LLM_MAX_TOKENS out of range, clamped");
    }
    clamped
}

/// Constructs the speech profile from the environment.
///
/// # Errors
/// - [`crate::error_handler::ConfigError::InvalidFormat`] if `TTS_URL` is set but not http(s)
/// - [`crate::error_handler::ConfigError::InvalidNumber`] for a bad `TTS_TIMEOUT_SECS`
pub fn config_speech() -> Result<SpeechConfig, AiLlmError> {
    let endpoint = env_opt("TTS_URL");
    if let Some(url) = endpoint.as_deref() {
        validate_http_endpoint("TTS_URL", url)?;
    }

    Ok(SpeechConfig {
        endpoint,
        api_key: env_opt("TTS_API_KEY"),
        voice: FIXED_VOICE.to_string(),
        timeout_secs: env_opt_u64("TTS_TIMEOUT_SECS")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_chat_uses_fixed_generation_parameters() {
        let cfg = persona_chat("http://127.0.0.1:1", None);
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.temperature, Some(0.8));
        assert_eq!(cfg.max_tokens, Some(200));
        assert_eq!(cfg.top_p, None);
        assert_eq!(cfg.timeout_secs, None);
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn token_override_stays_within_persona_range() {
        assert_eq!(clamp_max_tokens(50), 200);
        assert_eq!(clamp_max_tokens(200), 200);
        assert_eq!(clamp_max_tokens(230), 230);
        assert_eq!(clamp_max_tokens(250), 250);
        assert_eq!(clamp_max_tokens(4096), 250);
    }
}
