//! Shared LLM service with two profiles: `chat` and `speech`.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and pass clones to dependents.
//! - Underlying HTTP clients are built lazily on first use, so a missing
//!   credential shows up as a failed call instead of a failed boot.
//! - Answers are never cached: every call goes upstream.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use ai_llm_service::service_profiles::LlmService;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svc = Arc::new(LlmService::from_env()?);
//! let txt = svc.generate("Wer war Barbarossa?", Some("Antworte kurz.")).await?;
//! println!("{txt}");
//! # Ok(()) }
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::{
        default_config::{config_openai_chat, config_speech},
        llm_model_config::LlmModelConfig,
        speech_config::SpeechConfig,
    },
    error_handler::AiLlmError,
    services::{
        open_ai_service::OpenAiService,
        speech_service::{SpeechPayload, SpeechService},
    },
};

/// Shared service that owns the chat and speech profiles.
pub struct LlmService {
    chat: LlmModelConfig,
    speech: SpeechConfig,

    openai: RwLock<Option<Arc<OpenAiService>>>,
    tts: RwLock<Option<Arc<SpeechService>>>,
}

impl LlmService {
    /// Creates a new service from explicit profiles. No I/O happens here.
    pub fn new(chat: LlmModelConfig, speech: SpeechConfig) -> Self {
        Self {
            chat,
            speech,
            openai: RwLock::new(None),
            tts: RwLock::new(None),
        }
    }

    /// Loads both profiles from the environment.
    ///
    /// # Errors
    /// Returns [`AiLlmError::Config`] for malformed values. Missing
    /// credentials are not reported here.
    pub fn from_env() -> Result<Self, AiLlmError> {
        Ok(Self::new(config_openai_chat()?, config_speech()?))
    }

    /// Generates text using the **chat** profile.
    ///
    /// # Arguments
    /// - `prompt`: user turn.
    /// - `system`: optional system instruction.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if the client cannot be built or generation fails.
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        let cli = self.get_or_init_openai().await?;
        cli.generate(prompt, system).await
    }

    /// Synthesizes speech using the **speech** profile.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if no endpoint is configured or the call fails.
    pub async fn synthesize(&self, text: &str) -> Result<SpeechPayload, AiLlmError> {
        let cli = self.get_or_init_tts().await?;
        cli.synthesize(text).await
    }

    /// Returns references to the current profiles `(chat, speech)`.
    pub fn profiles(&self) -> (&LlmModelConfig, &SpeechConfig) {
        (&self.chat, &self.speech)
    }

    /* --------------------- Internals --------------------- */

    async fn get_or_init_openai(&self) -> Result<Arc<OpenAiService>, AiLlmError> {
        if let Some(cli) = self.openai.read().await.as_ref() {
            return Ok(cli.clone());
        }
        let mut w = self.openai.write().await;
        if let Some(cli) = w.as_ref() {
            return Ok(cli.clone());
        }
        let cli = Arc::new(OpenAiService::new(self.chat.clone())?);
        *w = Some(cli.clone());
        Ok(cli)
    }

    async fn get_or_init_tts(&self) -> Result<Arc<SpeechService>, AiLlmError> {
        if let Some(cli) = self.tts.read().await.as_ref() {
            return Ok(cli.clone());
        }
        let mut w = self.tts.write().await;
        if let Some(cli) = w.as_ref() {
            return Ok(cli.clone());
        }
        let cli = Arc::new(SpeechService::new(&self.speech)?);
        *w = Some(cli.clone());
        Ok(cli)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::default_config::{FIXED_VOICE, persona_chat},
        error_handler::{ConfigError, ProviderError, ProviderErrorKind},
    };

    fn service(api_key: Option<&str>) -> LlmService {
        LlmService::new(
            persona_chat("http://127.0.0.1:9", api_key.map(str::to_string)),
            SpeechConfig {
                endpoint: None,
                api_key: None,
                voice: FIXED_VOICE.into(),
                timeout_secs: None,
            },
        )
    }

    #[tokio::test]
    async fn missing_key_fails_the_call_not_the_construction() {
        let svc = service(None);
        let err = svc.generate("hallo", None).await.unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Provider(ProviderError {
                kind: ProviderErrorKind::MissingApiKey,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn unconfigured_speech_fails_per_call() {
        let svc = service(Some("k"));
        let err = svc.synthesize("hallo").await.unwrap_err();
        assert!(matches!(err, AiLlmError::Config(ConfigError::MissingVar("TTS_URL"))));
    }

    #[tokio::test]
    async fn openai_client_is_built_once() {
        let svc = service(Some("k"));
        let a = svc.get_or_init_openai().await.unwrap();
        let b = svc.get_or_init_openai().await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
