//! Shared upstream clients for the persona relay: OpenAI chat completions and
//! an external speech-synthesis endpoint, with env-driven configuration,
//! unified errors, and a tracing layer.

pub mod config;
pub mod error_handler;
pub mod service_profiles;
pub mod services;
pub mod telemetry;

pub use error_handler::{AiLlmError, ConfigError, Provider, ProviderError, ProviderErrorKind};
pub use service_profiles::LlmService;
pub use services::speech_service::SpeechPayload;
