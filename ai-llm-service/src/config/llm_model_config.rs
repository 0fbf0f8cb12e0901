/// Configuration for a chat-completion model invocation.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"gpt-4o-mini"`).
/// - `endpoint`: API base URL; the chat path is appended by the service.
/// - `api_key`: Optional API key. Absence is only reported when a call is made.
/// - `max_tokens`: Maximum number of tokens to generate.
/// - `temperature`: Controls randomness (0.0 = deterministic, >1.0 = more random).
/// - `top_p`: Nucleus sampling cutoff (alternative to temperature).
/// - `timeout_secs`: Optional request timeout in seconds; `None` keeps the client default.
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::llm_model_config::LlmModelConfig;
///
/// let cfg = LlmModelConfig {
///     model: "gpt-4o-mini".to_string(),
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: Some("sk-...".to_string()),
///     max_tokens: Some(200),
///     temperature: Some(0.8),
///     top_p: None,
///     timeout_secs: None,
/// };
/// assert_eq!(cfg.max_tokens, Some(200));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// Model identifier string (e.g., `"gpt-4o-mini"`).
    pub model: String,

    /// API base URL (e.g., `https://api.openai.com`).
    pub endpoint: String,

    /// Optional API key for authentication.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (controls creativity).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
