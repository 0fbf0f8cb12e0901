//! Runtime configuration loaded from environment variables.

use ai_llm_service::error_handler::env_or;

/// Default summary endpoint; the URL-encoded topic is appended as a path segment.
pub const DEFAULT_ENRICHMENT_URL: &str = "https://de.wikipedia.org/api/rest_v1/page/summary";

/// Config bag for the persona pipeline. All fields have defaults via `from_env`.
#[derive(Clone, Debug)]
pub struct PersonaConfig {
    /// Base URL of the encyclopedia summary API.
    pub enrichment_url: String,
}

impl PersonaConfig {
    /// Build from environment variables with defaults.
    ///
    /// # Example
    /// ```
    /// use persona::PersonaConfig;
    /// let cfg = PersonaConfig::from_env();
    /// assert!(cfg.enrichment_url.starts_with("http"));
    /// ```
    pub fn from_env() -> Self {
        Self {
            enrichment_url: env_or("ENRICHMENT_URL", DEFAULT_ENRICHMENT_URL),
        }
    }
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            enrichment_url: DEFAULT_ENRICHMENT_URL.to_string(),
        }
    }
}
