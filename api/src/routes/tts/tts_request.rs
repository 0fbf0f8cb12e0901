use serde::Deserialize;

/// Request payload for `POST /tts`.
#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    /// Text to speak; missing or `null` reads as empty.
    #[serde(default)]
    pub text: Option<String>,
}
