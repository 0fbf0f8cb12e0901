use serde::{Deserialize, Serialize};

/// Request payload for `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// User utterance. Missing or `null` is passed upstream as an empty string.
    #[serde(default)]
    pub text: Option<String>,
}

/// Response payload for `POST /ask`.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Persona answer, at most five complete sentences.
    pub answer: String,
}
