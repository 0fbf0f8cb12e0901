//! Persona Responder: fixed system turn + one user turn, one model call.

use std::sync::Arc;

use ai_llm_service::LlmService;
use tracing::{debug, info};

use crate::{
    error::PersonaError,
    prompt::{PERSONA_SYSTEM_PROMPT, build_user_turn},
};

/// Sends persona-framed questions to the chat model.
#[derive(Clone)]
pub struct PersonaResponder {
    llm: Arc<LlmService>,
}

impl PersonaResponder {
    pub fn new(llm: Arc<LlmService>) -> Self {
        Self { llm }
    }

    /// Returns the raw generated text for `question`, optionally grounded on
    /// `passage` (empty string = no enrichment).
    ///
    /// # Errors
    /// [`PersonaError::Generation`] on any upstream failure. No retry.
    pub async fn respond(&self, question: &str, passage: &str) -> Result<String, PersonaError> {
        let user_turn = build_user_turn(question, passage);
        debug!(%user_turn, "persona user turn");

        let raw = self
            .llm
            .generate(&user_turn, Some(PERSONA_SYSTEM_PROMPT))
            .await?;

        info!(
            question_len = question.len(),
            enriched = !passage.trim().is_empty(),
            raw_len = raw.len(),
            "persona answer generated"
        );
        debug!(%raw, "persona raw answer");
        Ok(raw)
    }
}
