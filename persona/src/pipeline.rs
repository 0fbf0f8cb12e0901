//! The `/ask` sequence: detect → enrich (maybe) → respond → shape.

use tracing::{debug, instrument};

use crate::{
    enrichment::EnrichmentClient, error::PersonaError, fact_detector::is_factual,
    responder::PersonaResponder, shaping::shape_answer,
};

/// Shaped answer together with the passage that went into the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonaAnswer {
    /// At most five complete sentences.
    pub answer: String,
    /// Enrichment passage used for this answer; empty when none.
    pub passage: String,
}

/// Stateless per-request pipeline. Cheap to clone.
#[derive(Clone)]
pub struct AnswerPipeline {
    enricher: EnrichmentClient,
    responder: PersonaResponder,
}

impl AnswerPipeline {
    pub fn new(enricher: EnrichmentClient, responder: PersonaResponder) -> Self {
        Self {
            enricher,
            responder,
        }
    }

    /// Answers `text` in persona.
    ///
    /// # Errors
    /// Only generation failures propagate; enrichment failures degrade to
    /// "no passage".
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub async fn ask(&self, text: &str) -> Result<PersonaAnswer, PersonaError> {
        let passage = if is_factual(text) {
            self.enricher.passage(text).await
        } else {
            debug!("no fact trigger, skipping enrichment");
            String::new()
        };

        let raw = self.responder.respond(text, &passage).await?;
        let answer = shape_answer(&raw);

        Ok(PersonaAnswer { answer, passage })
    }
}
