//! Persona answer pipeline.
//!
//! Public API: [`AnswerPipeline::ask`]. It checks the question for fact
//! keywords, optionally pulls a three-sentence encyclopedia passage, asks the
//! chat model in the Barbarossa persona, and trims the reply to five
//! complete sentences.

mod cfg;
mod error;

pub mod enrichment;
pub mod fact_detector;
pub mod pipeline;
pub mod prompt;
pub mod responder;
pub mod shaping;

use std::sync::Arc;

use ai_llm_service::LlmService;

pub use cfg::{DEFAULT_ENRICHMENT_URL, PersonaConfig};
pub use enrichment::EnrichmentClient;
pub use error::PersonaError;
pub use pipeline::{AnswerPipeline, PersonaAnswer};
pub use responder::PersonaResponder;

/// Wires the pipeline from a config and a shared LLM service.
///
/// # Errors
/// Propagates [`PersonaError::EnrichmentSetup`].
pub fn build_pipeline(
    cfg: &PersonaConfig,
    llm: Arc<LlmService>,
) -> Result<AnswerPipeline, PersonaError> {
    let enricher = EnrichmentClient::new(&cfg.enrichment_url)?;
    Ok(AnswerPipeline::new(enricher, PersonaResponder::new(llm)))
}
