pub mod default_config;
pub mod llm_model_config;
pub mod speech_config;
