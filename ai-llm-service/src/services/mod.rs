pub mod open_ai_service;
pub mod speech_service;
