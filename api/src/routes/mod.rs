pub mod ask;
pub mod spa_fallback;
pub mod tts;
