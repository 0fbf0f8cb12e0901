pub mod tts_request;
pub mod tts_route;
