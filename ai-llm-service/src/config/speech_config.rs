/// Configuration for the external speech-synthesis endpoint.
///
/// The endpoint is optional on purpose: the `/tts` route is an add-on and the
/// service must boot without it. Calls fail with a config error instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechConfig {
    /// Full URL the synthesis request is POSTed to.
    pub endpoint: Option<String>,

    /// Optional bearer token.
    pub api_key: Option<String>,

    /// Voice identifier sent with every request.
    pub voice: String,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
