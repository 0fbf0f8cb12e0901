use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt, layer::SubscriberExt};

/// Crates whose events are rendered (the crate itself or any of its modules).
pub const TARGET_PREFIXES: &[&str] = &[
    "barbarossa_backend",
    "api",
    "persona",
    "ai_llm_service",
    "tower_http",
];

/// RFC3339 UTC timer implemented via `chrono` (no extra features).
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        // Keep timestamps compact: no fractional seconds, Z-suffix
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

fn is_workspace_target(target: &str) -> bool {
    TARGET_PREFIXES.iter().any(|p| {
        target
            .strip_prefix(*p)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

/// Build a formatting layer that renders only events emitted by this workspace
/// (plus `tower_http` request traces).
///
/// - RFC3339 UTC timestamps
/// - Compact single-line format
/// - `file:line` and target (module path)
/// - Span close events (duration at the end of spans)
/// - ANSI colors only when stdout is a terminal
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = io::stdout().is_terminal();

    let only_ours = filter::filter_fn(|meta| is_workspace_target(meta.target()));

    fmt::layer()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(use_ansi)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .event_format(fmt::format().compact().with_source_location(true))
        .with_filter(only_ours)
}

/// `RUST_LOG` if set and valid, otherwise `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init(default: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(default))
        .with(layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_only_workspace_targets() {
        assert!(is_workspace_target("persona::pipeline"));
        assert!(is_workspace_target("ai_llm_service::services::open_ai_service"));
        assert!(is_workspace_target("tower_http::trace::on_response"));
        assert!(!is_workspace_target("hyper::proto"));
        assert!(!is_workspace_target("reqwest::connect"));
    }

    #[test]
    fn crate_names_match_whole_segments() {
        assert!(is_workspace_target("api"));
        assert!(is_workspace_target("api::routes::ask::ask_route"));
        assert!(!is_workspace_target("apiary::client"));
        assert!(!is_workspace_target("persona_extra"));
    }
}
