use std::error::Error;

use ai_llm_service::telemetry;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // `.env` is optional; real environment variables win.
    let dotenv = dotenvy::dotenv();

    telemetry::init("info");

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "ignoring unreadable .env"),
    }

    api::start().await?;

    Ok(())
}
