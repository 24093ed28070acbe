//! Lucky Bober client binary.
//!
//! Main entry point: the composition root that assembles
//! 1. Runtime (round lifecycle) via RuntimeBuilder
//! 2. Frontend (terminal UI)
//!
//! Both are built independently and injected into the Client container.
//!
//! ```bash
//! BOBER_GAME_SEED=42 cargo run -p lucky-bober-client
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
use lucky_bober_client::Client;
use runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    let session_id = session_id();

    // 2. Setup logging; the guard flushes the log file on exit
    let _log_guard = logging::setup_logging(&session_id)?;

    tracing::info!("Starting Lucky Bober");
    tracing::info!(
        starting_balance = runtime_config.game_config.starting_balance,
        default_wager = runtime_config.game_config.default_wager,
        roll_ticks = runtime_config.timing.roll_ticks,
        "table configuration"
    );

    // 3. Build Runtime (independent layer)
    let game_config = runtime_config.game_config;
    let runtime = Runtime::builder().config(runtime_config).build().await?;

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config, game_config);

    // 5. Build Client (composition layer) and run
    let client = Client::builder()
        .runtime(runtime)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

/// `GAME_SESSION_ID`, or a timestamp-based id.
fn session_id() -> String {
    std::env::var("GAME_SESSION_ID").unwrap_or_else(|_| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    })
}
