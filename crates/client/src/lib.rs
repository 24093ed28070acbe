//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Round lifecycle, timers and event bus)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend only ever sees a [`RuntimeHandle`](runtime::RuntimeHandle);
//! the client owns the runtime and shuts it down once the frontend returns.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::{Context, Result};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives an already running runtime and a frontend
/// 2. Client::run() transfers control to the frontend (blocking)
/// 3. On frontend exit, the runtime worker is shut down
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits, then stop the runtime.
    ///
    /// A frontend error is reported before any shutdown error.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        tracing::info!(game_seed = runtime.game_seed(), "client starting");

        let frontend_result = frontend.run(runtime.handle()).await;
        drop(frontend);

        let shutdown_result = runtime
            .shutdown()
            .await
            .context("runtime did not shut down cleanly");

        frontend_result?;
        shutdown_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use runtime::{RollStatus, RuntimeHandle};

    /// Frontend that starts one round and leaves while the dice still tumble.
    struct OneRoll;

    #[async_trait]
    impl Frontend for OneRoll {
        async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
            let status = handle.roll().await?;
            anyhow::ensure!(status == RollStatus::Started, "unexpected {status:?}");
            Ok(())
        }
    }

    #[tokio::test]
    async fn frontend_exit_shuts_the_runtime_down() {
        let runtime = runtime::Runtime::builder()
            .game_seed(7)
            .build()
            .await
            .unwrap();

        let client = Client::builder()
            .runtime(runtime)
            .frontend(OneRoll)
            .build()
            .unwrap();

        client.run().await.unwrap();
    }

    #[test]
    fn build_requires_runtime_and_frontend() {
        let err = Client::builder().build().err().unwrap();
        assert!(err.to_string().contains("Runtime is required"));
    }
}
