//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the table.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use game_core::{GameConfig, GameState, PcgRng, RngOracle};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, SimulationWorker};

/// Durations of the two timers the worker owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Tumble frames shown before the real dice are drawn.
    pub roll_ticks: u32,
    pub tick_interval: Duration,
    /// Delay between "GAME OVER!" and the refill.
    pub refill_delay: Duration,
}

impl TimingConfig {
    /// Raises the frame count and period to at least one so the ticker can run.
    pub fn normalized(self) -> Self {
        Self {
            roll_ticks: self.roll_ticks.max(1),
            tick_interval: self.tick_interval.max(Duration::from_millis(1)),
            refill_delay: self.refill_delay,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            roll_ticks: 12,
            tick_interval: Duration::from_millis(80),
            refill_delay: Duration::from_millis(1500),
        }
    }
}

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub timing: TimingConfig,
    /// Fixed dice seed; drawn from the OS RNG when unset.
    pub game_seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            timing: TimingConfig::default(),
            game_seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    /// Construct runtime configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BOBER_STARTING_BALANCE` - Balance at start and after refill (default: 100)
    /// - `BOBER_DEFAULT_WAGER` - Wager at start and after refill (default: 10)
    /// - `BOBER_CRITICAL_MULTIPLIER` - Boxcars payout multiplier (default: 5)
    /// - `BOBER_GAME_SEED` - Fixed dice seed (default: random)
    /// - `BOBER_ROLL_TICKS` - Tumble frames per roll (default: 12)
    /// - `BOBER_TICK_INTERVAL_MS` - Tumble frame period (default: 80)
    /// - `BOBER_REFILL_DELAY_MS` - Delay before a bankrupt refill (default: 1500)
    /// - `RUNTIME_EVENT_BUFFER` - Broadcast capacity per topic (default: 100)
    /// - `RUNTIME_COMMAND_BUFFER` - Command queue capacity (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(balance) = read_env::<u64>("BOBER_STARTING_BALANCE") {
            config.game_config = config.game_config.with_starting_balance(balance);
        }
        if let Some(wager) = read_env::<u64>("BOBER_DEFAULT_WAGER") {
            config.game_config = config.game_config.with_default_wager(wager);
        }
        if let Some(multiplier) = read_env::<u64>("BOBER_CRITICAL_MULTIPLIER") {
            config.game_config = config.game_config.with_critical_multiplier(multiplier);
        }
        config.game_seed = read_env::<u64>("BOBER_GAME_SEED");

        if let Some(ticks) = read_env::<u32>("BOBER_ROLL_TICKS") {
            config.timing.roll_ticks = ticks.max(1);
        }
        if let Some(ms) = read_env::<u64>("BOBER_TICK_INTERVAL_MS") {
            config.timing.tick_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = read_env::<u64>("BOBER_REFILL_DELAY_MS") {
            config.timing.refill_delay = Duration::from_millis(ms);
        }

        if let Some(capacity) = read_env::<usize>("RUNTIME_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("RUNTIME_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that orchestrates the table.
///
/// Runtime owns the worker; [`RuntimeHandle`] provides a cloneable façade
/// for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    game_seed: u64,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Seed the dice of this session are drawn from.
    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    /// Subscribe to events from one topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every [`RuntimeHandle`] clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    rng: Option<Arc<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state
    ///
    /// Its `game_seed` wins over the configured one.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Fix the dice seed
    pub fn game_seed(mut self, seed: u64) -> Self {
        self.config.game_seed = Some(seed);
        self
    }

    /// Replace the default PCG dice oracle
    pub fn rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Build the runtime and spawn its worker
    pub async fn build(self) -> Result<Runtime> {
        let initial_state = match self.state {
            Some(state) => state,
            None => {
                let seed = self.config.game_seed.unwrap_or_else(rand::random);
                GameState::new(&self.config.game_config, seed)
            }
        };
        let game_seed = initial_state.game_seed;
        let rng = self.rng.unwrap_or_else(|| Arc::new(PcgRng));

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(
            initial_state,
            self.config.game_config,
            self.config.timing.normalized(),
            rng,
            command_rx,
            event_bus,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        tracing::info!(game_seed, "runtime started");

        Ok(Runtime {
            handle,
            game_seed,
            sim_worker_handle,
        })
    }
}
