//! Deterministic dice rules and data types shared across clients.
//!
//! `game-core` defines the canonical rules of Lucky Bober (round resolution,
//! wager clamping, round lifecycle) and exposes pure APIs that the runtime and
//! frontends reuse. All state mutation flows through [`engine::GameEngine`];
//! timers and I/O live in the runtime, never here.
pub mod action;
pub mod config;
pub mod dice;
pub mod engine;
pub mod env;
pub mod error;
pub mod round;
pub mod state;
pub mod wager;

pub use action::{
    Action, ActionKind, ActionTransition, QuickBetAction, RefillAction, RefillError,
    SetWagerAction, SettleAction, SettleError, StartRollAction, StartRollError, WagerError,
};
pub use config::GameConfig;
pub use dice::{DicePair, Die, DieError, Side};
pub use engine::{
    ActionResult, ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase,
    TransitionPhaseError,
};
pub use env::{GameEnv, PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use round::{Resolution, RoundOutcome, resolve_round};
pub use state::{GameState, History, HistoryEntry, RoundPhase, StateDelta, StateFields};
pub use wager::{QuickBet, clamp_wager};
