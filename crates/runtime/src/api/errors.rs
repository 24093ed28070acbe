//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and rejected actions so clients
//! can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::ExecuteError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    /// The engine refused the action; game state is unchanged.
    #[error(transparent)]
    Rejected(#[from] ExecuteError),
}

impl RuntimeError {
    /// True when the error came from game rules rather than the runtime plumbing.
    pub fn is_rejection(&self) -> bool {
        matches!(self, RuntimeError::Rejected(_))
    }
}
