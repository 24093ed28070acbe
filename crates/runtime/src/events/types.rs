//! Event types for different topics.

use game_core::engine::{ActionResult, TransitionPhase};
use game_core::{Action, DicePair, ErrorSeverity, GameState, StateDelta};
use serde::{Deserialize, Serialize};

use super::feedback::{Feedback, FeedbackId};

/// Events related to game state changes (actions, failures)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// An action was executed with resulting state changes
    ActionExecuted {
        /// Nonce the action executed under.
        nonce: u64,
        action: Action,
        delta: Box<StateDelta>,
        result: ActionResult,
        /// State after action execution
        after_state: Box<GameState>,
    },

    /// An action was refused during the execution pipeline
    ActionRejected {
        action: Action,
        phase: TransitionPhase,
        severity: ErrorSeverity,
        error: String,
    },
}

/// Feedback banner lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FeedbackEvent {
    /// A new banner replaced whatever was shown before.
    Shown(Feedback),
    /// The banner was acknowledged and should disappear.
    Expired { id: FeedbackId },
}

/// Cosmetic dice animation while a round is rolling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnimationEvent {
    Started {
        nonce: u64,
        total_frames: u32,
    },

    /// One tumble frame. These dice never decide the round.
    Frame {
        frame: u32,
        total_frames: u32,
        player: DicePair,
        opponent: DicePair,
    },

    /// The real dice have landed and the round is settled.
    Finished {
        player: DicePair,
        opponent: DicePair,
    },
}
