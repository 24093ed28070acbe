//! Runtime orchestration for the dice table.
//!
//! This crate owns the single authoritative [`game_core::GameState`] inside a
//! background worker, drives the roll animation and refill timers, and exposes
//! a cloneable [`RuntimeHandle`] plus a topic-based event bus to frontends.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus and feedback messages
//! - `workers` keeps the simulation task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RollStatus, RuntimeError, RuntimeHandle};
pub use events::{
    AnimationEvent, Event, EventBus, Feedback, FeedbackEvent, FeedbackId, FeedbackKind,
    FeedbackTone, GameStateEvent, Topic,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, TimingConfig};
