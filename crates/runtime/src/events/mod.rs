//! Topic-based event bus for runtime events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need.

mod bus;
mod feedback;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use feedback::{Feedback, FeedbackId, FeedbackKind, FeedbackTone};
pub use types::{AnimationEvent, FeedbackEvent, GameStateEvent};
