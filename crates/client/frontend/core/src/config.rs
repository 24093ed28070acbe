//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub feedback: FeedbackConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, feedback: FeedbackConfig) -> Self {
        Self { messages, feedback }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Round log capacity (default: 64)
    /// - `CLI_FEEDBACK_TTL_MS` - How long a banner stays before it is acknowledged (default: 1500)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(ms) = read_env::<u64>("CLI_FEEDBACK_TTL_MS") {
            config.feedback.ttl = Duration::from_millis(ms);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

#[derive(Clone, Debug)]
pub struct FeedbackConfig {
    /// Time a banner stays on screen before the frontend expires it.
    pub ttl: Duration,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_millis(1500),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
