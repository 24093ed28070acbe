//! Cross-frontend primitives for presenting the table.
//!
//! Houses the round log, event handling, number formatting and the view model
//! that both the terminal client and future graphical clients reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod services;
pub mod view_model;

pub use config::{FeedbackConfig, FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use services::{UpdateScope, ViewModelUpdater};
pub use view_model::{HistoryMarker, Highlight, ViewModel};
