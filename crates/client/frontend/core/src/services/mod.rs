//! Services that keep presentation state in step with the runtime.

mod updater;

pub use updater::{UpdateScope, ViewModelUpdater};
