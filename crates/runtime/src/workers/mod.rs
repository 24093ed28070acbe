//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the game state and both timers.

mod simulation;

pub use simulation::{Command, SimulationWorker};
