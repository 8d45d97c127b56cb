//! Command implementations

pub mod context;
pub mod simple;
pub mod simulate;

pub use context::GameContext;
pub use simple::run_simple;
pub use simulate::{SimulationResult, run_simulation};
