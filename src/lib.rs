//! Candidate solutions for particle swarm optimization
//!
//! A [`Solution`] is a point in a bounded real-valued parameter space plus its
//! cached fitness. Continuous, discrete and constrained PSO variants are
//! expressed by implementing [`SolutionVariant`]; the shared type keeps every
//! parameter inside the thresholds and keeps fitness tied to the parameters
//! it was computed from.
//!
//! Velocity formulas, topologies and iteration control belong to the driver.

pub mod batch;
pub mod common;
pub mod error;
pub mod solution;
pub mod variants;

/// Re-export common types
pub use common::*;
pub use error::{SolutionError, SolutionResult};
pub use solution::{Solution, SolutionVariant};

/// Initialize the solution engine
pub fn init() {
    tracing::info!("Swarm solution engine initialized");
}
