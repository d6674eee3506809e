/**
 * These are implementations of the pairing solver.
 */
mod impls;
pub use impls::*;

/**
 * The profit evaluator every solver is measured against.
 */
mod evaluate;
pub use evaluate::{Profit, evaluate, profit};

mod arrangements;
pub use arrangements::Arrangements;

mod matrix;
pub use matrix::{CostMatrix, Slot};

mod lap;
pub use lap::assign;

mod error;
pub use error::SolverError;

/// JSON-friendly problem and outcome types
#[cfg(feature = "io")]
pub mod io;

// Re-export the port so that implementations can be used without naming pairing-core
pub use pairing_core::ports::Solver;
