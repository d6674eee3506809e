/// Reference implementation that tries every assignment
mod exhaustive;
pub use exhaustive::ExhaustiveSolver;

/// Implementation using minimum-cost perfect matching on a padded cost matrix
mod hungarian;
pub use hungarian::HungarianSolver;

/// Implementation delegating to a mixed-integer program solved by `good_lp`
#[cfg(feature = "lp")]
mod lp;
#[cfg(feature = "lp")]
pub use lp::LpSolver;
