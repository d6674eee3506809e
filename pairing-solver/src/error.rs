use thiserror::Error;

/// Failures of the assignment-based solver.
///
/// The cost matrix is fully specified and square by construction, so these indicate
/// either a defect (for example a negotiation rule producing NaN) or quantities too large
/// to price in floating point, never a condition worth retrying.
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    /// Error when a cell of the cost matrix is NaN or infinite
    #[error("Non-finite cost {cost} at row {row}, column {col}")]
    NonFiniteCost {
        /// The row (item slot) of the offending cell
        row: usize,
        /// The column (requester slot) of the offending cell
        col: usize,
        /// The offending value
        cost: f64,
    },
    /// Error when the costs are finite, but large enough that their sums overflow
    #[error("Costs as large as {scale} overflow when summed over {size} slots")]
    Overflow {
        /// The largest absolute cost
        scale: f64,
        /// The side of the square matrix
        size: usize,
    },
    /// Error when an external optimization backend fails
    #[error("Optimization backend failed: {0}")]
    Backend(String),
    /// Error when no assignment could be found for a row
    #[error("No feasible assignment for row {0}")]
    Infeasible(usize),
}
