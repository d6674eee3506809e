use super::Negotiate;
use crate::models::{Item, Pairing, Requester, Valuation};

/// Interface for pairing solvers.
///
/// A solver takes the full set of items and requesters and produces the pairing that
/// maximizes the total value under the provided valuation. Solvers are pure computations:
/// they neither read nor write shared state, so they may be invoked repeatedly and from
/// independent contexts without coordination.
pub trait Solver {
    /// Error type for solver failures
    type Error: std::error::Error;

    /// Produce an optimal pairing.
    ///
    /// # Arguments
    ///
    /// - `valuation`: The pricing model and negotiation rule
    /// - `items`: The items available, identified by their index
    /// - `requesters`: The requesters, identified by their index
    ///
    /// # Returns
    ///
    /// A pairing sized to `items` and `requesters`. A pairing is either fully
    /// computed or not produced at all.
    fn solve<R: Negotiate>(
        &self,
        valuation: &Valuation<R>,
        items: &[Item],
        requesters: &[Requester],
    ) -> Result<Pairing, Self::Error>;
}
