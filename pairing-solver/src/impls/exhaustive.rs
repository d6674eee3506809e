use crate::{Arrangements, CostMatrix, Solver, SolverError, evaluate};
use pairing_core::{
    models::{Item, Pairing, Requester, Valuation},
    ports::Negotiate,
};
use tracing::{Level, event};

/// A solver that enumerates every assignment and keeps the best one.
///
/// With `k = min(|items|, |requesters|)`, the side with more entries is the pool from which
/// ordered selections of `k` distinct entries are drawn, and each selection is zipped with
/// the other side in input order. When there are at least as many items as requesters this
/// is the classical "permute the items over the requesters" enumeration. Every candidate is
/// scored with [`evaluate`] and the first one achieving the maximum, in lexicographic
/// enumeration order, is returned.
///
/// Every candidate's value is a sum of cells of the [`CostMatrix`] the optimized solver
/// would build, so the same validation runs first and the two solvers fail alike.
///
/// This takes O(n! / (n - k)!) time and is meant as a reference baseline for small inputs.
/// It has no internal cancellation; callers must bound the input size before choosing it
/// (beyond a handful of entries, use [`HungarianSolver`](crate::HungarianSolver)).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveSolver;

impl Solver for ExhaustiveSolver {
    type Error = SolverError;

    fn solve<R: Negotiate>(
        &self,
        valuation: &Valuation<R>,
        items: &[Item],
        requesters: &[Requester],
    ) -> Result<Pairing, Self::Error> {
        CostMatrix::build(valuation, items, requesters)
            .validate()
            .inspect_err(|err| {
                event!(Level::ERROR, err = err.to_string());
            })?;

        let (nitems, nrequesters) = (items.len(), requesters.len());
        if nitems == 0 || nrequesters == 0 {
            return Ok(Pairing::empty(nitems, nrequesters));
        }

        // The shorter side keeps its input order and the longer side is permuted over it
        let items_are_pool = nitems >= nrequesters;
        let (pool, slots) = if items_are_pool {
            (nitems, nrequesters)
        } else {
            (nrequesters, nitems)
        };

        let mut best: Option<(f64, Pairing)> = None;
        let mut candidates = 0usize;

        for arrangement in Arrangements::new(pool, slots) {
            candidates += 1;
            let pairs = arrangement.into_iter().enumerate().map(|(slot, pick)| {
                if items_are_pool {
                    (pick, slot)
                } else {
                    (slot, pick)
                }
            });

            // Arrangements never repeat an index and stay within the pool
            let candidate = unsafe { Pairing::new_unchecked(nitems, nrequesters, pairs) };
            let value = evaluate(valuation, items, requesters, &candidate);

            // Strict comparison, so that the first maximum wins ties
            if best.as_ref().is_none_or(|(incumbent, _)| value > *incumbent) {
                best = Some((value, candidate));
            }
        }

        event!(
            Level::DEBUG,
            candidates,
            value = best.as_ref().map(|(value, _)| *value),
            "exhaustive search complete"
        );

        Ok(best
            .map(|(_, pairing)| pairing)
            .unwrap_or_else(|| Pairing::empty(nitems, nrequesters)))
    }
}
