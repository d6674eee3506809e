use crate::{CostMatrix, Solver, SolverError, assign};
use pairing_core::{
    models::{Item, Pairing, Requester, Valuation},
    ports::Negotiate,
};
use tracing::{Level, event};

/// A solver that reduces pairing to a minimum-cost perfect matching.
///
/// The inputs are laid out as a square [`CostMatrix`] (padding the shorter side with phantom
/// entries) and handed to [`assign`], which finds the global optimum in O(n³). Assignments
/// involving a phantom on either side are translated back as "unassigned".
///
/// For any input, the value of the resulting pairing equals the value found by
/// [`ExhaustiveSolver`](crate::ExhaustiveSolver), though tied optima may differ.
#[derive(Clone, Copy, Debug, Default)]
pub struct HungarianSolver;

impl Solver for HungarianSolver {
    type Error = SolverError;

    fn solve<R: Negotiate>(
        &self,
        valuation: &Valuation<R>,
        items: &[Item],
        requesters: &[Requester],
    ) -> Result<Pairing, Self::Error> {
        let matrix = CostMatrix::build(valuation, items, requesters);
        event!(
            Level::DEBUG,
            size = matrix.size(),
            items = items.len(),
            requesters = requesters.len(),
            "built cost matrix"
        );

        let assignment = assign(&matrix).inspect_err(|err| {
            event!(Level::ERROR, err = err.to_string());
        })?;

        // assign only ever returns permutations
        Ok(unsafe { matrix.pairing(&assignment) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairing_core::models::Pricing;

    #[test]
    fn leaves_valuable_items_unsold() {
        // Selling the big item to A earns 4, keeping it earns 5
        let valuation: Valuation = Valuation::default();
        let items = vec![Item::new(5.0).unwrap(), Item::new(10.0).unwrap()];
        let requesters = vec![Requester::new("A", 4.0, "").unwrap()];

        let pairing = HungarianSolver.solve(&valuation, &items, &requesters).unwrap();
        assert_eq!(pairing.item_of(0), Some(0));
        assert_eq!(pairing.leftover_items().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn nan_prices_are_reported() {
        let valuation = Valuation::new(Pricing::default(), |_: &Pricing, _: &Requester, _: &Item| f64::NAN);
        let items = vec![Item::new(1.0).unwrap()];
        let requesters = vec![Requester::new("A", 1.0, "").unwrap()];

        assert!(matches!(
            HungarianSolver.solve(&valuation, &items, &requesters),
            Err(SolverError::NonFiniteCost { row: 0, col: 0, .. })
        ));
    }
}
