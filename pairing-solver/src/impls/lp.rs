use crate::{CostMatrix, Solver, SolverError};
use good_lp::{
    Expression, Solution, SolverModel, Variable, constraint, microlp, variable,
    variables,
};
use pairing_core::{
    models::{Item, Pairing, Requester, Valuation},
    ports::Negotiate,
};
use tracing::{Level, event};

// Binary variables come back from the solver as floats
const BINARY_THRESHOLD: f64 = 0.5;

/// A solver that hands the padded [`CostMatrix`] to a mixed-integer linear program.
///
/// Every cell gets a binary variable, every row and every column must be covered exactly
/// once, and the total cost is minimized with the `microlp` backend of `good_lp`. The
/// assignment polytope is integral, so this reaches the same optimum as
/// [`HungarianSolver`](crate::HungarianSolver), without its O(n³) guarantee.
#[derive(Clone, Copy, Debug, Default)]
pub struct LpSolver;

impl Solver for LpSolver {
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

        let assignment = assign_lp(&matrix).inspect_err(|err| {
            event!(Level::ERROR, err = err.to_string());
        })?;

        // assign_lp covers every row and column exactly once
        Ok(unsafe { matrix.pairing(&assignment) })
    }
}

fn assign_lp(matrix: &CostMatrix) -> Result<Vec<usize>, SolverError> {
    matrix.validate()?;

    let n = matrix.size();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut vars = variables!();
    let cells = (0..n)
        .map(|_| {
            (0..n)
                .map(|_| vars.add(variable().binary()))
                .collect::<Vec<Variable>>()
        })
        .collect::<Vec<_>>();

    let mut objective: Expression = 0.0.into();
    for (row, costs) in matrix.rows().enumerate() {
        for (col, &cost) in costs.iter().enumerate() {
            objective = objective + cost * cells[row][col];
        }
    }

    let mut problem = vars.minimise(&objective).using(microlp);

    // Each row is assigned exactly one column
    for row in cells.iter() {
        let covered = row
            .iter()
            .fold(Expression::from(0.0), |acc, var| acc + *var);
        problem = problem.with(constraint!(covered == 1));
    }

    // and each column exactly one row
    for col in 0..n {
        let covered = cells
            .iter()
            .fold(Expression::from(0.0), |acc, row| acc + row[col]);
        problem = problem.with(constraint!(covered == 1));
    }

    let solution = problem
        .solve()
        .map_err(|err| SolverError::Backend(err.to_string()))?;

    cells
        .iter()
        .enumerate()
        .map(|(row, vars)| {
            vars.iter()
                .position(|&var| solution.value(var) > BINARY_THRESHOLD)
                .ok_or(SolverError::Infeasible(row))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign;

    fn total(matrix: &CostMatrix, assignment: &[usize]) -> f64 {
        assignment
            .iter()
            .enumerate()
            .map(|(row, &col)| matrix.cost(row, col))
            .sum()
    }

    #[test]
    fn agrees_with_augmenting_paths() {
        let rows = (0..5)
            .map(|i| {
                (0..5)
                    .map(|j| (((i * 5 + j * 3) % 7) as f64) - (i as f64) * 0.25)
                    .collect()
            })
            .collect();
        let matrix = CostMatrix::from_rows(rows).unwrap();

        let lp = assign_lp(&matrix).unwrap();
        let hungarian = assign(&matrix).unwrap();

        let mut cols = lp.clone();
        cols.sort_unstable();
        assert_eq!(cols, vec![0, 1, 2, 3, 4]);
        approx::assert_abs_diff_eq!(total(&matrix, &lp), total(&matrix, &hungarian), epsilon = 1e-6);
    }

    #[test]
    fn empty() {
        let matrix = CostMatrix::from_rows(vec![]).unwrap();
        assert_eq!(assign_lp(&matrix).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn leaves_valuable_items_unsold() {
        let valuation: Valuation = Valuation::default();
        let items = vec![Item::new(5.0).unwrap(), Item::new(10.0).unwrap()];
        let requesters = vec![Requester::new("A", 4.0, "").unwrap()];

        let pairing = LpSolver.solve(&valuation, &items, &requesters).unwrap();
        assert_eq!(pairing.item_of(0), Some(0));
        assert_eq!(pairing.leftover_items().collect::<Vec<_>>(), vec![1]);
    }
}
