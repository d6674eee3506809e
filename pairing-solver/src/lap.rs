use crate::{CostMatrix, SolverError};

/// Solve the linear assignment problem on a square cost matrix.
///
/// This is the shortest augmenting path variant of the Hungarian method (as popularized by
/// Jonker and Volgenant): rows are inserted one at a time, and each insertion runs a
/// Dijkstra-like search over reduced costs `cost(i, j) - u[i] - v[j]`, maintaining dual
/// potentials so that reduced costs stay non-negative. This finds the exact optimum in
/// O(n³) and handles negative costs.
///
/// Returns, for every row, the column it is assigned to.
pub fn assign(matrix: &CostMatrix) -> Result<Vec<usize>, SolverError> {
    let n = matrix.size();

    // Every cell must be usable, otherwise the potentials become meaningless
    matrix.validate()?;

    // The search is easiest to express with a virtual column 0 that holds the row being
    // inserted, so the arrays below are 1-indexed over columns (and over rows, with 0
    // meaning "unassigned").
    let mut u = vec![0.0; n + 1];
    let mut v = vec![0.0; n + 1];
    // owner[j] is the row assigned to column j
    let mut owner = vec![0usize; n + 1];
    // way[j] is the previous column on the shortest path to column j
    let mut way = vec![0usize; n + 1];

    for row in 1..=n {
        owner[0] = row;
        let mut j0 = 0;
        let mut minv = vec![f64::INFINITY; n + 1];
        let mut used = vec![false; n + 1];

        // Grow the alternating tree until it reaches a free column
        loop {
            used[j0] = true;
            let i0 = owner[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = None;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let reduced = matrix.cost(i0 - 1, j - 1) - u[i0] - v[j];
                if reduced < minv[j] {
                    minv[j] = reduced;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = Some(j);
                }
            }

            let Some(j1) = j1 else {
                return Err(SolverError::Infeasible(row - 1));
            };

            for j in 0..=n {
                if used[j] {
                    u[owner[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if owner[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path
        loop {
            let j1 = way[j0];
            owner[j0] = owner[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0; n];
    for j in 1..=n {
        // every column is owned once all rows have been inserted
        assignment[owner[j] - 1] = j - 1;
    }
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arrangements;
    use approx::assert_abs_diff_eq;

    fn total(matrix: &CostMatrix, assignment: &[usize]) -> f64 {
        assignment
            .iter()
            .enumerate()
            .map(|(row, &col)| matrix.cost(row, col))
            .sum()
    }

    fn brute_force(matrix: &CostMatrix) -> f64 {
        Arrangements::new(matrix.size(), matrix.size())
            .map(|cols| total(matrix, &cols))
            .fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn textbook() {
        let matrix = CostMatrix::from_rows(vec![
            vec![4.0, 1.0, 3.0],
            vec![2.0, 0.0, 5.0],
            vec![3.0, 2.0, 2.0],
        ])
        .unwrap();
        let assignment = assign(&matrix).unwrap();
        assert_eq!(assignment, vec![1, 0, 2]);
        assert_abs_diff_eq!(total(&matrix, &assignment), 5.0);
    }

    #[test]
    fn negative_costs() {
        let matrix = CostMatrix::from_rows(vec![
            vec![-4.0, -10.0],
            vec![-4.0, -5.0],
        ])
        .unwrap();
        let assignment = assign(&matrix).unwrap();
        assert_eq!(assignment, vec![1, 0]);
    }

    #[test]
    fn matches_brute_force() {
        // A fixed, irregular matrix with plenty of near-ties
        let rows = (0..5)
            .map(|i| {
                (0..5)
                    .map(|j| (((i * 7 + j * 13) % 11) as f64) - 0.5 * (i as f64) * (j as f64))
                    .collect()
            })
            .collect();
        let matrix = CostMatrix::from_rows(rows).unwrap();
        let assignment = assign(&matrix).unwrap();

        let mut cols = assignment.clone();
        cols.sort_unstable();
        assert_eq!(cols, vec![0, 1, 2, 3, 4]);
        assert_abs_diff_eq!(total(&matrix, &assignment), brute_force(&matrix), epsilon = 1e-9);
    }

    #[test]
    fn empty() {
        let matrix = CostMatrix::from_rows(vec![]).unwrap();
        assert_eq!(assign(&matrix).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn non_finite() {
        let matrix = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![f64::NAN, 1.0]]).unwrap();
        assert!(matches!(
            assign(&matrix),
            Err(SolverError::NonFiniteCost { row: 1, col: 0, .. })
        ));
    }
}
