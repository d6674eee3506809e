use crate::SolverError;
use pairing_core::{
    models::{Item, Pairing, Requester, Valuation},
    ports::Negotiate,
};

/// A row or column of a [`CostMatrix`].
///
/// When the number of items and requesters differ, the shorter side is padded with
/// phantom entries. These are explicit sentinels in the index space: real entries come
/// first, so index `i` is `Real(i)` below the real count and `Phantom` beyond it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A real item or requester, by its index in the input
    Real(usize),
    /// Padding that stands for "no item" or "no requester"
    Phantom,
}

/// A square cost matrix for the minimum-cost perfect matching between items (rows)
/// and requesters (columns).
///
/// Costs are negated rewards, so that minimizing total cost maximizes total value:
///
/// | row \ column  | real requester           | phantom requester        |
/// |---------------|--------------------------|--------------------------|
/// | real item     | `-agreed_price`          | `-leftover_value`        |
/// | phantom item  | `0`                      | `0`                      |
///
/// A phantom item against a real requester costs nothing, i.e. an unmet request carries
/// no penalty.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    size: usize,
    items: usize,
    requesters: usize,
    // row-major
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Build the padded cost matrix for the given inputs
    pub fn build<R: Negotiate>(
        valuation: &Valuation<R>,
        items: &[Item],
        requesters: &[Requester],
    ) -> Self {
        let size = items.len().max(requesters.len());
        let mut costs = Vec::with_capacity(size * size);

        for row in 0..size {
            let item = items.get(row);
            for col in 0..size {
                let cost = match (item, requesters.get(col)) {
                    (Some(item), Some(requester)) => -valuation.agreed_price(requester, item),
                    (Some(item), None) => -valuation.leftover_value(item),
                    (None, _) => 0.0,
                };
                costs.push(cost);
            }
        }

        Self {
            size,
            items: items.len(),
            requesters: requesters.len(),
            costs,
        }
    }

    // Wrap a raw square matrix, where every row and column is real
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            items: size,
            requesters: size,
            costs: rows.into_iter().flatten().collect(),
        })
    }

    /// The number of rows (equivalently, columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cost of assigning `row` to `col`
    pub fn cost(&self, row: usize, col: usize) -> f64 {
        self.costs[row * self.size + col]
    }

    /// The rows of the matrix
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on 0, and an empty matrix has no rows anyway
        self.costs.chunks_exact(self.size.max(1))
    }

    /// Check that every cost is finite and that no sum of costs along an augmenting
    /// path (at most `2 * size` cells) can overflow.
    ///
    /// Finite weights and prices may still multiply or add up past `f64::MAX`, so every
    /// solver runs this before trusting the matrix.
    pub fn validate(&self) -> Result<(), SolverError> {
        let mut scale = 0.0f64;
        for (row, costs) in self.rows().enumerate() {
            for (col, &cost) in costs.iter().enumerate() {
                if !cost.is_finite() {
                    return Err(SolverError::NonFiniteCost { row, col, cost });
                }
                scale = scale.max(cost.abs());
            }
        }

        if (scale * (2 * self.size) as f64).is_finite() {
            Ok(())
        } else {
            Err(SolverError::Overflow {
                scale,
                size: self.size,
            })
        }
    }

    /// Translate a row → column assignment back into a pairing, dropping every
    /// assignment that involves a phantom on either side.
    ///
    /// # Safety
    ///
    /// `assignment` must be a permutation of `0..size`.
    pub unsafe fn pairing(&self, assignment: &[usize]) -> Pairing {
        let pairs = assignment
            .iter()
            .enumerate()
            .filter_map(|(row, &col)| match (self.row_slot(row), self.col_slot(col)) {
                (Slot::Real(item), Slot::Real(requester)) => Some((item, requester)),
                _ => None,
            });

        // Real rows and columns appear at most once in a permutation
        unsafe { Pairing::new_unchecked(self.items, self.requesters, pairs) }
    }

    /// What a row stands for
    pub fn row_slot(&self, row: usize) -> Slot {
        if row < self.items {
            Slot::Real(row)
        } else {
            Slot::Phantom
        }
    }

    /// What a column stands for
    pub fn col_slot(&self, col: usize) -> Slot {
        if col < self.requesters {
            Slot::Real(col)
        } else {
            Slot::Phantom
        }
    }
}
