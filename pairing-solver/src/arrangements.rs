/// An iterator over the ordered selections of `slots` distinct indices out of `0..pool`.
///
/// Arrangements are produced in lexicographic order, starting at `[0, 1, .., slots - 1]`,
/// and there are `pool! / (pool - slots)!` of them. Selecting zero slots yields a single,
/// empty arrangement; selecting more slots than the pool holds yields nothing.
#[derive(Debug, Clone)]
pub struct Arrangements {
    pool: usize,
    current: Vec<usize>,
    used: Vec<bool>,
    // None until the first call to next(), then whether the sequence is exhausted
    exhausted: Option<bool>,
}

impl Arrangements {
    /// Enumerate the ordered selections of `slots` indices out of `0..pool`
    pub fn new(pool: usize, slots: usize) -> Self {
        let exhausted = if slots > pool { Some(true) } else { None };
        let mut used = vec![false; pool];
        let current = (0..slots.min(pool)).collect::<Vec<_>>();
        for &idx in current.iter() {
            used[idx] = true;
        }
        Self {
            pool,
            current,
            used,
            exhausted,
        }
    }

    // Step to the lexicographic successor, returning false if there is none.
    fn advance(&mut self) -> bool {
        let slots = self.current.len();
        for pos in (0..slots).rev() {
            let released = self.current[pos];
            self.used[released] = false;

            // The smallest free index above the one we released takes its place
            if let Some(next) = (released + 1..self.pool).find(|&idx| !self.used[idx]) {
                self.current[pos] = next;
                self.used[next] = true;

                // and the remaining slots are refilled with the smallest free indices
                let mut free = (0..self.pool).filter(|&idx| !self.used[idx]);
                let refill = (pos + 1..slots).zip(&mut free).collect::<Vec<_>>();
                for (slot, idx) in refill {
                    self.current[slot] = idx;
                    self.used[idx] = true;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Arrangements {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.exhausted {
            Some(true) => None,
            None => {
                self.exhausted = Some(false);
                Some(self.current.clone())
            }
            Some(false) => {
                if self.advance() {
                    Some(self.current.clone())
                } else {
                    self.exhausted = Some(true);
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn lexicographic_order() {
        let all = Arrangements::new(3, 2).collect::<Vec<_>>();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 2],
                vec![2, 0],
                vec![2, 1],
            ]
        );
    }

    #[rstest]
    #[case(0, 0, 1)]
    #[case(3, 0, 1)]
    #[case(4, 4, 24)]
    #[case(5, 3, 60)]
    #[case(6, 6, 720)]
    #[case(2, 3, 0)]
    fn counts(#[case] pool: usize, #[case] slots: usize, #[case] expected: usize) {
        assert_eq!(Arrangements::new(pool, slots).count(), expected);
    }

    #[test]
    fn no_repetition() {
        for arrangement in Arrangements::new(5, 4) {
            let mut sorted = arrangement.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), arrangement.len());
        }
    }
}
