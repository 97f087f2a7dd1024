/// Lexicographic k-of-n index combinations.
///
/// `Combinations::new(4, 2)` yields `[0,1] [0,2] [0,3] [1,2] [1,3] [2,3]`.
/// Choosing zero items yields one empty combination; choosing more than `n`
/// yields nothing.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), started: false, done: k > n }
    }

    /// Advance and borrow the next combination without allocating.
    pub fn next_indices(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        // Rightmost index that can still move right.
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - (k - i) {
                break;
            }
        }
        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(&self.indices)
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_indices().map(<[usize]>::to_vec)
    }
}

/// Binomial coefficient, saturating on overflow.
pub fn choose(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        acc = acc.saturating_mul((n - i) as u64) / (i as u64 + 1);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn four_choose_two_in_order() {
        let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            combos,
            vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
        );
    }

    #[test]
    fn seven_choose_five_matches_binomial() {
        let combos: Vec<Vec<usize>> = Combinations::new(7, 5).collect();
        assert_eq!(combos.len() as u64, choose(7, 5));
        assert_eq!(combos.first(), Some(&vec![0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&vec![2, 3, 4, 5, 6]));
        let unique: HashSet<Vec<usize>> = combos.into_iter().collect();
        assert_eq!(unique.len(), 21);
    }

    #[test]
    fn lexicographic_order_holds() {
        let combos: Vec<Vec<usize>> = Combinations::new(8, 3).collect();
        for pair in combos.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should precede {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(Combinations::new(5, 0).count(), 1);
        assert_eq!(Combinations::new(3, 4).count(), 0);
        assert_eq!(Combinations::new(3, 3).count(), 1);
        let mut it = Combinations::new(2, 2);
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn choose_values() {
        assert_eq!(choose(50, 5), 2_118_760);
        assert_eq!(choose(45, 2), 990);
        assert_eq!(choose(3, 5), 0);
    }
}
