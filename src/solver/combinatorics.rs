//! Iterative combinatorial generators
//!
//! Both generators keep their position in an explicit index vector, so
//! there is no recursion. With 4 pegs the worst cases are tiny: at most
//! C(4, 2) = 6 subsets and 4^4 = 256 odometer states per derangement
//! enumeration, of which at most 9 survive (the derangements of 4 items).

/// All `k`-element subsets of `items`, in lexicographic index order
pub struct KSubsets<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T: Copy> KSubsets<'a, T> {
    #[must_use]
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            done: k > items.len(),
        }
    }
}

impl<T: Copy> Iterator for KSubsets<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let subset = self.indices.iter().map(|&i| self.items[i]).collect();

        // Advance the rightmost index that still has room
        let n = self.items.len();
        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(subset)
    }
}

/// Identity-free injections from `sources` into `targets`
///
/// Yields `(source, target)` pairs, one per source, where every target is
/// distinct and no source maps to itself. Mappings come out in
/// lexicographic order of the target indices.
pub struct Derangements<'a> {
    sources: &'a [usize],
    targets: &'a [usize],
    odometer: Vec<usize>,
    done: bool,
}

impl<'a> Derangements<'a> {
    #[must_use]
    pub fn new(sources: &'a [usize], targets: &'a [usize]) -> Self {
        Self {
            sources,
            targets,
            odometer: vec![0; sources.len()],
            done: sources.len() > targets.len(),
        }
    }

    fn is_admissible(&self) -> bool {
        self.odometer.iter().enumerate().all(|(i, &t)| {
            self.targets[t] != self.sources[i] && !self.odometer[..i].contains(&t)
        })
    }

    fn advance(&mut self) {
        let n = self.targets.len();
        for digit in self.odometer.iter_mut().rev() {
            *digit += 1;
            if *digit < n {
                return;
            }
            *digit = 0;
        }
        self.done = true;
    }
}

impl Iterator for Derangements<'_> {
    type Item = Vec<(usize, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let mapping = self.is_admissible().then(|| {
                self.sources
                    .iter()
                    .zip(&self.odometer)
                    .map(|(&s, &t)| (s, self.targets[t]))
                    .collect()
            });
            self.advance();
            if mapping.is_some() {
                return mapping;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsets_of_four_choose_two() {
        let subsets: Vec<Vec<usize>> = KSubsets::new(&[0, 1, 2, 3], 2).collect();
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn subsets_edge_sizes() {
        let empty: Vec<Vec<usize>> = KSubsets::new(&[4, 5, 6], 0).collect();
        assert_eq!(empty, vec![Vec::<usize>::new()]);

        let full: Vec<Vec<usize>> = KSubsets::new(&[4, 5, 6], 3).collect();
        assert_eq!(full, vec![vec![4, 5, 6]]);

        assert_eq!(KSubsets::new(&[4, 5, 6], 4).count(), 0);
    }

    #[test]
    fn subset_counts_match_binomials() {
        let items = [0, 1, 2, 3, 4];
        let counts: Vec<usize> = (0..=5).map(|k| KSubsets::new(&items, k).count()).collect();
        assert_eq!(counts, vec![1, 5, 10, 10, 5, 1]);
    }

    #[test]
    fn derangements_of_three() {
        let positions = [0, 1, 2];
        let mappings: Vec<_> = Derangements::new(&positions, &positions).collect();
        assert_eq!(
            mappings,
            vec![vec![(0, 1), (1, 2), (2, 0)], vec![(0, 2), (1, 0), (2, 1)]]
        );
    }

    #[test]
    fn derangements_of_four_count() {
        let positions = [0, 1, 2, 3];
        assert_eq!(Derangements::new(&positions, &positions).count(), 9);
    }

    #[test]
    fn partial_injections_avoid_fixed_points() {
        let sources = [1];
        let targets = [0, 1, 2];
        let mappings: Vec<_> = Derangements::new(&sources, &targets).collect();
        assert_eq!(mappings, vec![vec![(1, 0)], vec![(1, 2)]]);

        let sources = [0, 2];
        for mapping in Derangements::new(&sources, &targets) {
            assert!(mapping.iter().all(|(s, t)| s != t));
            assert_ne!(mapping[0].1, mapping[1].1);
        }
        assert_eq!(Derangements::new(&sources, &targets).count(), 3);
    }

    #[test]
    fn empty_sources_yield_one_empty_mapping() {
        let mappings: Vec<_> = Derangements::new(&[], &[0, 1]).collect();
        assert_eq!(mappings, vec![Vec::new()]);
        assert_eq!(Derangements::new(&[0, 1, 2], &[1, 2]).count(), 0);
    }
}
