// file: src/corpus/sparse.rs
// description: sparse term-weight vectors over a fixed vocabulary

use serde::{Deserialize, Serialize};

/// Column/weight pairs sorted by column, no duplicate columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(usize, f32)>,
}

impl SparseVector {
    pub fn from_unsorted(mut entries: Vec<(usize, f32)>) -> Self {
        entries.sort_unstable_by_key(|&(column, _)| column);
        entries.dedup_by(|next, prev| {
            if next.0 == prev.0 {
                prev.1 += next.1;
                true
            } else {
                false
            }
        });
        entries.retain(|&(_, weight)| weight != 0.0);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f32 {
        self.entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f32>()
            .sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < self.entries.len() && j < other.entries.len() {
            let (ca, wa) = self.entries[i];
            let (cb, wb) = other.entries[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }

    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for entry in &mut self.entries {
                entry.1 /= norm;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unsorted_merges_columns() {
        let v = SparseVector::from_unsorted(vec![(3, 1.0), (1, 2.0), (3, 0.5), (2, 0.0)]);
        assert_eq!(v.entries(), &[(1, 2.0), (3, 1.5)]);
    }

    #[test]
    fn test_dot_only_shared_columns() {
        let a = SparseVector::from_unsorted(vec![(0, 1.0), (2, 2.0), (5, 3.0)]);
        let b = SparseVector::from_unsorted(vec![(2, 4.0), (4, 1.0), (5, 1.0)]);
        assert_eq!(a.dot(&b), 11.0);
    }

    #[test]
    fn test_normalized_has_unit_norm() {
        let v = SparseVector::from_unsorted(vec![(0, 3.0), (1, 4.0)]).normalized();
        assert!((v.norm() - 1.0).abs() < 1e-6);
        assert_eq!(v.entries(), &[(0, 0.6), (1, 0.8)]);
    }

    #[test]
    fn test_zero_vector_stays_zero() {
        let v = SparseVector::default().normalized();
        assert!(v.is_zero());
        assert_eq!(v.norm(), 0.0);
    }
}
