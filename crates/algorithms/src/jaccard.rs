//! Pairwise Jaccard metrics between two species pools
//!
//! Jaccard similarity = |A ∩ B| / |A ∪ B|, dissimilarity = 1 − similarity.
//! Dissimilarity proxies the ecological risk of connecting two basins: the
//! less their faunas overlap, the more a transfer can change either side.

use std::collections::BTreeSet;

use basinlink_core::{Algorithm, Error};

/// Pairwise set-overlap metrics between two basins' species pools
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairwiseMetrics {
    pub similarity: f64,
    pub dissimilarity: f64,
    /// |sender ∩ receiver|
    pub shared: usize,
    /// |sender ∪ receiver|
    pub union: usize,
}

/// Compute Jaccard metrics for two species sets.
///
/// Both sets empty is the defined special case: similarity and dissimilarity
/// are both 0 ("no connection, no risk") since the general ratio is 0/0.
/// Symmetric in its arguments.
pub fn pairwise_metrics(sender: &BTreeSet<String>, receiver: &BTreeSet<String>) -> PairwiseMetrics {
    let shared = sender.intersection(receiver).count();
    let union = sender.union(receiver).count();

    if union == 0 {
        return PairwiseMetrics::default();
    }

    let similarity = shared as f64 / union as f64;
    PairwiseMetrics {
        similarity,
        dissimilarity: 1.0 - similarity,
        shared,
        union,
    }
}

/// Jaccard metrics as a pipeline algorithm
#[derive(Debug, Clone, Default)]
pub struct PairwiseJaccard;

impl Algorithm for PairwiseJaccard {
    type Input = (BTreeSet<String>, BTreeSet<String>);
    type Output = PairwiseMetrics;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "PairwiseJaccard"
    }

    fn description(&self) -> &'static str {
        "Jaccard similarity/dissimilarity between two species sets"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output, Error> {
        Ok(pairwise_metrics(&input.0, &input.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_half_overlap() {
        let m = pairwise_metrics(&set(&["A", "B", "C"]), &set(&["B", "C", "D"]));
        assert_eq!(m.shared, 2);
        assert_eq!(m.union, 4);
        assert_relative_eq!(m.similarity, 0.5);
        assert_relative_eq!(m.dissimilarity, 0.5);
    }

    #[test]
    fn test_identity_sums_to_one() {
        let m = pairwise_metrics(&set(&["A", "B", "C", "D", "E"]), &set(&["C", "E", "F"]));
        assert_relative_eq!(m.similarity + m.dissimilarity, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_disjoint_sets() {
        let m = pairwise_metrics(&set(&["A"]), &set(&["B"]));
        assert_eq!(m.shared, 0);
        assert_eq!(m.union, 2);
        assert_relative_eq!(m.similarity, 0.0);
        assert_relative_eq!(m.dissimilarity, 1.0);
    }

    #[test]
    fn test_identical_sets() {
        let m = pairwise_metrics(&set(&["A", "B"]), &set(&["A", "B"]));
        assert_relative_eq!(m.similarity, 1.0);
        assert_relative_eq!(m.dissimilarity, 0.0);
    }

    #[test]
    fn test_both_empty_convention() {
        let m = pairwise_metrics(&set(&[]), &set(&[]));
        assert_eq!(
            m,
            PairwiseMetrics {
                similarity: 0.0,
                dissimilarity: 0.0,
                shared: 0,
                union: 0
            }
        );
    }

    #[test]
    fn test_one_empty_set() {
        let m = pairwise_metrics(&set(&[]), &set(&["A", "B"]));
        assert_eq!(m.shared, 0);
        assert_eq!(m.union, 2);
        assert_relative_eq!(m.dissimilarity, 1.0);
    }

    #[test]
    fn test_symmetry() {
        let a = set(&["A", "B", "C"]);
        let b = set(&["B", "D"]);
        assert_eq!(pairwise_metrics(&a, &b), pairwise_metrics(&b, &a));
    }

    #[test]
    fn test_algorithm_wrapper() {
        let m = PairwiseJaccard
            .execute_default((set(&["A"]), set(&["A"])))
            .unwrap();
        assert_relative_eq!(m.similarity, 1.0);
    }
}
