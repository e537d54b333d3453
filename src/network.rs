//! Core network data model: edges, edge sets, and confusion counts.
//!
//! A gene is named by an opaque string token; equality is exact string
//! match with no case folding or synonym resolution. A network is a set
//! of directed edges over those tokens. Both the curated ground-truth
//! network and the output of an inference method use the same
//! representation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A directed gene-gene interaction claim.
///
/// `source != target` is expected for valid biological edges but not
/// enforced; self-referencing edges are handled explicitly by the
/// evaluation code (see [`crate::eval::biological::Evaluator`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Gene the interaction originates from.
    pub source: String,
    /// Gene the interaction points to.
    pub target: String,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The same interaction claimed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    /// Whether both endpoints name the same gene.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl From<(&str, &str)> for Edge {
    fn from((source, target): (&str, &str)) -> Self {
        Edge::new(source, target)
    }
}

/// A duplicate-free, unordered set of directed edges.
///
/// Iteration order is unspecified and must never influence evaluation
/// results; only membership does.
pub type Network = HashSet<Edge>;

/// Build a network from `(source, target)` string pairs.
///
/// Convenience for tests and small fixtures.
///
/// # Example
///
/// ```rust
/// use grnbench::network::network_from_pairs;
///
/// let net = network_from_pairs(&[("G1", "G2"), ("G2", "G3")]);
/// assert_eq!(net.len(), 2);
/// ```
#[must_use]
pub fn network_from_pairs(pairs: &[(&str, &str)]) -> Network {
    pairs.iter().map(|&(s, t)| Edge::new(s, t)).collect()
}

/// Confusion-matrix tallies from comparing a predicted network against
/// ground truth.
///
/// Counts are `f64` because undirected evaluation reports each tally
/// divided by two: after symmetrization every logical undirected edge is
/// represented by two directed entries, and the halving undoes that
/// double counting. In directed mode all three fields hold whole numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// Predicted edges present in the ground truth.
    pub true_positives: f64,
    /// Predicted edges absent from the ground truth.
    pub false_positives: f64,
    /// Ground-truth edges the prediction missed.
    pub false_negatives: f64,
}

impl ConfusionCounts {
    /// Precision: TP / (TP + FP). Returns 0.0 when nothing was predicted.
    ///
    /// Reporting convenience; the scorer itself only produces raw counts.
    #[must_use]
    pub fn precision(&self) -> f64 {
        let predicted = self.true_positives + self.false_positives;
        if predicted == 0.0 {
            return 0.0;
        }
        self.true_positives / predicted
    }

    /// Recall: TP / (TP + FN). Returns 0.0 when the ground truth is empty.
    #[must_use]
    pub fn recall(&self) -> f64 {
        let relevant = self.true_positives + self.false_negatives;
        if relevant == 0.0 {
            return 0.0;
        }
        self.true_positives / relevant
    }

    /// Harmonic mean of precision and recall. Returns 0.0 when both are zero.
    #[must_use]
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }

    /// Accumulate counts from another comparison, e.g. across datasets.
    pub fn merge(&mut self, other: &ConfusionCounts) {
        self.true_positives += other.true_positives;
        self.false_positives += other.false_positives;
        self.false_negatives += other.false_negatives;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_reversed() {
        let e = Edge::new("G1", "G2");
        assert_eq!(e.reversed(), Edge::new("G2", "G1"));
        assert_eq!(e.reversed().reversed(), e);
    }

    #[test]
    fn test_self_loop() {
        assert!(Edge::new("G1", "G1").is_self_loop());
        assert!(!Edge::new("G1", "G2").is_self_loop());
    }

    #[test]
    fn test_network_dedupes() {
        let net = network_from_pairs(&[("G1", "G2"), ("G1", "G2")]);
        assert_eq!(net.len(), 1);
    }

    #[test]
    fn test_direction_matters_for_membership() {
        let net = network_from_pairs(&[("G1", "G2")]);
        assert!(net.contains(&Edge::new("G1", "G2")));
        assert!(!net.contains(&Edge::new("G2", "G1")));
    }

    #[test]
    fn test_precision_recall_f1() {
        let counts = ConfusionCounts {
            true_positives: 2.0,
            false_positives: 2.0,
            false_negatives: 2.0,
        };
        assert!((counts.precision() - 0.5).abs() < 1e-12);
        assert!((counts.recall() - 0.5).abs() < 1e-12);
        assert!((counts.f1() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_metrics_are_zero() {
        let counts = ConfusionCounts::default();
        assert_eq!(counts.precision(), 0.0);
        assert_eq!(counts.recall(), 0.0);
        assert_eq!(counts.f1(), 0.0);
    }

    #[test]
    fn test_confusion_counts_json_round_trip() {
        // Counts are what callers emit into result files.
        let counts = ConfusionCounts {
            true_positives: 3.0,
            false_positives: 1.0,
            false_negatives: 0.5,
        };
        let json = serde_json::to_string(&counts).unwrap();
        assert!(json.contains("\"true_positives\":3.0"), "got: {}", json);
        let back: ConfusionCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(counts, back);
    }

    #[test]
    fn test_merge() {
        let mut a = ConfusionCounts {
            true_positives: 1.0,
            false_positives: 0.5,
            false_negatives: 0.0,
        };
        let b = ConfusionCounts {
            true_positives: 1.0,
            false_positives: 0.5,
            false_negatives: 2.0,
        };
        a.merge(&b);
        assert_eq!(a.true_positives, 2.0);
        assert_eq!(a.false_positives, 1.0);
        assert_eq!(a.false_negatives, 2.0);
    }
}
