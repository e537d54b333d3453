//! Biological evaluation: score a predicted network against curated
//! ground-truth gene-gene interactions.
//!
//! The comparison is pure set algebra over directed edges, with two
//! configuration points:
//!
//! - the **gene universe**: ground truth is restricted to edges whose
//!   endpoints both occur in the dataset under test, so a method is never
//!   penalized for edges it could not possibly have observed;
//! - **direction sensitivity**: in undirected mode both operands are
//!   symmetrized before comparison and the resulting tallies are halved,
//!   since each logical undirected edge is then represented by two
//!   directed entries.
//!
//! # Example
//!
//! ```rust
//! use grnbench::eval::biological::Evaluator;
//! use grnbench::network::network_from_pairs;
//!
//! let evaluator = Evaluator::new(network_from_pairs(&[("G1", "G2"), ("G2", "G3")]));
//!
//! let genes = vec!["G1".to_string(), "G2".to_string()];
//! let discoverable = evaluator.extract(&genes);
//! assert_eq!(discoverable, network_from_pairs(&[("G1", "G2")]));
//!
//! let predicted = network_from_pairs(&[("G1", "G2"), ("G3", "G4")]);
//! let counts = evaluator.evaluate(&predicted, &genes, true);
//! assert_eq!(counts.true_positives, 1.0);
//! assert_eq!(counts.false_positives, 1.0);
//! assert_eq!(counts.false_negatives, 0.0);
//! ```

use crate::network::{ConfusionCounts, Network};
use std::collections::HashSet;

/// Restrict a network to edges whose endpoints both occur in `universe`.
///
/// Produces a new set; the input is untouched. An empty universe yields an
/// empty result. Self-referencing edges are kept when their gene is in the
/// universe; callers that need them excluded filter separately (see
/// [`Evaluator::extract`]).
#[must_use]
pub fn filter_to_universe(network: &Network, universe: &HashSet<&str>) -> Network {
    network
        .iter()
        .filter(|e| universe.contains(e.source.as_str()) && universe.contains(e.target.as_str()))
        .cloned()
        .collect()
}

/// Symmetric closure of a directed edge set: every edge and its reverse.
///
/// Already-symmetric pairs are deduplicated by set semantics. The result
/// satisfies: `(i, j)` present implies `(j, i)` present.
#[must_use]
pub fn symmetrize(network: &Network) -> Network {
    let mut closed = Network::with_capacity(network.len() * 2);
    for edge in network {
        closed.insert(edge.reversed());
        closed.insert(edge.clone());
    }
    closed
}

/// Compare a predicted edge set against a ground-truth edge set.
///
/// In undirected mode (`directed == false`) both operands are symmetrized
/// before comparison and all three tallies are divided by two. For
/// self-loop-free operands the symmetrized tallies are always even, so the
/// halved counts are whole numbers. A self-referencing edge is its own
/// reverse, contributes an odd tally, and therefore surfaces as a half
/// count (e.g. an unmatched ground-truth self-loop yields
/// `false_negatives = 0.5`) — this matters for [`Evaluator::evaluate`],
/// whose universe filter deliberately keeps self-loops.
///
/// The ground truth passed here is expected to be pre-filtered to the gene
/// universe by the caller ([`Evaluator::evaluate`] does this). Predicted
/// edges outside the universe are not rejected; they simply fail the
/// membership test and count as false positives.
#[must_use]
pub fn score(predicted: &Network, ground_truth: &Network, directed: bool) -> ConfusionCounts {
    let sym_predicted;
    let sym_truth;
    let (predicted, ground_truth) = if directed {
        (predicted, ground_truth)
    } else {
        sym_predicted = symmetrize(predicted);
        sym_truth = symmetrize(ground_truth);
        (&sym_predicted, &sym_truth)
    };

    let true_positives = predicted.iter().filter(|e| ground_truth.contains(*e)).count();
    let false_positives = predicted.len() - true_positives;
    let false_negatives = ground_truth.iter().filter(|e| !predicted.contains(*e)).count();

    let correction = if directed { 1.0 } else { 2.0 };
    ConfusionCounts {
        true_positives: true_positives as f64 / correction,
        false_positives: false_positives as f64 / correction,
        false_negatives: false_negatives as f64 / correction,
    }
}

/// Evaluation facade owning an immutable ground-truth network.
///
/// Constructed once per benchmark run and shared across every method
/// invocation. All operations take `&self` and hold no interior mutability,
/// so concurrent evaluation from worker threads is safe by construction.
#[derive(Debug, Clone)]
pub struct Evaluator {
    ground_truth: Network,
}

impl Evaluator {
    /// Create an evaluator from a curated ground-truth network.
    #[must_use]
    pub fn new(ground_truth: Network) -> Self {
        Self { ground_truth }
    }

    /// The ground-truth network this evaluator scores against.
    #[must_use]
    pub fn ground_truth(&self) -> &Network {
        &self.ground_truth
    }

    /// The maximum discoverable ground-truth subgraph for a dataset.
    ///
    /// Returns ground-truth edges whose endpoints both occur in
    /// `gene_names`, excluding self-referencing edges. Used to report what
    /// *could* be found in a dataset, independent of any prediction.
    ///
    /// Note the deliberate asymmetry with [`Evaluator::evaluate`]: the
    /// scoring path keeps self-loops in its filtered ground truth. Both
    /// behaviors are long-standing and covered by tests; do not unify them.
    #[must_use]
    pub fn extract(&self, gene_names: &[String]) -> Network {
        let universe: HashSet<&str> = gene_names.iter().map(String::as_str).collect();
        self.ground_truth
            .iter()
            .filter(|e| {
                universe.contains(e.source.as_str())
                    && universe.contains(e.target.as_str())
                    && !e.is_self_loop()
            })
            .cloned()
            .collect()
    }

    /// Score a predicted network against the universe-filtered ground truth.
    ///
    /// `gene_names` is the (ordered) gene list of the dataset the prediction
    /// was made on; only its membership is used here. `directed` selects
    /// whether edge order matters when matching, see [`score`].
    ///
    /// Deterministic for identical inputs, never fails: empty predictions,
    /// empty ground truth, and empty universes all resolve to zero counts.
    #[must_use]
    pub fn evaluate(
        &self,
        predicted: &Network,
        gene_names: &[String],
        directed: bool,
    ) -> ConfusionCounts {
        let universe: HashSet<&str> = gene_names.iter().map(String::as_str).collect();
        let ground_truth = filter_to_universe(&self.ground_truth, &universe);
        log::debug!(
            "Scoring {} predicted edges against {} ground-truth edges ({} genes, directed={})",
            predicted.len(),
            ground_truth.len(),
            universe.len(),
            directed
        );
        score(predicted, &ground_truth, directed)
    }
}
