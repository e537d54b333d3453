//! Evaluation of predicted gene-gene interaction networks.
//!
//! # Overview
//!
//! Two comparison modes share one mechanism:
//!
//! - **Extraction**: [`biological::Evaluator::extract`] returns the
//!   ground-truth subgraph discoverable in a given dataset, reported
//!   alongside method results so readers know the ceiling.
//! - **Scoring**: [`biological::Evaluator::evaluate`] turns a predicted
//!   edge set into true-positive / false-positive / false-negative counts
//!   against the universe-filtered ground truth, directed or undirected.
//!
//! ```rust
//! use grnbench::eval::biological::Evaluator;
//! use grnbench::network::network_from_pairs;
//!
//! let evaluator = Evaluator::new(network_from_pairs(&[("G1", "G2")]));
//! let predicted = network_from_pairs(&[("G2", "G1")]);
//! let genes = vec!["G1".to_string(), "G2".to_string()];
//!
//! // Direction-sensitive: the reversed claim does not match.
//! assert_eq!(evaluator.evaluate(&predicted, &genes, true).true_positives, 0.0);
//! // Direction-insensitive: it does.
//! assert_eq!(evaluator.evaluate(&predicted, &genes, false).true_positives, 1.0);
//! ```
//!
//! [`loader`] parses raw delimited network files into the in-memory edge
//! sets the evaluator consumes.

pub mod biological;
pub mod loader;

pub use biological::{filter_to_universe, score, symmetrize, Evaluator};
pub use loader::{load_network, parse_network, NetworkFormat};
