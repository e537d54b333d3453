//! # grnbench
//!
//! Benchmarking of gene-regulatory-network inference on single-cell data.
//!
//! - **Evaluation**: confusion-matrix scoring of a predicted network
//!   against curated ground-truth interactions, directed or undirected,
//!   restricted to the genes of the dataset under test
//! - **Predictors**: one trait in front of every inference method, a
//!   string-keyed registry to resolve them, and seeded random baselines
//! - **Loading**: delimited-text parsing of raw network files
//!
//! ## Quick Start
//!
//! ```rust
//! use grnbench::eval::biological::Evaluator;
//! use grnbench::network::network_from_pairs;
//!
//! let evaluator = Evaluator::new(network_from_pairs(&[("G1", "G2"), ("G2", "G3")]));
//!
//! let predicted = network_from_pairs(&[("G1", "G2"), ("G3", "G4")]);
//! let genes: Vec<String> = ["G1", "G2", "G3", "G4"].iter().map(|s| s.to_string()).collect();
//!
//! let counts = evaluator.evaluate(&predicted, &genes, true);
//! assert_eq!(counts.true_positives, 1.0);
//! assert_eq!(counts.false_positives, 1.0);
//! ```
//!
//! ## Running a Registered Method
//!
//! ```rust
//! use grnbench::{Registry, TrainingRegime};
//! use ndarray::Array2;
//!
//! let registry = Registry::new();
//! let model = registry.create("random100").unwrap();
//!
//! let genes: Vec<String> = (0..20).map(|i| format!("G{i}")).collect();
//! let expression = Array2::<f32>::zeros((100, genes.len()));
//! let interventions = vec!["non-targeting".to_string(); 100];
//!
//! let edges = model
//!     .predict(expression.view(), &interventions, &genes, TrainingRegime::Observational, 0)
//!     .unwrap();
//! assert!(edges.len() <= 100);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Trait-based**: every method, built-in or external, implements
//!   [`Predictor`]; the benchmark harness never knows concrete types
//! - **Open extension, strict contract**: custom methods enter through
//!   [`Registry::register`] with the same signature as the built-ins,
//!   never through unchecked dynamic loading
//! - **Pure evaluation core**: scoring is set algebra over in-memory edge
//!   sets; no I/O, no hidden state, deterministic for identical inputs

#![warn(missing_docs)]

pub mod error;
pub mod eval;
pub mod models;
pub mod network;
pub mod regime;
pub mod registry;

pub use error::{Error, Result};
pub use network::{ConfusionCounts, Edge, Network};
pub use regime::TrainingRegime;
pub use registry::Registry;

use ndarray::ArrayView2;

/// Trait for network inference methods.
///
/// One operation: given an expression matrix (cells × genes), the
/// per-cell intervention labels, and the gene names parallel to the matrix
/// columns, produce a directed edge list over those gene names.
///
/// Unlike a fixed algorithm suite, this trait is deliberately open:
/// external causal-discovery implementations plug in through
/// [`Registry::register`] and are exercised exactly like the built-in
/// baselines. Implementations must be `Send + Sync` so one instance can
/// serve a multi-threaded benchmark sweep.
pub trait Predictor: Send + Sync {
    /// Infer a gene-gene interaction network.
    ///
    /// # Arguments
    /// * `expression` - expression matrix, one row per cell, one column
    ///   per gene
    /// * `interventions` - per-cell perturbation labels (row-parallel);
    ///   `"non-targeting"` marks unperturbed cells
    /// * `gene_names` - gene identifiers, column-parallel to `expression`
    /// * `regime` - what perturbation information the labels carry
    /// * `seed` - seed for any internal randomness; equal seeds must give
    ///   equal outputs
    fn predict(
        &self,
        expression: ArrayView2<'_, f32>,
        interventions: &[String],
        gene_names: &[String],
        regime: TrainingRegime,
        seed: u64,
    ) -> Result<Vec<Edge>>;

    /// Short method identifier.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// One-line description of the method.
    fn description(&self) -> &'static str {
        "Unknown network inference method"
    }
}

/// A mock inference method for testing.
///
/// Returns a fixed edge list regardless of input.
///
/// # Example
///
/// ```rust
/// use grnbench::{Edge, MockPredictor};
///
/// let mock = MockPredictor::new("test-mock")
///     .with_edges(vec![Edge::new("G1", "G2")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockPredictor {
    name: &'static str,
    edges: Vec<Edge>,
}

impl MockPredictor {
    /// Create a new mock predictor.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            edges: Vec::new(),
        }
    }

    /// Set the edges to return from every predict call.
    #[must_use]
    pub fn with_edges(mut self, edges: Vec<Edge>) -> Self {
        self.edges = edges;
        self
    }
}

impl Predictor for MockPredictor {
    fn predict(
        &self,
        _expression: ArrayView2<'_, f32>,
        _interventions: &[String],
        _gene_names: &[String],
        _regime: TrainingRegime,
        _seed: u64,
    ) -> Result<Vec<Edge>> {
        Ok(self.edges.clone())
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Mock inference method for testing"
    }
}

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use grnbench::prelude::*;
    //!
    //! let evaluator = Evaluator::new(network_from_pairs(&[("G1", "G2")]));
    //! assert_eq!(evaluator.ground_truth().len(), 1);
    //! ```
    pub use crate::error::{Error, Result};
    pub use crate::eval::biological::Evaluator;
    pub use crate::network::{network_from_pairs, ConfusionCounts, Edge, Network};
    pub use crate::regime::TrainingRegime;
    pub use crate::registry::Registry;
    pub use crate::{MockPredictor, Predictor};
}
