//! Content-free baseline predictors.
//!
//! These ignore the expression values entirely and exist to calibrate the
//! benchmark: a real method has to beat seeded random guessing, and the
//! fully-connected network marks the recall ceiling at worst-case
//! precision.

use crate::network::Edge;
use crate::regime::TrainingRegime;
use crate::{Predictor, Result};
use ndarray::ArrayView2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Predicts a random directed network with at most `size` edges.
///
/// Edges are drawn uniformly over ordered pairs of distinct observed
/// genes; draws landing on an already-selected pair collapse by set
/// semantics, so the output can be smaller than `size`. Reproducible for
/// equal seeds.
#[derive(Debug, Clone, Copy)]
pub struct RandomNetwork {
    size: usize,
}

impl RandomNetwork {
    /// Create a random baseline drawing `size` edges.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Predictor for RandomNetwork {
    fn predict(
        &self,
        _expression: ArrayView2<'_, f32>,
        _interventions: &[String],
        gene_names: &[String],
        _regime: TrainingRegime,
        seed: u64,
    ) -> Result<Vec<Edge>> {
        let n = gene_names.len();
        if n < 2 {
            return Ok(Vec::new());
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = HashSet::with_capacity(self.size);
        for _ in 0..self.size {
            let i = rng.gen_range(0..n);
            // Pick j uniformly among the n - 1 genes that are not i.
            let mut j = rng.gen_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            edges.insert(Edge::new(&gene_names[i], &gene_names[j]));
        }
        Ok(edges.into_iter().collect())
    }

    fn name(&self) -> &'static str {
        "random"
    }

    fn description(&self) -> &'static str {
        "Seeded random network over observed genes"
    }
}

/// Predicts every ordered pair of distinct observed genes.
///
/// Quadratic in the gene count; useful only as a calibration ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullyConnected;

impl FullyConnected {
    /// Create the fully-connected baseline.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Predictor for FullyConnected {
    fn predict(
        &self,
        _expression: ArrayView2<'_, f32>,
        _interventions: &[String],
        gene_names: &[String],
        _regime: TrainingRegime,
        _seed: u64,
    ) -> Result<Vec<Edge>> {
        let mut edges = Vec::with_capacity(gene_names.len().saturating_mul(gene_names.len()));
        for source in gene_names {
            for target in gene_names {
                if source != target {
                    edges.push(Edge::new(source, target));
                }
            }
        }
        Ok(edges)
    }

    fn name(&self) -> &'static str {
        "fully-connected"
    }

    fn description(&self) -> &'static str {
        "Every ordered pair of distinct observed genes"
    }
}
