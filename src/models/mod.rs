//! Built-in network inference baselines.
//!
//! The serious causal-discovery methods (constraint-based, score-based,
//! continuous-optimization) are external collaborators reached through the
//! [`crate::Predictor`] trait and the [`crate::Registry`]; only baselines
//! that need nothing beyond the gene list live in the crate itself.

pub mod random_network;

pub use random_network::{FullyConnected, RandomNetwork};
