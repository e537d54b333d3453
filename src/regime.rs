//! Training regime under which an inference method sees the data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of perturbation information accompanies the expression data.
///
/// Passed through to every [`crate::Predictor`] so interventional methods
/// can exploit the perturbation labels while observational methods ignore
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingRegime {
    /// Unperturbed cells only; intervention labels carry no signal.
    Observational,
    /// A subset of genes has interventional data.
    PartialInterventional,
    /// Every gene has interventional data.
    Interventional,
}

impl fmt::Display for TrainingRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrainingRegime::Observational => "observational",
            TrainingRegime::PartialInterventional => "partial-interventional",
            TrainingRegime::Interventional => "interventional",
        };
        f.write_str(name)
    }
}
