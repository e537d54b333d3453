//! Delimited-text loading of raw ground-truth network files.
//!
//! Curated interaction databases ship as delimited text where the first
//! two columns name the interacting genes (further columns, e.g. evidence
//! scores, are ignored here). This module only parses; downloading,
//! caching, and decompression are the caller's concern.
//!
//! ```rust,ignore
//! use grnbench::eval::loader::{load_network, NetworkFormat};
//!
//! let format = NetworkFormat { delimiter: '\t', has_header: true };
//! let network = load_network("data/protein.links.txt", format)?;
//! ```

use crate::network::{Edge, Network};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shape of a delimited network file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFormat {
    /// Column separator.
    pub delimiter: char,
    /// Whether the first non-blank line is a header to skip.
    pub has_header: bool,
}

impl Default for NetworkFormat {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            has_header: false,
        }
    }
}

/// Load a network from a delimited text file.
pub fn load_network(path: impl AsRef<Path>, format: NetworkFormat) -> Result<Network> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let network = parse_network(&content, format).map_err(|e| match e {
        Error::Parse(msg) => Error::parse(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;
    log::info!(
        "Loaded {} ground-truth edges from {}",
        network.len(),
        path.display()
    );
    Ok(network)
}

/// Parse delimited network content.
///
/// Blank lines are skipped. Lines with fewer than two columns are a
/// [`Error::Parse`] naming the offending line number.
pub fn parse_network(content: &str, format: NetworkFormat) -> Result<Network> {
    let mut network = Network::new();
    let mut skipped_header = !format.has_header;

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !skipped_header {
            skipped_header = true;
            continue;
        }
        let mut fields = line.split(format.delimiter);
        let source = fields.next().map(str::trim).unwrap_or_default();
        let target = fields.next().map(str::trim).unwrap_or_default();
        if source.is_empty() || target.is_empty() {
            return Err(Error::parse(format!(
                "line {}: expected at least two '{}'-separated columns",
                lineno + 1,
                format.delimiter
            )));
        }
        network.insert(Edge::new(source, target));
    }

    Ok(network)
}
