//! Network View
//!
//! Serializable view of the interaction graph for external layout and
//! rendering. Nodes are agent ids; an edge means the pair communicated
//! successfully at least once.

use serde::{Deserialize, Serialize};

/// Read-only view of the undirected interaction graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkView {
    /// Agent ids, dense in `0..population_size`
    pub nodes: Vec<usize>,
    /// Normalized undirected edges (low id first)
    pub edges: Vec<(usize, usize)>,
    /// Edges / possible edges, in [0, 1]
    pub density: f64,
}
