//! Interaction Network
//!
//! Undirected graph recording which agent pairs have ever communicated
//! successfully. Edges only accumulate; they are never removed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use lingua_report::NetworkView;

use super::agent::AgentId;

/// The population's communication graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionNetwork {
    node_count: usize,
    edges: BTreeSet<(AgentId, AgentId)>,
}

impl InteractionNetwork {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: BTreeSet::new(),
        }
    }

    /// Record a successful communication between two agents. Self-loops are
    /// ignored; edge direction is normalized so each pair is stored once.
    pub fn record_contact(&mut self, a: AgentId, b: AgentId) {
        if a == b {
            return;
        }
        let edge = if a < b { (a, b) } else { (b, a) };
        self.edges.insert(edge);
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, a: AgentId, b: AgentId) -> bool {
        let edge = if a < b { (a, b) } else { (b, a) };
        self.edges.contains(&edge)
    }

    /// Normalized edges in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (AgentId, AgentId)> + '_ {
        self.edges.iter().copied()
    }

    /// Edges / possible edges; 0.0 when fewer than two nodes exist.
    pub fn density(&self) -> f64 {
        if self.node_count < 2 {
            return 0.0;
        }
        let possible = self.node_count * (self.node_count - 1) / 2;
        self.edges.len() as f64 / possible as f64
    }

    /// Read-only view for external layout and rendering.
    pub fn view(&self) -> NetworkView {
        NetworkView {
            nodes: (0..self.node_count).collect(),
            edges: self.edges.iter().map(|&(a, b)| (a.0, b.0)).collect(),
            density: self.density(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contacts_deduplicate_and_normalize() {
        let mut network = InteractionNetwork::new(4);
        network.record_contact(AgentId(2), AgentId(1));
        network.record_contact(AgentId(1), AgentId(2));
        assert_eq!(network.edge_count(), 1);
        assert!(network.has_edge(AgentId(1), AgentId(2)));
        assert!(network.has_edge(AgentId(2), AgentId(1)));
    }

    #[test]
    fn test_self_loops_ignored() {
        let mut network = InteractionNetwork::new(3);
        network.record_contact(AgentId(1), AgentId(1));
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn test_density() {
        let mut network = InteractionNetwork::new(3);
        assert_eq!(network.density(), 0.0);

        network.record_contact(AgentId(0), AgentId(1));
        assert!((network.density() - 1.0 / 3.0).abs() < 1e-9);

        network.record_contact(AgentId(0), AgentId(2));
        network.record_contact(AgentId(1), AgentId(2));
        assert_eq!(network.density(), 1.0);
    }

    #[test]
    fn test_density_degenerate_populations() {
        assert_eq!(InteractionNetwork::new(0).density(), 0.0);
        assert_eq!(InteractionNetwork::new(1).density(), 0.0);
    }

    #[test]
    fn test_view() {
        let mut network = InteractionNetwork::new(3);
        network.record_contact(AgentId(2), AgentId(0));

        let view = network.view();
        assert_eq!(view.nodes, vec![0, 1, 2]);
        assert_eq!(view.edges, vec![(0, 2)]);
        assert_eq!(view.density, network.density());
    }
}
