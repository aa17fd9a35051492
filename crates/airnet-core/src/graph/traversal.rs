use crate::graph::network::Network;
use crate::graph::types::Edge;

/// Trait for providing graph adjacency to the route algorithms
pub trait GraphProvider {
    /// Airport codes in insertion order
    fn node_ids(&self) -> Vec<&str>;
    fn contains(&self, id: &str) -> bool;
    /// Outgoing edges of `id`, empty for an unknown airport
    fn outbound_edges(&self, id: &str) -> &[Edge];
}

impl GraphProvider for Network {
    fn node_ids(&self) -> Vec<&str> {
        self.nodes().iter().map(|n| n.id()).collect()
    }

    fn contains(&self, id: &str) -> bool {
        Network::contains(self, id)
    }

    fn outbound_edges(&self, id: &str) -> &[Edge] {
        self.node(id).map(|n| n.edges()).unwrap_or(&[])
    }
}
