//! The airport network: airports keyed by code, each owning its outgoing routes

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::bail_unknown_node;
use crate::error::{AirnetError, Result};
use crate::graph::types::{Edge, Node, NodeEntry};

/// Undirected, weighted airport network.
///
/// Airports and routes are kept in insertion order; every algorithm that
/// walks adjacency lists is deterministic for a fixed insertion order.
/// Airports and routes are never removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Network {
    nodes: Vec<Node>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an airport, or return the existing one with the same code
    pub fn add_node(&mut self, id: impl Into<String>) -> NodeEntry<'_> {
        let id = id.into();
        if let Some(&idx) = self.index.get(&id) {
            tracing::debug!(airport = %id, "airport already exists");
            return NodeEntry::Existing(&self.nodes[idx]);
        }

        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(Node::new(id));
        NodeEntry::Created(&self.nodes[idx])
    }

    /// Connect two existing airports with a route of the given distance.
    ///
    /// Stores one directed edge on each endpoint. Every check runs before
    /// either adjacency list is touched, so a rejected route leaves the
    /// network unchanged.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<()> {
        let weight = match u32::try_from(weight) {
            Ok(w) if w > 0 => w,
            _ => {
                tracing::debug!(from, to, weight, "rejected route: invalid weight");
                return Err(AirnetError::InvalidWeight {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                });
            }
        };

        let from_idx = self.position(from)?;
        let to_idx = self.position(to)?;

        if from_idx == to_idx {
            tracing::debug!(airport = from, "rejected route: self-loop");
            return Err(AirnetError::SelfLoop {
                id: from.to_string(),
            });
        }

        if self.nodes[from_idx].has_edge_to(to) {
            tracing::debug!(from, to, "rejected route: already exists");
            return Err(AirnetError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let edge = Edge::new(from, to, weight);
        self.nodes[to_idx].edges.push(edge.reversed());
        self.nodes[from_idx].edges.push(edge);
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize> {
        match self.index.get(id) {
            Some(&idx) => Ok(idx),
            None => bail_unknown_node!(id),
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Airports in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Outgoing routes of an airport in insertion order
    pub fn neighbors(&self, id: &str) -> Result<&[Edge]> {
        match self.node(id) {
            Some(node) => Ok(node.edges()),
            None => bail_unknown_node!(id),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected routes (each stored twice)
    pub fn route_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Human-readable listing of every airport and its routes
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{} connects to:", node.id)?;
            for edge in &node.edges {
                write!(f, " ({}, {} miles)", edge.to, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Network {
        let mut network = Network::new();
        for id in ["RDU", "JFK", "SFO"] {
            network.add_node(id);
        }
        network.add_edge("RDU", "JFK", 150).unwrap();
        network.add_edge("JFK", "SFO", 575).unwrap();
        network
    }

    #[test]
    fn test_add_node_returns_existing() {
        let mut network = Network::new();
        assert!(network.add_node("RDU").is_created());

        let entry = network.add_node("RDU");
        assert!(!entry.is_created());
        assert_eq!(entry.node().id(), "RDU");
        assert_eq!(network.len(), 1);
    }

    #[test]
    fn test_add_edge_stores_mirror() {
        let network = triangle();
        let rdu = network.node("RDU").unwrap();
        let jfk = network.node("JFK").unwrap();

        assert_eq!(rdu.edges(), &[Edge::new("RDU", "JFK", 150)]);
        assert_eq!(jfk.edges()[0], Edge::new("JFK", "RDU", 150));
        assert_eq!(network.route_count(), 2);
    }

    #[test]
    fn test_add_edge_rejects_non_positive_weight() {
        let mut network = triangle();
        for weight in [0, -1, -400] {
            let err = network.add_edge("RDU", "SFO", weight).unwrap_err();
            assert!(matches!(err, AirnetError::InvalidWeight { .. }), "{}", err);
        }
        assert_eq!(network.route_count(), 2);
    }

    #[test]
    fn test_add_edge_rejects_oversized_weight() {
        let mut network = triangle();
        let err = network
            .add_edge("RDU", "SFO", i64::from(u32::MAX) + 1)
            .unwrap_err();
        assert!(matches!(err, AirnetError::InvalidWeight { .. }));
    }

    #[test]
    fn test_add_edge_rejects_unknown_endpoint() {
        let mut network = triangle();

        let err = network.add_edge("RDU", "LAX", 575).unwrap_err();
        assert!(matches!(err, AirnetError::UnknownNode { ref id } if id == "LAX"));

        let err = network.add_edge("LAX", "RDU", 575).unwrap_err();
        assert!(matches!(err, AirnetError::UnknownNode { ref id } if id == "LAX"));

        assert_eq!(network.node("RDU").unwrap().edges().len(), 1);
    }

    #[test]
    fn test_add_edge_rejects_duplicate_in_either_direction() {
        let mut network = triangle();
        let before = network.node("RDU").unwrap().edges().to_vec();

        let err = network.add_edge("RDU", "JFK", 999).unwrap_err();
        assert!(matches!(err, AirnetError::DuplicateEdge { .. }));
        let err = network.add_edge("JFK", "RDU", 150).unwrap_err();
        assert!(matches!(err, AirnetError::DuplicateEdge { .. }));

        assert_eq!(network.node("RDU").unwrap().edges(), before.as_slice());
        assert_eq!(network.node("JFK").unwrap().edges().len(), 2);
    }

    #[test]
    fn test_add_edge_rejects_self_loop() {
        let mut network = triangle();
        let err = network.add_edge("RDU", "RDU", 10).unwrap_err();
        assert!(matches!(err, AirnetError::SelfLoop { .. }));
        assert_eq!(network.node("RDU").unwrap().edges().len(), 1);
    }

    #[test]
    fn test_neighbors_unknown() {
        let network = triangle();
        assert!(network.neighbors("ABQ").is_err());
        assert_eq!(network.neighbors("JFK").unwrap().len(), 2);
    }

    #[test]
    fn test_dump_lists_routes_in_insertion_order() {
        let network = triangle();
        let dump = network.dump();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(
            lines,
            vec![
                "RDU connects to: (JFK, 150 miles)",
                "JFK connects to: (RDU, 150 miles) (SFO, 575 miles)",
                "SFO connects to: (JFK, 575 miles)",
            ]
        );
    }

    #[test]
    fn test_serialize_skips_index() {
        let network = triangle();
        let json = serde_json::to_value(&network).unwrap();
        assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
        assert!(json.get("index").is_none());
        assert_eq!(json["nodes"][0]["edges"][0]["to"], "JFK");
    }
}
