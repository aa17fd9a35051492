//! Route query properties over the reference airport network

use std::collections::HashMap;

use airnet_core::config::NetworkConfig;
use airnet_core::error::AirnetError;
use airnet_core::graph::{
    breadth_first_search, minimum_spanning_tree, shortest_distance, Edge, Network,
};

fn reference() -> Network {
    NetworkConfig::reference().build().network
}

/// Disjoint set union over airport codes
struct Dsu {
    parent: HashMap<String, String>,
}

impl Dsu {
    fn new(network: &Network) -> Self {
        Dsu {
            parent: network
                .nodes()
                .iter()
                .map(|n| (n.id.clone(), n.id.clone()))
                .collect(),
        }
    }

    fn find(&mut self, id: &str) -> String {
        let parent = self.parent[id].clone();
        if parent == id {
            parent
        } else {
            let root = self.find(&parent);
            self.parent.insert(id.to_string(), root.clone());
            root
        }
    }

    /// Returns false when both airports were already connected
    fn union(&mut self, a: &str, b: &str) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_a, root_b);
        true
    }
}

/// Total weight of a Kruskal minimum spanning tree
fn kruskal_weight(network: &Network) -> u64 {
    let mut edges: Vec<&Edge> = network
        .nodes()
        .iter()
        .flat_map(|n| n.edges())
        .filter(|e| e.from < e.to)
        .collect();
    edges.sort_by_key(|e| e.weight);

    let mut dsu = Dsu::new(network);
    edges
        .into_iter()
        .filter(|e| dsu.union(&e.from, &e.to))
        .map(|e| u64::from(e.weight))
        .sum()
}

#[test]
fn test_rdu_to_sfo_is_450() {
    assert_eq!(shortest_distance(&reference(), "RDU", "SFO").unwrap(), 450);
}

#[test]
fn test_unregistered_destination_is_unknown_node() {
    let err = shortest_distance(&reference(), "CLE", "").unwrap_err();
    assert!(matches!(err, AirnetError::UnknownNode { .. }));
}

#[test]
fn test_every_airport_is_zero_from_itself() {
    let network = reference();
    for node in network.nodes() {
        assert_eq!(shortest_distance(&network, &node.id, &node.id).unwrap(), 0);
    }
}

#[test]
fn test_every_route_has_its_mirror() {
    let network = reference();
    for node in network.nodes() {
        for edge in node.edges() {
            let mirror = network.node(&edge.to).unwrap();
            assert!(
                mirror.edges().contains(&edge.reversed()),
                "missing mirror of {}",
                edge
            );
        }
    }
}

#[test]
fn test_duplicate_route_leaves_adjacency_unchanged() {
    let mut network = reference();
    let rdu_before = network.node("RDU").unwrap().edges().to_vec();
    let abq_before = network.node("ABQ").unwrap().edges().to_vec();

    let err = network.add_edge("RDU", "ABQ", 400).unwrap_err();
    assert!(matches!(err, AirnetError::DuplicateEdge { .. }));

    assert_eq!(network.node("RDU").unwrap().edges(), rdu_before.as_slice());
    assert_eq!(network.node("ABQ").unwrap().edges(), abq_before.as_slice());
}

#[test]
fn test_spanning_tree_is_acyclic_and_minimal() {
    let network = reference();
    let tree = minimum_spanning_tree(&network);

    assert_eq!(tree.len(), network.len() - 1);

    let mut dsu = Dsu::new(&network);
    for edge in &tree.edges {
        assert!(dsu.union(&edge.from, &edge.to), "cycle through {}", edge);
    }

    let sum: u64 = tree.edges.iter().map(|e| u64::from(e.weight)).sum();
    assert_eq!(sum, tree.total_weight);
    assert_eq!(tree.total_weight, kruskal_weight(&network));
}

#[test]
fn test_spanning_tree_edges_exist_in_network() {
    let network = reference();
    for edge in minimum_spanning_tree(&network).edges {
        assert!(network.node(&edge.from).unwrap().edges().contains(&edge));
    }
}

#[test]
fn test_bfs_from_rdu_visits_all_eight() {
    let network = reference();
    let order = breadth_first_search(&network, "RDU").unwrap();

    assert_eq!(order.len(), 8);
    assert_eq!(order[0], "RDU");
    for node in network.nodes() {
        assert_eq!(order.iter().filter(|id| **id == node.id).count(), 1);
    }
}

#[test]
fn test_bfs_predecessor_appears_earlier() {
    let network = reference();
    for start in network.nodes() {
        let order = breadth_first_search(&network, &start.id).unwrap();
        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        for (i, id) in order.iter().enumerate().skip(1) {
            let earliest_neighbor = network
                .node(id)
                .unwrap()
                .edges()
                .iter()
                .map(|e| position[e.to.as_str()])
                .min()
                .unwrap();
            assert!(earliest_neighbor < i, "{} has no earlier neighbor", id);
        }
    }
}

#[test]
fn test_queries_do_not_mutate() {
    let network = reference();
    let before = network.dump();

    let _ = shortest_distance(&network, "RDU", "");
    let _ = minimum_spanning_tree(&network);
    let _ = breadth_first_search(&network, "nowhere");

    assert_eq!(network.dump(), before);
    assert_eq!(network.route_count(), 25);
}
