use crate::graph::types::{Edge, SpanningTree};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

/// Candidate edge on the Prim frontier, ordered by weight then enqueue order
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEdge {
    edge: Edge,
    seq: u64,
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.edge
            .weight
            .cmp(&other.edge.weight)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEdge>>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Enqueue every edge of `edges` leading outside the tree
    fn extend(&mut self, edges: &[Edge], in_tree: &HashSet<String>) {
        for edge in edges.iter().filter(|e| !in_tree.contains(&e.to)) {
            self.heap.push(Reverse(FrontierEdge {
                edge: edge.clone(),
                seq: self.next_seq,
            }));
            self.next_seq += 1;
        }
    }

    fn pop(&mut self) -> Option<Edge> {
        self.heap.pop().map(|Reverse(entry)| entry.edge)
    }
}

/// Build a minimum spanning tree with Prim's algorithm, anchored at the
/// first airport in insertion order.
///
/// Airports not reachable from the anchor are left out; the result is then
/// a tree over the anchor's component and `is_spanning()` reports false.
#[tracing::instrument(skip(provider))]
pub fn minimum_spanning_tree(provider: &dyn GraphProvider) -> SpanningTree {
    let node_ids = provider.node_ids();
    let mut tree = SpanningTree {
        node_count: node_ids.len(),
        ..Default::default()
    };

    let Some(anchor) = node_ids.first() else {
        return tree;
    };

    let mut in_tree: HashSet<String> = HashSet::new();
    in_tree.insert(anchor.to_string());

    let mut frontier = Frontier::new();
    frontier.extend(provider.outbound_edges(anchor), &in_tree);

    while tree.edges.len() + 1 < tree.node_count {
        let Some(edge) = frontier.pop() else {
            break;
        };
        if in_tree.contains(&edge.to) {
            continue;
        }

        tracing::trace!(from = %edge.from, to = %edge.to, weight = edge.weight, "accepted");
        in_tree.insert(edge.to.clone());
        frontier.extend(provider.outbound_edges(&edge.to), &in_tree);
        tree.total_weight += u64::from(edge.weight);
        tree.edges.push(edge);
    }

    tree
}
