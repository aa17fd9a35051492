use crate::bail_unknown_node;
use crate::error::Result;
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// Level-order traversal from `start`.
///
/// Airports are marked visited when enqueued, so each reachable airport
/// appears exactly once. Neighbors are expanded in adjacency-list order.
#[tracing::instrument(skip(provider))]
pub fn breadth_first_search(provider: &dyn GraphProvider, start: &str) -> Result<Vec<String>> {
    if !provider.contains(start) {
        bail_unknown_node!(start);
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current.to_string());

        for edge in provider.outbound_edges(current) {
            if visited.insert(edge.to.as_str()) {
                queue.push_back(edge.to.as_str());
            }
        }
    }

    tracing::trace!(visited = order.len(), "traversal complete");
    Ok(order)
}
