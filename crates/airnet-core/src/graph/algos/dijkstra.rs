use crate::bail_unknown_node;
use crate::error::{AirnetError, Result};
use crate::graph::types::PathResult;
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier entry for the min-heap (ordered by tentative distance).
///
/// Ties are broken by `seq`, so equal distances pop in push order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    pub node_id: String,
    pub distance: u64,
    pub seq: u64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during the search
struct DijkstraState {
    distances: HashMap<String, u64>,
    previous: HashMap<String, String>,
    visited: HashSet<String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
}

impl DijkstraState {
    fn new(provider: &dyn GraphProvider, source: &str) -> Self {
        // Every known airport starts at "infinity"
        let mut distances: HashMap<String, u64> = provider
            .node_ids()
            .into_iter()
            .map(|id| (id.to_string(), u64::MAX))
            .collect();
        distances.insert(source.to_string(), 0);

        let mut state = Self {
            distances,
            previous: HashMap::new(),
            visited: HashSet::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        };
        state.push(source.to_string(), 0);
        state
    }

    fn push(&mut self, node_id: String, distance: u64) {
        self.heap.push(Reverse(HeapEntry {
            node_id,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    fn distance(&self, id: &str) -> u64 {
        self.distances.get(id).copied().unwrap_or(u64::MAX)
    }

    /// Walk the predecessor chain from `to` back to `from`
    fn reconstruct_path(&self, from: &str, to: &str) -> Vec<String> {
        let mut hops = vec![to.to_string()];
        let mut current = to;
        while current != from {
            match self.previous.get(current) {
                Some(prev) => {
                    hops.push(prev.clone());
                    current = prev;
                }
                None => break,
            }
        }
        hops.reverse();
        hops
    }
}

/// Find the shortest route between two airports.
///
/// Stale frontier entries are left in the heap and skipped on extraction
/// once their airport is settled. The search stops as soon as `to` is
/// settled.
#[tracing::instrument(skip(provider))]
pub fn shortest_path(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<PathResult> {
    if !provider.contains(from) {
        bail_unknown_node!(from);
    }
    if !provider.contains(to) {
        bail_unknown_node!(to);
    }

    let mut state = DijkstraState::new(provider, from);

    while let Some(Reverse(entry)) = state.heap.pop() {
        if !state.visited.insert(entry.node_id.clone()) {
            continue;
        }
        tracing::trace!(airport = %entry.node_id, distance = entry.distance, "settled");

        if entry.node_id == to {
            break;
        }

        for edge in provider.outbound_edges(&entry.node_id) {
            if state.visited.contains(&edge.to) {
                continue;
            }
            let candidate = entry.distance.saturating_add(u64::from(edge.weight));
            if candidate < state.distance(&edge.to) {
                state.distances.insert(edge.to.clone(), candidate);
                state
                    .previous
                    .insert(edge.to.clone(), entry.node_id.clone());
                state.push(edge.to.clone(), candidate);
            }
        }
    }

    let distance = state.distance(to);
    if distance == u64::MAX {
        return Err(AirnetError::unreachable(from, to));
    }

    Ok(PathResult {
        from: from.to_string(),
        to: to.to_string(),
        distance,
        hops: state.reconstruct_path(from, to),
    })
}

/// Shortest total distance between two airports
pub fn shortest_distance(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<u64> {
    shortest_path(provider, from, to).map(|path| path.distance)
}
