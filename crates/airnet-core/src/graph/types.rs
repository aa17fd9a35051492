use serde::Serialize;

/// A directed route record stored on its source airport.
///
/// An undirected connection between two airports is stored as two `Edge`s,
/// one on each endpoint, carrying the same weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// The same route seen from the other endpoint
    pub fn reversed(&self) -> Self {
        Edge {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}

/// An airport and its outgoing routes in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub edges: Vec<Edge>,
}

impl Node {
    pub(crate) fn new(id: String) -> Self {
        Node {
            id,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether this airport already has a route to `to`
    pub fn has_edge_to(&self, to: &str) -> bool {
        self.edges.iter().any(|e| e.to == to)
    }
}

/// Outcome of `Network::add_node`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEntry<'a> {
    /// A new airport was appended
    Created(&'a Node),
    /// The airport was already present; nothing changed
    Existing(&'a Node),
}

impl<'a> NodeEntry<'a> {
    pub fn node(&self) -> &'a Node {
        match self {
            NodeEntry::Created(node) | NodeEntry::Existing(node) => node,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, NodeEntry::Created(_))
    }
}

/// Result of a single-pair shortest path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub distance: u64,
    /// Airports visited in order, `from` first and `to` last
    pub hops: Vec<String>,
}

/// Edges accepted by Prim's algorithm, in acceptance order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: u64,
    /// Number of airports in the network the tree was built from
    pub node_count: usize,
}

impl SpanningTree {
    /// True when every airport is connected, false for a forest
    pub fn is_spanning(&self) -> bool {
        self.node_count == 0 || self.edges.len() + 1 == self.node_count
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
