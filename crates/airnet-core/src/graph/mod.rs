//! Airport network model and route algorithms
//!
//! Provides the graph and the queries answered over it:
//! - Network construction (airports and undirected routes)
//! - Dijkstra shortest distance between two airports
//! - Prim minimum spanning tree
//! - BFS reachability order
//! - Graph provider trait the algorithms are written against

pub mod algos;
pub mod network;
pub mod traversal;
pub mod types;

pub use algos::{breadth_first_search, minimum_spanning_tree, shortest_distance, shortest_path};
pub use network::Network;
pub use traversal::GraphProvider;
pub use types::{Edge, Node, NodeEntry, PathResult, SpanningTree};
