//! Graph algorithm implementations
//!
//! - `bfs`: Breadth-first traversal order
//! - `dijkstra`: Single-pair shortest distance and path
//! - `prim`: Minimum spanning tree

pub mod bfs;
pub mod dijkstra;
pub mod prim;

pub use bfs::breadth_first_search;
pub use dijkstra::{shortest_distance, shortest_path};
pub use prim::minimum_spanning_tree;
