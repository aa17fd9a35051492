//! CLI commands for airnet

pub mod bfs;
pub mod dispatch;
pub mod distance;
pub mod mst;
pub mod show;
