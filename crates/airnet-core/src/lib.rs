//! Airnet Core Library
//!
//! Airport network model and the route queries answered over it:
//! shortest distance, minimum spanning tree and breadth-first order.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
