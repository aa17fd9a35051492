//! Network description type definitions

use serde::{Deserialize, Serialize};

use crate::error::AirnetError;
use crate::graph::Network;

/// A network description as read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Airport codes, added in order
    #[serde(default)]
    pub airports: Vec<String>,

    /// Routes, added in order after every airport
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// One undirected route between two airports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub from: String,
    pub to: String,
    /// Kept signed so zero and negative distances reach validation
    pub distance: i64,
}

/// A route the network refused, with the reason
#[derive(Debug)]
pub struct RejectedRoute {
    pub route: RouteConfig,
    pub error: AirnetError,
}

/// Result of building a network from its description
#[derive(Debug)]
pub struct BuildReport {
    pub network: Network,
    pub rejected: Vec<RejectedRoute>,
}
