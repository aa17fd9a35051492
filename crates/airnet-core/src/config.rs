//! Network description files for airnet
//!
//! A network is described in TOML: an `airports` list and a `routes` array
//! of `{ from, to, distance }` tables. Descriptions are only read, never
//! written back.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{AirnetError, Result};
use crate::graph::Network;

pub use types::{BuildReport, NetworkConfig, RejectedRoute, RouteConfig};

/// The reference airport network shipped with airnet
const REFERENCE_NETWORK: &str = include_str!("../fixtures/airports.toml");

impl NetworkConfig {
    /// Load a network description from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            airports = config.airports.len(),
            routes = config.routes.len(),
            "loaded network description"
        );
        Ok(config)
    }

    /// Parse a network description from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The built-in reference network
    pub fn reference() -> Self {
        // Parse failure is caught by test_reference_fixture_parses
        Self::parse(REFERENCE_NETWORK).unwrap_or_default()
    }

    /// Build a network: airports first, then routes, both in file order.
    ///
    /// Rejected routes do not stop the build; they are collected in the
    /// report.
    pub fn build(&self) -> BuildReport {
        let mut network = Network::new();
        for airport in &self.airports {
            network.add_node(airport.as_str());
        }

        let mut rejected = Vec::new();
        for route in &self.routes {
            if let Err(error) = network.add_edge(&route.from, &route.to, route.distance) {
                tracing::debug!(
                    from = %route.from,
                    to = %route.to,
                    distance = route.distance,
                    %error,
                    "route rejected"
                );
                rejected.push(RejectedRoute {
                    route: route.clone(),
                    error,
                });
            }
        }

        BuildReport { network, rejected }
    }
}

impl BuildReport {
    /// Fail if any route was rejected
    pub fn into_strict(self) -> Result<Network> {
        match self.rejected.first() {
            None => Ok(self.network),
            Some(first) => Err(AirnetError::InvalidNetwork {
                reason: format!(
                    "{} route(s) rejected, first: {}",
                    self.rejected.len(),
                    first.error
                ),
            }),
        }
    }
}
