//! `airnet distance` command - shortest distance between two airports

use airnet_core::error::Result;
use airnet_core::graph::{shortest_path, Network};

use crate::cli::Cli;

/// Execute the distance command
pub fn execute(cli: &Cli, network: &Network, from: &str, to: &str, show_path: bool) -> Result<()> {
    let path = shortest_path(network, from, to)?;

    crate::output_by_format_result!(cli.format,
        json => {
            let mut value = serde_json::json!({
                "from": path.from,
                "to": path.to,
                "distance": path.distance,
            });
            if show_path {
                value["hops"] = serde_json::json!(path.hops);
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok::<(), airnet_core::error::AirnetError>(())
        },
        human => {
            if cli.quiet {
                println!("{}", path.distance);
            } else {
                println!(
                    "Distance between {} and {} is: {}",
                    path.from, path.to, path.distance
                );
            }
            if show_path {
                println!("Route: {}", path.hops.join(" -> "));
            }
        }
    )
}
