//! `airnet mst` command - minimum spanning tree

use airnet_core::error::Result;
use airnet_core::graph::{minimum_spanning_tree, Network};

use crate::cli::Cli;

/// Execute the mst command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    let tree = minimum_spanning_tree(network);
    if !tree.is_spanning() {
        tracing::debug!(
            edges = tree.len(),
            airports = tree.node_count,
            "network is disconnected"
        );
    }

    crate::output_by_format_result!(cli.format,
        json => {
            let value = serde_json::json!({
                "edges": tree.edges,
                "total_weight": tree.total_weight,
                "spanning": tree.is_spanning(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok::<(), airnet_core::error::AirnetError>(())
        },
        human => {
            for edge in &tree.edges {
                println!("{}", edge);
            }
            if !cli.quiet {
                println!("Total: {}", tree.total_weight);
                if !tree.is_spanning() {
                    println!(
                        "Forest: {} of {} airports reachable from {}",
                        tree.len() + 1,
                        tree.node_count,
                        network.nodes()[0].id()
                    );
                }
            }
        }
    )
}
