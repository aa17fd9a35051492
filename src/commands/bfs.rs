//! `airnet bfs` command - breadth-first reachability order

use airnet_core::error::Result;
use airnet_core::graph::{breadth_first_search, Network};

use crate::cli::Cli;

/// Execute the bfs command
pub fn execute(cli: &Cli, network: &Network, start: &str) -> Result<()> {
    let order = breadth_first_search(network, start)?;

    crate::output_by_format_result!(cli.format,
        json => {
            let value = serde_json::json!({
                "start": start,
                "order": order,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok::<(), airnet_core::error::AirnetError>(())
        },
        human => {
            for id in &order {
                println!("{}", id);
            }
        }
    )
}
