//! `airnet show` command - list every airport and its routes

use airnet_core::error::Result;
use airnet_core::graph::Network;

use crate::cli::Cli;

/// Execute the show command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    crate::output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(network)?);
            Ok::<(), airnet_core::error::AirnetError>(())
        },
        human => {
            print!("{}", network.dump());
            if !cli.quiet {
                println!();
                println!(
                    "{} airports, {} routes",
                    network.len(),
                    network.route_count()
                );
            }
        }
    )
}
