//! Command dispatch logic for airnet
use std::time::Instant;

use airnet_core::config::NetworkConfig;
use airnet_core::error::Result;
use airnet_core::graph::Network;
use airnet_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return handle_no_command();
    };

    let network = load_network(cli)?;
    trace_time!(start, "load_network", airports = network.len());

    let result = match command {
        Commands::Show => commands::show::execute(cli, &network),
        Commands::Distance { from, to, path } => {
            commands::distance::execute(cli, &network, from, to, *path)
        }
        Commands::Mst => commands::mst::execute(cli, &network),
        Commands::Bfs { start: origin } => commands::bfs::execute(cli, &network, origin),
    };

    trace_time!(start, "command");
    result
}

/// Build the network from `--network`, or the built-in reference network
fn load_network(cli: &Cli) -> Result<Network> {
    let config = match &cli.network {
        Some(path) => NetworkConfig::load(path)?,
        None => NetworkConfig::reference(),
    };

    let report = config.build();
    if cli.strict {
        return report.into_strict();
    }

    // The reference network repeats two routes on purpose
    if cli.network.is_some() {
        for rejected in &report.rejected {
            tracing::warn!(error = %rejected.error, "route skipped");
        }
    }
    Ok(report.network)
}

fn handle_no_command() -> Result<()> {
    println!("airnet {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Route queries over a weighted airport network.");
    println!();
    println!("Run `airnet --help` for usage information.");
    Ok(())
}
