//! Euler CLI - Query Euler v2 vaults, prices and perspectives.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, LensSubcommand, PerspectiveSubcommand};
use commands::{
    run_borrow, run_lens_addresses, run_lens_vault, run_liquidity, run_networks,
    run_perspective_check, run_perspective_info, run_prices, run_subgraph, run_swap,
};

/// Log to stderr so JSON on stdout stays parseable. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let endpoints = &cli.endpoints;
    let format = cli.format;

    match &cli.command {
        Commands::Networks => run_networks(endpoints, format)?,
        Commands::Subgraph { subcommand } => run_subgraph(subcommand, endpoints, format).await?,
        Commands::Prices(args) => run_prices(args, endpoints, format).await?,
        Commands::Perspective { subcommand } => match subcommand {
            PerspectiveSubcommand::Info(args) => run_perspective_info(args, endpoints, format).await?,
            PerspectiveSubcommand::Check(args) => {
                run_perspective_check(args, endpoints, format).await?
            }
        },
        Commands::Lens { subcommand } => match subcommand {
            LensSubcommand::Addresses(args) => run_lens_addresses(args, endpoints, format)?,
            LensSubcommand::Vault(args) => run_lens_vault(args, endpoints, format).await?,
        },
        Commands::Liquidity(args) => run_liquidity(args, endpoints, format).await?,
        Commands::Borrow(args) => run_borrow(args, endpoints, format).await?,
        Commands::Swap(args) => run_swap(args, endpoints, format).await?,
    }

    Ok(())
}
