//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use euler_rs_api::{Network, PerspectiveKind};

/// Euler CLI - Query Euler v2 vaults, prices and perspectives
#[derive(Parser, Debug)]
#[command(name = "euler")]
#[command(about = "CLI tool for querying Euler Finance", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub endpoints: EndpointArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Registry file and endpoint overrides shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct EndpointArgs {
    /// JSON network registry replacing the built-in tables
    #[arg(long, global = true, env = "EULER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subgraph endpoint for the selected network
    #[arg(long, global = true, env = "EULER_SUBGRAPH_URL")]
    pub subgraph_url: Option<String>,

    /// Price API endpoint for the selected network
    #[arg(long, global = true, env = "EULER_PRICE_API_URL")]
    pub price_api_url: Option<String>,

    /// Pyth Hermes endpoint
    #[arg(long, global = true, env = "EULER_HERMES_URL")]
    pub hermes_url: Option<String>,

    /// RPC URL (falls back to the registry entry of the network)
    #[arg(long, global = true, env = "ETH_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Private key for signing transactions
    #[arg(long, global = true, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configured networks and their endpoints
    Networks,
    /// Query the Euler v2 subgraph
    Subgraph {
        #[command(subcommand)]
        subcommand: SubgraphSubcommand,
    },
    /// Fetch off-chain USD prices
    Prices(PricesArgs),
    /// Read verified-vault perspectives
    Perspective {
        #[command(subcommand)]
        subcommand: PerspectiveSubcommand,
    },
    /// Read lens addresses and vault state
    Lens {
        #[command(subcommand)]
        subcommand: LensSubcommand,
    },
    /// Simulate account liquidity with fresh Pyth prices
    Liquidity(LiquidityArgs),
    /// Borrow from a vault in one batch with a Pyth price update
    Borrow(BorrowArgs),
    /// Swap through the Uniswap V2 router
    Swap(SwapArgs),
}

#[derive(Subcommand, Debug)]
pub enum SubgraphSubcommand {
    /// Vault status snapshots
    VaultStatuses(SubgraphArgs),
    /// Vault registry entries
    Vaults(SubgraphArgs),
    /// Borrow events
    Borrows(SubgraphArgs),
    /// Liquidation events
    Liquidations(SubgraphArgs),
}

#[derive(Args, Debug)]
pub struct SubgraphArgs {
    /// Network to query (e.g., mainnet, base, arbitrum)
    #[arg(long, default_value = "mainnet")]
    pub network: Network,

    /// Fetch a single entity by id
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Args, Debug)]
pub struct PricesArgs {
    /// Network whose prices to fetch
    #[arg(long, default_value = "mainnet")]
    pub chain: Network,

    /// Comma-separated asset addresses (default: the network's common assets)
    #[arg(long, value_delimiter = ',')]
    pub assets: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum PerspectiveSubcommand {
    /// Name and verified vaults of a perspective
    Info(PerspectiveArgs),
    /// Check whether vaults are verified
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct PerspectiveArgs {
    /// Network of the perspective
    #[arg(long, default_value = "mainnet")]
    pub chain: Network,

    /// Perspective address (overrides --kind)
    #[arg(long)]
    pub perspective: Option<String>,

    /// Registry perspective to use (governed, base)
    #[arg(long, default_value = "governed")]
    pub kind: PerspectiveKind,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Vault addresses to check
    #[arg(required = true)]
    pub vaults: Vec<String>,

    #[command(flatten)]
    pub perspective: PerspectiveArgs,
}

#[derive(Subcommand, Debug)]
pub enum LensSubcommand {
    /// Lens contract addresses of a network
    Addresses(NetworkArgs),
    /// On-chain snapshot of a vault
    Vault(VaultArgs),
}

#[derive(Args, Debug)]
pub struct NetworkArgs {
    /// Network to use
    #[arg(long, default_value = "mainnet")]
    pub chain: Network,
}

#[derive(Args, Debug)]
pub struct VaultArgs {
    /// Vault address
    pub address: String,

    /// Network the vault is on
    #[arg(long, default_value = "mainnet")]
    pub chain: Network,
}

#[derive(Args, Debug)]
pub struct LiquidityArgs {
    /// Account whose liquidity to simulate
    #[arg(long)]
    pub account: String,

    /// Controller vault of the account
    #[arg(long)]
    pub vault: String,

    /// Network of the account
    #[arg(long, default_value = "mainnet")]
    pub chain: Network,
}

#[derive(Args, Debug)]
pub struct BorrowArgs {
    /// Vault to borrow from
    pub vault: String,

    /// Amount in human-readable units of the vault asset (e.g., "100.5")
    pub amount: String,

    /// Receiver of the borrowed assets (default: the signer)
    #[arg(long)]
    pub receiver: Option<String>,

    /// Network of the vault
    #[arg(long, default_value = "mainnet")]
    pub chain: Network,
}

#[derive(Args, Debug)]
pub struct SwapArgs {
    /// Input token: ETH, a token symbol, or an address
    pub token_in: String,

    /// Output token: ETH, a token symbol, or an address
    pub token_out: String,

    /// Amount of the input token in human-readable units
    pub amount: String,

    /// Slippage tolerance in percent
    #[arg(long, default_value = "5")]
    pub slippage: u32,

    /// Only quote, do not send transactions
    #[arg(long)]
    pub quote_only: bool,

    /// Network of the router
    #[arg(long, default_value = "sepolia")]
    pub chain: Network,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_network_aliases_parse() {
        let cli = Cli::try_parse_from(["euler", "lens", "addresses", "--chain", "eth"]).unwrap();
        match cli.command {
            Commands::Lens {
                subcommand: LensSubcommand::Addresses(args),
            } => assert_eq!(args.chain, Network::Mainnet),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_assets_split_on_comma() {
        let cli = Cli::try_parse_from(["euler", "prices", "--assets", "0x01,0x02"]).unwrap();
        match cli.command {
            Commands::Prices(args) => assert_eq!(args.assets, vec!["0x01", "0x02"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_network_rejected() {
        assert!(Cli::try_parse_from(["euler", "prices", "--chain", "polygon"]).is_err());
    }
}
