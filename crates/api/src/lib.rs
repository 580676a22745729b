//! Euler Finance Rust API Library
//!
//! Clients for the data sources an Euler v2 dashboard reads from:
//!
//! - [`SubgraphClient`]: vault statuses, vaults, borrows and liquidations
//!   from the per-network Euler subgraph.
//! - [`PriceClient`]: USD prices from the Euler price API.
//! - [`HermesClient`]: signed Pyth price updates.
//! - [`BatchSimulationClient`]: account liquidity read through an EVC batch
//!   that pushes a fresh price update first, and the matching borrow.
//! - [`PerspectiveClient`] and [`LensClient`]: verified-vault registries and
//!   direct vault reads.
//! - [`SwapClient`]: Uniswap V2 router quotes and swaps.
//!
//! Endpoints and contract addresses come from an injected [`NetworkRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use euler_rs_api::{EulerClient, EulerClientConfig, Network};
//! use alloy::primitives::address;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), euler_rs_api::ApiError> {
//!     // HTTP-only client
//!     let client = EulerClient::new();
//!     let vaults = client.subgraph().euler_vaults(Network::Mainnet).await?;
//!     let prices = client.prices().fetch_common_prices(Network::Mainnet).await?;
//!
//!     // Contract reads
//!     let config = EulerClientConfig::new().with_rpc_url("https://eth.llamarpc.com");
//!     let client = EulerClient::with_config(config)?;
//!     let perspective = client
//!         .registry()
//!         .resolve_perspective(Network::Mainnet, Default::default())?;
//!     let vault = address!("797DD80692c3b2dAdabCe8e30C07fDE5307D48a9");
//!     let verified = client.perspective()?.is_vault_verified(perspective, vault).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All errors are unified through [`ApiError`], which wraps errors from the
//! contracts crate. Use [`ApiError::error_category()`] for high-level
//! classification and [`ApiError::is_retryable()`] to tell transport failures
//! apart. Nothing in this crate retries on its own.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod hermes;
pub mod lens;
pub mod perspective;
pub mod pipeline;
pub mod prices;
pub mod queries;
pub mod simulation;
pub mod subgraph;
pub mod swap;
pub mod types;

// Re-export main types at crate root
pub use client::{EulerClient, EulerClientConfig};
pub use config::{AssetEntry, NetworkConfig, NetworkRegistry};
pub use error::{ApiError, ErrorCategory, Result};
pub use euler_rs_contracts::{ContractError, ContractReader, TransactionClient};
pub use hermes::HermesClient;
pub use lens::LensClient;
pub use perspective::PerspectiveClient;
pub use pipeline::{Pipeline, PipelineError, Stage, Step};
pub use prices::PriceClient;
pub use simulation::BatchSimulationClient;
pub use subgraph::SubgraphClient;
pub use swap::SwapClient;
pub use types::{
    AccountLiquidity, BatchContracts, Borrow, EulerVault, ExecutorContracts, FormattedPrice,
    LensAddresses, Liquidate, Network, PerspectiveInfo, PerspectiveKind, PriceDifference,
    PriceFeed, PriceMap, PriceRecord, SwapAsset, SwapContracts, SwapMethod, SwapOutcome,
    SwapQuote, SwapRequest, TokenInfo, VaultSnapshot, VaultStatus, VerifiedVault,
    SUPPORTED_NETWORKS,
};
