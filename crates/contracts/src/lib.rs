//! Contract bindings and transaction clients for Euler Finance.
//!
//! This crate provides Solidity bindings for the contracts the toolkit talks
//! to (EVault, EVC, account lens, perspectives, Pyth, Uniswap V2 router,
//! ERC-20), a read-only client, and a signer-bound transaction client.
//!
//! # Example
//!
//! ```no_run
//! use euler_rs_contracts::{ContractReader, ReadClient};
//! use alloy::primitives::address;
//!
//! #[tokio::main]
//! async fn main() -> euler_rs_contracts::Result<()> {
//!     let client = ReadClient::new("https://eth.llamarpc.com")?;
//!
//!     let perspective = address!("C0121817FF224a018840e4D15a864747d36e6Eb2");
//!     let vaults = client.verified_array(perspective).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod erc20;
pub mod error;
pub mod evault;
pub mod evc;
pub mod lens;
pub mod perspective;
pub mod prepared_call;
pub mod provider;
pub mod pyth;
pub mod reader;
pub mod router;
pub mod tx_client;

pub use error::{ContractError, Result};
pub use evc::{SimulationItem, SimulationResult};
pub use lens::IAccountLens::AccountLiquidity as LensAccountLiquidity;
pub use prepared_call::PreparedCall;
pub use provider::{connect_read_only, connect_with_signer, HttpProvider};
pub use reader::{ContractReader, ReadClient};
pub use tx_client::TransactionClient;
