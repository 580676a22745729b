//! Entities returned by the Euler v2 subgraph.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::scalars::{deserialize_address, deserialize_optional_address, u256_decimal};

/// Snapshot of a vault's accounting, emitted on every status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultStatus {
    pub id: String,
    #[serde(with = "u256_decimal")]
    pub accumulated_fees: U256,
    #[serde(with = "u256_decimal")]
    pub interest_rate: U256,
    #[serde(with = "u256_decimal")]
    pub total_borrows: U256,
    #[serde(with = "u256_decimal")]
    pub total_shares: U256,
}

/// A deployed Euler vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerVault {
    pub id: String,
    #[serde(deserialize_with = "deserialize_address")]
    pub creator: Address,
    /// Governor of the vault. The subgraph schema spells this field `governonAdmin`.
    #[serde(
        rename(deserialize = "governonAdmin", serialize = "governorAdmin"),
        default,
        deserialize_with = "deserialize_optional_address"
    )]
    pub governor_admin: Option<Address>,
    pub symbol: String,
}

/// A borrow event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrow {
    pub id: String,
    #[serde(deserialize_with = "deserialize_address")]
    pub account: Address,
    #[serde(with = "u256_decimal")]
    pub assets: U256,
    #[serde(deserialize_with = "deserialize_address")]
    pub vault: Address,
}

/// A liquidation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liquidate {
    pub id: String,
    #[serde(deserialize_with = "deserialize_address")]
    pub liquidator: Address,
    #[serde(with = "u256_decimal")]
    pub repay_assets: U256,
    #[serde(with = "u256_decimal")]
    pub yield_balance: U256,
    #[serde(deserialize_with = "deserialize_address")]
    pub violator: Address,
}
