//! Lens deployments and vault snapshots.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::scalars::u256_decimal;

/// Lens contracts deployed on one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LensAddresses {
    pub utils_lens: Address,
    pub vault_lens: Address,
    pub euler_earn_vault_lens: Address,
}

/// Vault state assembled from individual view calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultSnapshot {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub asset: Address,
    #[serde(with = "u256_decimal")]
    pub total_assets: U256,
    #[serde(with = "u256_decimal")]
    pub total_supply: U256,
    #[serde(with = "u256_decimal")]
    pub total_borrows: U256,
    #[serde(with = "u256_decimal")]
    pub interest_rate: U256,
    #[serde(with = "u256_decimal")]
    pub accumulated_fees: U256,
}
