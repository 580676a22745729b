//! Off-chain price types.

use std::collections::BTreeMap;

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

/// One asset's price as reported by the Euler price API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub source: String,
    pub symbol: String,
    /// USD price.
    pub price: f64,
    /// Unix seconds.
    pub timestamp: i64,
}

/// Prices keyed by asset address.
pub type PriceMap = BTreeMap<Address, PriceRecord>;

/// A price prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedPrice {
    pub address: Address,
    pub symbol: String,
    pub price: f64,
    pub price_formatted: String,
    pub timestamp: i64,
    pub timestamp_formatted: String,
    pub source: String,
}

/// Comparison of an off-chain price against an on-chain one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDifference {
    /// `offchain - onchain`.
    pub difference: f64,
    /// Absolute difference relative to the on-chain price, in percent.
    pub percentage: f64,
    pub is_higher: bool,
}

/// A Pyth price feed known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFeed {
    /// Pair label, e.g. `ETH/USD`.
    pub pair: String,
    pub id: B256,
}
