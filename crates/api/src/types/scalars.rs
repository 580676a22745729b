//! Conversions between wire scalars and alloy types.
//!
//! The subgraph serializes 256-bit integers as decimal strings and addresses
//! as lowercase hex strings. Values are parsed once at the boundary and
//! written back out as decimal strings.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

/// Parse a hex address string into an alloy Address.
pub fn parse_address(s: &str) -> Option<Address> {
    Address::from_str(s).ok()
}

/// Parse a decimal BigInt string into a U256.
pub fn parse_bigint(s: &str) -> Option<U256> {
    U256::from_str_radix(s, 10).ok()
}

/// Deserialize an optional address; null, empty or malformed values become `None`.
pub fn deserialize_optional_address<'de, D>(deserializer: D) -> Result<Option<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| parse_address(&s)))
}

/// Deserialize a required address.
pub fn deserialize_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    parse_address(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid address: {}", s)))
}

/// Serde adapter reading and writing a U256 as a decimal string.
pub mod u256_decimal {
    use super::*;

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        parse_bigint(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid BigInt: {}", s)))
    }
}
