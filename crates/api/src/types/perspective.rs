//! Perspective (verified-vault registry) types.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Which perspective of a network to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerspectiveKind {
    #[default]
    Governed,
    Base,
}

impl fmt::Display for PerspectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerspectiveKind::Governed => f.write_str("governed perspective"),
            PerspectiveKind::Base => f.write_str("base perspective"),
        }
    }
}

impl FromStr for PerspectiveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "governed" => Ok(PerspectiveKind::Governed),
            "base" => Ok(PerspectiveKind::Base),
            _ => Err(format!("Unknown perspective kind: {}", s)),
        }
    }
}

/// Verification status of one vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedVault {
    pub address: Address,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective_name: Option<String>,
}

/// Summary of a perspective contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveInfo {
    pub address: Address,
    pub name: String,
    pub verified_vaults: Vec<Address>,
    pub verified_count: u64,
}
