//! Networks the Euler deployment tables know about.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A chain with at least one Euler endpoint or contract in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Optimism,
    Bsc,
    Unichain,
    Sonic,
    Swell,
    Base,
    Arbitrum,
    Sepolia,
}

/// Every network, in chain-id order.
pub const SUPPORTED_NETWORKS: &[Network] = &[
    Network::Mainnet,
    Network::Optimism,
    Network::Bsc,
    Network::Unichain,
    Network::Sonic,
    Network::Swell,
    Network::Base,
    Network::Arbitrum,
    Network::Sepolia,
];

impl Network {
    /// EIP-155 chain id.
    pub const fn chain_id(self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Optimism => 10,
            Network::Bsc => 56,
            Network::Unichain => 130,
            Network::Sonic => 146,
            Network::Swell => 1923,
            Network::Base => 8453,
            Network::Arbitrum => 42161,
            Network::Sepolia => 11_155_111,
        }
    }

    /// Short lowercase name, also used as the registry key.
    pub const fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Optimism => "optimism",
            Network::Bsc => "bsc",
            Network::Unichain => "unichain",
            Network::Sonic => "sonic",
            Network::Swell => "swell",
            Network::Base => "base",
            Network::Arbitrum => "arbitrum",
            Network::Sepolia => "sepolia",
        }
    }

    /// Human readable name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Network::Mainnet => "Ethereum Mainnet",
            Network::Optimism => "OP Mainnet",
            Network::Bsc => "BNB Smart Chain",
            Network::Unichain => "Unichain",
            Network::Sonic => "Sonic",
            Network::Swell => "Swellchain",
            Network::Base => "Base",
            Network::Arbitrum => "Arbitrum One",
            Network::Sepolia => "Sepolia Testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u64> for Network {
    type Error = u64;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        SUPPORTED_NETWORKS
            .iter()
            .copied()
            .find(|network| network.chain_id() == chain_id)
            .ok_or(chain_id)
    }
}

impl From<Network> for u64 {
    fn from(network: Network) -> Self {
        network.chain_id()
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network = match s.to_lowercase().as_str() {
            "mainnet" | "ethereum" | "eth" | "1" => Network::Mainnet,
            "optimism" | "op" | "10" => Network::Optimism,
            "bsc" | "bnb" | "binance" | "56" => Network::Bsc,
            "unichain" | "130" => Network::Unichain,
            "sonic" | "146" => Network::Sonic,
            "swell" | "swellchain" | "1923" => Network::Swell,
            "base" | "8453" => Network::Base,
            "arbitrum" | "arb" | "42161" => Network::Arbitrum,
            "sepolia" | "11155111" => Network::Sepolia,
            _ => return Err(format!("Unknown network: {}", s)),
        };
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_roundtrip() {
        for network in SUPPORTED_NETWORKS {
            assert_eq!(Network::try_from(network.chain_id()), Ok(*network));
        }
        assert_eq!(Network::try_from(999_999), Err(999_999));
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("eth".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!("Ethereum".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!("bnb".parse::<Network>(), Ok(Network::Bsc));
        assert_eq!("130".parse::<Network>(), Ok(Network::Unichain));
        assert_eq!("1923".parse::<Network>(), Ok(Network::Swell));
        assert!("polygon".parse::<Network>().is_err());
    }

    #[test]
    fn test_name_matches_serde() {
        for network in SUPPORTED_NETWORKS {
            let json = serde_json::to_string(network).unwrap();
            assert_eq!(json, format!("\"{}\"", network.name()));
            assert_eq!(network.name().parse::<Network>(), Ok(*network));
        }
    }

    #[test]
    fn test_unichain_chain_id() {
        assert_eq!(Network::Unichain.chain_id(), 130);
        assert_eq!(Network::Unichain.to_string(), "unichain");
    }
}
