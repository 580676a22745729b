//! Swap request and result types.

use std::fmt;

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use super::scalars::u256_decimal;

/// One leg of a swap: the chain's native currency or an ERC-20 token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "address")]
pub enum SwapAsset {
    Native,
    Token(Address),
}

impl SwapAsset {
    /// Address used inside a router path; native legs use the wrapped native token.
    pub fn path_address(&self, wrapped_native: Address) -> Address {
        match self {
            SwapAsset::Native => wrapped_native,
            SwapAsset::Token(address) => *address,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, SwapAsset::Native)
    }
}

impl fmt::Display for SwapAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapAsset::Native => f.write_str("native"),
            SwapAsset::Token(address) => write!(f, "{}", address),
        }
    }
}

/// Router entry point used for a pair of legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwapMethod {
    ExactEthForTokens,
    ExactTokensForEth,
    ExactTokensForTokens,
}

impl fmt::Display for SwapMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SwapMethod::ExactEthForTokens => "swapExactETHForTokens",
            SwapMethod::ExactTokensForEth => "swapExactTokensForETH",
            SwapMethod::ExactTokensForTokens => "swapExactTokensForTokens",
        };
        f.write_str(name)
    }
}

/// Parameters of a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub token_in: SwapAsset,
    pub token_out: SwapAsset,
    /// Exact input amount in the input asset's base units.
    pub amount_in: U256,
    /// Accepted shortfall against the quote, in whole percent.
    pub slippage_percent: u32,
}

/// Default slippage tolerance in percent.
pub const DEFAULT_SLIPPAGE_PERCENT: u32 = 5;

impl SwapRequest {
    pub fn new(token_in: SwapAsset, token_out: SwapAsset, amount_in: U256) -> Self {
        Self {
            token_in,
            token_out,
            amount_in,
            slippage_percent: DEFAULT_SLIPPAGE_PERCENT,
        }
    }

    pub fn with_slippage(mut self, slippage_percent: u32) -> Self {
        self.slippage_percent = slippage_percent;
        self
    }
}

/// Router quote with the slippage floor applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    pub method: SwapMethod,
    pub path: Vec<Address>,
    #[serde(with = "u256_decimal")]
    pub amount_in: U256,
    #[serde(with = "u256_decimal")]
    pub expected_out: U256,
    #[serde(with = "u256_decimal")]
    pub min_out: U256,
}

/// Result of a swap attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum SwapOutcome {
    #[serde(rename_all = "camelCase")]
    Completed {
        transaction_hash: B256,
        #[serde(with = "u256_decimal")]
        expected_out: U256,
        #[serde(with = "u256_decimal")]
        min_out: U256,
    },
    Failed {
        reason: String,
    },
}

impl SwapOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SwapOutcome::Completed { .. })
    }
}

/// Token metadata used to convert between display and base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub address: Address,
    pub decimals: u8,
}

/// Router deployment of one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapContracts {
    pub router: Address,
    pub wrapped_native: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_address_maps_native() {
        let weth = Address::repeat_byte(0xee);
        let usdc = Address::repeat_byte(0x01);
        assert_eq!(SwapAsset::Native.path_address(weth), weth);
        assert_eq!(SwapAsset::Token(usdc).path_address(weth), usdc);
    }

    #[test]
    fn test_outcome_serialization() {
        let failed = SwapOutcome::Failed {
            reason: "UniswapV2Router: EXPIRED".to_string(),
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "UniswapV2Router: EXPIRED");
        assert!(!failed.is_success());

        let done = SwapOutcome::Completed {
            transaction_hash: B256::repeat_byte(0xab),
            expected_out: U256::from(2_000_000u64),
            min_out: U256::from(1_900_000u64),
        };
        let json = serde_json::to_value(&done).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["minOut"], "1900000");
        assert!(done.is_success());
    }

    #[test]
    fn test_request_default_slippage() {
        let request = SwapRequest::new(SwapAsset::Native, SwapAsset::Token(Address::ZERO), U256::from(1));
        assert_eq!(request.slippage_percent, 5);
        assert_eq!(request.with_slippage(1).slippage_percent, 1);
    }
}
