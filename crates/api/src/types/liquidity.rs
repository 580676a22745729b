//! Account liquidity and the contracts needed to read it with fresh prices.

use alloy_primitives::{Address, U256};
use euler_rs_contracts::LensAccountLiquidity;
use serde::Serialize;

use super::scalars::u256_decimal;

/// Collateral and debt values of an account, in the vault's unit of account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLiquidity {
    #[serde(with = "u256_decimal")]
    pub total_collateral_value: U256,
    #[serde(with = "u256_decimal")]
    pub total_debt_value: U256,
    #[serde(with = "u256_decimal")]
    pub available_borrows: U256,
}

impl From<LensAccountLiquidity> for AccountLiquidity {
    fn from(raw: LensAccountLiquidity) -> Self {
        Self {
            total_collateral_value: raw.totalCollateralValue,
            total_debt_value: raw.totalDebtValue,
            available_borrows: raw.availableBorrows,
        }
    }
}

/// Contracts taking part in a price-updated liquidity simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchContracts {
    pub pyth_oracle: Address,
    pub account_lens: Address,
    pub evc: Address,
}

/// Contracts needed to execute a price-updated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorContracts {
    pub pyth_oracle: Address,
    pub evc: Address,
}
