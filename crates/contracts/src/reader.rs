//! Shared read-only contract access.
//!
//! `ContractReader` provides default implementations for every view function
//! the toolkit reads. Implementors only need to provide `provider()`.

#![allow(async_fn_in_trait)]

use alloy::primitives::{Address, Bytes, U256};

use crate::erc20::IERC20;
use crate::error::{ContractError, Result};
use crate::evault::IEVault;
use crate::lens::IAccountLens::{self, AccountLiquidity};
use crate::perspective::IPerspective;
use crate::provider::HttpProvider;
use crate::pyth::IPyth;
use crate::router::IUniswapV2Router02;

/// Trait for read-only contract calls (no state change, no gas).
pub trait ContractReader {
    /// Returns a reference to the HTTP provider.
    fn provider(&self) -> &HttpProvider;

    /// Get the decimals of a token.
    async fn get_decimals(&self, token: Address) -> Result<u8> {
        let contract = IERC20::new(token, self.provider());
        contract
            .decimals()
            .call()
            .await
            .map_err(|e| ContractError::from_call("decimals", e))
    }

    /// Get the symbol of a token.
    async fn get_symbol(&self, token: Address) -> Result<String> {
        let contract = IERC20::new(token, self.provider());
        contract
            .symbol()
            .call()
            .await
            .map_err(|e| ContractError::from_call("symbol", e))
    }

    /// Get the balance of a token for an address.
    async fn get_balance(&self, token: Address, owner: Address) -> Result<U256> {
        let contract = IERC20::new(token, self.provider());
        contract
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| ContractError::from_call("balanceOf", e))
    }

    /// Get the allowance of a token for a spender.
    async fn get_allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        let contract = IERC20::new(token, self.provider());
        contract
            .allowance(owner, spender)
            .call()
            .await
            .map_err(|e| ContractError::from_call("allowance", e))
    }

    /// Get the display name of a perspective.
    async fn perspective_name(&self, perspective: Address) -> Result<String> {
        let contract = IPerspective::new(perspective, self.provider());
        contract
            .name()
            .call()
            .await
            .map_err(|e| ContractError::from_call("name", e))
    }

    /// Get every vault verified by a perspective.
    async fn verified_array(&self, perspective: Address) -> Result<Vec<Address>> {
        let contract = IPerspective::new(perspective, self.provider());
        contract
            .verifiedArray()
            .call()
            .await
            .map_err(|e| ContractError::from_call("verifiedArray", e))
    }

    /// Get the number of vaults verified by a perspective.
    async fn verified_length(&self, perspective: Address) -> Result<U256> {
        let contract = IPerspective::new(perspective, self.provider());
        contract
            .verifiedLength()
            .call()
            .await
            .map_err(|e| ContractError::from_call("verifiedLength", e))
    }

    /// Check a vault against a perspective.
    async fn is_verified(&self, perspective: Address, vault: Address) -> Result<bool> {
        let contract = IPerspective::new(perspective, self.provider());
        contract
            .isVerified(vault)
            .call()
            .await
            .map_err(|e| ContractError::from_call("isVerified", e))
    }

    /// Read account liquidity directly from the account lens.
    async fn account_liquidity(
        &self,
        lens: Address,
        account: Address,
        vault: Address,
    ) -> Result<AccountLiquidity> {
        let contract = IAccountLens::new(lens, self.provider());
        contract
            .getAccountLiquidity(account, vault)
            .call()
            .await
            .map_err(|e| ContractError::from_call("getAccountLiquidity", e))
    }

    /// Get the vault's share token name.
    async fn vault_name(&self, vault: Address) -> Result<String> {
        let contract = IEVault::new(vault, self.provider());
        contract
            .name()
            .call()
            .await
            .map_err(|e| ContractError::from_call("name", e))
    }

    /// Get the vault's share token symbol.
    async fn vault_symbol(&self, vault: Address) -> Result<String> {
        let contract = IEVault::new(vault, self.provider());
        contract
            .symbol()
            .call()
            .await
            .map_err(|e| ContractError::from_call("symbol", e))
    }

    /// Get the vault's share decimals.
    async fn vault_decimals(&self, vault: Address) -> Result<u8> {
        let contract = IEVault::new(vault, self.provider());
        contract
            .decimals()
            .call()
            .await
            .map_err(|e| ContractError::from_call("decimals", e))
    }

    /// Get the underlying asset address of a vault.
    async fn vault_asset(&self, vault: Address) -> Result<Address> {
        let contract = IEVault::new(vault, self.provider());
        contract
            .asset()
            .call()
            .await
            .map_err(|e| ContractError::from_call("asset", e))
    }

    /// Get the total assets managed by a vault.
    async fn vault_total_assets(&self, vault: Address) -> Result<U256> {
        let contract = IEVault::new(vault, self.provider());
        contract
            .totalAssets()
            .call()
            .await
            .map_err(|e| ContractError::from_call("totalAssets", e))
    }

    /// Get the total share supply of a vault.
    async fn vault_total_supply(&self, vault: Address) -> Result<U256> {
        let contract = IEVault::new(vault, self.provider());
        contract
            .totalSupply()
            .call()
            .await
            .map_err(|e| ContractError::from_call("totalSupply", e))
    }

    /// Get the outstanding borrows of a vault.
    async fn vault_total_borrows(&self, vault: Address) -> Result<U256> {
        let contract = IEVault::new(vault, self.provider());
        contract
            .totalBorrows()
            .call()
            .await
            .map_err(|e| ContractError::from_call("totalBorrows", e))
    }

    /// Get the vault's current interest rate (per-second, ray scaled).
    async fn vault_interest_rate(&self, vault: Address) -> Result<U256> {
        let contract = IEVault::new(vault, self.provider());
        contract
            .interestRate()
            .call()
            .await
            .map_err(|e| ContractError::from_call("interestRate", e))
    }

    /// Get the vault's accumulated fees (in shares).
    async fn vault_accumulated_fees(&self, vault: Address) -> Result<U256> {
        let contract = IEVault::new(vault, self.provider());
        contract
            .accumulatedFees()
            .call()
            .await
            .map_err(|e| ContractError::from_call("accumulatedFees", e))
    }

    /// Fee the Pyth oracle charges to apply `update_data`.
    async fn get_update_fee(&self, oracle: Address, update_data: Vec<Bytes>) -> Result<U256> {
        let contract = IPyth::new(oracle, self.provider());
        contract
            .getUpdateFee(update_data)
            .call()
            .await
            .map_err(|e| ContractError::from_call("getUpdateFee", e))
    }

    /// Quote the output amounts along a router path.
    async fn get_amounts_out(
        &self,
        router: Address,
        amount_in: U256,
        path: Vec<Address>,
    ) -> Result<Vec<U256>> {
        let contract = IUniswapV2Router02::new(router, self.provider());
        contract
            .getAmountsOut(amount_in, path)
            .call()
            .await
            .map_err(|e| ContractError::from_call("getAmountsOut", e))
    }
}

/// Read-only client over an HTTP provider.
#[derive(Clone)]
pub struct ReadClient {
    provider: HttpProvider,
}

impl ReadClient {
    /// Create a read client from an RPC URL.
    pub fn new(rpc_url: &str) -> Result<Self> {
        Ok(Self {
            provider: crate::provider::connect_read_only(rpc_url)?,
        })
    }

    /// Wrap an existing provider.
    pub fn from_provider(provider: HttpProvider) -> Self {
        Self { provider }
    }
}

impl ContractReader for ReadClient {
    fn provider(&self) -> &HttpProvider {
        &self.provider
    }
}
