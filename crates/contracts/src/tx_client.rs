//! Signer-bound transaction client.
//!
//! Builds `PreparedCall`s for every state-changing entry point the toolkit
//! uses: ERC-20 approvals, EVC batches, vault borrows and router swaps.

use alloy::primitives::{Address, Bytes, U256};

use crate::erc20::IERC20;
use crate::error::Result;
use crate::evault::IEVault;
use crate::evc::{SimulationItem, IEVC};
use crate::prepared_call::PreparedCall;
use crate::provider::{connect_with_signer, HttpProvider};
use crate::pyth::IPyth;
use crate::reader::ContractReader;
use crate::router::IUniswapV2Router02;

/// Client for executing transactions from a single signer.
#[derive(Clone)]
pub struct TransactionClient {
    provider: HttpProvider,
    signer_address: Address,
}

impl TransactionClient {
    /// Create a new transaction client.
    pub fn new(rpc_url: &str, private_key: &str) -> Result<Self> {
        let (provider, signer_address) = connect_with_signer(rpc_url, private_key)?;
        Ok(Self {
            provider,
            signer_address,
        })
    }

    /// The address transactions are sent from.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    /// Create a prepared approval transaction.
    pub fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> PreparedCall<'_, IERC20::approveCall> {
        let call = IERC20::approveCall { spender, amount };
        PreparedCall::new(token, call, U256::ZERO, &self.provider)
    }

    /// Returns an unlimited approval if the current allowance is below `amount`,
    /// `None` if the allowance already covers it.
    pub async fn approve_if_needed(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<Option<PreparedCall<'_, IERC20::approveCall>>> {
        let current_allowance = self
            .get_allowance(token, self.signer_address, spender)
            .await?;

        if current_allowance >= amount {
            return Ok(None);
        }

        Ok(Some(self.approve(token, spender, U256::MAX)))
    }

    /// Create a prepared EVC batch. The transaction carries the sum of the
    /// item values so the EVC can forward them.
    pub fn batch(
        &self,
        evc: Address,
        items: Vec<SimulationItem>,
    ) -> PreparedCall<'_, IEVC::batchCall> {
        let value = items
            .iter()
            .fold(U256::ZERO, |total, item| total.saturating_add(item.value));
        let call = IEVC::batchCall { items };
        PreparedCall::new(evc, call, value, &self.provider)
    }

    /// Create a prepared standalone Pyth price update.
    pub fn update_price_feeds(
        &self,
        oracle: Address,
        update_data: Vec<Bytes>,
        fee: U256,
    ) -> PreparedCall<'_, IPyth::updatePriceFeedsCall> {
        let call = IPyth::updatePriceFeedsCall {
            updateData: update_data,
        };
        PreparedCall::new(oracle, call, fee, &self.provider)
    }

    /// Create a prepared borrow from a vault.
    pub fn borrow(
        &self,
        vault: Address,
        amount: U256,
        receiver: Address,
    ) -> PreparedCall<'_, IEVault::borrowCall> {
        let call = IEVault::borrowCall { amount, receiver };
        PreparedCall::new(vault, call, U256::ZERO, &self.provider)
    }

    /// Swap an exact amount of native currency for tokens.
    pub fn swap_exact_eth_for_tokens(
        &self,
        router: Address,
        amount_in: U256,
        amount_out_min: U256,
        path: Vec<Address>,
        deadline: U256,
    ) -> PreparedCall<'_, IUniswapV2Router02::swapExactETHForTokensCall> {
        let call = IUniswapV2Router02::swapExactETHForTokensCall {
            amountOutMin: amount_out_min,
            path,
            to: self.signer_address,
            deadline,
        };
        PreparedCall::new(router, call, amount_in, &self.provider)
    }

    /// Swap an exact amount of tokens for native currency.
    pub fn swap_exact_tokens_for_eth(
        &self,
        router: Address,
        amount_in: U256,
        amount_out_min: U256,
        path: Vec<Address>,
        deadline: U256,
    ) -> PreparedCall<'_, IUniswapV2Router02::swapExactTokensForETHCall> {
        let call = IUniswapV2Router02::swapExactTokensForETHCall {
            amountIn: amount_in,
            amountOutMin: amount_out_min,
            path,
            to: self.signer_address,
            deadline,
        };
        PreparedCall::new(router, call, U256::ZERO, &self.provider)
    }

    /// Swap an exact amount of tokens for other tokens.
    pub fn swap_exact_tokens_for_tokens(
        &self,
        router: Address,
        amount_in: U256,
        amount_out_min: U256,
        path: Vec<Address>,
        deadline: U256,
    ) -> PreparedCall<'_, IUniswapV2Router02::swapExactTokensForTokensCall> {
        let call = IUniswapV2Router02::swapExactTokensForTokensCall {
            amountIn: amount_in,
            amountOutMin: amount_out_min,
            path,
            to: self.signer_address,
            deadline,
        };
        PreparedCall::new(router, call, U256::ZERO, &self.provider)
    }
}

impl ContractReader for TransactionClient {
    fn provider(&self) -> &HttpProvider {
        &self.provider
    }
}
