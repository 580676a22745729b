//! Uniswap V2 router swaps.
//!
//! A swap is planned as a [`Pipeline`]: an optional `Approve` step followed by
//! the `Swap` step, which declares the approval as its prerequisite when one
//! is needed. Each step is mined before the next one is sent.

use alloy::rpc::types::TransactionReceipt;
use alloy_primitives::{Address, U256};
use chrono::Utc;
use euler_rs_contracts::erc20::IERC20;
use euler_rs_contracts::router::IUniswapV2Router02;
use euler_rs_contracts::{ContractError, ContractReader, PreparedCall, TransactionClient};
use tracing::{debug, info, warn};

use crate::config::NetworkRegistry;
use crate::error::{ApiError, Result};
use crate::pipeline::{Pipeline, Stage};
use crate::types::scalars::parse_address;
use crate::types::{
    Network, SwapAsset, SwapContracts, SwapMethod, SwapOutcome, SwapQuote, SwapRequest, TokenInfo,
};

/// Seconds a submitted swap stays valid.
pub const SWAP_DEADLINE_SECS: u64 = 600;

/// Router path between two legs. Legs that already touch the wrapped native
/// token swap directly; all other pairs route through it.
pub fn resolve_path(
    token_in: SwapAsset,
    token_out: SwapAsset,
    wrapped_native: Address,
) -> Result<Vec<Address>> {
    let from = token_in.path_address(wrapped_native);
    let to = token_out.path_address(wrapped_native);

    if from == to {
        return Err(ApiError::InvalidSwap(format!(
            "cannot swap {} for {}",
            token_in, token_out
        )));
    }

    if from == wrapped_native || to == wrapped_native {
        Ok(vec![from, to])
    } else {
        Ok(vec![from, wrapped_native, to])
    }
}

/// Router entry point for a pair of legs.
pub fn swap_method(token_in: SwapAsset, token_out: SwapAsset) -> SwapMethod {
    match (token_in, token_out) {
        (SwapAsset::Native, _) => SwapMethod::ExactEthForTokens,
        (_, SwapAsset::Native) => SwapMethod::ExactTokensForEth,
        _ => SwapMethod::ExactTokensForTokens,
    }
}

/// `expected * (100 - slippage) / 100`, rounded down.
pub fn min_amount_out(expected: U256, slippage_percent: u32) -> Result<U256> {
    if slippage_percent > 100 {
        return Err(ApiError::InvalidSlippage(slippage_percent));
    }
    let hundred = U256::from(100u8);
    let factor = U256::from(100 - slippage_percent);
    Ok(match expected.checked_mul(factor) {
        Some(scaled) => scaled / hundred,
        None => expected / hundred * factor,
    })
}

/// Deadline for a swap submitted at unix time `now`.
pub fn swap_deadline(now: u64) -> U256 {
    U256::from(now.saturating_add(SWAP_DEADLINE_SECS))
}

fn failure_reason(err: &ContractError) -> String {
    err.revert_reason()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string())
}

enum SwapStep<'a> {
    Approve(PreparedCall<'a, IERC20::approveCall>),
    EthForTokens(PreparedCall<'a, IUniswapV2Router02::swapExactETHForTokensCall>),
    TokensForEth(PreparedCall<'a, IUniswapV2Router02::swapExactTokensForETHCall>),
    TokensForTokens(PreparedCall<'a, IUniswapV2Router02::swapExactTokensForTokensCall>),
}

impl SwapStep<'_> {
    async fn send(self) -> euler_rs_contracts::Result<TransactionReceipt> {
        match self {
            SwapStep::Approve(call) => call.send().await,
            SwapStep::EthForTokens(call) => call.send().await,
            SwapStep::TokensForEth(call) => call.send().await,
            SwapStep::TokensForTokens(call) => call.send().await,
        }
    }
}

/// Quotes and executes swaps from one signer through one router.
#[derive(Clone)]
pub struct SwapClient {
    tx: TransactionClient,
    contracts: SwapContracts,
    tokens: Vec<TokenInfo>,
}

impl SwapClient {
    pub fn new(tx: TransactionClient, contracts: SwapContracts, tokens: Vec<TokenInfo>) -> Self {
        Self {
            tx,
            contracts,
            tokens,
        }
    }

    /// Client for the router and token table of `network`.
    pub fn from_registry(
        tx: TransactionClient,
        registry: &NetworkRegistry,
        network: Network,
    ) -> Result<Self> {
        let contracts = registry.resolve_swap(network)?;
        Ok(Self::new(tx, contracts, registry.tokens(network).to_vec()))
    }

    pub fn contracts(&self) -> SwapContracts {
        self.contracts
    }

    /// Resolve a token by table symbol (case-insensitive) or by address.
    /// Unknown addresses are described by reading `decimals` and `symbol`.
    pub async fn token_info(&self, input: &str) -> Result<TokenInfo> {
        if let Some(token) = self
            .tokens
            .iter()
            .find(|token| token.symbol.eq_ignore_ascii_case(input))
        {
            return Ok(token.clone());
        }

        let address =
            parse_address(input).ok_or_else(|| ApiError::InvalidAddress(input.to_string()))?;
        if let Some(token) = self.tokens.iter().find(|token| token.address == address) {
            return Ok(token.clone());
        }

        let (decimals, symbol) =
            futures::try_join!(self.tx.get_decimals(address), self.tx.get_symbol(address))?;
        Ok(TokenInfo {
            symbol,
            address,
            decimals,
        })
    }

    /// Expected output and slippage floor for `request`.
    pub async fn quote(&self, request: &SwapRequest) -> Result<SwapQuote> {
        let path = resolve_path(
            request.token_in,
            request.token_out,
            self.contracts.wrapped_native,
        )?;
        // validate before touching the chain
        min_amount_out(U256::ZERO, request.slippage_percent)?;

        debug!(router = %self.contracts.router, hops = path.len(), amount_in = %request.amount_in, "quoting swap");

        let amounts = self
            .tx
            .get_amounts_out(self.contracts.router, request.amount_in, path.clone())
            .await?;
        let expected_out = amounts.last().copied().ok_or_else(|| ApiError::Decode {
            reason: "getAmountsOut returned no amounts".to_string(),
            raw: Default::default(),
        })?;

        Ok(SwapQuote {
            method: swap_method(request.token_in, request.token_out),
            path,
            amount_in: request.amount_in,
            expected_out,
            min_out: min_amount_out(expected_out, request.slippage_percent)?,
        })
    }

    fn swap_step(&self, quote: &SwapQuote, deadline: U256) -> SwapStep<'_> {
        let router = self.contracts.router;
        let path = quote.path.clone();
        match quote.method {
            SwapMethod::ExactEthForTokens => SwapStep::EthForTokens(self.tx.swap_exact_eth_for_tokens(
                router,
                quote.amount_in,
                quote.min_out,
                path,
                deadline,
            )),
            SwapMethod::ExactTokensForEth => SwapStep::TokensForEth(self.tx.swap_exact_tokens_for_eth(
                router,
                quote.amount_in,
                quote.min_out,
                path,
                deadline,
            )),
            SwapMethod::ExactTokensForTokens => {
                SwapStep::TokensForTokens(self.tx.swap_exact_tokens_for_tokens(
                    router,
                    quote.amount_in,
                    quote.min_out,
                    path,
                    deadline,
                ))
            }
        }
    }

    /// Quote, approve if needed, then swap.
    ///
    /// Invalid requests and approval failures are errors. A failed quote or a
    /// reverted swap is reported as [`SwapOutcome::Failed`] with the decoded
    /// revert reason.
    pub async fn swap(&self, request: &SwapRequest) -> Result<SwapOutcome> {
        let quote = match self.quote(request).await {
            Ok(quote) => quote,
            Err(ApiError::Contract(e)) => {
                warn!(error = %e, "swap quote failed");
                return Ok(SwapOutcome::Failed {
                    reason: failure_reason(&e),
                });
            }
            Err(e) => return Err(e),
        };

        self.swap_with_quote(request, &quote).await
    }

    /// Approve if needed, then swap with the floor of an earlier `quote`.
    ///
    /// The quote must have been made for `request`.
    pub async fn swap_with_quote(&self, request: &SwapRequest, quote: &SwapQuote) -> Result<SwapOutcome> {
        let path = resolve_path(
            request.token_in,
            request.token_out,
            self.contracts.wrapped_native,
        )?;
        if quote.path != path
            || quote.amount_in != request.amount_in
            || quote.method != swap_method(request.token_in, request.token_out)
        {
            return Err(ApiError::InvalidSwap(
                "quote was made for a different request".to_string(),
            ));
        }

        let mut plan = Pipeline::new();
        if let SwapAsset::Token(token) = request.token_in {
            if let Some(approval) = self
                .tx
                .approve_if_needed(token, self.contracts.router, request.amount_in)
                .await?
            {
                plan.push(Stage::Approve, None, SwapStep::Approve(approval))?;
            }
        }

        let requires = plan.position(Stage::Approve).map(|_| Stage::Approve);
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        plan.push(Stage::Swap, requires, self.swap_step(quote, swap_deadline(now)))?;

        for step in plan.into_steps() {
            match step.stage {
                Stage::Approve => {
                    let receipt = step.payload.send().await?;
                    info!(tx = %receipt.transaction_hash, "router approval mined");
                }
                _ => {
                    return Ok(match step.payload.send().await {
                        Ok(receipt) => {
                            info!(tx = %receipt.transaction_hash, method = %quote.method, "swap mined");
                            SwapOutcome::Completed {
                                transaction_hash: receipt.transaction_hash,
                                expected_out: quote.expected_out,
                                min_out: quote.min_out,
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, method = %quote.method, "swap failed");
                            SwapOutcome::Failed {
                                reason: failure_reason(&e),
                            }
                        }
                    });
                }
            }
        }

        Err(ApiError::InvalidSwap("plan contained no swap step".to_string()))
    }
}
