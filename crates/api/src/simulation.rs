//! Price-updated account liquidity through EVC batches.
//!
//! A Pyth price update is only visible to calls that run after it in the same
//! execution context. Every batch built here therefore starts with the
//! `updatePriceFeeds` item and places the dependent read or action right
//! behind it; [`Pipeline`] rejects any other order.

use std::sync::Arc;

use alloy::rpc::types::TransactionReceipt;
use alloy::sol_types::SolCall;
use alloy_primitives::{Address, Bytes, B256, U256};
use euler_rs_contracts::error::revert_reason;
use euler_rs_contracts::evault::IEVault;
use euler_rs_contracts::evc::IEVC;
use euler_rs_contracts::lens::IAccountLens;
use euler_rs_contracts::pyth::IPyth;
use euler_rs_contracts::{
    ContractError, ContractReader, HttpProvider, ReadClient, SimulationItem, SimulationResult,
    TransactionClient,
};
use tracing::{debug, info, warn};

use crate::config::{NetworkRegistry, ETH_USD_FEED_ID};
use crate::error::{ApiError, Result};
use crate::hermes::HermesClient;
use crate::pipeline::{Pipeline, PipelineError, Stage};
use crate::types::{AccountLiquidity, BatchContracts, ExecutorContracts, Network};

/// Number of items in a liquidity simulation batch.
const LIQUIDITY_BATCH_LEN: usize = 2;

/// Simulates and executes price-updated EVC batches.
#[derive(Clone)]
pub struct BatchSimulationClient {
    reader: ReadClient,
    registry: Arc<NetworkRegistry>,
    hermes: HermesClient,
    price_ids: Vec<B256>,
}

impl BatchSimulationClient {
    /// Create a client; price updates default to the ETH/USD feed.
    pub fn new(provider: HttpProvider, registry: Arc<NetworkRegistry>, hermes: HermesClient) -> Self {
        Self {
            reader: ReadClient::from_provider(provider),
            registry,
            hermes,
            price_ids: vec![ETH_USD_FEED_ID],
        }
    }

    /// Replace the Pyth feeds updated at the start of each batch.
    pub fn with_price_ids(mut self, price_ids: Vec<B256>) -> Self {
        self.price_ids = price_ids;
        self
    }

    pub fn price_ids(&self) -> &[B256] {
        &self.price_ids
    }

    /// Account liquidity of `account` in `vault`, read right after a fresh
    /// price update without committing anything.
    pub async fn simulate_account_liquidity(
        &self,
        account: Address,
        vault: Address,
        network: Network,
    ) -> Result<AccountLiquidity> {
        let contracts = self.registry.resolve_batch_contracts(network)?;
        let updates = self.hermes.fetch_price_updates(&self.price_ids).await?;
        let items = build_liquidity_batch(&contracts, updates, account, vault)?.into_payloads();

        debug!(
            %network,
            %account,
            %vault,
            evc = %contracts.evc,
            items = items.len(),
            "simulating EVC batch"
        );

        let evc = IEVC::new(contracts.evc, self.reader.provider());
        let results = evc
            .batchSimulation(items)
            .from(account)
            .call()
            .await
            .map_err(|e| ContractError::from_call("batchSimulation", e))?;

        interpret_liquidity_results(&results)
    }

    /// Borrow `amount` from `vault` in one EVC batch that first pushes a
    /// fresh price update. The transaction is sent from `signer`.
    pub async fn execute_borrow_with_price_update(
        &self,
        signer: &TransactionClient,
        vault: Address,
        amount: U256,
        receiver: Address,
        network: Network,
    ) -> Result<TransactionReceipt> {
        let contracts = self.registry.resolve_executor(network)?;
        let updates = self.hermes.fetch_price_updates(&self.price_ids).await?;
        let fee = signer
            .get_update_fee(contracts.pyth_oracle, updates.clone())
            .await?;

        let account = signer.signer_address();
        let items = build_borrow_batch(&contracts, updates, fee, account, vault, amount, receiver)?
            .into_payloads();

        info!(%network, %vault, %amount, %fee, "submitting price-updated borrow batch");

        let receipt = signer.batch(contracts.evc, items).send().await?;
        Ok(receipt)
    }
}

fn update_item(oracle: Address, account: Address, updates: Vec<Bytes>, fee: U256) -> SimulationItem {
    SimulationItem {
        targetContract: oracle,
        onBehalfOfAccount: account,
        value: fee,
        data: IPyth::updatePriceFeedsCall {
            updateData: updates,
        }
        .abi_encode()
        .into(),
    }
}

/// The two-item liquidity batch: price update, then the account lens read.
pub fn build_liquidity_batch(
    contracts: &BatchContracts,
    updates: Vec<Bytes>,
    account: Address,
    vault: Address,
) -> std::result::Result<Pipeline<SimulationItem>, PipelineError> {
    let query = SimulationItem {
        targetContract: contracts.account_lens,
        onBehalfOfAccount: account,
        value: U256::ZERO,
        data: IAccountLens::getAccountLiquidityCall { account, vault }
            .abi_encode()
            .into(),
    };

    Pipeline::new()
        .then(
            Stage::PriceUpdate,
            None,
            update_item(contracts.pyth_oracle, account, updates, U256::ZERO),
        )?
        .then(Stage::Query, Some(Stage::PriceUpdate), query)
}

/// The two-item borrow batch: price update paying `fee`, then the borrow.
pub fn build_borrow_batch(
    contracts: &ExecutorContracts,
    updates: Vec<Bytes>,
    fee: U256,
    account: Address,
    vault: Address,
    amount: U256,
    receiver: Address,
) -> std::result::Result<Pipeline<SimulationItem>, PipelineError> {
    let borrow = SimulationItem {
        targetContract: vault,
        onBehalfOfAccount: account,
        value: U256::ZERO,
        data: IEVault::borrowCall { amount, receiver }.abi_encode().into(),
    };

    Pipeline::new()
        .then(
            Stage::PriceUpdate,
            None,
            update_item(contracts.pyth_oracle, account, updates, fee),
        )?
        .then(Stage::Action, Some(Stage::PriceUpdate), borrow)
}

/// Turn the results of a liquidity batch into account liquidity.
///
/// A failed price update fails the whole read: the lens result would have
/// been computed from stale prices.
pub fn interpret_liquidity_results(results: &[SimulationResult]) -> Result<AccountLiquidity> {
    if results.len() != LIQUIDITY_BATCH_LEN {
        return Err(ApiError::Decode {
            reason: format!(
                "expected {} batch results, got {}",
                LIQUIDITY_BATCH_LEN,
                results.len()
            ),
            raw: Bytes::new(),
        });
    }

    let stages = [Stage::PriceUpdate, Stage::Query];
    for (index, (result, stage)) in results.iter().zip(stages).enumerate() {
        if !result.success {
            let reason = revert_reason(&result.result);
            warn!(index, %stage, %reason, "batch item failed");
            return Err(ApiError::BatchItemFailed {
                index,
                stage,
                reason,
            });
        }
    }

    let raw = &results[1].result;
    IAccountLens::getAccountLiquidityCall::abi_decode_returns(raw)
        .map(AccountLiquidity::from)
        .map_err(|e| ApiError::Decode {
            reason: format!("getAccountLiquidity: {}", e),
            raw: raw.clone(),
        })
}

/// Calldata of `batchSimulation(items)`.
pub fn simulation_batch_calldata(items: Vec<SimulationItem>) -> Bytes {
    IEVC::batchSimulationCall { items }.abi_encode().into()
}

/// Decode the return data of `batchSimulation`.
pub fn decode_simulation_results(data: &[u8]) -> Result<Vec<SimulationResult>> {
    IEVC::batchSimulationCall::abi_decode_returns(data).map_err(|e| ApiError::Decode {
        reason: format!("batchSimulation: {}", e),
        raw: Bytes::copy_from_slice(data),
    })
}
