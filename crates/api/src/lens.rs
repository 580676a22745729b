//! Direct lens and vault reads (no price update).

use std::sync::Arc;

use alloy_primitives::Address;
use euler_rs_contracts::{ContractReader, HttpProvider, ReadClient};
use tracing::debug;

use crate::config::NetworkRegistry;
use crate::error::Result;
use crate::types::{AccountLiquidity, LensAddresses, Network, VaultSnapshot};

#[derive(Clone)]
pub struct LensClient {
    reader: ReadClient,
    registry: Arc<NetworkRegistry>,
}

impl LensClient {
    pub fn new(provider: HttpProvider, registry: Arc<NetworkRegistry>) -> Self {
        Self {
            reader: ReadClient::from_provider(provider),
            registry,
        }
    }

    /// Lens deployments of `network`.
    pub fn lens_addresses(&self, network: Network) -> Result<LensAddresses> {
        self.registry.resolve_lens(network)
    }

    /// Account liquidity as last priced on-chain. Use
    /// [`crate::simulation::BatchSimulationClient`] for fresh prices.
    pub async fn account_liquidity(
        &self,
        lens: Address,
        account: Address,
        vault: Address,
    ) -> Result<AccountLiquidity> {
        debug!(%lens, %account, %vault, "reading account liquidity");
        let raw = self.reader.account_liquidity(lens, account, vault).await?;
        Ok(raw.into())
    }

    /// Name, asset and accounting state of a vault, read concurrently.
    pub async fn vault_snapshot(&self, vault: Address) -> Result<VaultSnapshot> {
        debug!(%vault, "reading vault snapshot");
        let r = &self.reader;
        let (
            name,
            symbol,
            decimals,
            asset,
            total_assets,
            total_supply,
            total_borrows,
            interest_rate,
            accumulated_fees,
        ) = futures::try_join!(
            r.vault_name(vault),
            r.vault_symbol(vault),
            r.vault_decimals(vault),
            r.vault_asset(vault),
            r.vault_total_assets(vault),
            r.vault_total_supply(vault),
            r.vault_total_borrows(vault),
            r.vault_interest_rate(vault),
            r.vault_accumulated_fees(vault),
        )?;

        Ok(VaultSnapshot {
            address: vault,
            name,
            symbol,
            decimals,
            asset,
            total_assets,
            total_supply,
            total_borrows,
            interest_rate,
            accumulated_fees,
        })
    }
}
