//! Unified entry point over every Euler client.

use std::sync::Arc;

use euler_rs_contracts::{connect_read_only, HttpProvider, TransactionClient};
use reqwest::Client;
use url::Url;

use crate::config::NetworkRegistry;
use crate::error::{ApiError, Result};
use crate::hermes::HermesClient;
use crate::lens::LensClient;
use crate::perspective::PerspectiveClient;
use crate::prices::PriceClient;
use crate::simulation::BatchSimulationClient;
use crate::subgraph::SubgraphClient;
use crate::swap::SwapClient;
use crate::types::Network;

/// Configuration for [`EulerClient`].
#[derive(Debug, Clone, Default)]
pub struct EulerClientConfig {
    /// Endpoint and address tables. Defaults to [`NetworkRegistry::default`].
    pub registry: Option<NetworkRegistry>,
    /// RPC endpoint for contract reads and transactions.
    pub rpc_url: Option<String>,
    /// Signer key; only used together with `rpc_url`.
    pub private_key: Option<String>,
    /// Overrides the registry's Hermes endpoint.
    pub hermes_url: Option<Url>,
}

impl EulerClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: NetworkRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    pub fn with_hermes_url(mut self, url: Url) -> Self {
        self.hermes_url = Some(url);
        self
    }
}

/// Client combining the HTTP clients with the optional on-chain clients.
///
/// Subgraph and price queries always work. Contract reads need an RPC URL,
/// swaps and batch execution additionally need a private key.
#[derive(Clone)]
pub struct EulerClient {
    registry: Arc<NetworkRegistry>,
    http_client: Client,
    subgraph: SubgraphClient,
    prices: PriceClient,
    provider: Option<HttpProvider>,
    signer: Option<TransactionClient>,
}

impl Default for EulerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EulerClient {
    /// Client over the default registry without on-chain support.
    pub fn new() -> Self {
        Self::from_parts(Arc::new(NetworkRegistry::default()), None, None)
    }

    /// Create a client from `config`. On-chain support is enabled when an RPC
    /// URL is given, transactions when a private key is given as well.
    pub fn with_config(config: EulerClientConfig) -> Result<Self> {
        let mut registry = config.registry.unwrap_or_default();
        if let Some(url) = config.hermes_url {
            registry = registry.with_hermes_url(url);
        }

        let (provider, signer) = match (&config.rpc_url, &config.private_key) {
            (Some(rpc_url), Some(private_key)) => (
                Some(connect_read_only(rpc_url)?),
                Some(TransactionClient::new(rpc_url, private_key)?),
            ),
            (Some(rpc_url), None) => (Some(connect_read_only(rpc_url)?), None),
            _ => (None, None),
        };

        Ok(Self::from_parts(Arc::new(registry), provider, signer))
    }

    fn from_parts(
        registry: Arc<NetworkRegistry>,
        provider: Option<HttpProvider>,
        signer: Option<TransactionClient>,
    ) -> Self {
        let http_client = Client::new();
        Self {
            subgraph: SubgraphClient::with_http_client(http_client.clone(), registry.clone()),
            prices: PriceClient::with_http_client(http_client.clone(), registry.clone()),
            registry,
            http_client,
            provider,
            signer,
        }
    }

    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    pub fn subgraph(&self) -> &SubgraphClient {
        &self.subgraph
    }

    pub fn prices(&self) -> &PriceClient {
        &self.prices
    }

    /// Hermes client for the registry's endpoint.
    pub fn hermes(&self) -> Result<HermesClient> {
        Ok(HermesClient::with_http_client(
            self.http_client.clone(),
            self.registry.resolve_hermes()?,
        ))
    }

    fn provider(&self) -> Result<HttpProvider> {
        self.provider.clone().ok_or(ApiError::RpcNotConfigured)
    }

    pub fn perspective(&self) -> Result<PerspectiveClient> {
        Ok(PerspectiveClient::new(self.provider()?))
    }

    pub fn lens(&self) -> Result<LensClient> {
        Ok(LensClient::new(self.provider()?, self.registry.clone()))
    }

    pub fn simulation(&self) -> Result<BatchSimulationClient> {
        Ok(BatchSimulationClient::new(
            self.provider()?,
            self.registry.clone(),
            self.hermes()?,
        ))
    }

    /// The signer-bound transaction client.
    pub fn signer(&self) -> Result<&TransactionClient> {
        self.signer.as_ref().ok_or(ApiError::TransactionNotConfigured)
    }

    /// Swap client for the router of `network`.
    pub fn swap(&self, network: Network) -> Result<SwapClient> {
        SwapClient::from_registry(self.signer()?.clone(), &self.registry, network)
    }
}
