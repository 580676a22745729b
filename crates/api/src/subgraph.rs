//! Client for the Euler v2 subgraph.

use std::sync::Arc;

use graphql_client::{GraphQLQuery, Response};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::NetworkRegistry;
use crate::error::{ApiError, Result};
use crate::queries::{
    ById, GetBorrow, GetBorrows, GetEulerVault, GetEulerVaults, GetLiquidate, GetLiquidates,
    GetVaultStatus, GetVaultStatuses, NoVariables,
};
use crate::types::{Borrow, EulerVault, Liquidate, Network, VaultStatus};

/// Client for querying vault statuses, vaults, borrows and liquidations.
#[derive(Debug, Clone)]
pub struct SubgraphClient {
    http_client: Client,
    registry: Arc<NetworkRegistry>,
}

impl SubgraphClient {
    /// Create a client resolving endpoints through `registry`.
    pub fn new(registry: Arc<NetworkRegistry>) -> Self {
        Self::with_http_client(Client::new(), registry)
    }

    /// Create a client sharing an existing HTTP client.
    pub fn with_http_client(http_client: Client, registry: Arc<NetworkRegistry>) -> Self {
        Self {
            http_client,
            registry,
        }
    }

    /// Execute a GraphQL query against a network's subgraph.
    ///
    /// A response carrying a non-empty `errors` array is rejected even when
    /// it also carries `data`.
    async fn execute<Q: GraphQLQuery>(
        &self,
        network: Network,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData> {
        let endpoint = self.registry.resolve_subgraph(network)?;
        let request_body = Q::build_query(variables);

        debug!(
            %network,
            operation = request_body.operation_name,
            endpoint = %endpoint,
            "executing subgraph query"
        );

        let response = self
            .http_client
            .post(endpoint.as_str())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%network, status = status.as_u16(), "subgraph returned HTTP error");
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                url: endpoint.to_string(),
            });
        }

        // `data` stays untyped until `errors` has been checked: partial data
        // next to errors may not fit the response shape.
        let response_body: Response<Value> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if let Some(errors) = response_body.errors {
            if !errors.is_empty() {
                warn!(%network, count = errors.len(), "subgraph returned GraphQL errors");
                return Err(ApiError::GraphQL(errors));
            }
        }

        match response_body.data {
            Some(Value::Null) | None => Err(ApiError::Parse("No data in response".to_string())),
            Some(data) => serde_json::from_value(data).map_err(|e| ApiError::Parse(e.to_string())),
        }
    }

    /// Latest vault status updates (first 5).
    pub async fn vault_statuses(&self, network: Network) -> Result<Vec<VaultStatus>> {
        let data = self.execute::<GetVaultStatuses>(network, NoVariables {}).await?;
        Ok(data.vault_statuses)
    }

    /// A vault status by id.
    pub async fn vault_status(&self, network: Network, id: &str) -> Result<VaultStatus> {
        let data = self.execute::<GetVaultStatus>(network, ById::new(id)).await?;
        data.vault_status.ok_or_else(|| ApiError::NotFound {
            entity: "vault status",
            id: id.to_string(),
        })
    }

    /// Deployed vaults (first 5).
    pub async fn euler_vaults(&self, network: Network) -> Result<Vec<EulerVault>> {
        let data = self.execute::<GetEulerVaults>(network, NoVariables {}).await?;
        Ok(data.euler_vaults)
    }

    /// A vault by id (its address).
    pub async fn euler_vault(&self, network: Network, id: &str) -> Result<EulerVault> {
        let data = self.execute::<GetEulerVault>(network, ById::new(id)).await?;
        data.euler_vault.ok_or_else(|| ApiError::NotFound {
            entity: "vault",
            id: id.to_string(),
        })
    }

    /// Latest borrows (first 5).
    pub async fn borrows(&self, network: Network) -> Result<Vec<Borrow>> {
        let data = self.execute::<GetBorrows>(network, NoVariables {}).await?;
        Ok(data.borrows)
    }

    /// A borrow by id.
    pub async fn borrow(&self, network: Network, id: &str) -> Result<Borrow> {
        let data = self.execute::<GetBorrow>(network, ById::new(id)).await?;
        data.borrow.ok_or_else(|| ApiError::NotFound {
            entity: "borrow",
            id: id.to_string(),
        })
    }

    /// Latest liquidations (first 5).
    pub async fn liquidates(&self, network: Network) -> Result<Vec<Liquidate>> {
        let data = self.execute::<GetLiquidates>(network, NoVariables {}).await?;
        Ok(data.liquidates)
    }

    /// A liquidation by id.
    pub async fn liquidate(&self, network: Network, id: &str) -> Result<Liquidate> {
        let data = self.execute::<GetLiquidate>(network, ById::new(id)).await?;
        data.liquidate.ok_or_else(|| ApiError::NotFound {
            entity: "liquidation",
            id: id.to_string(),
        })
    }
}
