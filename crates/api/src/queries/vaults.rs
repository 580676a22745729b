//! Vault status and vault registry queries.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::Deserialize;

use super::{subgraph_query, ById, NoVariables};
use crate::types::{EulerVault, VaultStatus};

const VAULT_STATUSES: &str = r"query GetVaultStatuses {
  vaultStatuses(first: 5) {
    id
    accumulatedFees
    interestRate
    totalBorrows
    totalShares
  }
}";

const VAULT_STATUS: &str = r"query GetVaultStatus($id: ID!) {
  vaultStatus(id: $id) {
    id
    accumulatedFees
    interestRate
    totalBorrows
    totalShares
  }
}";

const EULER_VAULTS: &str = r"query GetEulerVaults {
  eulerVaults(first: 5) {
    id
    creator
    governonAdmin
    symbol
  }
}";

const EULER_VAULT: &str = r"query GetEulerVault($id: ID!) {
  eulerVault(id: $id) {
    id
    creator
    governonAdmin
    symbol
  }
}";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultStatusesData {
    pub vault_statuses: Vec<VaultStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultStatusData {
    pub vault_status: Option<VaultStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EulerVaultsData {
    pub euler_vaults: Vec<EulerVault>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EulerVaultData {
    pub euler_vault: Option<EulerVault>,
}

subgraph_query! {
    /// Latest vault status updates.
    GetVaultStatuses {
        operation: "GetVaultStatuses",
        variables: NoVariables,
        data: VaultStatusesData,
        document: VAULT_STATUSES,
    }
}

subgraph_query! {
    /// A single vault status by id.
    GetVaultStatus {
        operation: "GetVaultStatus",
        variables: ById,
        data: VaultStatusData,
        document: VAULT_STATUS,
    }
}

subgraph_query! {
    /// Deployed vaults.
    GetEulerVaults {
        operation: "GetEulerVaults",
        variables: NoVariables,
        data: EulerVaultsData,
        document: EULER_VAULTS,
    }
}

subgraph_query! {
    /// A single vault by address.
    GetEulerVault {
        operation: "GetEulerVault",
        variables: ById,
        data: EulerVaultData,
        document: EULER_VAULT,
    }
}
