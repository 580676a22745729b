//! Read client for perspective (verified-vault registry) contracts.

use alloy_primitives::Address;
use euler_rs_contracts::{ContractReader, HttpProvider, ReadClient};
use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::types::{PerspectiveInfo, VerifiedVault};

/// Name shown when a perspective's `name()` cannot be read.
pub const UNKNOWN_PERSPECTIVE: &str = "Unknown Perspective";

/// Reads verified-vault lists and membership from perspective contracts.
#[derive(Clone)]
pub struct PerspectiveClient {
    reader: ReadClient,
}

impl PerspectiveClient {
    pub fn new(provider: HttpProvider) -> Self {
        Self {
            reader: ReadClient::from_provider(provider),
        }
    }

    /// All vaults verified by `perspective`. An empty list is a valid answer.
    pub async fn verified_vaults(&self, perspective: Address) -> Result<Vec<Address>> {
        debug!(%perspective, "reading verified vaults");
        Ok(self.reader.verified_array(perspective).await?)
    }

    /// Whether `vault` is verified by `perspective`.
    ///
    /// A revert or an empty return is how the registry answers for a vault it
    /// has never seen, so both map to `false`. Transport failures and other
    /// call errors are returned.
    pub async fn is_vault_verified(&self, perspective: Address, vault: Address) -> Result<bool> {
        match self.reader.is_verified(perspective, vault).await {
            Ok(verified) => Ok(verified),
            Err(e) if e.is_revert() => {
                debug!(%perspective, %vault, error = %e, "isVerified reverted, treating vault as unverified");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Number of vaults verified by `perspective`.
    pub async fn verified_count(&self, perspective: Address) -> Result<u64> {
        let length = self.reader.verified_length(perspective).await?;
        u64::try_from(length).map_err(|_| ApiError::Decode {
            reason: format!("verifiedLength {} does not fit in u64", length),
            raw: length.to_be_bytes_vec().into(),
        })
    }

    /// Name of `perspective`, or [`UNKNOWN_PERSPECTIVE`] if it cannot be read.
    pub async fn perspective_name(&self, perspective: Address) -> String {
        match self.reader.perspective_name(perspective).await {
            Ok(name) => name,
            Err(e) => {
                warn!(%perspective, error = %e, "failed to read perspective name");
                UNKNOWN_PERSPECTIVE.to_string()
            }
        }
    }

    /// Name, verified vaults and count, read concurrently.
    pub async fn perspective_info(&self, perspective: Address) -> Result<PerspectiveInfo> {
        let (name, verified_vaults, verified_count) = futures::join!(
            self.perspective_name(perspective),
            self.verified_vaults(perspective),
            self.verified_count(perspective),
        );

        Ok(PerspectiveInfo {
            address: perspective,
            name,
            verified_vaults: verified_vaults?,
            verified_count: verified_count?,
        })
    }

    /// Verification status of each vault, in input order.
    pub async fn check_vaults(
        &self,
        perspective: Address,
        vaults: &[Address],
    ) -> Result<Vec<VerifiedVault>> {
        let name = self.perspective_name(perspective).await;
        let statuses = try_join_all(
            vaults
                .iter()
                .map(|vault| self.is_vault_verified(perspective, *vault)),
        )
        .await?;

        Ok(vaults
            .iter()
            .zip(statuses)
            .map(|(address, is_verified)| VerifiedVault {
                address: *address,
                is_verified,
                perspective_name: Some(name.clone()),
            })
            .collect())
    }
}
