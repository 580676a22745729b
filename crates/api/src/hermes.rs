//! Client for the Pyth Hermes price attestation service.

use alloy_primitives::{hex, Bytes, B256};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::NetworkRegistry;
use crate::error::{ApiError, Result};

#[derive(Debug, Deserialize)]
struct HermesResponse {
    binary: BinaryUpdate,
}

#[derive(Debug, Deserialize)]
struct BinaryUpdate {
    data: Vec<String>,
}

/// Fetches signed price update payloads for on-chain submission.
#[derive(Debug, Clone)]
pub struct HermesClient {
    http_client: Client,
    base_url: Url,
}

impl HermesClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http_client: Client, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Client for the registry's Hermes endpoint.
    pub fn from_registry(registry: &NetworkRegistry) -> Result<Self> {
        Ok(Self::new(registry.resolve_hermes()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Latest update payloads for `price_ids`, ready for `updatePriceFeeds`.
    pub async fn fetch_price_updates(&self, price_ids: &[B256]) -> Result<Vec<Bytes>> {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for id in price_ids {
                pairs.append_pair("ids[]", &id.to_string());
            }
            pairs.append_pair("encoding", "hex");
        }

        debug!(feeds = price_ids.len(), "fetching price updates from Hermes");

        let response = self.http_client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Hermes returned HTTP error");
            return Err(ApiError::Upstream(format!(
                "Hermes returned HTTP {}",
                status.as_u16()
            )));
        }

        let body: HermesResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Upstream(format!("malformed Hermes response: {}", e)))?;

        decode_update_data(&body.binary.data)
    }
}

/// Hex-decode Hermes update payloads; the `0x` prefix is optional.
pub fn decode_update_data(entries: &[String]) -> Result<Vec<Bytes>> {
    if entries.is_empty() {
        return Err(ApiError::Upstream(
            "Hermes response contained no price updates".to_string(),
        ));
    }

    entries
        .iter()
        .map(|entry| {
            hex::decode(entry)
                .map(Bytes::from)
                .map_err(|e| ApiError::Upstream(format!("invalid price update payload: {}", e)))
        })
        .collect()
}
