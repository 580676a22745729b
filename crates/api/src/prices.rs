//! Client for the Euler off-chain price API.

use std::sync::Arc;

use alloy_primitives::Address;
use chrono::DateTime;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::NetworkRegistry;
use crate::error::{ApiError, Result};
use crate::types::scalars::parse_address;
use crate::types::{FormattedPrice, Network, PriceDifference, PriceMap, PriceRecord};

/// Response keys that describe the caller rather than an asset.
const METADATA_KEYS: &[&str] = &["countryCode", "isProxyOrVpn", "is_vpn"];

/// Client for USD prices served by the Euler price API.
#[derive(Debug, Clone)]
pub struct PriceClient {
    http_client: Client,
    registry: Arc<NetworkRegistry>,
}

impl PriceClient {
    pub fn new(registry: Arc<NetworkRegistry>) -> Self {
        Self::with_http_client(Client::new(), registry)
    }

    pub fn with_http_client(http_client: Client, registry: Arc<NetworkRegistry>) -> Self {
        Self {
            http_client,
            registry,
        }
    }

    /// Prices of `assets` on `network`.
    pub async fn fetch_prices(&self, network: Network, assets: &[Address]) -> Result<PriceMap> {
        let mut url = self.registry.resolve_price_api(network)?;
        let assets_param = assets
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(",");
        url.query_pairs_mut()
            .append_pair("chainId", &network.chain_id().to_string())
            .append_pair("assets", &assets_param);

        debug!(%network, count = assets.len(), "fetching off-chain prices");

        let response = self.http_client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%network, status = status.as_u16(), "price API returned HTTP error");
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body: Map<String, Value> = response
            .json()
            .await
            .map_err(|e| ApiError::Upstream(format!("malformed price response: {}", e)))?;

        parse_price_response(body)
    }

    /// Price of a single asset.
    pub async fn fetch_price(&self, network: Network, asset: Address) -> Result<PriceRecord> {
        let mut prices = self.fetch_prices(network, &[asset]).await?;
        prices.remove(&asset).ok_or_else(|| ApiError::NotFound {
            entity: "price",
            id: asset.to_string(),
        })
    }

    /// Prices of the network's configured common assets.
    pub async fn fetch_common_prices(&self, network: Network) -> Result<PriceMap> {
        let assets = self.registry.common_assets(network)?;
        self.fetch_prices(network, &assets).await
    }
}

/// Strip metadata keys and validate every remaining entry.
pub fn parse_price_response(mut body: Map<String, Value>) -> Result<PriceMap> {
    for key in METADATA_KEYS {
        body.remove(*key);
    }

    body.into_iter()
        .map(|(key, value)| {
            let address = parse_address(&key)
                .ok_or_else(|| ApiError::Upstream(format!("unexpected price key: {}", key)))?;
            let record: PriceRecord = serde_json::from_value(value)
                .map_err(|e| ApiError::Upstream(format!("malformed price for {}: {}", key, e)))?;
            Ok((address, record))
        })
        .collect()
}

/// Format prices for display, in address order.
pub fn format_prices(prices: &PriceMap) -> Vec<FormattedPrice> {
    prices
        .iter()
        .map(|(address, record)| FormattedPrice {
            address: *address,
            symbol: record.symbol.clone(),
            price: record.price,
            price_formatted: format_usd(record.price),
            timestamp: record.timestamp,
            timestamp_formatted: format_timestamp(record.timestamp),
            source: record.source.clone(),
        })
        .collect()
}

/// Compare an off-chain price with an on-chain one. `None` if the on-chain
/// price is zero.
pub fn price_difference(offchain: f64, onchain: f64) -> Option<PriceDifference> {
    if onchain == 0.0 {
        return None;
    }
    let difference = offchain - onchain;
    Some(PriceDifference {
        difference,
        percentage: (difference / onchain * 100.0).abs(),
        is_higher: difference > 0.0,
    })
}

/// US dollar amount with thousands separators and 2 to 6 fraction digits.
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{:.6}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < 2 {
        frac.push('0');
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, frac)
}

/// `YYYY-MM-DD HH:MM:SS UTC` rendering of a unix timestamp.
pub fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
