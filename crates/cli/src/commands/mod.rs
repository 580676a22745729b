//! Command implementations.

pub mod lens;
pub mod networks;
pub mod perspective;
pub mod prices;
pub mod simulation;
pub mod subgraph;
pub mod swap;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use euler_rs_api::{EulerClient, EulerClientConfig, Network, NetworkRegistry};
use tracing::debug;
use url::Url;

use crate::cli::EndpointArgs;

pub use lens::{run_lens_addresses, run_lens_vault};
pub use networks::run_networks;
pub use perspective::{run_perspective_check, run_perspective_info};
pub use prices::run_prices;
pub use simulation::{run_borrow, run_liquidity};
pub use subgraph::run_subgraph;
pub use swap::run_swap;

fn parse_url(value: &str, what: &str) -> Result<Url> {
    Url::parse(value).with_context(|| format!("Invalid {} URL: {}", what, value))
}

/// Parse an address argument.
pub fn parse_address(value: &str, what: &str) -> Result<Address> {
    value
        .parse()
        .with_context(|| format!("Invalid {} address: {}", what, value))
}

/// Registry from `--config` or the built-in tables.
pub fn base_registry(endpoints: &EndpointArgs) -> Result<NetworkRegistry> {
    match &endpoints.config {
        Some(path) => {
            debug!(path = %path.display(), "loading network registry");
            NetworkRegistry::from_json_file(path)
                .with_context(|| format!("Failed to load registry from {}", path.display()))
        }
        None => Ok(NetworkRegistry::default()),
    }
}

/// Registry with the endpoint overrides applied to `network`.
pub fn load_registry(endpoints: &EndpointArgs, network: Network) -> Result<NetworkRegistry> {
    let mut registry = base_registry(endpoints)?;
    if let Some(url) = &endpoints.subgraph_url {
        registry = registry.with_subgraph_url(network, parse_url(url, "subgraph")?);
    }
    if let Some(url) = &endpoints.price_api_url {
        registry = registry.with_price_api_url(network, parse_url(url, "price API")?);
    }
    if let Some(url) = &endpoints.hermes_url {
        registry = registry.with_hermes_url(parse_url(url, "Hermes")?);
    }
    Ok(registry)
}

/// Client for `network`. The RPC URL comes from `--rpc-url` or the registry.
pub fn client(endpoints: &EndpointArgs, network: Network) -> Result<EulerClient> {
    let registry = load_registry(endpoints, network)?;
    let rpc_url = endpoints
        .rpc_url
        .clone()
        .or_else(|| registry.rpc_url(network).map(Url::to_string));

    let mut config = EulerClientConfig::new().with_registry(registry);
    if let Some(rpc_url) = rpc_url {
        debug!(%network, "on-chain reads enabled");
        config = config.with_rpc_url(rpc_url);
    }
    if let Some(key) = &endpoints.private_key {
        config = config.with_private_key(key.as_str());
    }

    EulerClient::with_config(config).context("Failed to create client")
}
