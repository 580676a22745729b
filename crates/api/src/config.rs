//! Per-network endpoint and contract registry.
//!
//! Every client resolves URLs and contract addresses through a
//! [`NetworkRegistry`] handed to it at construction, so tests and deployments
//! can substitute their own endpoints without touching global state.
//!
//! [`NetworkRegistry::default`] carries the public Euler deployment tables.
//! A registry can also be loaded from JSON, which replaces the defaults
//! wholesale:
//!
//! ```json
//! {
//!   "hermesUrl": "https://hermes.pyth.network/v2/updates/price/latest",
//!   "priceFeeds": [{ "pair": "ETH/USD", "id": "0xff61…" }],
//!   "networks": {
//!     "sepolia": {
//!       "subgraphUrl": "http://localhost:8000/subgraphs/euler",
//!       "pythOracle": "0x…",
//!       "accountLens": "0x…",
//!       "evc": "0x…"
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use alloy_primitives::{address, b256, Address, B256};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ApiError, Result};
use crate::types::scalars::parse_address;
use crate::types::{
    BatchContracts, ExecutorContracts, LensAddresses, Network, PerspectiveKind, PriceFeed,
    SwapContracts, TokenInfo,
};

/// Pyth Hermes endpoint serving the latest signed price updates.
pub const DEFAULT_HERMES_URL: &str = "https://hermes.pyth.network/v2/updates/price/latest";

/// Euler off-chain price API.
pub const DEFAULT_PRICE_API_URL: &str = "https://app.euler.finance/api/v1/price";

const GOLDSKY_SUBGRAPHS: &str =
    "https://api.goldsky.com/api/public/project_cm4iagnemt1wp01xn4gh1agft/subgraphs";

/// Pyth ETH/USD feed id.
pub const ETH_USD_FEED_ID: B256 =
    b256!("ff61491a931112ddf1bd8147cd1b641375f79f5825126d665480874634fd0ace");
/// Pyth BTC/USD feed id.
pub const BTC_USD_FEED_ID: B256 =
    b256!("e62df6c8b4c85fe1a67db44dc12de5db330f7ac66b72dc658afedf0f4a415b43");
/// Pyth USDC/USD feed id.
pub const USDC_USD_FEED_ID: B256 =
    b256!("eaa020c61cc479712813461ce153894a96a6c00b21ed0cfc2798d1f9a9e9c94a");

/// A symbol/address pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub symbol: String,
    pub address: Address,
}

impl AssetEntry {
    fn new(symbol: &str, address: Address) -> Self {
        Self {
            symbol: symbol.to_string(),
            address,
        }
    }
}

/// Endpoints and contracts of one network. Unset entries are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgraph_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_api_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lens: Option<LensAddresses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_lens: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub governed_perspective: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_perspective: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pyth_oracle: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evc: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<SwapContracts>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub common_assets: Vec<AssetEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<TokenInfo>,
}

impl NetworkConfig {
    fn perspective(&self, kind: PerspectiveKind) -> Option<Address> {
        match kind {
            PerspectiveKind::Governed => self.governed_perspective,
            PerspectiveKind::Base => self.base_perspective,
        }
    }
}

/// Registry of every network's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRegistry {
    #[serde(default)]
    pub hermes_url: Option<Url>,
    #[serde(default)]
    pub price_feeds: Vec<PriceFeed>,
    #[serde(default)]
    pub networks: BTreeMap<Network, NetworkConfig>,
}

fn require<T>(value: Option<T>, network: Network, missing: &'static str) -> Result<T> {
    value.ok_or_else(|| ApiError::Configuration {
        scope: network.name().to_string(),
        missing,
    })
}

impl NetworkRegistry {
    /// A registry with no networks and no Hermes endpoint.
    pub fn empty() -> Self {
        Self {
            hermes_url: None,
            price_feeds: Vec::new(),
            networks: BTreeMap::new(),
        }
    }

    /// Parse a registry from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ApiError::InvalidConfig(e.to_string()))
    }

    /// Read a registry from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ApiError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    fn entry_mut(&mut self, network: Network) -> &mut NetworkConfig {
        self.networks.entry(network).or_default()
    }

    /// Replace one network's configuration.
    pub fn with_network(mut self, network: Network, config: NetworkConfig) -> Self {
        self.networks.insert(network, config);
        self
    }

    pub fn with_subgraph_url(mut self, network: Network, url: Url) -> Self {
        self.entry_mut(network).subgraph_url = Some(url);
        self
    }

    pub fn with_price_api_url(mut self, network: Network, url: Url) -> Self {
        self.entry_mut(network).price_api_url = Some(url);
        self
    }

    pub fn with_rpc_url(mut self, network: Network, url: Url) -> Self {
        self.entry_mut(network).rpc_url = Some(url);
        self
    }

    pub fn with_hermes_url(mut self, url: Url) -> Self {
        self.hermes_url = Some(url);
        self
    }

    pub fn with_batch_contracts(mut self, network: Network, contracts: BatchContracts) -> Self {
        let entry = self.entry_mut(network);
        entry.pyth_oracle = Some(contracts.pyth_oracle);
        entry.account_lens = Some(contracts.account_lens);
        entry.evc = Some(contracts.evc);
        self
    }

    pub fn with_perspective(mut self, network: Network, kind: PerspectiveKind, address: Address) -> Self {
        let entry = self.entry_mut(network);
        match kind {
            PerspectiveKind::Governed => entry.governed_perspective = Some(address),
            PerspectiveKind::Base => entry.base_perspective = Some(address),
        }
        self
    }

    pub fn with_swap_contracts(mut self, network: Network, contracts: SwapContracts) -> Self {
        self.entry_mut(network).swap = Some(contracts);
        self
    }

    pub fn get(&self, network: Network) -> Option<&NetworkConfig> {
        self.networks.get(&network)
    }

    /// The configuration of a network, failing if the registry has no entry.
    pub fn config(&self, network: Network) -> Result<&NetworkConfig> {
        self.networks
            .get(&network)
            .ok_or_else(|| ApiError::UnsupportedNetwork(network.name().to_string()))
    }

    /// Configured networks in chain-id order.
    pub fn networks(&self) -> impl Iterator<Item = (Network, &NetworkConfig)> {
        self.networks.iter().map(|(network, config)| (*network, config))
    }

    /// Subgraph endpoint of a network.
    pub fn resolve_subgraph(&self, network: Network) -> Result<Url> {
        require(
            self.config(network)?.subgraph_url.clone(),
            network,
            "subgraph endpoint",
        )
    }

    /// Euler price API endpoint of a network.
    pub fn resolve_price_api(&self, network: Network) -> Result<Url> {
        require(
            self.config(network)?.price_api_url.clone(),
            network,
            "price API endpoint",
        )
    }

    /// Oracle, account lens and EVC of a network. Each missing address is
    /// reported by name, in that order.
    pub fn resolve_batch_contracts(&self, network: Network) -> Result<BatchContracts> {
        let config = self.config(network)?;
        Ok(BatchContracts {
            pyth_oracle: require(config.pyth_oracle, network, "Pyth oracle")?,
            account_lens: require(config.account_lens, network, "account lens")?,
            evc: require(config.evc, network, "EVC")?,
        })
    }

    /// Oracle and EVC of a network.
    pub fn resolve_executor(&self, network: Network) -> Result<ExecutorContracts> {
        let config = self.config(network)?;
        Ok(ExecutorContracts {
            pyth_oracle: require(config.pyth_oracle, network, "Pyth oracle")?,
            evc: require(config.evc, network, "EVC")?,
        })
    }

    /// Lens contracts of a network.
    pub fn resolve_lens(&self, network: Network) -> Result<LensAddresses> {
        require(self.config(network)?.lens, network, "lens addresses")
    }

    /// Account lens of a network.
    pub fn resolve_account_lens(&self, network: Network) -> Result<Address> {
        require(self.config(network)?.account_lens, network, "account lens")
    }

    /// A perspective contract of a network.
    pub fn resolve_perspective(&self, network: Network, kind: PerspectiveKind) -> Result<Address> {
        let missing = match kind {
            PerspectiveKind::Governed => "governed perspective",
            PerspectiveKind::Base => "base perspective",
        };
        require(self.config(network)?.perspective(kind), network, missing)
    }

    /// Router and wrapped native token of a network.
    pub fn resolve_swap(&self, network: Network) -> Result<SwapContracts> {
        require(self.config(network)?.swap, network, "swap router")
    }

    /// Common asset addresses of a network, failing when none are configured.
    pub fn common_assets(&self, network: Network) -> Result<Vec<Address>> {
        let assets: Vec<Address> = self
            .config(network)?
            .common_assets
            .iter()
            .map(|asset| asset.address)
            .collect();
        if assets.is_empty() {
            return Err(ApiError::Configuration {
                scope: network.name().to_string(),
                missing: "common assets",
            });
        }
        Ok(assets)
    }

    /// Known tokens of a network (may be empty).
    pub fn tokens(&self, network: Network) -> &[TokenInfo] {
        self.get(network)
            .map(|config| config.tokens.as_slice())
            .unwrap_or_default()
    }

    /// RPC endpoint of a network, if one is configured.
    pub fn rpc_url(&self, network: Network) -> Option<&Url> {
        self.get(network).and_then(|config| config.rpc_url.as_ref())
    }

    /// Hermes endpoint.
    pub fn resolve_hermes(&self) -> Result<Url> {
        self.hermes_url.clone().ok_or_else(|| ApiError::Configuration {
            scope: "registry".to_string(),
            missing: "Hermes endpoint",
        })
    }

    /// Feed id for a pair label such as `ETH/USD`.
    pub fn price_feed(&self, pair: &str) -> Option<B256> {
        self.price_feeds
            .iter()
            .find(|feed| feed.pair.eq_ignore_ascii_case(pair))
            .map(|feed| feed.id)
    }
}

/// Whether a user-supplied perspective address is usable: not the `0x...`
/// placeholder, 42 characters long, and valid hex.
pub fn validate_perspective_address(address: &str) -> bool {
    address != "0x..." && address.len() == 42 && parse_address(address).is_some()
}

fn subgraph(deployment: &str) -> Option<Url> {
    Url::parse(&format!("{}/{}/gn", GOLDSKY_SUBGRAPHS, deployment)).ok()
}

fn lens(utils: Address, vault: Address, earn: Address) -> Option<LensAddresses> {
    Some(LensAddresses {
        utils_lens: utils,
        vault_lens: vault,
        euler_earn_vault_lens: earn,
    })
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        let price_api = Url::parse(DEFAULT_PRICE_API_URL).ok();

        let mainnet = NetworkConfig {
            subgraph_url: subgraph("euler-v2-mainnet/1.0.6"),
            price_api_url: price_api.clone(),
            lens: lens(
                address!("B8cac3e5CaaC2042B79938aFe7FEA3f44e5afcC1"),
                address!("079FA5cdE9c9647D26E79F3520Fbdf9dbCC0E45e"),
                address!("189841213ae8DacB2AB40A71082E4D4c47a2458E"),
            ),
            governed_perspective: Some(address!("C0121817FF224a018840e4D15a864747d36e6Eb2")),
            common_assets: vec![
                AssetEntry::new("WSTETH", address!("7f39C581F595B53c5cb19bD0b3f8dA6c935E2Ca0")),
                AssetEntry::new("WETH", address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")),
                AssetEntry::new("USDC", address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")),
                AssetEntry::new("USDT", address!("dAC17F958D2ee523a2206206994597C13D831ec7")),
                AssetEntry::new("DAI", address!("6B175474E89094C44Da98b954EedeAC495271d0F")),
                AssetEntry::new("WBTC", address!("2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599")),
            ],
            ..NetworkConfig::default()
        };

        let optimism = NetworkConfig {
            governed_perspective: Some(address!("24E9B780e9CF56B326A08C81EEAe0242F2754304")),
            ..NetworkConfig::default()
        };

        let bsc = NetworkConfig {
            lens: lens(
                address!("30be272d1441E9935BCBeA2Cd924cD5e568A052e"),
                address!("0CbA31319E61E74E0A456b3CE56f302275b90edF"),
                address!("902d0856bb50cc1118c4F830B150947AAd0cD70F"),
            ),
            governed_perspective: Some(address!("775231E5da4F548555eeE633ebf7355a83A0FC03")),
            ..NetworkConfig::default()
        };

        let unichain = NetworkConfig {
            subgraph_url: subgraph("euler-v2-unichain/1.0.2"),
            lens: lens(
                address!("3f4F2f1536F428D4555C232E0013D0D36a19485A"),
                address!("03833b4A873eA1F657340C72971a2d0EbB2B4D82"),
                address!("966A99E20182008AFba017bF1eefF6d5aE393Ad4"),
            ),
            governed_perspective: Some(address!("44d781D9f61649fACeeEC919c71C8537531df027")),
            ..NetworkConfig::default()
        };

        let sonic = NetworkConfig {
            subgraph_url: subgraph("euler-v2-sonic/1.0.3"),
            ..NetworkConfig::default()
        };

        let swell = NetworkConfig {
            subgraph_url: subgraph("euler-v2-swell/1.0.9"),
            ..NetworkConfig::default()
        };

        let base = NetworkConfig {
            subgraph_url: subgraph("euler-v2-base/1.0.8"),
            lens: lens(
                address!("E055Fa087e836efAcaFa257e5F6CF90936c26Cb5"),
                address!("CCC8D18e40c439F5234042FbEA0f4f1528f52f00"),
                address!("455292fcEf99569a4c37bb58A3f21B55E304Ca27"),
            ),
            governed_perspective: Some(address!("afC8545c49DF2c8216305922D9753Bf60bf8c14A")),
            ..NetworkConfig::default()
        };

        let arbitrum = NetworkConfig {
            subgraph_url: subgraph("euler-v2-arbitrum/1.0.2"),
            ..NetworkConfig::default()
        };

        let sepolia_weth = address!("7b79995e5f793A07Bc00c21412e50Ecae098E7f9");
        let sepolia = NetworkConfig {
            price_api_url: price_api,
            swap: Some(SwapContracts {
                router: address!("C532a74256D3Db42D0Bf7a0400fEFDbad7694008"),
                wrapped_native: sepolia_weth,
            }),
            tokens: vec![
                TokenInfo {
                    symbol: "WETH".to_string(),
                    address: sepolia_weth,
                    decimals: 18,
                },
                TokenInfo {
                    symbol: "USDC".to_string(),
                    address: address!("94a9D9AC8a22534E3FaCa9F4e7F2E2cf85d5E4C8"),
                    decimals: 6,
                },
                TokenInfo {
                    symbol: "UNI".to_string(),
                    address: address!("1f9840a85d5aF5bf1D1762F925BDADdC4201F984"),
                    decimals: 18,
                },
                TokenInfo {
                    symbol: "DAI".to_string(),
                    address: address!("3e622317f8C93f7328350cF0B56d9eD4C620C5d6"),
                    decimals: 18,
                },
            ],
            ..NetworkConfig::default()
        };

        let networks = BTreeMap::from([
            (Network::Mainnet, mainnet),
            (Network::Optimism, optimism),
            (Network::Bsc, bsc),
            (Network::Unichain, unichain),
            (Network::Sonic, sonic),
            (Network::Swell, swell),
            (Network::Base, base),
            (Network::Arbitrum, arbitrum),
            (Network::Sepolia, sepolia),
        ]);

        Self {
            hermes_url: Url::parse(DEFAULT_HERMES_URL).ok(),
            price_feeds: vec![
                PriceFeed {
                    pair: "ETH/USD".to_string(),
                    id: ETH_USD_FEED_ID,
                },
                PriceFeed {
                    pair: "BTC/USD".to_string(),
                    id: BTC_USD_FEED_ID,
                },
                PriceFeed {
                    pair: "USDC/USD".to_string(),
                    id: USDC_USD_FEED_ID,
                },
            ],
            networks,
        }
    }
}
