//! Data types for Euler client responses.

pub mod lens;
pub mod liquidity;
pub mod network;
pub mod perspective;
pub mod price;
pub mod scalars;
pub mod subgraph;
pub mod swap;

pub use lens::{LensAddresses, VaultSnapshot};
pub use liquidity::{AccountLiquidity, BatchContracts, ExecutorContracts};
pub use network::{Network, SUPPORTED_NETWORKS};
pub use perspective::{PerspectiveInfo, PerspectiveKind, VerifiedVault};
pub use price::{FormattedPrice, PriceDifference, PriceFeed, PriceMap, PriceRecord};
pub use subgraph::{Borrow, EulerVault, Liquidate, VaultStatus};
pub use swap::{
    SwapAsset, SwapContracts, SwapMethod, SwapOutcome, SwapQuote, SwapRequest, TokenInfo,
    DEFAULT_SLIPPAGE_PERCENT,
};
