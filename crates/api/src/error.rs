//! Error types for the Euler client.

use alloy_primitives::Bytes;
use euler_rs_contracts::ContractError;
use thiserror::Error;

use crate::pipeline::{PipelineError, Stage};

/// Errors that can occur when using the Euler client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// GraphQL query returned errors.
    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQL(Vec<graphql_client::Error>),

    /// A REST endpoint returned a payload that could not be used.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Single-entity query returned null.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// On-chain call or transaction failed.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// An item of an EVC batch reported failure.
    #[error("Batch item {index} ({stage}) failed: {reason}")]
    BatchItemFailed {
        index: usize,
        stage: Stage,
        reason: String,
    },

    /// A required registry entry is missing for the requested scope.
    #[error("{missing} is not configured for {scope}")]
    Configuration { scope: String, missing: &'static str },

    /// Registry has no entry for the network.
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    /// Registry file could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid address format.
    #[error("Invalid address format: {0}")]
    InvalidAddress(String),

    /// Slippage tolerance outside 0..=100 percent.
    #[error("Invalid slippage: {0}% (must be between 0 and 100)")]
    InvalidSlippage(u32),

    /// Swap legs that no router path can connect.
    #[error("Invalid swap: {0}")]
    InvalidSwap(String),

    /// No RPC URL was configured.
    #[error("RPC not configured: provide an RPC URL")]
    RpcNotConfigured,

    /// Transaction support not configured.
    #[error("Transaction support not configured: provide rpc_url and private_key")]
    TransactionNotConfigured,

    /// ABI return data did not match the expected shape.
    #[error("Decode error: {reason} (raw: {raw})")]
    Decode { reason: String, raw: Bytes },

    /// A plan violated its step ordering.
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

fn join_messages(errors: &[graphql_client::Error]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

/// High-level classification of [`ApiError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network or HTTP layer failure.
    Transport,
    /// GraphQL endpoint returned structured errors.
    Query,
    /// A remote service returned an unusable payload.
    Upstream,
    /// Contract revert or call failure.
    Contract,
    /// Missing or invalid configuration or input.
    Configuration,
    /// ABI decode mismatch.
    Decode,
}

impl ApiError {
    /// Classify the error.
    pub fn error_category(&self) -> ErrorCategory {
        match self {
            ApiError::Request(_) | ApiError::HttpStatus { .. } => ErrorCategory::Transport,
            ApiError::GraphQL(_) => ErrorCategory::Query,
            ApiError::Upstream(_) | ApiError::Parse(_) | ApiError::NotFound { .. } => {
                ErrorCategory::Upstream
            }
            ApiError::Contract(ContractError::RpcConnection(_)) => ErrorCategory::Transport,
            ApiError::Contract(ContractError::InvalidPrivateKey) => ErrorCategory::Configuration,
            ApiError::Contract(_) | ApiError::BatchItemFailed { .. } => ErrorCategory::Contract,
            ApiError::Configuration { .. }
            | ApiError::UnsupportedNetwork(_)
            | ApiError::InvalidConfig(_)
            | ApiError::InvalidAddress(_)
            | ApiError::InvalidSlippage(_)
            | ApiError::InvalidSwap(_)
            | ApiError::RpcNotConfigured
            | ApiError::TransactionNotConfigured
            | ApiError::Pipeline(_) => ErrorCategory::Configuration,
            ApiError::Decode { .. } => ErrorCategory::Decode,
        }
    }

    /// Whether a caller could reasonably try the same request again.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Request(e) => e.is_timeout() || e.is_connect(),
            ApiError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
