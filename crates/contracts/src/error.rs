//! Error types for the contracts crate.

use alloy::primitives::Bytes;
use alloy::sol_types::decode_revert_reason;
use alloy::transports::{RpcError, TransportErrorKind};
use thiserror::Error;

/// Errors that can occur when using contract clients.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// Invalid private key.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// A read-only call failed for a reason other than a revert.
    #[error("Contract call failed ({context}): {message}")]
    Call { context: String, message: String },

    /// The call returned no data, usually because the target has no code.
    #[error("Contract call returned no data ({context})")]
    EmptyReturn { context: String },

    /// The call or transaction reverted.
    #[error("Execution reverted ({context}): {reason}")]
    Reverted {
        context: String,
        reason: String,
        data: Option<Bytes>,
    },

    /// Transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

impl ContractError {
    /// Classify an error raised by a `sol!` generated call builder.
    pub fn from_call(context: impl Into<String>, err: alloy::contract::Error) -> Self {
        let context = context.into();
        if matches!(err, alloy::contract::Error::ZeroData(..)) {
            return ContractError::EmptyReturn { context };
        }
        if let Some(data) = err.as_revert_data() {
            return ContractError::Reverted {
                context,
                reason: revert_reason(&data),
                data: Some(data),
            };
        }
        if let alloy::contract::Error::TransportError(transport) = &err {
            if let Some(reason) = revert_message(transport) {
                return ContractError::Reverted {
                    context,
                    reason,
                    data: None,
                };
            }
        }
        ContractError::Call {
            context,
            message: err.to_string(),
        }
    }

    /// Classify an error raised while sending a raw transaction request.
    pub fn from_transport(context: impl Into<String>, err: RpcError<TransportErrorKind>) -> Self {
        let context = context.into();
        if let Some(data) = err.as_error_resp().and_then(|payload| payload.as_revert_data()) {
            return ContractError::Reverted {
                context,
                reason: revert_reason(&data),
                data: Some(data),
            };
        }
        if let Some(reason) = revert_message(&err) {
            return ContractError::Reverted {
                context,
                reason,
                data: None,
            };
        }
        ContractError::TransactionFailed(format!("{}: {}", context, err))
    }

    /// True when the failure is a revert or an empty return, as opposed to
    /// an RPC or transport failure.
    pub fn is_revert(&self) -> bool {
        matches!(
            self,
            ContractError::Reverted { .. } | ContractError::EmptyReturn { .. }
        )
    }

    /// The revert reason, if this error is a revert.
    pub fn revert_reason(&self) -> Option<&str> {
        match self {
            ContractError::Reverted { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Decode `Error(string)` / `Panic(uint256)` revert data into a readable reason.
pub fn revert_reason(data: &[u8]) -> String {
    decode_revert_reason(data).unwrap_or_else(|| {
        if data.is_empty() {
            "execution reverted".to_string()
        } else {
            format!("execution reverted with data {}", Bytes::copy_from_slice(data))
        }
    })
}

fn revert_message(err: &RpcError<TransportErrorKind>) -> Option<String> {
    let payload = err.as_error_resp()?;
    if payload.message.contains("revert") {
        Some(payload.message.to_string())
    } else {
        None
    }
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
