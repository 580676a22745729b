//! Prepared call types for deferred transaction execution.
//!
//! A `PreparedCall` is a transaction that has been constructed but not yet
//! sent. It can be inspected (target, value, calldata), sent and awaited, or
//! taken apart with `prepare()` so the call can be placed into an EVC batch.

use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;
use tracing::{debug, warn};

use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// A prepared transaction that can be inspected, executed, or batched.
pub struct PreparedCall<'a, C: SolCall> {
    to: Address,
    call: C,
    value: U256,
    provider: &'a HttpProvider,
}

impl<'a, C: SolCall> PreparedCall<'a, C> {
    /// Create a new prepared call.
    pub fn new(to: Address, call: C, value: U256, provider: &'a HttpProvider) -> Self {
        Self {
            to,
            call,
            value,
            provider,
        }
    }

    /// Consumes self and returns `(address, call)`.
    pub fn prepare(self) -> (Address, C) {
        (self.to, self.call)
    }

    /// Returns the target address for this call.
    pub fn to(&self) -> Address {
        self.to
    }

    /// Returns the value (ETH) to send with this call.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// Returns the ABI-encoded calldata.
    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }

    /// Sends the transaction and waits for the receipt.
    ///
    /// A receipt with a failed status is reported as a revert so that callers
    /// relying on the transaction being mined never continue past it.
    pub async fn send(self) -> Result<TransactionReceipt> {
        let tx = TransactionRequest::default()
            .to(self.to)
            .input(self.calldata().into())
            .value(self.value);

        debug!(to = %self.to, function = C::SIGNATURE, "sending transaction");

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ContractError::from_transport(C::SIGNATURE, e))?;

        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get receipt: {}", e))
        })?;

        if !receipt.status() {
            warn!(tx = %receipt.transaction_hash, function = C::SIGNATURE, "transaction reverted");
            return Err(ContractError::Reverted {
                context: C::SIGNATURE.to_string(),
                reason: format!("transaction {} reverted", receipt.transaction_hash),
                data: None,
            });
        }

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol;

    sol! {
        #[sol(rpc)]
        interface ITestContract {
            function testFunction(uint256 value, address receiver) external returns (bool);
        }
    }

    // Anvil's default account 0 private key
    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn create_test_provider() -> HttpProvider {
        let (provider, _) =
            crate::provider::connect_with_signer("http://localhost:8545", TEST_PRIVATE_KEY)
                .unwrap();
        provider
    }

    #[test]
    fn test_accessors() {
        let provider = create_test_provider();
        let target = Address::repeat_byte(0x42);
        let value = U256::from(1_000_000_000_000_000_000u64);
        let call = ITestContract::testFunctionCall {
            value: U256::from(100),
            receiver: Address::repeat_byte(0x01),
        };

        let prepared = PreparedCall::new(target, call, value, &provider);

        assert_eq!(prepared.to(), target);
        assert_eq!(prepared.value(), value);
    }

    #[test]
    fn test_calldata_matches_abi_encoding() {
        let provider = create_test_provider();
        let call = ITestContract::testFunctionCall {
            value: U256::from(100),
            receiver: Address::repeat_byte(0x01),
        };
        let expected = call.abi_encode();

        let prepared = PreparedCall::new(Address::repeat_byte(0x42), call, U256::ZERO, &provider);

        assert_eq!(prepared.calldata().to_vec(), expected);
        assert_eq!(&prepared.calldata()[0..4], ITestContract::testFunctionCall::SELECTOR.as_slice());
    }

    #[test]
    fn test_prepare_returns_address_and_call_tuple() {
        let provider = create_test_provider();
        let target = Address::repeat_byte(0x42);
        let receiver = Address::repeat_byte(0x01);
        let amount = U256::from(100);
        let call = ITestContract::testFunctionCall {
            value: amount,
            receiver,
        };

        let prepared = PreparedCall::new(target, call, U256::ZERO, &provider);
        let (addr, returned_call) = prepared.prepare();

        assert_eq!(addr, target);
        assert_eq!(returned_call.value, amount);
        assert_eq!(returned_call.receiver, receiver);
    }
}
