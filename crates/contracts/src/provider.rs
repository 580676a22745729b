//! Provider construction for contract clients.

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};

use crate::error::{ContractError, Result};

/// The concrete provider type used by read and transaction clients.
///
/// Both the read-only and the wallet-backed providers are type-erased so the
/// clients can share one field type.
pub type HttpProvider = DynProvider;

fn parse_rpc_url(rpc_url: &str) -> Result<url::Url> {
    rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))
}

/// Connect a read-only HTTP provider. No request is sent until the first call.
pub fn connect_read_only(rpc_url: &str) -> Result<HttpProvider> {
    let url = parse_rpc_url(rpc_url)?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Connect a wallet-backed HTTP provider and return it with the signer address.
pub fn connect_with_signer(rpc_url: &str, private_key: &str) -> Result<(HttpProvider, Address)> {
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|_| ContractError::InvalidPrivateKey)?;
    let signer_address = signer.address();
    let wallet = EthereumWallet::from(signer);

    let url = parse_rpc_url(rpc_url)?;
    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url).erased();

    Ok((provider, signer_address))
}
