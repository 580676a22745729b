//! Test helper utilities for API crate integration tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use alloy::consensus::{Transaction, TxEnvelope};
use alloy::eips::eip2718::Decodable2718;
use alloy::primitives::{address, keccak256, Address, Bytes, B256};
use alloy::sol_types::SolCall;
use euler_rs_api::{Network, NetworkRegistry};
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

// Anvil's default account 0 private key
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_SIGNER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// Start a mock HTTP server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Registry whose only network routes its subgraph and price API to `mock`.
pub fn registry_with_mock(mock: &MockServer, network: Network) -> NetworkRegistry {
    let url = Url::parse(&mock.uri()).unwrap();
    NetworkRegistry::empty()
        .with_subgraph_url(network, url.clone())
        .with_price_api_url(network, url)
}

/// Load a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    let path = format!(
        "{}/tests/fixtures/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", path))
}

/// Mock a GraphQL POST request with a fixture response.
pub async fn mock_graphql_response(server: &MockServer, fixture_name: &str) {
    let body = load_fixture(fixture_name);
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock a GraphQL response with errors and, optionally, partial data.
pub async fn mock_graphql_errors(server: &MockServer, error_messages: &[&str], data: Value) {
    let errors: Vec<Value> = error_messages
        .iter()
        .map(|msg| json!({ "message": msg }))
        .collect();
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "errors": errors, "data": data })),
        )
        .mount(server)
        .await;
}

/// Mock an HTTP error response for any method.
pub async fn mock_http_error(server: &MockServer, status_code: u16) {
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(status_code).set_body_string("Internal Server Error"))
        .mount(server)
        .await;
}

/// Mock a response with null data (no errors but no data).
pub async fn mock_null_data(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":null}"#))
        .mount(server)
        .await;
}

#[derive(Clone)]
enum CallReply {
    Return(Bytes),
    Revert(Bytes),
}

/// JSON-RPC responder answering `eth_call` from a table keyed by full
/// calldata or by selector, full calldata taking precedence.
///
/// Signed transactions are accepted and mined immediately; their receipts
/// succeed unless the called selector was registered with `fails_when_mined`.
#[derive(Clone, Default)]
pub struct EthCallResponder {
    replies: HashMap<Vec<u8>, CallReply>,
    failing: HashSet<Vec<u8>>,
    mined: Arc<Mutex<HashMap<B256, (Option<Address>, bool)>>>,
}

impl EthCallResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `data` for every call to `C`.
    pub fn returns<C: SolCall>(mut self, data: impl Into<Bytes>) -> Self {
        self.replies
            .insert(C::SELECTOR.to_vec(), CallReply::Return(data.into()));
        self
    }

    /// Return `data` for this exact call.
    pub fn returns_for<C: SolCall>(mut self, call: &C, data: impl Into<Bytes>) -> Self {
        self.replies
            .insert(call.abi_encode(), CallReply::Return(data.into()));
        self
    }

    /// Revert every call to `C` with `data`.
    pub fn reverts<C: SolCall>(mut self, data: impl Into<Bytes>) -> Self {
        self.replies
            .insert(C::SELECTOR.to_vec(), CallReply::Revert(data.into()));
        self
    }

    /// Revert this exact call with `data`.
    pub fn reverts_for<C: SolCall>(mut self, call: &C, data: impl Into<Bytes>) -> Self {
        self.replies
            .insert(call.abi_encode(), CallReply::Revert(data.into()));
        self
    }

    /// Mine transactions calling `C` with a failed status.
    pub fn fails_when_mined<C: SolCall>(mut self) -> Self {
        self.failing.insert(C::SELECTOR.to_vec());
        self
    }

    fn lookup(&self, calldata: &[u8]) -> Option<&CallReply> {
        self.replies
            .get(calldata)
            .or_else(|| calldata.get(..4).and_then(|selector| self.replies.get(selector)))
    }

    fn answer(&self, request: &Value) -> Value {
        let id = request["id"].clone();
        match request["method"].as_str() {
            Some("eth_chainId") => json!({ "jsonrpc": "2.0", "id": id, "result": "0x1" }),
            Some("eth_blockNumber") => json!({ "jsonrpc": "2.0", "id": id, "result": "0x1" }),
            Some("eth_getTransactionCount") => json!({ "jsonrpc": "2.0", "id": id, "result": "0x0" }),
            Some("eth_estimateGas") => json!({ "jsonrpc": "2.0", "id": id, "result": "0x30d40" }),
            Some("eth_gasPrice" | "eth_maxPriorityFeePerGas" | "eth_blobBaseFee") => {
                json!({ "jsonrpc": "2.0", "id": id, "result": "0x3b9aca00" })
            }
            Some("eth_feeHistory") => json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "oldestBlock": "0x1",
                    "baseFeePerGas": ["0x3b9aca00", "0x3b9aca00"],
                    "gasUsedRatio": [0.5],
                    "reward": [["0x3b9aca00"]]
                }
            }),
            Some("eth_getBlockByNumber") => json!({ "jsonrpc": "2.0", "id": id, "result": null }),
            Some("eth_sendRawTransaction") => {
                let raw = request["params"][0].as_str().unwrap_or("0x");
                match self.mine(raw) {
                    Some(hash) => json!({ "jsonrpc": "2.0", "id": id, "result": hash }),
                    None => json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "error": { "code": -32602, "message": "invalid raw transaction" }
                    }),
                }
            }
            Some("eth_getTransactionReceipt") => {
                let receipt = request["params"][0]
                    .as_str()
                    .and_then(|hash| hash.parse::<B256>().ok())
                    .and_then(|hash| self.receipt(hash))
                    .unwrap_or(Value::Null);
                json!({ "jsonrpc": "2.0", "id": id, "result": receipt })
            }
            Some("eth_call") => {
                let tx = &request["params"][0];
                let input = tx
                    .get("input")
                    .or_else(|| tx.get("data"))
                    .and_then(Value::as_str)
                    .unwrap_or("0x");
                let calldata = alloy::primitives::hex::decode(input).unwrap_or_default();
                match self.lookup(&calldata) {
                    Some(CallReply::Return(data)) => {
                        json!({ "jsonrpc": "2.0", "id": id, "result": data.to_string() })
                    }
                    Some(CallReply::Revert(data)) => json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "error": { "code": 3, "message": "execution reverted", "data": data.to_string() }
                    }),
                    None => json!({ "jsonrpc": "2.0", "id": id, "result": "0x" }),
                }
            }
            _ => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32601, "message": "method not found" }
            }),
        }
    }
}

impl EthCallResponder {
    fn mine(&self, raw: &str) -> Option<B256> {
        let raw = alloy::primitives::hex::decode(raw).ok()?;
        let tx = TxEnvelope::decode_2718(&mut raw.as_slice()).ok()?;
        let success = tx
            .input()
            .get(..4)
            .map_or(true, |selector| !self.failing.contains(selector));
        let hash = keccak256(&raw);
        self.mined.lock().ok()?.insert(hash, (tx.to(), success));
        Some(hash)
    }

    fn receipt(&self, hash: B256) -> Option<Value> {
        let (to, success) = *self.mined.lock().ok()?.get(&hash)?;
        let status = if success { "0x1" } else { "0x0" };
        Some(json!({
            "type": "0x2",
            "status": status,
            "cumulativeGasUsed": "0x30d40",
            "logs": [],
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionHash": hash,
            "transactionIndex": "0x0",
            "blockHash": B256::repeat_byte(0x11),
            "blockNumber": "0x2",
            "gasUsed": "0x30d40",
            "effectiveGasPrice": "0x3b9aca00",
            "from": TEST_SIGNER,
            "to": to,
            "contractAddress": null
        }))
    }
}

impl Respond for EthCallResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => return ResponseTemplate::new(400),
        };
        let answer = match body.as_array() {
            Some(batch) => Value::Array(batch.iter().map(|r| self.answer(r)).collect()),
            None => self.answer(&body),
        };
        ResponseTemplate::new(200).set_body_json(answer)
    }
}

/// Mount `responder` as the JSON-RPC endpoint of `server`.
pub async fn mock_rpc(server: &MockServer, responder: EthCallResponder) {
    Mock::given(method("POST"))
        .respond_with(responder)
        .mount(server)
        .await;
}

/// Calldata of every `eth_call` the server received, in order.
pub async fn received_eth_calls(server: &MockServer) -> Vec<Bytes> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|request| serde_json::from_slice::<Value>(&request.body).ok())
        .filter(|body| body["method"] == "eth_call")
        .filter_map(|body| {
            let tx = &body["params"][0];
            let input = tx.get("input").or_else(|| tx.get("data"))?.as_str()?;
            alloy::primitives::hex::decode(input).ok().map(Bytes::from)
        })
        .collect()
}

fn received_bodies(requests: &[Request]) -> Vec<Value> {
    requests
        .iter()
        .filter_map(|request| serde_json::from_slice::<Value>(&request.body).ok())
        .collect()
}

/// JSON-RPC methods the server received, in order.
pub async fn received_rpc_methods(server: &MockServer) -> Vec<String> {
    let requests = server.received_requests().await.unwrap_or_default();
    received_bodies(&requests)
        .iter()
        .filter_map(|body| body["method"].as_str().map(str::to_string))
        .collect()
}

/// Signed transactions the server received, in order.
pub async fn sent_transactions(server: &MockServer) -> Vec<TxEnvelope> {
    let requests = server.received_requests().await.unwrap_or_default();
    received_bodies(&requests)
        .iter()
        .filter(|body| body["method"] == "eth_sendRawTransaction")
        .filter_map(|body| {
            let raw = alloy::primitives::hex::decode(body["params"][0].as_str()?).ok()?;
            TxEnvelope::decode_2718(&mut raw.as_slice()).ok()
        })
        .collect()
}
