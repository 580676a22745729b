//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;
use serde_json::{json, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

// Anvil's default account 0 private key
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

const ENDPOINT_VARS: &[&str] = &[
    "EULER_CONFIG",
    "EULER_SUBGRAPH_URL",
    "EULER_PRICE_API_URL",
    "EULER_HERMES_URL",
    "ETH_RPC_URL",
    "PRIVATE_KEY",
    "RUST_LOG",
];

/// Start a mock HTTP server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a CLI command isolated from endpoint variables of the environment.
pub fn euler_cmd() -> Command {
    let mut cmd = Command::cargo_bin("euler").unwrap();
    for var in ENDPOINT_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a CLI command whose subgraph and price API point to `mock`.
pub fn euler_cmd_with_mock(mock: &MockServer) -> Command {
    let mut cmd = euler_cmd();
    cmd.env("EULER_SUBGRAPH_URL", mock.uri());
    cmd.env("EULER_PRICE_API_URL", mock.uri());
    cmd
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

/// Mock a POST request with a fixture response.
pub async fn mock_graphql_response(server: &MockServer, fixture_name: &str) {
    let body = load_fixture(fixture_name);
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock a GET request with a fixture response.
pub async fn mock_get_response(server: &MockServer, fixture_name: &str) {
    let body = load_fixture(fixture_name);
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock a GraphQL error response.
pub async fn mock_graphql_error(server: &MockServer, error_message: &str) {
    let body = format!(
        r#"{{"errors":[{{"message":"{}"}}],"data":null}}"#,
        error_message
    );
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// JSON-RPC endpoint answering every `eth_call` with one ABI word.
pub struct FixedWordRpc {
    pub word: &'static str,
}

impl FixedWordRpc {
    fn answer(&self, request: &Value) -> Value {
        let result = match request["method"].as_str() {
            Some("eth_call") => self.word,
            _ => "0x1",
        };
        json!({ "jsonrpc": "2.0", "id": request["id"].clone(), "result": result })
    }
}

impl Respond for FixedWordRpc {
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

/// ABI encoding of `true`.
pub const WORD_TRUE: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";
