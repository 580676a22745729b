//! Integration tests for subgraph, price and registry commands.

use predicates::prelude::*;
use serde_json::Value;

use super::helpers::{
    euler_cmd, euler_cmd_with_mock, mock_get_response, mock_graphql_error, mock_graphql_response,
    start_mock_server,
};

#[tokio::test]
async fn test_vault_statuses_table_output() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "vault_statuses").await;

    euler_cmd_with_mock(&server)
        .args(["subgraph", "vault-statuses"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0x797dd80692c3b2dadabce8e30c07fde5307d48a9-21348723",
        ))
        .stdout(predicate::str::contains("48512730988311"));
}

#[tokio::test]
async fn test_vault_statuses_json_output() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "vault_statuses").await;

    let output = euler_cmd_with_mock(&server)
        .args(["subgraph", "vault-statuses", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let statuses: Value = serde_json::from_slice(&output.stdout).unwrap();
    let statuses = statuses.as_array().unwrap();
    assert_eq!(statuses.len(), 2);
    // 256-bit values stay decimal strings
    assert_eq!(statuses[1]["totalShares"], "1000000000000000000000000000000");
}

#[tokio::test]
async fn test_single_vault_by_id() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "euler_vault").await;

    euler_cmd_with_mock(&server)
        .args([
            "subgraph",
            "vaults",
            "--network",
            "base",
            "--id",
            "0x797dd80692c3b2dadabce8e30c07fde5307d48a9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("eUSDC-2"));
}

#[tokio::test]
async fn test_single_vault_not_found() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "euler_vault_null").await;

    euler_cmd_with_mock(&server)
        .args([
            "subgraph",
            "vaults",
            "--id",
            "0x0000000000000000000000000000000000000001",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vault not found"));
}

#[tokio::test]
async fn test_graphql_error_reported() {
    let server = start_mock_server().await;
    mock_graphql_error(&server, "indexing_error").await;

    euler_cmd_with_mock(&server)
        .args(["subgraph", "borrows"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("indexing_error"));
}

#[test]
fn test_network_without_subgraph() {
    euler_cmd()
        .args(["subgraph", "liquidations", "--network", "sepolia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("subgraph endpoint is not configured for sepolia"));
}

#[tokio::test]
async fn test_prices_table_output() {
    let server = start_mock_server().await;
    mock_get_response(&server, "prices").await;

    euler_cmd_with_mock(&server)
        .args(["prices"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WETH"))
        .stdout(predicate::str::contains("$3,150.42"))
        .stdout(predicate::str::contains("chainlink"))
        .stdout(predicate::str::contains("countryCode").not());
}

#[tokio::test]
async fn test_prices_for_explicit_assets_json() {
    let server = start_mock_server().await;
    mock_get_response(&server, "prices").await;

    let output = euler_cmd_with_mock(&server)
        .args([
            "prices",
            "--assets",
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2,0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let prices: Value = serde_json::from_slice(&output.stdout).unwrap();
    let symbols: Vec<&str> = prices
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["symbol"].as_str().unwrap())
        .collect();
    assert!(symbols.contains(&"WETH"));
    assert!(symbols.contains(&"USDC"));
}

#[test]
fn test_prices_invalid_asset() {
    euler_cmd()
        .args(["prices", "--assets", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid asset address"));
}

#[test]
fn test_networks_table() {
    euler_cmd()
        .arg("networks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ethereum Mainnet"))
        .stdout(predicate::str::contains("Unichain"))
        .stdout(predicate::str::contains("11155111"));
}

#[test]
fn test_networks_from_config_file() {
    let dir = std::env::temp_dir().join(format!("euler-cli-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("registry.json");
    std::fs::write(
        &path,
        r#"{ "networks": { "base": { "subgraphUrl": "http://localhost:8000/graphql" } } }"#,
    )
    .unwrap();

    euler_cmd()
        .args(["networks", "--format", "json", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("localhost:8000"))
        .stdout(predicate::str::contains("mainnet").not());
}

#[test]
fn test_lens_addresses_offline() {
    euler_cmd()
        .args(["lens", "addresses", "--chain", "base"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?i)0xe055fa087e836efacafa257e5f6cf90936c26cb5").unwrap());
}
