//! Integration tests for commands that read from or write to a chain.

use predicates::prelude::*;
use wiremock::matchers::method;
use wiremock::Mock;

use super::helpers::{euler_cmd, start_mock_server, FixedWordRpc, TEST_PRIVATE_KEY, WORD_TRUE};

const VAULT: &str = "0x797dd80692c3b2dadabce8e30c07fde5307d48a9";

#[tokio::test]
async fn test_perspective_check_table() {
    let rpc = start_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(FixedWordRpc { word: WORD_TRUE })
        .mount(&rpc)
        .await;

    // `name()` cannot decode a bare word, so the name falls back
    euler_cmd()
        .args(["perspective", "check", VAULT, "--rpc-url"])
        .arg(rpc.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("Verified"))
        .stdout(predicate::str::contains("Not Verified").not())
        .stdout(predicate::str::contains("Unknown Perspective"));
}

#[tokio::test]
async fn test_perspective_check_json() {
    let rpc = start_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(FixedWordRpc { word: "0x" })
        .mount(&rpc)
        .await;

    let output = euler_cmd()
        .args(["perspective", "check", VAULT, "--format", "json", "--rpc-url"])
        .arg(rpc.uri())
        .output()
        .unwrap();

    assert!(output.status.success());
    let statuses: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // an empty return means no code at the perspective: not verified
    assert_eq!(statuses[0]["isVerified"], false);
}

#[test]
fn test_perspective_needs_rpc() {
    euler_cmd()
        .args(["perspective", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RPC not configured"));
}

#[test]
fn test_perspective_unconfigured_kind() {
    euler_cmd()
        .args(["perspective", "info", "--kind", "base", "--rpc-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base perspective is not configured for mainnet"));
}

#[test]
fn test_liquidity_needs_rpc() {
    euler_cmd()
        .args([
            "liquidity",
            "--account",
            "0x2dc6b5e3a7f5b1a6c0d4e8f2a9b3c7d1e5f0a4b8",
            "--vault",
            VAULT,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RPC not configured"));
}

#[test]
fn test_liquidity_missing_contracts() {
    // the default registry has no Pyth oracle for mainnet
    euler_cmd()
        .args([
            "liquidity",
            "--account",
            "0x2dc6b5e3a7f5b1a6c0d4e8f2a9b3c7d1e5f0a4b8",
            "--vault",
            VAULT,
            "--rpc-url",
            "http://127.0.0.1:1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pyth oracle is not configured"));
}

#[test]
fn test_borrow_needs_private_key() {
    euler_cmd()
        .args(["borrow", VAULT, "100", "--rpc-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction support not configured"));
}

#[test]
fn test_swap_same_asset_rejected() {
    euler_cmd()
        .args([
            "swap",
            "ETH",
            "eth",
            "1",
            "--rpc-url",
            "http://127.0.0.1:1",
            "--private-key",
            TEST_PRIVATE_KEY,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid swap"));
}

#[test]
fn test_swap_invalid_slippage_rejected() {
    euler_cmd()
        .args([
            "swap",
            "ETH",
            "USDC",
            "1",
            "--slippage",
            "150",
            "--rpc-url",
            "http://127.0.0.1:1",
            "--private-key",
            TEST_PRIVATE_KEY,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid slippage"));
}

#[test]
fn test_swap_without_router() {
    euler_cmd()
        .args([
            "swap",
            "ETH",
            "USDC",
            "1",
            "--chain",
            "base",
            "--rpc-url",
            "http://127.0.0.1:1",
            "--private-key",
            TEST_PRIVATE_KEY,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not configured for base"));
}
