//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::euler_cmd;

#[test]
fn test_help_output() {
    euler_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("euler"))
        .stdout(predicate::str::contains("subgraph"))
        .stdout(predicate::str::contains("prices"))
        .stdout(predicate::str::contains("perspective"))
        .stdout(predicate::str::contains("liquidity"))
        .stdout(predicate::str::contains("swap"));
}

#[test]
fn test_subgraph_help_output() {
    euler_cmd()
        .args(["subgraph", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vault-statuses"))
        .stdout(predicate::str::contains("vaults"))
        .stdout(predicate::str::contains("borrows"))
        .stdout(predicate::str::contains("liquidations"));
}

#[test]
fn test_invalid_command() {
    euler_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_unknown_network() {
    euler_cmd()
        .args(["subgraph", "borrows", "--network", "polygon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown network: polygon"));
}

#[test]
fn test_invalid_format() {
    euler_cmd()
        .args(["networks", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_perspective_check_requires_vaults() {
    euler_cmd()
        .args(["perspective", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_swap_missing_amount() {
    euler_cmd()
        .args(["swap", "ETH", "USDC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_vault_address() {
    euler_cmd()
        .args(["lens", "vault", "0x123", "--rpc-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid vault address"));
}

#[test]
fn test_missing_config_file() {
    euler_cmd()
        .args(["networks", "--config", "/nonexistent/registry.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load registry"));
}
