//! Detailed output formatting for single results.

use alloy_primitives::{Address, U256};
use colored::Colorize;
use euler_rs_api::format::{format_token_amount, format_vault_address};
use euler_rs_api::{
    AccountLiquidity, Borrow, EulerVault, LensAddresses, Liquidate, Network, PerspectiveInfo,
    SwapOutcome, SwapQuote, VaultSnapshot, VaultStatus,
};
use serde::Serialize;

/// Decimals of values denominated in a vault's unit of account.
const UNIT_OF_ACCOUNT_DECIMALS: u8 = 18;

/// Receipt fields printed after a mined transaction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSummary {
    pub transaction_hash: String,
    pub block_number: u64,
    pub gas_used: u64,
    pub success: bool,
}

fn header(output: &mut String, title: &str) {
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", title.bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));
}

fn section(output: &mut String, title: &str) {
    output.push_str(&format!("{}\n", title.cyan().bold()));
}

fn line(output: &mut String, label: &str, value: impl std::fmt::Display) {
    output.push_str(&format!("  {:<14}{}\n", format!("{}:", label), value));
}

/// Format gas with thousands separators.
pub fn format_gas(gas: u64) -> String {
    let s = gas.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

pub fn format_vault_status_detail(status: &VaultStatus) -> String {
    let mut output = String::new();
    header(&mut output, "Vault Status");
    line(&mut output, "ID", &status.id);
    line(&mut output, "Total Borrows", status.total_borrows);
    line(&mut output, "Total Shares", status.total_shares);
    line(&mut output, "Interest Rate", status.interest_rate);
    line(&mut output, "Fees", status.accumulated_fees);
    output
}

pub fn format_euler_vault_detail(vault: &EulerVault) -> String {
    let mut output = String::new();
    header(&mut output, &vault.symbol);
    line(&mut output, "Address", &vault.id);
    line(&mut output, "Creator", vault.creator);
    line(
        &mut output,
        "Governor",
        vault
            .governor_admin
            .map(|g| g.to_string())
            .unwrap_or_else(|| "-".to_string()),
    );
    output
}

pub fn format_borrow_detail(borrow: &Borrow) -> String {
    let mut output = String::new();
    header(&mut output, "Borrow");
    line(&mut output, "ID", &borrow.id);
    line(&mut output, "Account", borrow.account);
    line(&mut output, "Vault", borrow.vault);
    line(&mut output, "Assets", borrow.assets);
    output
}

pub fn format_liquidate_detail(liquidate: &Liquidate) -> String {
    let mut output = String::new();
    header(&mut output, "Liquidation");
    line(&mut output, "ID", &liquidate.id);
    line(&mut output, "Liquidator", liquidate.liquidator);
    line(&mut output, "Violator", liquidate.violator);
    line(&mut output, "Repaid", liquidate.repay_assets);
    line(&mut output, "Yield", liquidate.yield_balance);
    output
}

pub fn format_perspective_detail(info: &PerspectiveInfo) -> String {
    let mut output = String::new();
    header(&mut output, &info.name);
    line(&mut output, "Address", info.address);
    line(&mut output, "Verified", info.verified_count);
    output.push('\n');

    if info.verified_vaults.is_empty() {
        output.push_str("  No verified vaults.\n");
        return output;
    }

    section(&mut output, "Verified Vaults");
    for vault in &info.verified_vaults {
        output.push_str(&format!("  {}\n", vault));
    }
    output
}

pub fn format_lens_addresses_detail(network: Network, lens: &LensAddresses) -> String {
    let mut output = String::new();
    header(&mut output, &format!("Lens Contracts ({})", network.display_name()));
    line(&mut output, "Utils", lens.utils_lens);
    line(&mut output, "Vault", lens.vault_lens);
    line(&mut output, "Earn Vault", lens.euler_earn_vault_lens);
    output
}

pub fn format_vault_snapshot_detail(snapshot: &VaultSnapshot) -> String {
    let amount = |value: U256| format_token_amount(value, snapshot.decimals);

    let mut output = String::new();
    header(&mut output, &snapshot.name);

    section(&mut output, "Basic Info");
    line(&mut output, "Address", snapshot.address);
    line(&mut output, "Symbol", &snapshot.symbol);
    line(&mut output, "Decimals", snapshot.decimals);
    line(&mut output, "Asset", snapshot.asset);
    output.push('\n');

    section(&mut output, "State");
    line(&mut output, "Total Assets", amount(snapshot.total_assets));
    line(&mut output, "Total Supply", amount(snapshot.total_supply));
    line(&mut output, "Total Borrows", amount(snapshot.total_borrows));
    line(&mut output, "Interest Rate", snapshot.interest_rate);
    line(&mut output, "Fees", amount(snapshot.accumulated_fees));
    output
}

pub fn format_liquidity_detail(account: Address, vault: Address, liquidity: &AccountLiquidity) -> String {
    let value = |v: U256| format_token_amount(v, UNIT_OF_ACCOUNT_DECIMALS);

    let mut output = String::new();
    header(&mut output, "Account Liquidity");
    line(&mut output, "Account", account);
    line(&mut output, "Vault", format_vault_address(&vault.to_string()));
    output.push('\n');

    section(&mut output, "Unit of Account");
    line(&mut output, "Collateral", value(liquidity.total_collateral_value));
    line(&mut output, "Debt", value(liquidity.total_debt_value));
    line(&mut output, "Available", value(liquidity.available_borrows));
    output
}

pub fn format_swap_quote_detail(quote: &SwapQuote, decimals_in: u8, decimals_out: u8) -> String {
    let path = quote
        .path
        .iter()
        .map(|a| format_vault_address(&a.to_string()))
        .collect::<Vec<_>>()
        .join(" -> ");

    let mut output = String::new();
    header(&mut output, "Swap Quote");
    line(&mut output, "Method", quote.method);
    line(&mut output, "Path", path);
    line(&mut output, "Amount In", format_token_amount(quote.amount_in, decimals_in));
    line(&mut output, "Expected Out", format_token_amount(quote.expected_out, decimals_out));
    line(&mut output, "Minimum Out", format_token_amount(quote.min_out, decimals_out));
    output
}

pub fn format_swap_outcome(outcome: &SwapOutcome) -> String {
    match outcome {
        SwapOutcome::Completed {
            transaction_hash, ..
        } => format!("{} {:#x}", "Swap completed:".green().bold(), transaction_hash),
        SwapOutcome::Failed { reason } => format!("{} {}", "Swap failed:".red().bold(), reason),
    }
}

pub fn format_receipt(receipt: &ReceiptSummary) -> String {
    let mut output = String::new();
    output.push_str("Transaction confirmed!\n");
    line(&mut output, "Tx Hash", &receipt.transaction_hash);
    line(&mut output, "Block", receipt.block_number);
    line(&mut output, "Gas Used", format_gas(receipt.gas_used));
    line(
        &mut output,
        "Status",
        if receipt.success { "Success" } else { "Failed" },
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_format_gas() {
        assert_eq!(format_gas(0), "0");
        assert_eq!(format_gas(999), "999");
        assert_eq!(format_gas(21_000), "21,000");
        assert_eq!(format_gas(1_234_567), "1,234,567");
    }

    #[test]
    fn test_liquidity_detail_scales_unit_of_account() {
        let liquidity = AccountLiquidity {
            total_collateral_value: U256::from(1_500_000_000_000_000_000u64),
            total_debt_value: U256::ZERO,
            available_borrows: U256::from(500_000_000_000_000_000u64),
        };
        let out = format_liquidity_detail(Address::ZERO, Address::ZERO, &liquidity);
        assert!(out.contains("1.5"));
        assert!(out.contains("0.5"));
    }

    #[test]
    fn test_perspective_detail_empty() {
        let info = PerspectiveInfo {
            address: address!("C0121817FF224a018840e4D15a864747d36e6Eb2"),
            name: "Governed Perspective".to_string(),
            verified_vaults: vec![],
            verified_count: 0,
        };
        let out = format_perspective_detail(&info);
        assert!(out.contains("Governed Perspective"));
        assert!(out.contains("No verified vaults."));
    }

    #[test]
    fn test_failed_swap_outcome_shows_reason() {
        let out = format_swap_outcome(&SwapOutcome::Failed {
            reason: "INSUFFICIENT_OUTPUT_AMOUNT".to_string(),
        });
        assert!(out.contains("INSUFFICIENT_OUTPUT_AMOUNT"));
    }
}
