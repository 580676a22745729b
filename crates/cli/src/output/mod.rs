//! Output formatting for CLI results.

pub mod detail;
pub mod table;

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;

pub use detail::{
    format_borrow_detail, format_euler_vault_detail, format_lens_addresses_detail,
    format_liquidate_detail, format_liquidity_detail, format_perspective_detail, format_receipt,
    format_swap_outcome, format_swap_quote_detail, format_vault_snapshot_detail,
    format_vault_status_detail, ReceiptSummary,
};
pub use table::{
    format_borrows_table, format_euler_vaults_table, format_liquidates_table,
    format_networks_table, format_prices_table, format_vault_statuses_table,
    format_verified_vaults_table,
};

/// Print `value` as pretty JSON, or the table rendering otherwise.
pub fn emit<T: Serialize + ?Sized>(format: OutputFormat, value: &T, table: impl FnOnce() -> String) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
