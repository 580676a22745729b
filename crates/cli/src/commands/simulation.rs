//! Liquidity simulation and borrow-with-price-update commands.

use anyhow::{Context, Result};
use euler_rs_api::format::parse_token_amount;
use euler_rs_api::ContractReader;

use crate::cli::{BorrowArgs, EndpointArgs, LiquidityArgs, OutputFormat};
use crate::commands::{client, parse_address};
use crate::output::{emit, format_liquidity_detail, format_receipt, ReceiptSummary};

pub async fn run_liquidity(args: &LiquidityArgs, endpoints: &EndpointArgs, format: OutputFormat) -> Result<()> {
    let account = parse_address(&args.account, "account")?;
    let vault = parse_address(&args.vault, "vault")?;
    let client = client(endpoints, args.chain)?;

    let liquidity = client
        .simulation()?
        .simulate_account_liquidity(account, vault, args.chain)
        .await?;
    emit(format, &liquidity, || format_liquidity_detail(account, vault, &liquidity))
}

pub async fn run_borrow(args: &BorrowArgs, endpoints: &EndpointArgs, format: OutputFormat) -> Result<()> {
    let vault = parse_address(&args.vault, "vault")?;
    let client = client(endpoints, args.chain)?;
    let signer = client.signer()?;

    let receiver = match &args.receiver {
        Some(receiver) => parse_address(receiver, "receiver")?,
        None => signer.signer_address(),
    };

    let decimals = signer.vault_decimals(vault).await?;
    let amount = parse_token_amount(&args.amount, decimals)
        .with_context(|| format!("Invalid amount {} for {} decimals", args.amount, decimals))?;

    eprintln!("Submitting borrow with price update...");
    let receipt = client
        .simulation()?
        .execute_borrow_with_price_update(signer, vault, amount, receiver, args.chain)
        .await?;

    let summary = ReceiptSummary {
        transaction_hash: format!("{:#x}", receipt.transaction_hash),
        block_number: receipt.block_number.unwrap_or_default(),
        gas_used: receipt.gas_used,
        success: receipt.status(),
    };
    emit(format, &summary, || format_receipt(&summary))
}
