//! Router swap command.

use anyhow::{bail, Context, Result};
use euler_rs_api::format::parse_token_amount;
use euler_rs_api::{SwapAsset, SwapClient, SwapOutcome, SwapQuote, SwapRequest};
use serde::Serialize;

use crate::cli::{EndpointArgs, OutputFormat, SwapArgs};
use crate::commands::client;
use crate::output::{emit, format_swap_outcome, format_swap_quote_detail};

const NATIVE_DECIMALS: u8 = 18;

#[derive(Serialize)]
struct SwapReport<'a> {
    quote: &'a SwapQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a SwapOutcome>,
}

/// `ETH` selects the native asset; anything else is a token symbol or address.
async fn resolve_leg(swap: &SwapClient, input: &str) -> Result<(SwapAsset, u8)> {
    if input.eq_ignore_ascii_case("eth") {
        return Ok((SwapAsset::Native, NATIVE_DECIMALS));
    }
    let token = swap
        .token_info(input)
        .await
        .with_context(|| format!("Unknown token: {}", input))?;
    Ok((SwapAsset::Token(token.address), token.decimals))
}

pub async fn run_swap(args: &SwapArgs, endpoints: &EndpointArgs, format: OutputFormat) -> Result<()> {
    let client = client(endpoints, args.chain)?;
    let swap = client.swap(args.chain)?;

    let (token_in, decimals_in) = resolve_leg(&swap, &args.token_in).await?;
    let (token_out, decimals_out) = resolve_leg(&swap, &args.token_out).await?;
    let amount = parse_token_amount(&args.amount, decimals_in)
        .with_context(|| format!("Invalid amount {} for {} decimals", args.amount, decimals_in))?;

    let request = SwapRequest::new(token_in, token_out, amount).with_slippage(args.slippage);
    let quote = swap.quote(&request).await?;

    if args.quote_only {
        let report = SwapReport {
            quote: &quote,
            outcome: None,
        };
        return emit(format, &report, || {
            format_swap_quote_detail(&quote, decimals_in, decimals_out)
        });
    }

    let outcome = swap.swap_with_quote(&request, &quote).await?;
    let report = SwapReport {
        quote: &quote,
        outcome: Some(&outcome),
    };
    emit(format, &report, || {
        format!(
            "{}\n{}",
            format_swap_quote_detail(&quote, decimals_in, decimals_out),
            format_swap_outcome(&outcome)
        )
    })?;

    if let SwapOutcome::Failed { reason } = &outcome {
        bail!("Swap failed: {}", reason);
    }
    Ok(())
}
