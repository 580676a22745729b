//! Off-chain price command.

use anyhow::Result;
use euler_rs_api::prices::format_prices;

use crate::cli::{EndpointArgs, OutputFormat, PricesArgs};
use crate::commands::{client, parse_address};
use crate::output::{emit, format_prices_table};

pub async fn run_prices(args: &PricesArgs, endpoints: &EndpointArgs, format: OutputFormat) -> Result<()> {
    let client = client(endpoints, args.chain)?;

    let prices = if args.assets.is_empty() {
        client.prices().fetch_common_prices(args.chain).await?
    } else {
        let assets = args
            .assets
            .iter()
            .map(|a| parse_address(a.trim(), "asset"))
            .collect::<Result<Vec<_>>>()?;
        client.prices().fetch_prices(args.chain, &assets).await?
    };

    let formatted = format_prices(&prices);
    emit(format, &formatted, || format_prices_table(&formatted))
}
