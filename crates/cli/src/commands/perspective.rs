//! Perspective commands.

use alloy_primitives::Address;
use anyhow::Result;

use crate::cli::{CheckArgs, EndpointArgs, OutputFormat, PerspectiveArgs};
use crate::commands::{client, parse_address};
use crate::output::{emit, format_perspective_detail, format_verified_vaults_table};

fn perspective_address(args: &PerspectiveArgs, registry: &euler_rs_api::NetworkRegistry) -> Result<Address> {
    match &args.perspective {
        Some(address) => parse_address(address, "perspective"),
        None => Ok(registry.resolve_perspective(args.chain, args.kind)?),
    }
}

pub async fn run_perspective_info(
    args: &PerspectiveArgs,
    endpoints: &EndpointArgs,
    format: OutputFormat,
) -> Result<()> {
    let client = client(endpoints, args.chain)?;
    let perspective = perspective_address(args, client.registry())?;

    let info = client.perspective()?.perspective_info(perspective).await?;
    emit(format, &info, || format_perspective_detail(&info))
}

pub async fn run_perspective_check(
    args: &CheckArgs,
    endpoints: &EndpointArgs,
    format: OutputFormat,
) -> Result<()> {
    let client = client(endpoints, args.perspective.chain)?;
    let perspective = perspective_address(&args.perspective, client.registry())?;
    let vaults = args
        .vaults
        .iter()
        .map(|v| parse_address(v, "vault"))
        .collect::<Result<Vec<_>>>()?;

    let statuses = client
        .perspective()?
        .check_vaults(perspective, &vaults)
        .await?;
    emit(format, &statuses, || format_verified_vaults_table(&statuses))
}
