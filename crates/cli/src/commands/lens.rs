//! Lens commands.

use anyhow::Result;

use crate::cli::{EndpointArgs, NetworkArgs, OutputFormat, VaultArgs};
use crate::commands::{client, load_registry, parse_address};
use crate::output::{emit, format_lens_addresses_detail, format_vault_snapshot_detail};

pub fn run_lens_addresses(args: &NetworkArgs, endpoints: &EndpointArgs, format: OutputFormat) -> Result<()> {
    let registry = load_registry(endpoints, args.chain)?;
    let lens = registry.resolve_lens(args.chain)?;
    emit(format, &lens, || format_lens_addresses_detail(args.chain, &lens))
}

pub async fn run_lens_vault(args: &VaultArgs, endpoints: &EndpointArgs, format: OutputFormat) -> Result<()> {
    let vault = parse_address(&args.address, "vault")?;
    let client = client(endpoints, args.chain)?;

    let snapshot = client.lens()?.vault_snapshot(vault).await?;
    emit(format, &snapshot, || format_vault_snapshot_detail(&snapshot))
}
