//! Subgraph query commands.

use anyhow::Result;

use crate::cli::{EndpointArgs, OutputFormat, SubgraphArgs, SubgraphSubcommand};
use crate::commands::client;
use crate::output::{
    emit, format_borrow_detail, format_borrows_table, format_euler_vault_detail,
    format_euler_vaults_table, format_liquidate_detail, format_liquidates_table,
    format_vault_status_detail, format_vault_statuses_table,
};

fn network_args(subcommand: &SubgraphSubcommand) -> &SubgraphArgs {
    match subcommand {
        SubgraphSubcommand::VaultStatuses(args)
        | SubgraphSubcommand::Vaults(args)
        | SubgraphSubcommand::Borrows(args)
        | SubgraphSubcommand::Liquidations(args) => args,
    }
}

pub async fn run_subgraph(
    subcommand: &SubgraphSubcommand,
    endpoints: &EndpointArgs,
    format: OutputFormat,
) -> Result<()> {
    let args = network_args(subcommand);
    let client = client(endpoints, args.network)?;
    let subgraph = client.subgraph();
    let network = args.network;

    match (subcommand, args.id.as_deref()) {
        (SubgraphSubcommand::VaultStatuses(_), None) => {
            let statuses = subgraph.vault_statuses(network).await?;
            emit(format, &statuses, || format_vault_statuses_table(&statuses))
        }
        (SubgraphSubcommand::VaultStatuses(_), Some(id)) => {
            let status = subgraph.vault_status(network, id).await?;
            emit(format, &status, || format_vault_status_detail(&status))
        }
        (SubgraphSubcommand::Vaults(_), None) => {
            let vaults = subgraph.euler_vaults(network).await?;
            emit(format, &vaults, || format_euler_vaults_table(&vaults))
        }
        (SubgraphSubcommand::Vaults(_), Some(id)) => {
            let vault = subgraph.euler_vault(network, id).await?;
            emit(format, &vault, || format_euler_vault_detail(&vault))
        }
        (SubgraphSubcommand::Borrows(_), None) => {
            let borrows = subgraph.borrows(network).await?;
            emit(format, &borrows, || format_borrows_table(&borrows))
        }
        (SubgraphSubcommand::Borrows(_), Some(id)) => {
            let borrow = subgraph.borrow(network, id).await?;
            emit(format, &borrow, || format_borrow_detail(&borrow))
        }
        (SubgraphSubcommand::Liquidations(_), None) => {
            let liquidates = subgraph.liquidates(network).await?;
            emit(format, &liquidates, || format_liquidates_table(&liquidates))
        }
        (SubgraphSubcommand::Liquidations(_), Some(id)) => {
            let liquidate = subgraph.liquidate(network, id).await?;
            emit(format, &liquidate, || format_liquidate_detail(&liquidate))
        }
    }
}
