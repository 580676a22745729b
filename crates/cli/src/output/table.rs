//! Table formatting for list results.

use euler_rs_api::format::{format_vault_address, verification_status_text};
use euler_rs_api::{
    Borrow, EulerVault, FormattedPrice, Liquidate, NetworkRegistry, VaultStatus, VerifiedVault,
};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct VaultStatusRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Total Borrows")]
    total_borrows: String,
    #[tabled(rename = "Total Shares")]
    total_shares: String,
    #[tabled(rename = "Interest Rate")]
    interest_rate: String,
    #[tabled(rename = "Fees")]
    accumulated_fees: String,
}

#[derive(Tabled)]
struct EulerVaultRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Creator")]
    creator: String,
    #[tabled(rename = "Governor")]
    governor: String,
}

#[derive(Tabled)]
struct BorrowRow {
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Vault")]
    vault: String,
    #[tabled(rename = "Assets")]
    assets: String,
}

#[derive(Tabled)]
struct LiquidateRow {
    #[tabled(rename = "Liquidator")]
    liquidator: String,
    #[tabled(rename = "Violator")]
    violator: String,
    #[tabled(rename = "Repaid")]
    repay_assets: String,
    #[tabled(rename = "Yield")]
    yield_balance: String,
}

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

#[derive(Tabled)]
struct VerifiedVaultRow {
    #[tabled(rename = "Vault")]
    vault: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Perspective")]
    perspective: String,
}

#[derive(Tabled)]
struct NetworkRow {
    #[tabled(rename = "Network")]
    network: String,
    #[tabled(rename = "Chain ID")]
    chain_id: u64,
    #[tabled(rename = "Subgraph")]
    subgraph: &'static str,
    #[tabled(rename = "Prices")]
    prices: &'static str,
    #[tabled(rename = "Lens")]
    lens: &'static str,
    #[tabled(rename = "Perspective")]
    perspective: String,
    #[tabled(rename = "Swap")]
    swap: &'static str,
}

fn short(address: &impl std::fmt::Display) -> String {
    format_vault_address(&address.to_string())
}

fn yes_no(configured: bool) -> &'static str {
    if configured {
        "yes"
    } else {
        "-"
    }
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
    table.to_string()
}

pub fn format_vault_statuses_table(statuses: &[VaultStatus]) -> String {
    if statuses.is_empty() {
        return "No vault statuses found.".to_string();
    }

    let rows = statuses
        .iter()
        .map(|s| VaultStatusRow {
            id: s.id.clone(),
            total_borrows: s.total_borrows.to_string(),
            total_shares: s.total_shares.to_string(),
            interest_rate: s.interest_rate.to_string(),
            accumulated_fees: s.accumulated_fees.to_string(),
        })
        .collect();
    render::<VaultStatusRow>(rows)
}

pub fn format_euler_vaults_table(vaults: &[EulerVault]) -> String {
    if vaults.is_empty() {
        return "No vaults found.".to_string();
    }

    let rows = vaults
        .iter()
        .map(|v| EulerVaultRow {
            symbol: v.symbol.clone(),
            address: format_vault_address(&v.id),
            creator: short(&v.creator),
            governor: v
                .governor_admin
                .as_ref()
                .map(short)
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    render::<EulerVaultRow>(rows)
}

pub fn format_borrows_table(borrows: &[Borrow]) -> String {
    if borrows.is_empty() {
        return "No borrows found.".to_string();
    }

    let rows = borrows
        .iter()
        .map(|b| BorrowRow {
            account: short(&b.account),
            vault: short(&b.vault),
            assets: b.assets.to_string(),
        })
        .collect();
    render::<BorrowRow>(rows)
}

pub fn format_liquidates_table(liquidates: &[Liquidate]) -> String {
    if liquidates.is_empty() {
        return "No liquidations found.".to_string();
    }

    let rows = liquidates
        .iter()
        .map(|l| LiquidateRow {
            liquidator: short(&l.liquidator),
            violator: short(&l.violator),
            repay_assets: l.repay_assets.to_string(),
            yield_balance: l.yield_balance.to_string(),
        })
        .collect();
    render::<LiquidateRow>(rows)
}

pub fn format_prices_table(prices: &[FormattedPrice]) -> String {
    if prices.is_empty() {
        return "No prices found.".to_string();
    }

    let rows = prices
        .iter()
        .map(|p| PriceRow {
            symbol: p.symbol.clone(),
            address: short(&p.address),
            price: p.price_formatted.clone(),
            source: p.source.clone(),
            updated: p.timestamp_formatted.clone(),
        })
        .collect();
    render::<PriceRow>(rows)
}

pub fn format_verified_vaults_table(vaults: &[VerifiedVault]) -> String {
    if vaults.is_empty() {
        return "No vaults checked.".to_string();
    }

    let rows = vaults
        .iter()
        .map(|v| VerifiedVaultRow {
            vault: short(&v.address),
            status: verification_status_text(v.is_verified).to_string(),
            perspective: v.perspective_name.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    render::<VerifiedVaultRow>(rows)
}

pub fn format_networks_table(registry: &NetworkRegistry) -> String {
    let rows: Vec<NetworkRow> = registry
        .networks()
        .map(|(network, config)| NetworkRow {
            network: network.display_name().to_string(),
            chain_id: network.chain_id(),
            subgraph: yes_no(config.subgraph_url.is_some()),
            prices: yes_no(config.price_api_url.is_some()),
            lens: yes_no(config.lens.is_some()),
            perspective: config
                .governed_perspective
                .as_ref()
                .map(short)
                .unwrap_or_else(|| "-".to_string()),
            swap: yes_no(config.swap.is_some()),
        })
        .collect();

    if rows.is_empty() {
        return "No networks configured.".to_string();
    }
    render(rows)
}
