//! Registry overview.

use anyhow::Result;

use crate::cli::{EndpointArgs, OutputFormat};
use crate::commands::base_registry;
use crate::output::{emit, format_networks_table};

pub fn run_networks(endpoints: &EndpointArgs, format: OutputFormat) -> Result<()> {
    let registry = base_registry(endpoints)?;
    emit(format, &registry, || format_networks_table(&registry))
}
