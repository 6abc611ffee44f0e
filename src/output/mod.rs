//! Output formatting for sniff inventories.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//!
//! Use [`format_inventory`] to render an [`Inventory`] in either format.

pub mod json;
pub mod pretty;

use crate::inventory::Inventory;

/// Supported output formats.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text, grouped by standard.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

/// Formats an [`Inventory`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use phpcs_sniffs::output::{format_inventory, OutputFormat};
/// # use phpcs_sniffs::inventory::Inventory;
/// # fn example(inventory: &Inventory) {
/// let json = format_inventory(inventory, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_inventory(inventory: &Inventory, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(inventory),
        OutputFormat::Json => json::format(inventory),
    }
}
