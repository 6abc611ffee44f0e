//! JSON output formatter.
//!
//! Produces a pretty-printed document with run metadata, a count summary and
//! the catalog keyed by standard in discovery order:
//!
//! ```json
//! {
//!   "phpcs": "/usr/local/bin/phpcs",
//!   "generated_at": "2026-01-01T00:00:00+00:00",
//!   "summary": { "standards": 1, "sniffs": 2, "deprecated": 1 },
//!   "sniffs": {
//!     "PSR1": { "active": ["PSR1.Classes.ClassDeclaration"], "deprecated": ["PSR1.Files.SideEffects"] }
//!   }
//! }
//! ```

use crate::catalog::Catalog;
use crate::inventory::Inventory;
use std::path::Path;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    phpcs: &'a Path,
    generated_at: &'a str,
    summary: Summary,
    sniffs: &'a Catalog,
}

#[derive(serde::Serialize)]
struct Summary {
    standards: usize,
    sniffs: usize,
    deprecated: usize,
}

/// Formats an [`Inventory`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the inventory cannot be serialized (should not happen with valid data).
pub fn format(inventory: &Inventory) -> String {
    let catalog = &inventory.catalog;
    let output = JsonOutput {
        phpcs: &inventory.phpcs,
        generated_at: &inventory.generated_at,
        summary: Summary {
            standards: catalog.len(),
            sniffs: catalog.total_sniffs(),
            deprecated: catalog.total_deprecated(),
        },
        sniffs: catalog,
    };

    let mut json = serde_json::to_string_pretty(&output).expect("JSON serialization failed");
    json.push('\n');
    json
}
