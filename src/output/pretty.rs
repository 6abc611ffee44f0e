//! Human-readable colored text formatter.

use crate::inventory::Inventory;
use colored::Colorize;

/// Formats an [`Inventory`] as ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — phpcs path and timestamp.
/// 2. **Standards** — one block per standard: active sniffs, then deprecated
///    sniffs marked as such.
/// 3. **Summary** — sniff, deprecated and standard counts.
pub fn format(inventory: &Inventory) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        "  PHP_CodeSniffer Sniffs  ".bold().on_blue().white()
    ));
    out.push_str(&format!("  phpcs:     {}\n", inventory.phpcs.display()));
    out.push_str(&format!("  Generated: {}\n\n", inventory.generated_at));

    for (standard, sniffs) in inventory.catalog.iter() {
        out.push_str(&format!(
            "{} {}\n",
            standard.as_str().bold().underline(),
            format!("({} sniffs)", sniffs.len()).dimmed()
        ));

        if sniffs.is_empty() {
            out.push_str(&format!("  {}\n", "no sniffs".dimmed()));
        }
        for name in &sniffs.active {
            out.push_str(&format!("  {name}\n"));
        }
        for name in &sniffs.deprecated {
            out.push_str(&format!(
                "  {} {}\n",
                name.dimmed(),
                "(deprecated)".yellow()
            ));
        }
        out.push('\n');
    }

    let catalog = &inventory.catalog;
    out.push_str(&format!(
        "Total: {} sniffs, {} deprecated, {} standards\n",
        catalog.total_sniffs(),
        catalog.total_deprecated(),
        catalog.len(),
    ));

    out
}
