//! Run orchestration.
//!
//! [`run`] walks a single, linear pipeline:
//!
//! ```text
//! Start -> StandardsDiscovered -> SniffsListed -> Parsed -> Catalogued -> Done
//! ```
//!
//! It stops at the first failure: [`Error::NoStandardsFound`] when leaving
//! `Start`, [`Error::ListingFailed`] when leaving `StandardsDiscovered`, and
//! [`Error::UnclassifiedSniff`] if the listing and the standards disagree.
//! phpcs is invoked twice, one call after the other.

use crate::catalog::{build_catalog, Catalog};
use crate::error::{Error, Result};
use crate::listing::parse_sniff_listing;
use crate::standard::{join_standards, parse_installed_standards, StandardName};
use crate::tool::phpcs::Phpcs;
use std::fmt;
use std::path::PathBuf;

/// Pipeline stage, used to label log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    StandardsDiscovered,
    SniffsListed,
    Parsed,
    Catalogued,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::StandardsDiscovered => "standards-discovered",
            Stage::SniffsListed => "sniffs-listed",
            Stage::Parsed => "parsed",
            Stage::Catalogued => "catalogued",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Inventory {
    /// The phpcs executable that was queried.
    pub phpcs: PathBuf,
    /// RFC 3339 timestamp of when the catalog was built.
    pub generated_at: String,
    /// Installed standards, in discovery order.
    pub standards: Vec<StandardName>,
    pub catalog: Catalog,
}

/// Asks phpcs for its installed standards.
///
/// # Errors
///
/// Returns [`Error::NoStandardsFound`] if `phpcs -i` printed nothing or its
/// output names no standards.
pub fn discover_standards(phpcs: &Phpcs<'_>) -> Result<Vec<StandardName>> {
    tracing::debug!(stage = %Stage::Start, phpcs = %phpcs.executable().display());

    let output = phpcs.installed_standards().ok_or(Error::NoStandardsFound)?;
    let standards = parse_installed_standards(&output);
    if standards.is_empty() {
        return Err(Error::NoStandardsFound);
    }

    tracing::debug!(
        stage = %Stage::StandardsDiscovered,
        standards = %join_standards(&standards)
    );
    Ok(standards)
}

/// Builds the sniff catalog for every installed standard.
///
/// # Errors
///
/// Returns [`Error::NoStandardsFound`], [`Error::ListingFailed`] or
/// [`Error::UnclassifiedSniff`]; see the module docs for when each applies.
///
/// # Examples
///
/// ```rust,no_run
/// use phpcs_sniffs::inventory;
/// use phpcs_sniffs::tool::phpcs::Phpcs;
/// use phpcs_sniffs::tool::runner::SystemRunner;
/// use phpcs_sniffs::tool::{Locator, PathLocator};
///
/// let runner = SystemRunner::default();
/// let phpcs = Phpcs::new(PathLocator::new().locate()?, &runner);
/// let inventory = inventory::run(&phpcs)?;
/// println!("{} sniffs", inventory.catalog.total_sniffs());
/// # Ok::<(), phpcs_sniffs::Error>(())
/// ```
pub fn run(phpcs: &Phpcs<'_>) -> Result<Inventory> {
    let standards = discover_standards(phpcs)?;

    let listing = phpcs
        .sniff_listing(&standards)
        .ok_or_else(|| Error::ListingFailed {
            standards: join_standards(&standards),
        })?;
    tracing::debug!(stage = %Stage::SniffsListed, lines = listing.lines().count());

    let sniffs = parse_sniff_listing(&listing, &standards);
    tracing::debug!(stage = %Stage::Parsed, sniffs = sniffs.len());

    let catalog = build_catalog(&sniffs, &standards)?;
    tracing::debug!(
        stage = %Stage::Catalogued,
        sniffs = catalog.total_sniffs(),
        deprecated = catalog.total_deprecated()
    );

    let inventory = Inventory {
        phpcs: phpcs.executable().to_path_buf(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        standards,
        catalog,
    };
    tracing::debug!(stage = %Stage::Done);
    Ok(inventory)
}
