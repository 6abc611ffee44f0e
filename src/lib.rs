//! # phpcs-sniffs
//!
//! Lists every sniff (rule) provided by the coding standards installed for
//! [PHP_CodeSniffer] and organizes them into a catalog: sniffs grouped by the
//! standard that owns them, with deprecated sniffs kept apart from active ones.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use phpcs_sniffs::inventory;
//! use phpcs_sniffs::tool::phpcs::Phpcs;
//! use phpcs_sniffs::tool::runner::SystemRunner;
//! use phpcs_sniffs::tool::{Locator, PathLocator};
//!
//! let runner = SystemRunner::default();
//! let phpcs = Phpcs::new(PathLocator::new().locate()?, &runner);
//! let inventory = inventory::run(&phpcs)?;
//!
//! for (standard, sniffs) in inventory.catalog.iter() {
//!     println!("{standard}: {} active, {} deprecated", sniffs.active.len(), sniffs.deprecated.len());
//! }
//! # Ok::<(), phpcs_sniffs::Error>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **[`tool`]** — locate phpcs and run it ([`tool::Locator`],
//!    [`tool::runner::CommandRunner`]).
//! 2. **[`standard`]** — parse the installed standards out of `phpcs -i`.
//! 3. **[`listing`]** — pick sniff names out of `phpcs --standard=... -e`.
//! 4. **[`catalog`]** — assign sniffs to standards and split off deprecated ones.
//! 5. **[`inventory`]** — run the steps above in order.
//! 6. **[`output`]** — render the result as pretty text or JSON.
//!
//! [PHP_CodeSniffer]: https://github.com/PHPCSStandards/PHP_CodeSniffer

pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod listing;
pub mod output;
pub mod standard;
pub mod tool;

pub use error::{Error, Result};
