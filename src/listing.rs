//! Parsing of the `phpcs --standard=... -e` sniff listing.
//!
//! The listing mixes sniff names with headers, underlines, blank lines and a
//! footer:
//!
//! ```text
//! The PEAR and PSR1 standards contain 3 sniffs
//!
//! PEAR (2 sniffs)
//! ---------------
//!   PEAR.Functions.ValidDefaultValue
//!   PEAR.NamingConventions.ValidClassName *
//!
//! * Sniffs marked with an asterisk are deprecated
//! ```
//!
//! A line is a sniff exactly when, once trimmed, it starts with one of the
//! requested standards followed by a dot.

use crate::standard::StandardName;
use std::collections::HashSet;

/// Extracts sniff names from a sniff listing.
///
/// Returns the names in first-seen order with exact duplicates removed.
/// Deprecation markers (`" *"`) are left in place; the catalog builder
/// strips them.
///
/// # Examples
///
/// ```
/// use phpcs_sniffs::listing::parse_sniff_listing;
/// use phpcs_sniffs::standard::StandardName;
///
/// let standards = vec![StandardName::new("PSR1").unwrap()];
/// let listing = "PSR1 (1 sniff)\n--------------\n  PSR1.Files.SideEffects\n";
/// assert_eq!(parse_sniff_listing(listing, &standards), ["PSR1.Files.SideEffects"]);
/// ```
pub fn parse_sniff_listing(text: &str, standards: &[StandardName]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sniffs = Vec::new();

    for line in text.split('\n').map(str::trim) {
        if !is_sniff_line(line, standards) {
            continue;
        }
        if seen.insert(line) {
            sniffs.push(line.to_string());
        }
    }

    sniffs
}

/// Returns `true` if `line` starts with `<standard>.` for any of `standards`.
fn is_sniff_line(line: &str, standards: &[StandardName]) -> bool {
    standards.iter().any(|standard| standard.owns(line))
}
