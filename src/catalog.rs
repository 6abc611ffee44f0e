//! The sniff catalog: every sniff grouped under the standard that owns it,
//! with deprecated sniffs kept apart from active ones.

use crate::error::{Error, Result};
use crate::standard::{join_standards, StandardName};
use serde::ser::SerializeMap;

/// Suffix phpcs appends to deprecated sniffs in its listing.
pub const DEPRECATION_MARKER: &str = " *";

/// A single sniff with its deprecation marker resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sniff {
    /// Qualified name, `<Standard>.<Category>.<Rule>`, never carrying the marker.
    pub name: String,
    pub deprecated: bool,
}

impl Sniff {
    /// Splits the deprecation marker off a raw listing name.
    ///
    /// Only a trailing `" *"` counts; anything else is kept verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use phpcs_sniffs::catalog::Sniff;
    ///
    /// let sniff = Sniff::parse("PSR1.Files.SideEffects *");
    /// assert_eq!(sniff.name, "PSR1.Files.SideEffects");
    /// assert!(sniff.deprecated);
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.strip_suffix(DEPRECATION_MARKER) {
            Some(name) => Sniff {
                name: name.to_string(),
                deprecated: true,
            },
            None => Sniff {
                name: raw.to_string(),
                deprecated: false,
            },
        }
    }
}

/// Sniffs owned by one standard, in listing order.
///
/// `deprecated` is always present and is simply empty for standards without
/// deprecated sniffs.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct StandardSniffs {
    pub active: Vec<String>,
    pub deprecated: Vec<String>,
}

impl StandardSniffs {
    pub fn len(&self) -> usize {
        self.active.len() + self.deprecated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.deprecated.is_empty()
    }

    fn push(&mut self, sniff: Sniff) {
        if sniff.deprecated {
            self.deprecated.push(sniff.name);
        } else {
            self.active.push(sniff.name);
        }
    }
}

/// Sniffs grouped by standard.
///
/// Holds one entry per discovered standard, in discovery order, including
/// standards that own no sniffs. Serializes as a map keyed by standard name
/// in that same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(StandardName, StandardSniffs)>,
}

impl Catalog {
    /// Sniffs of the standard called `name`, if it was discovered.
    pub fn get(&self, name: &str) -> Option<&StandardSniffs> {
        self.entries
            .iter()
            .find(|(standard, _)| standard.as_str() == name)
            .map(|(_, sniffs)| sniffs)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StandardName, &StandardSniffs)> {
        self.entries.iter().map(|(standard, sniffs)| (standard, sniffs))
    }

    pub fn standards(&self) -> impl Iterator<Item = &StandardName> {
        self.entries.iter().map(|(standard, _)| standard)
    }

    /// Number of standards in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_sniffs(&self) -> usize {
        self.entries.iter().map(|(_, sniffs)| sniffs.len()).sum()
    }

    pub fn total_deprecated(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, sniffs)| sniffs.deprecated.len())
            .sum()
    }

    /// Keeps only the standards whose names appear in `names`.
    ///
    /// Used to narrow what gets rendered; ownership is decided beforehand
    /// against the full standards list.
    pub fn retain_standards(&mut self, names: &[String]) {
        self.entries
            .retain(|(standard, _)| names.iter().any(|n| n == standard.as_str()));
    }
}

impl serde::Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (standard, sniffs) in &self.entries {
            map.serialize_entry(standard, sniffs)?;
        }
        map.end()
    }
}

/// Finds the standard that owns `sniff`.
///
/// Standards are tried in discovery order and the first `<standard>.` prefix
/// match wins. The dot must stay part of the test: without it `PSR1` would
/// claim `PSR12.Files.FileHeader` whenever it comes first.
pub fn owning_standard<'a>(
    sniff: &str,
    standards: &'a [StandardName],
) -> Option<&'a StandardName> {
    standards.iter().find(|standard| standard.owns(sniff))
}

/// Assigns every sniff to its owning standard and splits active from deprecated.
///
/// `sniffs` are raw listing names as returned by
/// [`parse_sniff_listing`](crate::listing::parse_sniff_listing), deprecation
/// markers included. Order within each standard follows `sniffs`.
///
/// # Errors
///
/// Returns [`Error::UnclassifiedSniff`] for the first sniff that no standard
/// owns. No sniff is ever dropped silently.
///
/// # Examples
///
/// ```
/// use phpcs_sniffs::catalog::build_catalog;
/// use phpcs_sniffs::standard::StandardName;
///
/// let standards = vec![StandardName::new("PSR1").unwrap(), StandardName::new("PSR12").unwrap()];
/// let sniffs = vec!["PSR12.Files.FileHeader".to_string()];
/// let catalog = build_catalog(&sniffs, &standards).unwrap();
///
/// assert!(catalog.get("PSR1").unwrap().is_empty());
/// assert_eq!(catalog.get("PSR12").unwrap().active, ["PSR12.Files.FileHeader"]);
/// ```
pub fn build_catalog(sniffs: &[String], standards: &[StandardName]) -> Result<Catalog> {
    let mut entries: Vec<(StandardName, StandardSniffs)> = standards
        .iter()
        .map(|standard| (standard.clone(), StandardSniffs::default()))
        .collect();

    for raw in sniffs {
        let Some(owner) = owning_standard(raw, standards) else {
            return Err(Error::UnclassifiedSniff {
                sniff: raw.clone(),
                standards: join_standards(standards),
            });
        };
        if let Some((_, owned)) = entries.iter_mut().find(|(standard, _)| standard == owner) {
            owned.push(Sniff::parse(raw));
        }
    }

    Ok(Catalog { entries })
}
