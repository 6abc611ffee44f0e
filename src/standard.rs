//! Coding standard names and discovery of the installed standards.
//!
//! `phpcs -i` answers with a sentence rather than a machine format:
//!
//! ```text
//! The installed coding standards are MySource, PEAR, PSR1, PSR2, PSR12, Squiz and Zend
//! ```
//!
//! [`parse_installed_standards`] turns that sentence into an ordered list of
//! [`StandardName`]s. The order is kept because it is the match priority used
//! when sniffs are assigned to standards.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Fragment that introduces the standards list in `phpcs -i` output.
const LIST_INTRO: &str = "are ";

/// Fragment that introduces the name when exactly one standard is installed,
/// as in `The only coding standard installed is PSR12`.
const SINGLE_INTRO: &str = "installed is ";

/// Separators between standard names: `", "` and, before the last item, `" and "`.
static RE_LIST_SEPARATOR: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r", | and ").unwrap());

/// Name of an installed coding standard, e.g. `PSR12`.
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct StandardName(String);

impl StandardName {
    /// Creates a standard name, trimming whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use phpcs_sniffs::standard::StandardName;
    ///
    /// assert_eq!(StandardName::new(" PSR12 ").unwrap().as_str(), "PSR12");
    /// assert!(StandardName::new("   ").is_none());
    /// ```
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(StandardName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix every sniff of this standard starts with: the name plus a dot.
    pub fn sniff_prefix(&self) -> String {
        format!("{}.", self.0)
    }

    /// Returns `true` if `sniff` belongs to this standard.
    ///
    /// The trailing dot is what keeps `PSR1` from claiming `PSR12.Files.FileHeader`.
    ///
    /// # Examples
    ///
    /// ```
    /// use phpcs_sniffs::standard::StandardName;
    ///
    /// let psr1 = StandardName::new("PSR1").unwrap();
    /// assert!(psr1.owns("PSR1.Files.SideEffects"));
    /// assert!(!psr1.owns("PSR12.Files.FileHeader"));
    /// ```
    pub fn owns(&self, sniff: &str) -> bool {
        sniff
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl fmt::Display for StandardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StandardName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extracts the installed standards from the output of `phpcs -i`.
///
/// Takes everything after the first `"are "`, splits on `", "` and `" and "`,
/// trims each name and drops empty ones. Repeated names are kept once, in
/// first-seen order.
///
/// With a single standard installed phpcs prints `... installed is NAME`
/// instead; the name after `"installed is "` is taken as the only entry.
/// Text with neither fragment is treated as an already comma-joined list. An empty result is left for the caller to reject.
///
/// # Examples
///
/// ```
/// use phpcs_sniffs::standard::parse_installed_standards;
///
/// let standards = parse_installed_standards("The installed coding standards are A, B and C");
/// let names: Vec<&str> = standards.iter().map(|s| s.as_str()).collect();
/// assert_eq!(names, ["A", "B", "C"]);
/// ```
pub fn parse_installed_standards(text: &str) -> Vec<StandardName> {
    let names: Vec<&str> = match text.find(LIST_INTRO) {
        Some(idx) => RE_LIST_SEPARATOR
            .split(&text[idx + LIST_INTRO.len()..])
            .collect(),
        None => match text.find(SINGLE_INTRO) {
            Some(idx) => vec![&text[idx + SINGLE_INTRO.len()..]],
            None => text.split(',').collect(),
        },
    };

    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter_map(StandardName::new)
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Joins standards with commas, the form `phpcs --standard=` expects.
pub fn join_standards(standards: &[StandardName]) -> String {
    standards
        .iter()
        .map(StandardName::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
