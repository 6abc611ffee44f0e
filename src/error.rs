//! Error types.
//!
//! Every failure in a run is terminal: it is reported once and no partial
//! catalog is produced. [`Error::exit_code`] maps each kind onto the exit
//! status used by the `phpcs-sniffs` binary.

use std::path::PathBuf;

/// Errors produced while locating phpcs, querying it, or building the catalog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The phpcs executable could not be resolved.
    #[error(
        "could not find the phpcs executable ({searched}). Install squizlabs/php_codesniffer \
         globally via Composer or add the phpcs directory to PATH"
    )]
    ExecutableNotFound {
        /// What was searched, e.g. `PATH` or an explicit file path.
        searched: String,
    },

    /// `phpcs -i` produced no usable output.
    #[error("no installed standards found")]
    NoStandardsFound,

    /// `phpcs --standard=... -e` produced no usable output.
    #[error("failed to retrieve sniffs from standards: {standards}")]
    ListingFailed {
        /// The comma-joined standards that were requested.
        standards: String,
    },

    /// A parsed sniff matched none of the discovered standards.
    ///
    /// Every sniff has already passed the same prefix filter, so this means
    /// the listing and the standards list disagree.
    #[error("sniff '{sniff}' doesn't belong to any of the standards: {standards}")]
    UnclassifiedSniff {
        /// The raw sniff name, deprecation marker included.
        sniff: String,
        /// The standards it was checked against, comma-joined.
        standards: String,
    },

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Process exit status for this error.
    ///
    /// `3` marks an internal-consistency violation ([`Error::UnclassifiedSniff`]);
    /// everything else means the run could not complete and exits with `2`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnclassifiedSniff { .. } => 3,
            _ => 2,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
