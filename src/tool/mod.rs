//! The external phpcs tool.
//!
//! Everything that touches the host lives here:
//!
//! - [`Locator`] resolves the phpcs executable ([`PathLocator`] searches
//!   `PATH`, [`ConfiguredLocator`] takes an explicit path).
//! - [`runner::CommandRunner`] runs a command and captures its stdout.
//! - [`phpcs::Phpcs`] issues the two read-only phpcs invocations.
//!
//! The parsing and catalog code never calls into the host directly; it only
//! sees the text these collaborators return, so tests can substitute both.

pub mod phpcs;
pub mod runner;

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Host platform family, which decides the executable names to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// File names phpcs may be installed under, in preference order.
    ///
    /// Composer installs a `phpcs.bat` wrapper next to the PHP script on Windows.
    pub fn executable_names(self) -> &'static [&'static str] {
        match self {
            Platform::Windows => &["phpcs.bat", "phpcs.cmd", "phpcs.exe", "phpcs"],
            Platform::Unix => &["phpcs"],
        }
    }
}

/// Resolves the path of the phpcs executable.
pub trait Locator {
    /// Returns an absolute path to phpcs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExecutableNotFound`] when phpcs cannot be resolved.
    fn locate(&self) -> Result<PathBuf>;
}

/// Searches the directories of a `PATH`-style variable for phpcs.
///
/// Directories are searched in order and, within each directory, the
/// platform's [executable names](Platform::executable_names) in order. The
/// first hit wins.
#[derive(Debug, Clone)]
pub struct PathLocator {
    platform: Platform,
    search_path: Option<OsString>,
}

impl PathLocator {
    /// Searches the process `PATH` for the current platform's executable names.
    pub fn new() -> Self {
        PathLocator {
            platform: Platform::current(),
            search_path: std::env::var_os("PATH"),
        }
    }

    /// Searches `search_path` instead of the process `PATH`.
    pub fn with_search_path(platform: Platform, search_path: impl Into<OsString>) -> Self {
        PathLocator {
            platform,
            search_path: Some(search_path.into()),
        }
    }
}

impl Default for PathLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Locator for PathLocator {
    fn locate(&self) -> Result<PathBuf> {
        let not_found = || Error::ExecutableNotFound {
            searched: format!(
                "searched PATH for {}",
                self.platform.executable_names().join(", ")
            ),
        };

        let search_path = self.search_path.as_ref().ok_or_else(not_found)?;

        for dir in std::env::split_paths(search_path) {
            for name in self.platform.executable_names() {
                let candidate = dir.join(name);
                if is_executable(&candidate) {
                    tracing::debug!(path = %candidate.display(), "found phpcs on PATH");
                    return Ok(std::path::absolute(&candidate).unwrap_or(candidate));
                }
            }
        }

        Err(not_found())
    }
}

/// Uses an explicitly configured phpcs path.
#[derive(Debug, Clone)]
pub struct ConfiguredLocator {
    path: PathBuf,
}

impl ConfiguredLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ConfiguredLocator { path: path.into() }
    }
}

impl Locator for ConfiguredLocator {
    fn locate(&self) -> Result<PathBuf> {
        if !self.path.is_file() {
            return Err(Error::ExecutableNotFound {
                searched: format!("{} does not exist", self.path.display()),
            });
        }
        Ok(std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone()))
    }
}

/// Returns `true` if `path` is a regular file that can be executed.
///
/// On Unix at least one executable permission bit must be set; a
/// non-executable file named `phpcs` earlier on `PATH` is passed over.
fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path)
            .map(|m| m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        true
    }
}
