//! Configuration loading.
//!
//! The default configuration file is `phpcs-sniffs.toml` in the current
//! working directory. Every field has a default, so the file is optional:
//!
//! ```toml
//! [phpcs]
//! path = "/home/me/.composer/vendor/bin/phpcs"
//! timeout_secs = 60
//! ```
//!
//! ```rust,no_run
//! use phpcs_sniffs::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! println!("timeout: {:?}", config.phpcs.timeout());
//! ```

use crate::error::{Error, Result};
use crate::tool::runner::DEFAULT_TIMEOUT;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "phpcs-sniffs.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    pub phpcs: PhpcsConfig,
}

/// How phpcs is found and invoked.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PhpcsConfig {
    /// Explicit phpcs executable. When unset, phpcs is looked up on `PATH`.
    pub path: Option<PathBuf>,
    /// Seconds a single phpcs invocation may run before it is killed.
    pub timeout_secs: u64,
}

impl Default for PhpcsConfig {
    fn default() -> Self {
        PhpcsConfig {
            path: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl PhpcsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. Otherwise try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// [`Error::ConfigNotFound`] for a missing explicit path,
    /// [`Error::ConfigRead`] and [`Error::ConfigParse`] for unreadable or
    /// malformed files.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(p) if p.exists() => p.to_path_buf(),
            Some(p) => return Err(Error::ConfigNotFound(p.to_path_buf())),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if !default_path.exists() {
                    return Ok(Config::default());
                }
                default_path.to_path_buf()
            }
        };

        let content =
            std::fs::read_to_string(&config_path).map_err(|source| Error::ConfigRead {
                path: config_path.clone(),
                source,
            })?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: config_path.clone(),
            source,
        })?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }
}
