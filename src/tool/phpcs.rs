//! The two phpcs invocations the catalog is built from.
//!
//! | Invocation | Output |
//! |------------|--------|
//! | `phpcs -i` | `The installed coding standards are A, B and C` |
//! | `phpcs --standard=A,B,C -e` | every sniff of those standards, one per line |
//!
//! Both are read-only and leave the host untouched.

use super::runner::CommandRunner;
use crate::standard::{join_standards, StandardName};
use std::path::{Path, PathBuf};

/// A located phpcs executable paired with the runner used to invoke it.
pub struct Phpcs<'a> {
    executable: PathBuf,
    runner: &'a dyn CommandRunner,
}

impl<'a> Phpcs<'a> {
    pub fn new(executable: impl Into<PathBuf>, runner: &'a dyn CommandRunner) -> Self {
        Phpcs {
            executable: executable.into(),
            runner,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Raw output of `phpcs -i`, or `None` if phpcs gave nothing back.
    pub fn installed_standards(&self) -> Option<String> {
        self.runner.run(&self.executable, &["-i".to_string()])
    }

    /// Raw output of `phpcs --standard=<standards> -e`, or `None` if phpcs gave
    /// nothing back.
    pub fn sniff_listing(&self, standards: &[StandardName]) -> Option<String> {
        let args = [
            format!("--standard={}", join_standards(standards)),
            "-e".to_string(),
        ];
        self.runner.run(&self.executable, &args)
    }
}
