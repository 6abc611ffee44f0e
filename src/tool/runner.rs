//! Running external commands and capturing their output.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

/// Default ceiling for a single phpcs invocation.
///
/// Listing every sniff of every installed standard takes well under a
/// second on a normal install; the ceiling only guards against a wrapper
/// script that never returns.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a program and returns what it printed on stdout.
pub trait CommandRunner {
    /// Runs `program` with `args` and returns its stdout.
    ///
    /// Returns `None` when the program could not be started, did not finish
    /// in time, or printed nothing but whitespace. Exit codes are not
    /// inspected: phpcs exits non-zero in situations where its output is
    /// still complete.
    fn run(&self, program: &Path, args: &[String]) -> Option<String>;
}

/// Runs commands on the host, killing them once `timeout` has elapsed.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    pub fn new(timeout: Duration) -> Self {
        SystemRunner { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[String]) -> Option<String> {
        let start = Instant::now();
        tracing::debug!(program = %program.display(), ?args, "running command");

        let mut child = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(program = %program.display(), error = %e, "failed to start command");
                return None;
            }
        };

        // Drain stdout while waiting: a listing larger than the pipe buffer
        // would otherwise block the child and look like a hang.
        let mut stdout = child.stdout.take()?;
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = tx.send(stdout.read_to_end(&mut buf).map(|_| buf));
        });

        let poll_interval = Duration::from_millis(25);
        loop {
            match child.try_wait() {
                Ok(Some(_)) => break,
                Ok(None) => {
                    if start.elapsed() >= self.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        tracing::warn!(
                            program = %program.display(),
                            timeout_secs = self.timeout.as_secs_f64(),
                            "command timed out and was killed"
                        );
                        return None;
                    }
                    std::thread::sleep(poll_interval);
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    tracing::warn!(program = %program.display(), error = %e, "failed to wait for command");
                    return None;
                }
            }
        }

        // The child has exited, but a process it left behind can still hold
        // stdout open. The read shares the same deadline.
        let bytes = match rx.recv_timeout(self.timeout.saturating_sub(start.elapsed())) {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => {
                tracing::warn!(program = %program.display(), error = %e, "failed to read command output");
                return None;
            }
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(
                    program = %program.display(),
                    timeout_secs = self.timeout.as_secs_f64(),
                    "command output still open after timeout"
                );
                return None;
            }
            Err(RecvTimeoutError::Disconnected) => return None,
        };

        let stdout = String::from_utf8_lossy(&bytes).into_owned();
        tracing::debug!(
            program = %program.display(),
            bytes = bytes.len(),
            elapsed = ?start.elapsed(),
            "command finished"
        );

        if stdout.trim().is_empty() {
            None
        } else {
            Some(stdout)
        }
    }
}
