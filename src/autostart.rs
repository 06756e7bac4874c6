//! One-shot environment setup: the autostart list.
//!
//! Building a [`Document`](crate::config::Document) never runs anything.
//! The host calls [`run_autostart`] once, after loading, to start the
//! commands.  Each line is handed to a [`Spawner`] in order; a line that
//! fails to start or exits non-zero is logged and skipped, and never stops
//! the lines after it.

use crate::traits::{SpawnStatus, Spawner};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A [`Spawner`] that runs each line through `sh -c`.
///
/// The call waits for the shell, not for the job: `picom &` returns at once,
/// `setxkbmap us` returns when it finishes.
#[derive(Debug, Clone)]
pub struct ShellSpawner {
    shell: PathBuf,
}

/// The shell could not be started.
#[derive(Debug, thiserror::Error)]
#[error("failed to run {shell}: {source}")]
pub struct ShellSpawnError {
    shell: String,
    #[source]
    source: std::io::Error,
}

impl Default for ShellSpawner {
    fn default() -> Self {
        Self::new("/bin/sh")
    }
}

impl ShellSpawner {
    /// Use `shell` instead of `/bin/sh`.  It must accept `-c <line>`.
    pub fn new(shell: impl AsRef<Path>) -> Self {
        Self {
            shell: shell.as_ref().to_path_buf(),
        }
    }

    pub fn shell(&self) -> &Path {
        &self.shell
    }
}

impl Spawner for ShellSpawner {
    type Error = ShellSpawnError;

    fn spawn(&self, command: &str) -> Result<SpawnStatus, Self::Error> {
        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .status()
            .map_err(|source| ShellSpawnError {
                shell: self.shell.display().to_string(),
                source,
            })?;
        if status.success() {
            Ok(SpawnStatus::Success)
        } else {
            Ok(SpawnStatus::Failed(status.code()))
        }
    }
}

/// What happened to one autostart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutostartOutcome {
    Succeeded,
    /// Exit code, or `None` if killed by a signal.
    Failed(Option<i32>),
    /// The spawner could not start the line; carries the error text.
    NotStarted(String),
}

impl AutostartOutcome {
    pub fn is_success(&self) -> bool {
        *self == AutostartOutcome::Succeeded
    }
}

/// Per-line results of [`run_autostart`], in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutostartReport {
    pub entries: Vec<(String, AutostartOutcome)>,
}

impl AutostartReport {
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|(_, o)| !o.is_success()).count()
    }
}

/// Run every line in `commands`, in order, through `spawner`.
///
/// Never fails: the report says what happened to each line.
pub fn run_autostart<S: Spawner>(spawner: &S, commands: &[String]) -> AutostartReport {
    let mut report = AutostartReport::default();
    for command in commands {
        info!("autostart: {}", command);
        let outcome = match spawner.spawn(command) {
            Ok(SpawnStatus::Success) => AutostartOutcome::Succeeded,
            Ok(SpawnStatus::Failed(code)) => {
                match code {
                    Some(code) => warn!("autostart {:?} exited with status {}", command, code),
                    None => warn!("autostart {:?} was killed by a signal", command),
                }
                AutostartOutcome::Failed(code)
            }
            Err(e) => {
                warn!("autostart {:?} could not be started: {}", command, e);
                AutostartOutcome::NotStarted(e.to_string())
            }
        };
        report.entries.push((command.clone(), outcome));
    }
    report
}
