//! Seams between the configuration and the outside world.
//!
//! The configuration itself is inert data.  Anything that acts, such as
//! running a bound [`Command`] or starting a process, goes through one of these traits,
//! so the host (or a test double) decides what actually happens.

use crate::command::Command;

/// The window-manager runtime that executes bound commands.
///
/// A real implementation maps each [`Command`] variant onto its own
/// internals; tests use a recorder.
pub trait Host {
    /// The error type produced by this host.
    type Error: std::error::Error + Send + 'static;

    /// Run `command` now.
    fn dispatch(&self, command: &Command) -> Result<(), Self::Error>;
}

/// How a spawned command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnStatus {
    /// Exit status zero.
    Success,
    /// Non-zero exit, or `None` if the process was killed by a signal.
    Failed(Option<i32>),
}

impl SpawnStatus {
    pub fn success(self) -> bool {
        self == SpawnStatus::Success
    }
}

/// Something that can run a shell command line.
///
/// # Contract
///
/// * [`spawn`](Spawner::spawn) returns once the shell has finished with the
///   line.  A line that backgrounds its job (`cmd &`) therefore returns
///   immediately; anything else blocks until it exits.
/// * `Err` means the command could not be started at all.
pub trait Spawner {
    /// The error type produced by this spawner.
    type Error: std::error::Error + Send + 'static;

    fn spawn(&self, command: &str) -> Result<SpawnStatus, Self::Error>;
}
