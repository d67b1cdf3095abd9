//! Access to the parts of the process environment that path expansion needs.

use std::io;
use std::path::PathBuf;

/// Resolves the current user's home directory and the working directory.
pub trait Environment {
    /// The current user's home directory, if it can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read, e.g. when it
    /// has been removed.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// [`Environment`] backed by the running process.
///
/// The home directory comes from `$HOME` when it is set and only falls back
/// to the user database otherwise, so a caller running with a borrowed
/// environment (`sudo -E`, containers) expands `~` to that `$HOME`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}
