//! Filesystem existence checks and path expansion.
//!
//! Expansion is lexical: apart from reading the home and working directories
//! nothing here touches the filesystem, so paths that do not exist expand
//! just like paths that do.

use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::environment::{Environment, SystemEnvironment};
use crate::error::{Error, Result};

/// Whether anything exists at `path`.
///
/// Symlinks are followed. A path that cannot be inspected for any reason is
/// reported as missing.
#[must_use]
pub fn exists(path: &str) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Expands `path` into an absolute, cleaned path.
///
/// A leading `~` is replaced by the current user's home directory and
/// relative paths are resolved against the working directory. An empty path
/// stays empty.
///
/// The home directory is `$HOME` when set, the user database entry
/// otherwise. See [`SystemEnvironment`].
///
/// # Errors
///
/// Returns an error if the home directory or the working directory is needed
/// but cannot be determined.
///
/// # Examples
///
/// ```
/// use cmdkit_core::filesystem::expand_path;
///
/// assert_eq!(expand_path("")?, "");
/// assert_eq!(expand_path("/usr/./lib/../bin/")?, "/usr/bin");
/// # Ok::<(), cmdkit_core::error::Error>(())
/// ```
pub fn expand_path(path: &str) -> Result<String> {
    expand_path_with(&SystemEnvironment, path)
}

/// [`expand_path`] against a caller supplied [`Environment`].
///
/// # Errors
///
/// Returns an error if the home directory or the working directory is needed
/// but cannot be determined.
pub fn expand_path_with<E>(env: &E, path: &str) -> Result<String>
where
    E: Environment + ?Sized,
{
    if path.is_empty() {
        return Ok(String::new());
    }

    let expanded = match path.strip_prefix('~') {
        Some(rest) => {
            let home = env.home_dir().ok_or(Error::HomeDirectory)?;
            let mut joined = home.into_os_string();
            joined.push(rest);
            PathBuf::from(joined)
        }
        None => PathBuf::from(path),
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env.current_dir()
            .map_err(Error::WorkingDirectory)?
            .join(expanded)
    };

    let cleaned = clean(&absolute);
    debug!("Expanded `{}` to `{}`", path, cleaned.display());

    Ok(cleaned.to_string_lossy().into_owned())
}

/// Lexically normalizes an absolute path.
///
/// `.` segments and redundant separators go away, `..` drops the segment
/// before it and never climbs above the root.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }

    cleaned
}
