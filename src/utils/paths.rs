//! Path helpers: lexical normalization, absolutizing, and home lookup.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Normalizes a path by resolving `.` and `..` components lexically.
///
/// The filesystem is not consulted, so symlinks are not resolved and the path
/// does not need to exist. A `..` at the root stays at the root.
///
/// # Examples
///
/// ```rust,no_run
/// use claude_config_patcher::utils::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize_path(Path::new("/foo/./bar/../baz")), PathBuf::from("/foo/baz"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }

    components.iter().collect()
}

/// Makes `path` absolute against `base` and normalizes it.
#[must_use]
pub fn absolutize_from(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Makes `path` absolute against the current working directory.
///
/// The path does not have to exist.
///
/// # Errors
/// Returns an error if the current directory cannot be determined
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize_path(path));
    }
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(absolutize_from(path, &cwd))
}

/// The current user's home directory, if one can be determined.
#[must_use]
pub fn get_home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Converts a path to the string used as a key in the config document.
#[must_use]
pub fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
