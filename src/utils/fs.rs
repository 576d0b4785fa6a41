//! File reading and atomic writing for the config document.
//!
//! Reads return plain text so the caller can decide how to classify parse
//! failures. Writes always go through [`atomic_write`] so an interrupted run
//! never leaves a half-written `~/.claude.json` behind.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Reads a text file with error context.
///
/// # Errors
/// Returns an error with context if the file cannot be read
pub fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Serializes `data` as JSON and writes it atomically.
///
/// Pretty output uses two-space indentation and no trailing newline.
///
/// # Errors
/// Returns an error if serialization fails or the file cannot be written
pub fn write_json_file<T>(path: &Path, data: &T, pretty: bool) -> Result<()>
where
    T: serde::Serialize + ?Sized,
{
    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };

    atomic_write(path, json.as_bytes())
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))
}

/// Atomically replaces the contents of a file.
///
/// The content is written to a temporary file next to the target, synced to
/// disk, given the permissions of the file it replaces, and then renamed over
/// the target. Readers see either the old content or the new content.
///
/// If `path` is a symlink the link's target is replaced, so the link itself
/// keeps pointing at the same file.
///
/// # Errors
/// Returns an error if the temp file cannot be created, written, synced, or
/// renamed into place
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_write_target(path);
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".claude-config-patch")
        .suffix(".tmp")
        .tempfile_in(&parent)
        .with_context(|| {
            format!(
                "Failed to create temp file in {}\n\nCheck directory permissions",
                parent.display()
            )
        })?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp.path().display()))?;
    temp.as_file().sync_all().context("Failed to sync file to disk")?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(temp.path(), metadata.permissions()).with_context(|| {
            format!("Failed to copy permissions from {}", target.display())
        })?;
    }

    temp.persist(&target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to rename temp file to: {}", target.display()))?;

    tracing::trace!(target: "fs", "Atomically wrote {} bytes to {}", content.len(), target.display());
    Ok(())
}

/// Follows a symlink at `path` to the file that should actually be replaced.
fn resolve_write_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(resolved) => {
                tracing::debug!(
                    target: "fs",
                    "{} is a symlink, writing through to {}",
                    path.display(),
                    resolved.display()
                );
                resolved
            }
            Err(_) => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}
