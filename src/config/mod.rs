//! The global Claude configuration document (`~/.claude.json`).
//!
//! [`ClaudeConfig`] owns the parsed document together with the path it came
//! from. It is loaded once, mutated in memory by the patcher, and saved once.
//! The document is kept as an untyped [`serde_json::Value`] with insertion
//! order preserved, so everything the patcher does not touch is written back
//! with the same structure and key order.
//!
//! # Examples
//!
//! ```rust,no_run
//! use claude_config_patcher::config::{ClaudeConfig, default_config_path};
//!
//! # fn example() -> Result<(), claude_config_patcher::core::PatchError> {
//! let path = default_config_path()?;
//! let config = ClaudeConfig::load(&path)?;
//! config.save()?;
//! # Ok(())
//! # }
//! ```

use crate::constants::CLAUDE_CONFIG_FILENAME;
use crate::core::PatchError;
use crate::utils::{get_home_dir, read_text_file, write_json_file};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Default location of the Claude configuration: `<home>/.claude.json`.
///
/// # Errors
/// Returns [`PatchError::HomeDirNotFound`] if the home directory is unknown
pub fn default_config_path() -> Result<PathBuf, PatchError> {
    get_home_dir().map(|home| home.join(CLAUDE_CONFIG_FILENAME)).ok_or(
        PatchError::HomeDirNotFound {
            filename: CLAUDE_CONFIG_FILENAME,
        },
    )
}

/// A loaded Claude configuration document.
#[derive(Debug, Clone)]
pub struct ClaudeConfig {
    path: PathBuf,
    document: Value,
}

impl ClaudeConfig {
    /// Loads and parses the config at `path`.
    ///
    /// Unlike most config loaders this never falls back to a default: a
    /// missing file is reported as [`PatchError::ConfigNotFound`] and nothing
    /// is created.
    ///
    /// # Errors
    ///
    /// - [`PatchError::ConfigNotFound`] if nothing exists at `path`
    /// - [`PatchError::ReadError`] if the file exists but cannot be read, or
    ///   its existence cannot be checked
    /// - [`PatchError::ParseError`] if the content is not valid JSON
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let exists = path.try_exists().map_err(|e| PatchError::ReadError {
            path: path.to_path_buf(),
            cause: anyhow::Error::new(e).context("Failed to check whether the file exists"),
        })?;
        if !exists {
            tracing::debug!(target: "config", "No config file at {}", path.display());
            return Err(PatchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = read_text_file(path).map_err(|cause| PatchError::ReadError {
            path: path.to_path_buf(),
            cause,
        })?;

        let document =
            serde_json::from_str(&content).map_err(|source| PatchError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            target: "config",
            "Loaded {} ({} bytes)",
            path.display(),
            content.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Wraps an in-memory document that will be saved to `path`.
    #[must_use]
    pub fn from_document(path: impl Into<PathBuf>, document: Value) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    /// Path the document was loaded from and will be saved to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed document.
    #[must_use]
    pub const fn document(&self) -> &Value {
        &self.document
    }

    /// Mutable access to the parsed document.
    pub fn document_mut(&mut self) -> &mut Value {
        &mut self.document
    }

    /// Consumes the handle and returns the document.
    #[must_use]
    pub fn into_document(self) -> Value {
        self.document
    }

    /// Writes the whole document back to its path, pretty-printed with
    /// two-space indentation.
    ///
    /// The write is atomic; on failure the previous file content is intact.
    ///
    /// # Errors
    /// Returns [`PatchError::WriteError`] if serialization or the write fails
    pub fn save(&self) -> Result<(), PatchError> {
        write_json_file(&self.path, &self.document, true).map_err(|cause| {
            PatchError::WriteError {
                path: self.path.clone(),
                cause,
            }
        })?;

        tracing::debug!(target: "config", "Saved {}", self.path.display());
        Ok(())
    }
}
