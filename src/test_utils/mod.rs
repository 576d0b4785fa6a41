//! Test utilities shared by unit and integration tests.
//!
//! Available under `cfg(test)` and with the `test-utils` feature, which the
//! crate enables for its own dev builds.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize test logging once per process.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// A temporary home directory holding (or not holding) a `.claude.json`.
///
/// The directory is removed when the fixture is dropped.
pub struct ConfigFixture {
    home: TempDir,
    path: PathBuf,
}

impl ConfigFixture {
    /// A fixture whose config file does not exist yet.
    pub fn empty() -> Result<Self> {
        init_test_logging(None);
        let home = tempfile::tempdir().context("Failed to create temp home")?;
        let path = home.path().join(crate::constants::CLAUDE_CONFIG_FILENAME);
        Ok(Self { home, path })
    }

    /// A fixture with the config file written verbatim from `content`.
    pub fn with_content(content: &str) -> Result<Self> {
        let fixture = Self::empty()?;
        fs::write(&fixture.path, content)
            .with_context(|| format!("Failed to write {}", fixture.path.display()))?;
        Ok(fixture)
    }

    /// A fixture with `document` written as pretty JSON.
    pub fn with_json(document: &Value) -> Result<Self> {
        Self::with_content(&serde_json::to_string_pretty(document)?)
    }

    /// Directory standing in for the home directory.
    pub fn dir(&self) -> &Path {
        self.home.path()
    }

    /// Path of the config file inside [`Self::dir`].
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw text of the config file.
    pub fn read_raw(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }

    /// The config file parsed as JSON.
    pub fn read_json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.read_raw()?)?)
    }
}
