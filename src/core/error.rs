//! Error handling for the config patcher
//!
//! Every failure the patcher can hit is a variant of [`PatchError`]. The CLI
//! does not distinguish between them beyond their [`Severity`]: any error maps
//! to a failed run and exit code 1.
//!
//! # Error Categories
//!
//! - **Missing input**: [`PatchError::ConfigNotFound`], [`PatchError::HomeDirNotFound`]
//! - **Loading**: [`PatchError::ReadError`], [`PatchError::ParseError`]
//! - **Document shape**: [`PatchError::InvalidStructure`]
//! - **Saving**: [`PatchError::WriteError`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use claude_config_patcher::core::{PatchError, Severity};
//! use std::path::PathBuf;
//!
//! let err = PatchError::ConfigNotFound {
//!     path: PathBuf::from("/home/user/.claude.json"),
//! };
//! assert_eq!(err.severity(), Severity::Warning);
//! assert_eq!(err.to_string(), "Claude config not found at /home/user/.claude.json");
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// How a [`PatchError`] is presented to the user.
///
/// Warnings go to stdout with a `[WARNING]` tag, errors to stderr with an
/// `[ERROR]` tag. Both fail the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Expected condition that stops the run without indicating corruption
    Warning,
    /// Something went wrong reading, understanding, or writing the config
    Error,
}

impl Severity {
    /// Tag printed in front of the message, e.g. `[WARNING]`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Warning => "[WARNING]",
            Self::Error => "[ERROR]",
        }
    }
}

/// Errors produced while loading, patching, or saving the Claude configuration.
#[derive(Error, Debug)]
pub enum PatchError {
    /// The config file does not exist. No file is created.
    #[error("Claude config not found at {}", .path.display())]
    ConfigNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The config file exists but could not be read
    #[error("Could not load {}: {cause:#}", .path.display())]
    ReadError {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O failure, with context
        cause: anyhow::Error,
    },

    /// The config file is not valid JSON
    #[error("Could not load {}: {source}", .path.display())]
    ParseError {
        /// Path of the config file
        path: PathBuf,
        /// Parser error including line and column
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but a value on the patched path has the wrong type
    #[error("Could not patch config: `{key}` is not {expected}")]
    InvalidStructure {
        /// Dotted location of the offending value, e.g. `projects./repo.allowedTools`
        key: String,
        /// What the patcher needed to find there
        expected: &'static str,
    },

    /// Serializing or writing the patched document failed
    #[error("Could not write {}: {cause:#}", .path.display())]
    WriteError {
        /// Path of the config file
        path: PathBuf,
        /// Underlying serialization or I/O failure, with context
        cause: anyhow::Error,
    },

    /// No home directory to derive the default config path from
    #[error("Could not determine the home directory to locate {filename}")]
    HomeDirNotFound {
        /// Config file name that would have been joined onto the home directory
        filename: &'static str,
    },
}

impl PatchError {
    /// Whether this error is shown as a warning or an error.
    ///
    /// Only a missing config file is a warning; it usually means Claude Code
    /// has not been run on this machine yet.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::ConfigNotFound { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// An actionable hint for the user, if there is one.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound { .. } => {
                Some("Run `claude` once so it creates its configuration, then retry")
            }
            Self::ParseError { .. } => {
                Some("Fix the JSON syntax in the config file; it was left unchanged")
            }
            Self::InvalidStructure { .. } => {
                Some("Remove or repair the offending value; the config file was left unchanged")
            }
            Self::HomeDirNotFound { .. } => Some("Set the HOME environment variable"),
            Self::ReadError { .. } | Self::WriteError { .. } => {
                Some("Check the file permissions of the config file and its directory")
            }
        }
    }
}

/// A [`PatchError`] paired with presentation hints for the terminal.
///
/// The main message keeps the `[WARNING]`/`[ERROR]` tag contract; the
/// suggestion is printed on a following line and only when asked for.
#[derive(Debug)]
pub struct ErrorContext<'a> {
    /// The underlying error
    pub error: &'a PatchError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<&'static str>,
}

impl<'a> ErrorContext<'a> {
    /// Wrap an error without a suggestion.
    #[must_use]
    pub const fn new(error: &'a PatchError) -> Self {
        Self {
            error,
            suggestion: None,
        }
    }

    /// Attach the error's own suggestion, if it has one.
    #[must_use]
    pub fn with_suggestion(mut self) -> Self {
        self.suggestion = self.error.suggestion();
        self
    }

    /// The message line with a coloured severity tag.
    #[must_use]
    pub fn headline(&self) -> String {
        let severity = self.error.severity();
        let tag = match severity {
            Severity::Warning => severity.tag().yellow().bold(),
            Severity::Error => severity.tag().red().bold(),
        };
        format!("{tag} {}", self.error)
    }
}

impl fmt::Display for ErrorContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.error.severity().tag(), self.error)?;

        if let Some(suggestion) = self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
