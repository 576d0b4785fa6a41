//! Command-line interface for the Claude config patcher.
//!
//! ```text
//! patch-claude-config <project_path> [server_name]
//! ```
//!
//! - `project_path` (required): project directory to register. Relative paths
//!   are resolved against the current directory; the directory does not need
//!   to exist.
//! - `server_name` (optional): MCP server to enable, `local_server` by default.
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging on stderr
//! - `--quiet` - Suppress `[INFO]` and `[SUCCESS]` lines
//!
//! # Exit Codes
//!
//! `0` when the config was patched, `1` for any failure: missing or
//! unrecognised argument, missing config file, invalid JSON, unexpected
//! document shape, or a failed write. `--help` and `--version` exit `0`.
//! Arguments after `server_name` are ignored.
//!
//! The config file location is always `~/.claude.json` on the command line.
//! Programmatic callers can point [`CliConfig::config_path`] elsewhere.

mod output;


pub use output::Reporter;

use crate::constants::DEFAULT_SERVER_NAME;
use crate::core::PatchError;
use crate::patcher::{self, PatchOptions};
use crate::utils::{absolutize, path_to_string};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Binary name used in the usage text.
const PROGRAM_NAME: &str = "patch-claude-config";

const EXAMPLE_PROJECT_PATH: &str = "/home/owner/claude/target-repo";

/// Runtime settings derived from the command line, injectable for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive; `None` leaves the choice to `RUST_LOG`
    pub log_level: Option<String>,

    /// Suppress `[INFO]` and `[SUCCESS]` output
    pub quiet: bool,

    /// Config file to patch instead of `~/.claude.json`
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patches `path` instead of `~/.claude.json`.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }
}

/// Result of a CLI run, mapped one-to-one onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The config was patched and written
    Success,
    /// Anything else
    Failure,
}

impl RunOutcome {
    /// Process exit status: `0` for success, `1` for failure.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }

    /// Whether the run succeeded.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        Self::from(outcome.code())
    }
}

/// Register a local MCP server for a project in `~/.claude.json`.
#[derive(Parser, Debug)]
#[command(
    name = "patch-claude-config",
    version,
    about = "Register a local MCP server for a project in ~/.claude.json",
    long_about = "Ensures the project's entry in the global Claude configuration allows the \
                  default tools, enables all project MCP servers, and defines the given \
                  stdio server. Existing settings are kept; running it again changes nothing."
)]
pub struct Cli {
    /// Project directory to register (resolved to an absolute path)
    #[arg(value_name = "PROJECT_PATH")]
    project_path: Option<PathBuf>,

    /// MCP server name to enable for the project
    #[arg(value_name = "SERVER_NAME", default_value = DEFAULT_SERVER_NAME)]
    server_name: String,

    /// Further positional arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _extra: Vec<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Translate flags into a [`CliConfig`].
    ///
    /// - `--verbose`: debug logs
    /// - `--quiet`: logging off, info output suppressed
    /// - otherwise: `RUST_LOG` decides, falling back to warnings only
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("off".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            quiet: self.quiet,
            config_path: None,
        }
    }

    /// Entry point used by `main`: sets up logging and stdio output, returns the exit code.
    #[must_use]
    pub fn execute(self) -> ExitCode {
        let config = self.build_config();
        init_logging(config.log_level.as_deref());
        let mut reporter = Reporter::stdio(config.quiet).with_hints(self.verbose);
        self.execute_with(&config, &mut reporter).into()
    }

    /// Run with an injected configuration and output sink.
    pub fn execute_with(self, config: &CliConfig, reporter: &mut Reporter<'_>) -> RunOutcome {
        let Some(project_path) = self.project_path else {
            print_usage(reporter);
            return RunOutcome::Failure;
        };

        let project_path = match absolutize(&project_path) {
            Ok(path) => path,
            Err(e) => {
                reporter.error(&format!(
                    "Could not resolve project path {}: {e:#}",
                    project_path.display()
                ));
                return RunOutcome::Failure;
            }
        };

        let mut options = PatchOptions::new(path_to_string(&project_path))
            .with_server_name(self.server_name);
        options.config_path.clone_from(&config.config_path);

        match run_patch(&options, reporter) {
            Ok(config_path) => {
                reporter.success(&format!(
                    "Patched {} for project {}",
                    config_path.display(),
                    options.project_path
                ));
                RunOutcome::Success
            }
            Err(e) => {
                tracing::debug!(target: "cli", "Patch failed: {e:?}");
                reporter.failure(&e);
                RunOutcome::Failure
            }
        }
    }
}

/// Load, patch, report each change, save. Returns the path that was written.
fn run_patch(options: &PatchOptions, reporter: &mut Reporter<'_>) -> Result<PathBuf, PatchError> {
    let config_path = options.resolve_config_path()?;
    let options = options.clone().with_config_path(&config_path);
    patcher::patch_claude_config_with(&options, |line| reporter.info(line))?;
    Ok(config_path)
}

fn print_usage(reporter: &mut Reporter<'_>) {
    reporter.plain(&format!("Usage: {PROGRAM_NAME} <project_path> [server_name]"));
    reporter.plain(&format!("Example: {PROGRAM_NAME} {EXAMPLE_PROJECT_PATH}"));
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `level` is an `EnvFilter` directive; without one `RUST_LOG` is used, and
/// without that only warnings are shown. Calling this more than once is
/// harmless.
pub fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
