//! Claude config patcher
//!
//! Registers a local MCP server for a project in the global Claude
//! configuration file (`~/.claude.json`). For the given project path the
//! project entry is created if needed, the default tools are added to
//! `allowedTools`, `enableAllProjectMcpServers` is switched on, and the server
//! is listed in `enabledMcpjsonServers` and defined under `mcpServers`.
//!
//! The rest of the document is written back untouched, in its original key
//! order. The patch is idempotent.
//!
//! # Modules
//!
//! - [`cli`] - Command-line parsing, output tags, and exit codes
//! - [`config`] - Loading and atomically saving `~/.claude.json`
//! - [`constants`] - Default tools, default server name, document keys
//! - [`core`] - Error types
//! - [`mcp`] - MCP server definition model
//! - [`patcher`] - The patch itself, on an in-memory document or on disk
//! - [`utils`] - Filesystem and path helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use claude_config_patcher::patcher::{PatchOptions, patch_claude_config};
//!
//! let report = patch_claude_config(&PatchOptions::new("/home/owner/claude/target-repo"))?;
//! for line in report.info_lines() {
//!     println!("[INFO] {line}");
//! }
//! # Ok::<(), claude_config_patcher::core::PatchError>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod mcp;
pub mod patcher;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
