//! Integration test suite for patch-claude-config
//!
//! These tests run the compiled binary against a temporary home directory, so
//! the real `~/.claude.json` is never touched.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: argument handling, output tags, exit codes
//! - **patching**: on-disk effects of the patch

mod cli;
mod patching;

use assert_cmd::Command;
use claude_config_patcher::test_utils::ConfigFixture;

/// Command for the binary with `HOME` pointed at the fixture's directory.
pub fn patch_command(fixture: &ConfigFixture) -> Command {
    let mut cmd = Command::cargo_bin("patch-claude-config").unwrap();
    cmd.env("HOME", fixture.dir())
        .env("USERPROFILE", fixture.dir())
        .env_remove("RUST_LOG")
        .current_dir(fixture.dir());
    cmd
}
