//! Fixed names and defaults used when patching the Claude configuration.
//!
//! These values mirror what Claude Code itself expects to find in
//! `~/.claude.json`, so they are kept in one place rather than scattered
//! through the patching code.

/// File name of the global Claude configuration, relative to the home directory.
pub const CLAUDE_CONFIG_FILENAME: &str = ".claude.json";

/// Server name registered when none is given on the command line.
pub const DEFAULT_SERVER_NAME: &str = "local_server";

/// Tools ensured present in every patched project's `allowedTools`, in canonical order.
///
/// Missing entries are appended in exactly this order.
pub const DEFAULT_ALLOWED_TOOLS: [&str; 15] = [
    "Read",
    "Write",
    "Edit",
    "MultiEdit",
    "LS",
    "Glob",
    "Grep",
    "Bash",
    "Task",
    "TodoRead",
    "TodoWrite",
    "NotebookRead",
    "NotebookEdit",
    "WebFetch",
    "WebSearch",
];

/// Transport type written into new server definitions.
pub const SERVER_TRANSPORT_STDIO: &str = "stdio";

/// Command written into new server definitions.
///
/// Claude Code resolves the project-local `.mcp.json` descriptor from here.
pub const SERVER_DESCRIPTOR_COMMAND: &str = ".mcp.json";

/// Keys of a project entry inside `projects`.
pub mod keys {
    /// Top-level map of project path to project entry.
    pub const PROJECTS: &str = "projects";
    /// Ordered list of tool identifiers the project may use.
    pub const ALLOWED_TOOLS: &str = "allowedTools";
    /// Flag that auto-enables every server from the project's `.mcp.json`.
    pub const ENABLE_ALL_PROJECT_MCP_SERVERS: &str = "enableAllProjectMcpServers";
    /// Ordered list of enabled `.mcp.json` server names.
    pub const ENABLED_MCPJSON_SERVERS: &str = "enabledMcpjsonServers";
    /// Map of server name to server definition.
    pub const MCP_SERVERS: &str = "mcpServers";
}
