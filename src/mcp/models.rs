use crate::constants::{SERVER_DESCRIPTOR_COMMAND, SERVER_TRANSPORT_STDIO};
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Server definition stored under a project's `mcpServers`.
///
/// Field order matches what Claude Code writes itself: `type`, `command`,
/// `args`, `env`. Unlike a full `.mcp.json` entry, every field is always
/// serialized, including the empty `args` and `env`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ServerDefinition {
    /// Transport type, `"stdio"` for locally launched servers
    pub r#type: String,

    /// Command used to launch the server
    pub command: String,

    /// Arguments passed to the command
    pub args: Vec<String>,

    /// Environment variables set for the server process
    pub env: Map<String, Value>,
}

impl ServerDefinition {
    /// The definition registered for a local server: a stdio transport
    /// launched from the project's `.mcp.json` descriptor.
    #[must_use]
    pub fn local_stdio() -> Self {
        Self {
            r#type: SERVER_TRANSPORT_STDIO.to_string(),
            command: SERVER_DESCRIPTOR_COMMAND.to_string(),
            args: Vec::new(),
            env: Map::new(),
        }
    }

    /// Converts the definition into a JSON value for insertion into the document.
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!(self)
    }
}
