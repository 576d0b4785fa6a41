//! Registers a local MCP server for a project in the Claude configuration.
//!
//! The patch is a fixed sequence of default-insertions on the project entry
//! at `projects[<project path>]`:
//!
//! 1. Append every default tool missing from `allowedTools`
//! 2. Set `enableAllProjectMcpServers` to `true`
//! 3. Append the server name to `enabledMcpjsonServers` if missing
//! 4. Insert a stdio server definition under `mcpServers` if missing
//!
//! Everything else in the document is left as it was. Applying the patch a
//! second time changes nothing beyond re-asserting the flag, so the patch is
//! idempotent.
//!
//! [`patch_document`] performs the mutation on an in-memory tree and reports
//! what changed; [`patch_claude_config`] wraps it with loading and saving, and
//! [`patch_claude_config_with`] also streams the change descriptions.

pub mod helpers;


use crate::config::{ClaudeConfig, default_config_path};
use crate::constants::{DEFAULT_ALLOWED_TOOLS, DEFAULT_SERVER_NAME, keys};
use crate::core::PatchError;
use crate::mcp::ServerDefinition;
use helpers::{as_object_mut, child_location, ensure_array, ensure_object, push_unique_str};
use serde_json::Value;
use std::path::PathBuf;

/// Inputs for one patch run.
///
/// # Examples
///
/// ```rust,no_run
/// use claude_config_patcher::patcher::{PatchOptions, patch_claude_config};
///
/// let options = PatchOptions::new("/home/owner/claude/target-repo")
///     .with_server_name("docs_server")
///     .with_config_path("/tmp/claude.json");
/// let report = patch_claude_config(&options)?;
/// println!("added {} tools", report.tools_added.len());
/// # Ok::<(), claude_config_patcher::core::PatchError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOptions {
    /// Absolute project path, used verbatim as the key under `projects`
    pub project_path: String,
    /// Name of the server to enable and define
    pub server_name: String,
    /// Config file to patch; `None` means `~/.claude.json`
    pub config_path: Option<PathBuf>,
}

impl PatchOptions {
    /// Options for `project_path` with the default server name and config path.
    #[must_use]
    pub fn new(project_path: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
            config_path: None,
        }
    }

    /// Sets the server name to register.
    #[must_use]
    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    /// Patches `config_path` instead of `~/.claude.json`.
    #[must_use]
    pub fn with_config_path(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(config_path.into());
        self
    }

    /// The config path to use, falling back to the default location.
    ///
    /// # Errors
    /// Returns [`PatchError::HomeDirNotFound`] if no path was set and the home
    /// directory is unknown
    pub fn resolve_config_path(&self) -> Result<PathBuf, PatchError> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => default_config_path(),
        }
    }
}

/// What a patch run changed in the project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Project path the entry is keyed by
    pub project_path: String,
    /// Server name that was ensured
    pub server_name: String,
    /// Default tools appended to `allowedTools`, in the order appended
    pub tools_added: Vec<String>,
    /// Whether the project entry itself had to be created
    pub project_created: bool,
    /// Whether `enableAllProjectMcpServers` was anything other than `true` before
    pub enable_flag_changed: bool,
    /// Whether the server name was appended to `enabledMcpjsonServers`
    pub server_enabled: bool,
    /// Whether a definition was inserted under `mcpServers`
    pub server_defined: bool,
}

impl PatchReport {
    /// True when the document is unchanged by the run.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        !self.project_created
            && !self.enable_flag_changed
            && self.tools_added.is_empty()
            && !self.server_enabled
            && !self.server_defined
    }

    /// Human-readable lines describing each change, without the `[INFO]` tag.
    ///
    /// The line about `enableAllProjectMcpServers` is always present because
    /// the flag is written on every run.
    #[must_use]
    pub fn info_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if !self.tools_added.is_empty() {
            lines.push(format!("Added tools to allowedTools: {}", self.tools_added.join(", ")));
        }

        lines.push(format!(
            "Set {} to true for {}",
            keys::ENABLE_ALL_PROJECT_MCP_SERVERS,
            self.project_path
        ));

        if self.server_enabled {
            lines.push(format!(
                "Added {} to {} for {}",
                self.server_name,
                keys::ENABLED_MCPJSON_SERVERS,
                self.project_path
            ));
        }

        if self.server_defined {
            lines.push(format!(
                "Added {} definition to {} for {}",
                self.server_name,
                keys::MCP_SERVERS,
                self.project_path
            ));
        }

        lines
    }
}

/// Applies the patch for `project_path` and `server_name` to `document`.
///
/// On error the document may be partially patched; callers that persist it
/// must not save after an error.
///
/// # Errors
/// Returns [`PatchError::InvalidStructure`] if a value on the patched path has
/// the wrong JSON type
pub fn patch_document(
    document: &mut Value,
    project_path: &str,
    server_name: &str,
) -> Result<PatchReport, PatchError> {
    let mut report = PatchReport {
        project_path: project_path.to_string(),
        server_name: server_name.to_string(),
        ..PatchReport::default()
    };

    let root = as_object_mut(document, "(document root)")?;
    let projects = ensure_object(root, keys::PROJECTS, keys::PROJECTS)?;

    let entry_location = child_location(keys::PROJECTS, project_path);
    report.project_created = !projects.contains_key(project_path);
    let entry = ensure_object(projects, project_path, &entry_location)?;

    let allowed_tools = ensure_array(
        entry,
        keys::ALLOWED_TOOLS,
        &child_location(&entry_location, keys::ALLOWED_TOOLS),
    )?;
    for tool in DEFAULT_ALLOWED_TOOLS {
        if push_unique_str(allowed_tools, tool) {
            report.tools_added.push(tool.to_string());
        }
    }
    if !report.tools_added.is_empty() {
        tracing::debug!(
            target: "patcher",
            "Appended {} tool(s) to {}",
            report.tools_added.len(),
            keys::ALLOWED_TOOLS
        );
    }

    let previous_flag =
        entry.insert(keys::ENABLE_ALL_PROJECT_MCP_SERVERS.to_string(), Value::Bool(true));
    report.enable_flag_changed = previous_flag != Some(Value::Bool(true));

    let enabled_servers = ensure_array(
        entry,
        keys::ENABLED_MCPJSON_SERVERS,
        &child_location(&entry_location, keys::ENABLED_MCPJSON_SERVERS),
    )?;
    report.server_enabled = push_unique_str(enabled_servers, server_name);

    let mcp_servers = ensure_object(
        entry,
        keys::MCP_SERVERS,
        &child_location(&entry_location, keys::MCP_SERVERS),
    )?;
    if !mcp_servers.contains_key(server_name) {
        mcp_servers.insert(server_name.to_string(), ServerDefinition::local_stdio().to_value());
        report.server_defined = true;
    } else {
        tracing::trace!(
            target: "patcher",
            "Keeping existing definition for {server_name}"
        );
    }

    Ok(report)
}

/// Loads the config, patches the project entry, and writes the config back.
///
/// Nothing is written when loading or patching fails.
///
/// # Errors
///
/// - [`PatchError::HomeDirNotFound`] if no config path was given and there is no home directory
/// - [`PatchError::ConfigNotFound`] if the config file does not exist
/// - [`PatchError::ReadError`] / [`PatchError::ParseError`] if it cannot be loaded
/// - [`PatchError::InvalidStructure`] if the document has the wrong shape
/// - [`PatchError::WriteError`] if saving fails
pub fn patch_claude_config(options: &PatchOptions) -> Result<PatchReport, PatchError> {
    patch_claude_config_with(options, |_| {})
}

/// Like [`patch_claude_config`], calling `on_change` with each
/// [`PatchReport::info_lines`] entry after patching and before saving.
///
/// The lines are emitted even if the save then fails.
///
/// # Errors
/// Same as [`patch_claude_config`]
pub fn patch_claude_config_with<F>(
    options: &PatchOptions,
    mut on_change: F,
) -> Result<PatchReport, PatchError>
where
    F: FnMut(&str),
{
    let config_path = options.resolve_config_path()?;
    let mut config = ClaudeConfig::load(&config_path)?;
    let report = apply(&mut config, options)?;
    for line in report.info_lines() {
        on_change(&line);
    }
    config.save()?;
    Ok(report)
}

/// Patches an already loaded config in memory without saving it.
///
/// # Errors
/// Returns [`PatchError::InvalidStructure`] if the document has the wrong shape
pub fn apply(config: &mut ClaudeConfig, options: &PatchOptions) -> Result<PatchReport, PatchError> {
    tracing::debug!(
        target: "patcher",
        "Patching {} for project {} (server {})",
        config.path().display(),
        options.project_path,
        options.server_name
    );
    patch_document(config.document_mut(), &options.project_path, &options.server_name)
}
