//! MCP (Model Context Protocol) server definitions.
//!
//! The global Claude configuration lists, per project, which servers are
//! enabled and how each one is launched. This module holds the typed model of
//! a launch definition; the patcher inserts it into the document as plain
//! JSON so the rest of the document stays untouched.

pub mod models;

pub use models::ServerDefinition;
