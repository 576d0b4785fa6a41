//! Core types shared across the crate.
//!
//! Currently this is the error model: [`PatchError`] for every failure the
//! patcher can report, [`Severity`] for how it is shown, and [`ErrorContext`]
//! for rendering it on the terminal.

pub mod error;

pub use error::{ErrorContext, PatchError, Severity};
