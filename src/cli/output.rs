//! Tagged diagnostic lines printed by the CLI.
//!
//! The tags are part of the tool's interface: scripts grep for `[SUCCESS]`
//! and `[ERROR]`. Informational, warning, and success lines go to stdout,
//! errors to stderr.

use crate::core::{ErrorContext, PatchError, Severity};
use colored::Colorize;
use std::io::{self, Write};

/// Writes the tool's `[INFO]`/`[WARNING]`/`[ERROR]`/`[SUCCESS]` lines.
///
/// Failures writing to the sinks (e.g. a closed pipe) are ignored; they must
/// not change the outcome of the patch.
pub struct Reporter<'a> {
    out: Box<dyn Write + 'a>,
    err: Box<dyn Write + 'a>,
    quiet: bool,
    color: bool,
    hints: bool,
}

impl<'a> Reporter<'a> {
    /// Reporter writing to arbitrary sinks, without colour.
    pub fn new(out: impl Write + 'a, err: impl Write + 'a, quiet: bool) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
            quiet,
            color: false,
            hints: false,
        }
    }

    /// Also print a `Suggestion:` line after warnings and errors.
    #[must_use]
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    /// An `[INFO]` line, suppressed in quiet mode.
    pub fn info(&mut self, message: &str) {
        if self.quiet {
            return;
        }
        let tag = self.paint("[INFO]", |t| t.cyan());
        let _ = writeln!(self.out, "{tag} {message}");
    }

    /// A `[SUCCESS]` line, suppressed in quiet mode.
    pub fn success(&mut self, message: &str) {
        if self.quiet {
            return;
        }
        let tag = self.paint("[SUCCESS]", |t| t.green().bold());
        let _ = writeln!(self.out, "{tag} {message}");
    }

    /// Reports a failed run: warnings on stdout, errors on stderr.
    pub fn failure(&mut self, error: &PatchError) {
        let mut context = ErrorContext::new(error);
        if self.hints {
            context = context.with_suggestion();
        }

        let text = if self.color {
            match context.suggestion {
                Some(suggestion) => {
                    format!("{}\n{}: {suggestion}", context.headline(), "Suggestion".green())
                }
                None => context.headline(),
            }
        } else {
            context.to_string()
        };

        let _ = match error.severity() {
            Severity::Warning => writeln!(self.out, "{text}"),
            Severity::Error => writeln!(self.err, "{text}"),
        };
    }

    /// An `[ERROR]` line for failures outside the patch itself.
    pub fn error(&mut self, message: &str) {
        let tag = self.paint(Severity::Error.tag(), |t| t.red().bold());
        let _ = writeln!(self.err, "{tag} {message}");
    }

    /// Plain lines on stdout, printed even in quiet mode.
    pub fn plain(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
    }

    fn paint(&self, tag: &str, style: impl Fn(&str) -> colored::ColoredString) -> String {
        if self.color { style(tag).to_string() } else { tag.to_string() }
    }
}

impl Reporter<'static> {
    /// Reporter for the process's stdout and stderr, coloured when the
    /// terminal supports it.
    #[must_use]
    pub fn stdio(quiet: bool) -> Self {
        Self {
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
            quiet,
            color: true,
            hints: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn capture(quiet: bool, f: impl FnOnce(&mut Reporter<'_>)) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        {
            let mut reporter = Reporter::new(&mut out, &mut err, quiet);
            f(&mut reporter);
        }
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_info_and_success_on_stdout() {
        let (out, err) = capture(false, |r| {
            r.info("Set enableAllProjectMcpServers to true for /repo");
            r.success("Patched /home/u/.claude.json for project /repo");
        });
        assert_eq!(
            out,
            "[INFO] Set enableAllProjectMcpServers to true for /repo\n\
             [SUCCESS] Patched /home/u/.claude.json for project /repo\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_quiet_suppresses_info_but_not_errors() {
        let error = PatchError::WriteError {
            path: PathBuf::from("/x/.claude.json"),
            cause: anyhow::anyhow!("read-only file system"),
        };
        let (out, err) = capture(true, |r| {
            r.info("hidden");
            r.success("hidden");
            r.failure(&error);
        });
        assert!(out.is_empty());
        assert_eq!(err, "[ERROR] Could not write /x/.claude.json: read-only file system\n");
    }

    #[test]
    fn test_hints_add_suggestion_line() {
        let error = PatchError::ConfigNotFound {
            path: PathBuf::from("/x/.claude.json"),
        };
        let mut out = Vec::new();
        {
            let mut reporter = Reporter::new(&mut out, Vec::new(), false).with_hints(true);
            reporter.failure(&error);
        }
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "[WARNING] Claude config not found at /x/.claude.json\n\
             Suggestion: Run `claude` once so it creates its configuration, then retry\n"
        );
    }

    #[test]
    fn test_warning_goes_to_stdout() {
        let error = PatchError::ConfigNotFound {
            path: PathBuf::from("/x/.claude.json"),
        };
        let (out, err) = capture(false, |r| r.failure(&error));
        assert_eq!(out, "[WARNING] Claude config not found at /x/.claude.json\n");
        assert!(err.is_empty());
    }
}
