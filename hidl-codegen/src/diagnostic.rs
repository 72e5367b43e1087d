//! Diagnostics reported during a generation pass.
//!
//! Reporting is the only side effect of generation. Every non-fatal problem
//! is reported here and then degraded to empty text at the point where it
//! was found.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// An error. Only [`DiagnosticKind::MissingInterface`] stops a pass.
    Error,
    /// A problem that doesn't prevent output but should be addressed.
    Warning,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The requested section does not exist in the snippet table.
    MissingSection,
    /// An annotation lacks a value it requires.
    MalformedAnnotation,
    /// The unit declares no interface; nothing is written.
    MissingInterface,
    /// A snippet could not be filled.
    Template,
}

/// A diagnostic message from a generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// The diagnostic message.
    pub message: String,
    /// Source line the problem is attributed to, if known.
    pub line: Option<u32>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            message: message.into(),
            line: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            message: message.into(),
            line: None,
        }
    }

    /// Attribute this diagnostic to a source line.
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        Ok(())
    }
}

/// Receiver for diagnostics.
///
/// Implementations must be `Sync` so that passes for different sections can
/// share one reporter.
pub trait Reporter: Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// A reporter that collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut Vec<Diagnostic>) -> R) -> R {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut entries)
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.with_entries(|e| e.iter().filter(|d| d.severity.is_error()).count())
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.with_entries(|e| e.iter().filter(|d| d.severity.is_warning()).count())
    }

    pub fn len(&self) -> usize {
        self.with_entries(|e| e.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of everything recorded so far, in report order.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.with_entries(|e| e.clone())
    }

    /// Take the recorded diagnostics, leaving the collector empty.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.with_entries(std::mem::take)
    }
}

impl Reporter for Diagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        log::debug!("{}", diagnostic);
        self.with_entries(|e| e.push(diagnostic));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error(DiagnosticKind::MissingInterface, "no interface");
        assert!(diag.severity.is_error());
        assert_eq!(diag.line, None);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag =
            Diagnostic::warning(DiagnosticKind::MalformedAnnotation, "needs a value").at_line(12);
        assert_eq!(diag.to_string(), "warning: needs a value (line 12)");

        let diag = Diagnostic::error(DiagnosticKind::MissingInterface, "no interface");
        assert_eq!(diag.to_string(), "error: no interface");
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_collector_counts() {
        let diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.report(Diagnostic::warning(DiagnosticKind::MissingSection, "a"));
        diagnostics.report(Diagnostic::error(DiagnosticKind::MalformedAnnotation, "b"));

        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.warning_count(), 1);

        let taken = diagnostics.take();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].message, "a");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_diagnostic_serializes() {
        let diag = Diagnostic::error(DiagnosticKind::MissingInterface, "no interface").at_line(1);
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"], "missing_interface");
        assert_eq!(json["severity"], "Error");
        assert_eq!(json["line"], 1);
    }
}
