//! The per-pass render context.

use hidlgen_snippets::SnippetTable;

use super::{Substitutions, fill};
use crate::{Diagnostic, DiagnosticKind, Reporter};

/// Everything a generation call needs besides the node itself.
///
/// A context borrows the snippet table immutably and names the active
/// section, so every generation function is a pure function of
/// `(node, context)` apart from the diagnostics it reports.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    table: &'a SnippetTable,
    section: &'a str,
    reporter: &'a dyn Reporter,
    package: &'a str,
    interface: &'a str,
    multiline_params: bool,
}

impl<'a> RenderContext<'a> {
    /// Create a context for `section`.
    ///
    /// Specialised parameter snippets are flattened to one line except in a
    /// section named `json`; override with [`multiline_params`](Self::multiline_params).
    pub fn new(table: &'a SnippetTable, section: &'a str, reporter: &'a dyn Reporter) -> Self {
        Self {
            table,
            section,
            reporter,
            package: "",
            interface: "",
            multiline_params: section == "json",
        }
    }

    pub fn with_package(mut self, package: &'a str) -> Self {
        self.package = package;
        self
    }

    pub fn with_interface(mut self, interface: &'a str) -> Self {
        self.interface = interface;
        self
    }

    pub fn multiline_params(mut self, enabled: bool) -> Self {
        self.multiline_params = enabled;
        self
    }

    pub fn section(&self) -> &'a str {
        self.section
    }

    pub fn package(&self) -> &'a str {
        self.package
    }

    pub fn interface(&self) -> &'a str {
        self.interface
    }

    pub fn keeps_multiline_params(&self) -> bool {
        self.multiline_params
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        self.reporter.report(diagnostic);
    }

    /// Resolve snippet `name` in the active section and fill it.
    ///
    /// An unknown section is reported as a warning; an unknown snippet is
    /// expected (not every kind needs output for every hook) and silent.
    /// Both yield empty text.
    pub fn snip(&self, name: &str, subs: &Substitutions) -> String {
        let Some(section) = self.table.section(self.section) else {
            self.report(Diagnostic::warning(
                DiagnosticKind::MissingSection,
                format!("section '{}' not found in snippets", self.section),
            ));
            return String::new();
        };
        let Some(template) = section.get(name) else {
            log::trace!("snippet '{}' not found in section '{}'", name, self.section);
            return String::new();
        };

        match fill(template, subs) {
            Ok(text) => {
                log::trace!("filled '{}' in section '{}'", name, self.section);
                text
            }
            Err(e) => {
                self.report(Diagnostic::error(
                    DiagnosticKind::Template,
                    format!("cannot fill snippet '{}': {}", name, e),
                ));
                String::new()
            }
        }
    }

    /// Resolve a snippet that takes no substitutions.
    pub fn snip_plain(&self, name: &str) -> String {
        self.snip(name, &Substitutions::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Diagnostics;

    fn table() -> SnippetTable {
        SnippetTable::new()
            .with("header", "const", "const NAME = VAL;")
            .with("header", "header", "// generated")
    }

    #[test]
    fn test_resolve_known_snippet() {
        let table = table();
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "header", &diagnostics);

        let subs = Substitutions::from([("NAME", "MAX".to_string()), ("VAL", "8".to_string())]);
        assert_eq!(cx.snip("const", &subs), "const MAX = 8;");
        assert_eq!(cx.snip_plain("header"), "// generated");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_section_warns_once_per_call() {
        let table = table();
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "unknownSection", &diagnostics);

        assert_eq!(cx.snip_plain("header"), "");
        let reported = diagnostics.take();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].kind, DiagnosticKind::MissingSection);
        assert!(reported[0].severity.is_warning());
    }

    #[test]
    fn test_unknown_snippet_is_silent() {
        let table = table();
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "header", &diagnostics);

        assert_eq!(cx.snip_plain("noSuchSnippet"), "");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_json_section_keeps_multiline_params() {
        let table = table();
        let diagnostics = Diagnostics::new();
        assert!(RenderContext::new(&table, "json", &diagnostics).keeps_multiline_params());
        assert!(!RenderContext::new(&table, "header", &diagnostics).keeps_multiline_params());
        assert!(
            RenderContext::new(&table, "header", &diagnostics)
                .multiline_params(true)
                .keeps_multiline_params()
        );
    }
}
