//! The top-level emission driver.

use std::io;

use eyre::Result;
use hidlgen_ast::{Declaration, Unit};
use hidlgen_snippets::SnippetTable;

use crate::annotations::parse_component_type;
use crate::generate::{FieldList, Generate};
use crate::naming::to_dispatch_token;
use crate::{Diagnostic, DiagnosticKind, RenderContext, Reporter, Substitutions};

/// Destination of an emitted file.
pub trait OutputSink {
    fn write(&mut self, text: &str) -> Result<()>;
}

impl OutputSink for String {
    fn write(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Adapts any [`io::Write`] into an [`OutputSink`].
pub struct WriteSink<W>(pub W);

impl<W: io::Write> OutputSink for WriteSink<W> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.0.write_all(text.as_bytes())?;
        self.0.flush()?;
        Ok(())
    }
}

/// Outcome of one emission pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitStatus {
    /// The `file` snippet was filled and handed to the sink.
    Written,
    /// The unit declares no interface. Nothing was written.
    MissingInterface,
}

/// Renders a unit for one section.
///
/// # Example
///
/// ```ignore
/// let diagnostics = Diagnostics::new();
/// let mut out = String::new();
/// Emitter::new(&table, "header", &diagnostics).emit(&unit, &mut out)?;
/// ```
pub struct Emitter<'a> {
    table: &'a SnippetTable,
    section: &'a str,
    reporter: &'a dyn Reporter,
    multiline_params: Option<bool>,
}

impl<'a> Emitter<'a> {
    pub fn new(table: &'a SnippetTable, section: &'a str, reporter: &'a dyn Reporter) -> Self {
        Self {
            table,
            section,
            reporter,
            multiline_params: None,
        }
    }

    /// Keep newlines in specialised parameter snippets regardless of section.
    pub fn multiline_params(mut self, enabled: bool) -> Self {
        self.multiline_params = Some(enabled);
        self
    }

    /// Render `unit` to text.
    ///
    /// Returns `None` when the unit has no interface; that is reported as an
    /// error. A section missing from the table is reported once and renders
    /// as empty text.
    pub fn render(&self, unit: &Unit) -> Option<String> {
        let Some(interface) = &unit.interface else {
            self.reporter.report(Diagnostic::error(
                DiagnosticKind::MissingInterface,
                "cannot write output; no interface declared",
            ));
            return None;
        };
        if self.table.section(self.section).is_none() {
            self.reporter.report(Diagnostic::warning(
                DiagnosticKind::MissingSection,
                format!("section '{}' not found in snippets", self.section),
            ));
            return Some(String::new());
        }

        let mut cx = RenderContext::new(self.table, self.section, self.reporter)
            .with_package(&unit.package)
            .with_interface(&interface.name);
        if let Some(enabled) = self.multiline_params {
            cx = cx.multiline_params(enabled);
        }

        let component_type = match parse_component_type(&interface.annotations) {
            Ok(Some(tag)) => cx.snip(
                "component_type_enum",
                &Substitutions::new().with("vts_ct_enum", tag),
            ),
            Ok(None) => String::new(),
            Err(e) => {
                cx.report(e.into());
                String::new()
            }
        };

        let imports_section: String = unit
            .imports
            .iter()
            .filter_map(|path| path.last())
            .map(|name| {
                cx.snip(
                    "import_line",
                    &Substitutions::new().with("import_name", name.as_str()),
                )
            })
            .collect();

        // Facts are computed once per declaration so annotation problems are
        // reported once, however many hooks use them.
        let facts: Vec<(&Declaration, Substitutions)> = unit
            .declarations
            .iter()
            .map(|decl| (decl, decl.subs(&cx)))
            .collect();

        let mut declarations = String::new();
        let mut code_snips = String::new();
        let mut callback_decls = String::new();
        for (decl, subs) in &facts {
            declarations.push_str(&cx.snip(&format!("declare_{}", decl.kind_name()), subs));
            code_snips.push_str(&cx.snip(&format!("code_for_{}", decl.kind_name()), subs));
            if decl.as_function().is_some() {
                callback_decls.push_str(&cx.snip("callback_decl_line", subs));
            }
        }

        let namespaces = NamespaceText::build(&cx, &unit.namespace);
        let version = unit.version;

        let subs = Substitutions::new()
            .with("header_guard", unit.package.as_str())
            .with("version_string", version.to_string())
            .with("version_major_string", version.major.to_string())
            .with("version_minor_string", version.minor.to_string())
            .with("imports_section", imports_section)
            .with("component_type_enum", component_type)
            .with("package_name", unit.package.as_str())
            .with("declarations", declarations)
            .with("code_snips", code_snips)
            .with("call_enum_list", call_enum_list(&cx, unit))
            .with("callback_decls", callback_decls)
            .with("namespace_open_section", namespaces.open)
            .with("namespace_close_section", namespaces.close)
            .with("namespace_slashes", namespaces.slashes)
            .with("namespace_dots", namespaces.dots)
            .with("namespace_underscores", namespaces.underscores)
            .with("vars_writer", unit.vars.by_suffix(&cx, "param_write_"))
            .with("vars_reader", unit.vars.by_suffix(&cx, "param_read_"))
            .with("vars_decl", unit.vars.semi_block(&cx));

        Some(cx.snip("file", &subs))
    }

    /// Render `unit` and write it to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the sink fails. Generation problems are
    /// reported and degrade to empty text.
    pub fn emit(&self, unit: &Unit, sink: &mut dyn OutputSink) -> Result<EmitStatus> {
        log::debug!("emitting section '{}' for {}", self.section, unit.package);
        let Some(text) = self.render(unit) else {
            return Ok(EmitStatus::MissingInterface);
        };
        sink.write(&text)?;
        log::debug!(
            "emitted section '{}': {} bytes",
            self.section,
            text.len()
        );
        Ok(EmitStatus::Written)
    }
}

/// First function: the `first_call_enum` snippet and a newline. Every later
/// function: `  NAME, `.
fn call_enum_list(cx: &RenderContext<'_>, unit: &Unit) -> String {
    let mut out = String::new();
    for (i, function) in unit.functions().enumerate() {
        let token = to_dispatch_token(&function.name);
        if i == 0 {
            out.push_str(&cx.snip(
                "first_call_enum",
                &Substitutions::new().with("call_enum_name", token),
            ));
            out.push('\n');
        } else {
            out.push_str(&format!("  {}, ", token));
        }
    }
    out
}

#[derive(Debug, Default)]
struct NamespaceText {
    open: String,
    close: String,
    slashes: String,
    dots: String,
    underscores: String,
}

impl NamespaceText {
    fn build(cx: &RenderContext<'_>, path: &[String]) -> Self {
        let mut text = NamespaceText::default();
        for name in path {
            let subs = Substitutions::new().with("namespace_name", name.as_str());
            text.open.push_str(&cx.snip("namespace_open_line", &subs));
            text.close = cx.snip("namespace_close_line", &subs) + &text.close;
        }
        text.slashes = path.join("/");
        text.dots = path.join(".");
        text.underscores = path.join("_");
        text
    }
}

#[cfg(test)]
mod tests {
    use hidlgen_ast::{Function, Interface, Version};

    use super::*;
    use crate::Diagnostics;

    fn unit() -> Unit {
        let mut unit = Unit::new("android.hardware.demo", Version::new(1, 0));
        unit.namespace = vec!["android".into(), "hardware".into(), "demo".into()];
        unit.interface = Some(Interface::new("IDemo"));
        unit.declarations = vec![
            Declaration::Function(Function::new("open")),
            Declaration::Function(Function::new("readBlock")),
            Declaration::Function(Function::new("close")),
        ];
        unit
    }

    #[test]
    fn test_call_enum_list() {
        let table = SnippetTable::new().with("header", "first_call_enum", "call_enum_name = 1,");
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "header", &diagnostics);

        assert_eq!(call_enum_list(&cx, &unit()), "OPEN = 1,\n  READBLOCK,   CLOSE, ");
    }

    #[test]
    fn test_namespace_text() {
        let table = SnippetTable::new()
            .with("header", "namespace_open_line", "namespace namespace_name {\n")
            .with("header", "namespace_close_line", "}  // namespace namespace_name\n");
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "header", &diagnostics);

        let text = NamespaceText::build(&cx, &unit().namespace);
        assert_eq!(
            text.open,
            "namespace android {\nnamespace hardware {\nnamespace demo {\n"
        );
        assert_eq!(
            text.close,
            "}  // namespace demo\n}  // namespace hardware\n}  // namespace android\n"
        );
        assert_eq!(text.slashes, "android/hardware/demo");
        assert_eq!(text.dots, "android.hardware.demo");
        assert_eq!(text.underscores, "android_hardware_demo");
    }

    #[test]
    fn test_write_sink() {
        let mut buf = Vec::new();
        WriteSink(&mut buf).write("abc").unwrap();
        assert_eq!(buf, b"abc");
    }

    #[test]
    fn test_missing_section_warns_once() {
        let table = SnippetTable::new().with("header", "file", "x");
        let diagnostics = Diagnostics::new();
        let mut out = String::new();

        let status = Emitter::new(&table, "nope", &diagnostics)
            .emit(&unit(), &mut out)
            .unwrap();
        assert_eq!(status, EmitStatus::Written);
        assert_eq!(out, "");
        assert_eq!(diagnostics.warning_count(), 1);
    }
}
