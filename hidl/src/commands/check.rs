use std::{io, path::PathBuf};

use clap::Args;
use eyre::Result;
use hidlgen_ast::Unit;
use hidlgen_codegen::{Diagnostic, Diagnostics, Emitter, WriteSink};
use hidlgen_snippets::{SnippetTable, SnippetsToml};

use super::UnwrapOrExit;
use crate::input::{load_unit, print_diagnostics};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the parsed unit (JSON)
    #[arg(long)]
    pub ast: PathBuf,

    /// Path to the snippet table (TOML)
    #[arg(long)]
    pub snippets: PathBuf,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

/// Diagnostics of one section pass.
struct SectionCheck<'a> {
    section: &'a str,
    diagnostics: Vec<Diagnostic>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let snippets = SnippetsToml::open(&self.snippets).unwrap_or_exit();
        let unit = load_unit(&self.ast)?;
        let checks = check(&unit, snippets.table())?;
        let has_errors = checks
            .iter()
            .flat_map(|c| &c.diagnostics)
            .any(|d| d.severity.is_error());

        if self.json {
            let report: Vec<_> = checks
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "section": c.section,
                        "diagnostics": c.diagnostics,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            for c in &checks {
                if !c.diagnostics.is_empty() {
                    eprintln!("{}:", c.section);
                    print_diagnostics(&c.diagnostics);
                }
            }
        }

        if has_errors {
            std::process::exit(1);
        }
        if !self.json {
            println!(
                "✓ {} renders cleanly for {} section{}",
                self.ast.display(),
                checks.len(),
                if checks.len() == 1 { "" } else { "s" }
            );
        }
        Ok(())
    }
}

/// Run every section into a discarding sink, collecting diagnostics per section.
fn check<'a>(unit: &Unit, table: &'a SnippetTable) -> Result<Vec<SectionCheck<'a>>> {
    table
        .section_names()
        .map(|section| {
            let diagnostics = Diagnostics::new();
            Emitter::new(table, section, &diagnostics).emit(unit, &mut WriteSink(io::sink()))?;
            Ok(SectionCheck {
                section,
                diagnostics: diagnostics.take(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use hidlgen_ast::{Annotation, Declaration, Function};
    use hidlgen_codegen::DiagnosticKind;
    use hidlgen_codegen::testing::{sample_table, sample_unit};

    use super::*;

    #[test]
    fn test_sample_is_clean() {
        let table = sample_table();
        let checks = check(&sample_unit(), &table).unwrap();

        let sections: Vec<&str> = checks.iter().map(|c| c.section).collect();
        assert_eq!(sections, ["header", "vts"]);
        assert!(checks.iter().all(|c| c.diagnostics.is_empty()));
    }

    #[test]
    fn test_problems_are_attributed_to_each_section() {
        let table = sample_table();
        let mut unit = sample_unit();
        unit.declarations.push(Declaration::Function(
            Function::new("flush")
                .with_annotations(vec![Annotation::new("next_calls").at_line(40)].into()),
        ));

        let checks = check(&unit, &table).unwrap();
        for c in &checks {
            assert_eq!(c.diagnostics.len(), 1, "section {}", c.section);
            assert_eq!(c.diagnostics[0].kind, DiagnosticKind::MalformedAnnotation);
            assert_eq!(c.diagnostics[0].line, Some(40));
        }
    }
}
