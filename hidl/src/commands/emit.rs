use std::{
    fs, io,
    path::{Path, PathBuf},
    thread,
};

use clap::{ArgGroup, Args};
use eyre::{Context, Result, bail, eyre};
use hidlgen_ast::Unit;
use hidlgen_codegen::{Diagnostics, EmitStatus, Emitter, WriteSink};
use hidlgen_snippets::{SnippetTable, SnippetsToml};

use super::UnwrapOrExit;
use crate::input::{load_unit, print_diagnostics};

#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["section", "all"])))]
pub struct EmitCommand {
    /// Path to the parsed unit (JSON)
    #[arg(long)]
    pub ast: PathBuf,

    /// Path to the snippet table (TOML)
    #[arg(long)]
    pub snippets: PathBuf,

    /// Section to render
    #[arg(long)]
    pub section: Option<String>,

    /// Render every section, one `<section>.out` file each
    #[arg(long)]
    pub all: bool,

    /// Output file (single section) or directory (--all). Defaults to stdout
    /// or the current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep newlines in specialised parameter snippets
    #[arg(long)]
    pub multiline_params: bool,
}

impl EmitCommand {
    pub fn run(&self) -> Result<()> {
        let snippets = SnippetsToml::open(&self.snippets).unwrap_or_exit();
        let unit = load_unit(&self.ast)?;

        let diagnostics = Diagnostics::new();
        let status = self.execute(&unit, snippets.table(), &diagnostics)?;
        print_diagnostics(&diagnostics.take());

        if status == EmitStatus::MissingInterface {
            bail!(
                "nothing written: {} declares no interface",
                self.ast.display()
            );
        }
        Ok(())
    }

    fn execute(
        &self,
        unit: &Unit,
        table: &SnippetTable,
        diagnostics: &Diagnostics,
    ) -> Result<EmitStatus> {
        match &self.section {
            Some(section) => self.emit_section(unit, table, section, diagnostics),
            None => self.emit_all(unit, table, diagnostics),
        }
    }

    fn emitter<'a>(
        &self,
        table: &'a SnippetTable,
        section: &'a str,
        diagnostics: &'a Diagnostics,
    ) -> Emitter<'a> {
        let emitter = Emitter::new(table, section, diagnostics);
        if self.multiline_params {
            emitter.multiline_params(true)
        } else {
            emitter
        }
    }

    fn emit_section(
        &self,
        unit: &Unit,
        table: &SnippetTable,
        section: &str,
        diagnostics: &Diagnostics,
    ) -> Result<EmitStatus> {
        let emitter = self.emitter(table, section, diagnostics);
        match &self.output {
            Some(path) => write_file(&emitter, unit, path),
            None => emitter.emit(unit, &mut WriteSink(io::stdout().lock())),
        }
    }

    fn emit_all(
        &self,
        unit: &Unit,
        table: &SnippetTable,
        diagnostics: &Diagnostics,
    ) -> Result<EmitStatus> {
        let dir = self.output.clone().unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&dir)
            .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;

        let results: Vec<Result<EmitStatus>> = thread::scope(|scope| {
            let handles: Vec<_> = table
                .section_names()
                .map(|section| {
                    let path = dir.join(format!("{}.out", section));
                    let emitter = self.emitter(table, section, diagnostics);
                    scope.spawn(move || write_file(&emitter, unit, &path))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(eyre!("section pass panicked")))
                })
                .collect()
        });

        let mut status = EmitStatus::Written;
        for result in results {
            if result? == EmitStatus::MissingInterface {
                status = EmitStatus::MissingInterface;
            }
        }
        Ok(status)
    }
}

/// Render into memory first so a unit without an interface leaves no file.
fn write_file(emitter: &Emitter<'_>, unit: &Unit, path: &Path) -> Result<EmitStatus> {
    let mut text = String::new();
    let status = emitter.emit(unit, &mut text)?;
    if status == EmitStatus::Written {
        fs::write(path, &text).wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    Ok(status)
}
