use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use hidlgen_snippets::{SnippetTable, SnippetsToml};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct SectionsCommand {
    /// Path to the snippet table (TOML)
    #[arg(long)]
    pub snippets: PathBuf,
}

impl SectionsCommand {
    pub fn run(&self) -> Result<()> {
        let snippets = SnippetsToml::open(&self.snippets).unwrap_or_exit();
        print!("{}", listing(snippets.table()));
        Ok(())
    }
}

/// One line per section, in file order.
fn listing(table: &SnippetTable) -> String {
    table
        .sections()
        .map(|(name, section)| {
            let count = section.len();
            format!(
                "{} ({} snippet{})\n",
                name,
                count,
                if count == 1 { "" } else { "s" }
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing() {
        let table = SnippetTable::new()
            .with("header", "file", "")
            .with("header", "const", "")
            .with("vts", "file", "");
        assert_eq!(listing(&table), "header (2 snippets)\nvts (1 snippet)\n");
        assert_eq!(listing(&SnippetTable::new()), "");
    }
}
