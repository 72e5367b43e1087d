use std::path::{Path, PathBuf};

use crate::{Error, Result, SnippetTable};

/// A snippet table file with both raw content and parsed table.
pub struct SnippetsToml {
    path: PathBuf,
    content: String,
    table: SnippetTable,
}

impl SnippetsToml {
    /// Open and parse a snippet table file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let table = SnippetTable::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            table,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed table.
    pub fn table(&self) -> &SnippetTable {
        &self.table
    }
}
