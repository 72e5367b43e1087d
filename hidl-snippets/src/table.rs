//! In-memory snippet table.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, validate};

/// The snippets of one output section, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Section {
    snippets: IndexMap<String, String>,
}

impl Section {
    /// Look up a snippet by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.snippets.get(name).map(String::as_str)
    }

    /// Iterate over `(name, template)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.snippets
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Read-only mapping from `(section, snippet name)` to template text.
///
/// Tables are built once (from TOML or programmatically) and then shared
/// immutably by every generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SnippetTable {
    sections: IndexMap<String, Section>,
}

impl SnippetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snippet, creating its section if needed. Replaces an existing
    /// snippet of the same name.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        name: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .snippets
            .insert(name.into(), template.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(
        mut self,
        section: impl Into<String>,
        name: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(section, name, template);
        self
    }

    /// Look up a section.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Look up a snippet; `None` if either the section or the snippet is missing.
    pub fn get(&self, section: &str, name: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(name))
    }

    /// Section names in file order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Iterate over `(section name, section)` pairs.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Parse a snippet table with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let table: SnippetTable =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        table.validate(content, filename)?;
        Ok(table)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        for (section_name, section) in &self.sections {
            if let Some(reason) = validate::validate_name(section_name, true) {
                let span = validate::find_name_span(src, section_name);
                return Err(Error::invalid_name(
                    section_name,
                    "section",
                    reason,
                    src,
                    filename,
                    span,
                ));
            }
            for name in section.snippets.keys() {
                if let Some(reason) = validate::validate_name(name, false) {
                    let span = validate::find_name_span(src, name);
                    return Err(Error::invalid_name(
                        name, "snippet", reason, src, filename, span,
                    ));
                }
            }
        }
        Ok(())
    }
}

impl FromStr for SnippetTable {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "snippets.toml")
    }
}
