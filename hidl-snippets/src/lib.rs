//! Snippet tables for the hidlgen interface compiler backend.
//!
//! A snippet table maps an output *section* (a target such as a C++ header,
//! an implementation file or a test-harness spec) to named template
//! *snippets*. Tables are plain TOML: every top-level table is a section and
//! every string entry inside it is a snippet.
//!
//! ```toml
//! [header]
//! file = """
//! #ifndef header_guard
//! ...
//! """
//! import_line = "#include <import_name.h>\n"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod table;
mod validate;

pub use error::{Error, Result};
pub use file::SnippetsToml;
pub use table::{Section, SnippetTable};
