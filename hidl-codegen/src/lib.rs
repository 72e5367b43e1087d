//! Snippet-driven code generation for hidlgen.
//!
//! A generation pass renders one parsed [`Unit`](hidlgen_ast::Unit) for one
//! section of a snippet table. Every piece of output is a named snippet
//! filled with substitution facts computed from the tree.
//!
//! # Module Organization
//!
//! - [`engine`] - Substitutions, single-pass filling and the render context
//! - [`generate`] - Type, field-list, declaration and function generation
//! - [`annotations`] - Call-graph and component-type annotation parsing
//! - [`emit`] - The top-level driver and output sinks
//! - [`diagnostic`] - Diagnostics and the reporter seam
//! - [`testing`] - Test utilities (feature-gated)

pub mod annotations;
pub mod diagnostic;
pub mod emit;
pub mod engine;
pub mod generate;
pub mod naming;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, Reporter, Severity};
pub use emit::{EmitStatus, Emitter, OutputSink, WriteSink};
pub use engine::{RenderContext, Substitutions, fill};
pub use generate::{FieldList, Generate};
