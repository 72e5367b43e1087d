//! Annotation processing.
//!
//! Annotations are parsed into small typed facts here, without touching the
//! snippet table. Rendering those facts is left to the generators.

use hidlgen_ast::{Annotation, Annotations, Literal};
use thiserror::Error;

use crate::{Diagnostic, DiagnosticKind};

/// Annotation naming the component type of an interface.
pub const COMPONENT_TYPE: &str = "hal_type";
/// Entry naming test-harness sample values on a field annotation.
pub const NORMAL_VALUES: &str = "normal";

/// A malformed annotation. Reported with its line; the fragment it would
/// have produced is left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    #[error("call-graph annotation '{key}' needs 1 or more unnamed string values")]
    EmptyCallEdge { key: String, line: u32 },

    #[error("'{key}' annotation needs values")]
    MissingValue { key: String, line: u32 },

    #[error("{key} annotation needs one string value")]
    ComponentType { key: String, line: u32 },
}

impl AnnotationError {
    pub fn line(&self) -> u32 {
        match self {
            AnnotationError::EmptyCallEdge { line, .. }
            | AnnotationError::MissingValue { line, .. }
            | AnnotationError::ComponentType { line, .. } => *line,
        }
    }
}

impl From<AnnotationError> for Diagnostic {
    fn from(err: AnnotationError) -> Self {
        let line = err.line();
        Diagnostic::error(DiagnosticKind::MalformedAnnotation, err.to_string()).at_line(line)
    }
}

/// One call-graph fact about a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallFlow {
    /// The function may be the first call of a session.
    Entry,
    /// The function may be the last call of a session.
    Exit,
    /// The named function may be called next. Holds the literal as written.
    CallsNext(String),
    /// The named function may have been called before.
    CallsPrev(String),
}

/// Call-graph facts of one function, plus the problems found parsing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallFlowFacts {
    /// Markers first (entry, exit), then `next_calls` edges, then `prev_calls` edges.
    pub facts: Vec<CallFlow>,
    pub errors: Vec<AnnotationError>,
}

impl CallFlowFacts {
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

/// Parse `entry`, `exit`, `next_calls` and `prev_calls` annotations.
pub fn parse_call_flow(annotations: &Annotations) -> CallFlowFacts {
    let mut out = CallFlowFacts::default();

    if annotations.has("entry") {
        out.facts.push(CallFlow::Entry);
    }
    if annotations.has("exit") {
        out.facts.push(CallFlow::Exit);
    }
    let edges: [(&str, fn(String) -> CallFlow); 2] = [
        ("next_calls", CallFlow::CallsNext),
        ("prev_calls", CallFlow::CallsPrev),
    ];
    for (key, edge) in edges {
        let Some(annotation) = annotations.get(key) else {
            continue;
        };
        if annotation.values.is_empty() {
            out.errors.push(AnnotationError::EmptyCallEdge {
                key: key.to_string(),
                line: annotation.line,
            });
            continue;
        }
        for value in &annotation.values {
            match &value.literal {
                Some(literal) => out.facts.push(edge(literal.text())),
                None => out.errors.push(AnnotationError::MissingValue {
                    key: key.to_string(),
                    line: annotation.line,
                }),
            }
        }
    }

    out
}

/// Parse the interface-level component type.
///
/// Absent annotation yields `Ok(None)`. The annotation must carry exactly one
/// unnamed string value; the unquoted string is returned.
pub fn parse_component_type(
    annotations: &Annotations,
) -> Result<Option<String>, AnnotationError> {
    let Some(annotation) = annotations.get(COMPONENT_TYPE) else {
        return Ok(None);
    };
    match annotation.values.as_slice() {
        [value] => match &value.literal {
            Some(literal @ Literal::String(_)) => Ok(Some(literal.unquoted().to_string())),
            _ => Err(component_type_error(annotation)),
        },
        _ => Err(component_type_error(annotation)),
    }
}

fn component_type_error(annotation: &Annotation) -> AnnotationError {
    AnnotationError::ComponentType {
        key: COMPONENT_TYPE.to_string(),
        line: annotation.line,
    }
}

/// Sample values listed under the `normal` entry of a field annotation.
///
/// Each value yields its literal, or an error when the literal is missing.
/// Returns an empty list when the entry is absent.
pub fn normal_values(annotation: &Annotation) -> Vec<Result<&Literal, AnnotationError>> {
    let Some(values) = annotation.get(NORMAL_VALUES) else {
        return Vec::new();
    };
    values
        .iter()
        .map(|value| {
            value.literal.as_ref().ok_or_else(|| AnnotationError::MissingValue {
                key: NORMAL_VALUES.to_string(),
                line: annotation.line,
            })
        })
        .collect()
}
