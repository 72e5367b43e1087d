//! Fields and literal values.

use serde::{Deserialize, Serialize};

use crate::{Annotation, Type};

/// A literal value as it appeared in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// A string literal. Holds the content without quotes.
    String(String),
    /// A numeric literal, kept as written (e.g. `0x10`, `-1`).
    Number(String),
    /// A bare identifier or expression (e.g. a constant name).
    Ident(String),
}

impl Literal {
    pub fn string(s: impl Into<String>) -> Self {
        Literal::String(s.into())
    }

    pub fn number(s: impl Into<String>) -> Self {
        Literal::Number(s.into())
    }

    pub fn ident(s: impl Into<String>) -> Self {
        Literal::Ident(s.into())
    }

    /// Source spelling; string literals keep their quotes.
    pub fn text(&self) -> String {
        match self {
            Literal::String(s) => format!("\"{}\"", s),
            Literal::Number(s) | Literal::Ident(s) => s.clone(),
        }
    }

    /// Spelling without surrounding quotes.
    pub fn unquoted(&self) -> &str {
        match self {
            Literal::String(s) | Literal::Number(s) | Literal::Ident(s) => s,
        }
    }

    /// Returns true for string literals.
    pub fn is_string(&self) -> bool {
        matches!(self, Literal::String(_))
    }
}

/// A named slot in a struct, union, enum, parameter list or variable list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Absent only for enumerators.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,
    /// Default value, initializer or enumerator value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Literal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Annotation>,
}

impl Field {
    /// Create a typed field.
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            value: None,
            annotation: None,
        }
    }

    /// Create an enumerator (a field without a type).
    pub fn enumerator(name: impl Into<String>, value: Option<Literal>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            value,
            annotation: None,
        }
    }

    pub fn with_value(mut self, value: Literal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Initializer text: ` = <value>` or empty.
    pub fn init_text(&self) -> String {
        match &self.value {
            Some(value) => format!(" = {}", value.text()),
            None => String::new(),
        }
    }
}

/// An ordered sequence of fields.
///
/// Order is significant: every list generated from it follows it exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(Vec<Field>);

impl Fields {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: Field) {
        self.0.push(field);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Field>> for Fields {
    fn from(fields: Vec<Field>) -> Self {
        Self(fields)
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
