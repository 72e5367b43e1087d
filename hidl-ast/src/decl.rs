//! Top-level declarations.

use serde::{Deserialize, Serialize};

use crate::{Annotations, EnumType, Fields, Literal, Type};

/// A declaration in an interface file, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Const(ConstDecl),
    Typedef(TypedefDecl),
    Struct(StructDecl),
    Enum(EnumDecl),
    Union(UnionDecl),
    Import(ImportDecl),
    Function(Function),
}

impl Declaration {
    /// The kind name used to select per-kind snippets (`declare_<kind>`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Declaration::Const(_) => "const",
            Declaration::Typedef(_) => "typedef",
            Declaration::Struct(_) => "struct",
            Declaration::Enum(_) => "enum",
            Declaration::Union(_) => "union",
            Declaration::Import(_) => "import",
            Declaration::Function(_) => "function",
        }
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Const(d) => &d.name,
            Declaration::Typedef(d) => &d.name,
            Declaration::Struct(d) => &d.name,
            Declaration::Enum(d) => &d.name,
            Declaration::Union(d) => &d.name,
            Declaration::Import(d) => &d.name,
            Declaration::Function(d) => &d.name,
        }
    }

    /// Returns the function if this declaration is one.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Declaration::Function(function) => Some(function),
            _ => None,
        }
    }
}

/// `const NAME = value;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDecl {
    pub name: String,
    pub value: Literal,
}

/// `typedef base name;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedefDecl {
    pub name: String,
    pub base: Type,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: String,
    #[serde(default)]
    pub fields: Fields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    #[serde(flatten)]
    pub body: EnumType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionDecl {
    pub name: String,
    #[serde(default)]
    pub fields: Fields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDecl {
    pub name: String,
}

/// An interface method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub params: Fields,
    /// Values delivered asynchronously through the synthesized callback.
    #[serde(default)]
    pub generates: Fields,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub line: u32,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Fields::new(),
            generates: Fields::new(),
            annotations: Annotations::new(),
            line: 0,
        }
    }

    pub fn with_params(mut self, params: Fields) -> Self {
        self.params = params;
        self
    }

    pub fn with_generates(mut self, generates: Fields) -> Self {
        self.generates = generates;
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Returns true if the function returns values through a callback.
    pub fn has_callback(&self) -> bool {
        !self.generates.is_empty()
    }
}
