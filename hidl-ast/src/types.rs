//! Type definitions.

use serde::{Deserialize, Serialize};

use crate::Fields;

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scalar {
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int8_t")]
    Int8,
    #[serde(rename = "uint8_t")]
    UInt8,
    #[serde(rename = "int16_t")]
    Int16,
    #[serde(rename = "uint16_t")]
    UInt16,
    #[serde(rename = "int32_t")]
    Int32,
    #[serde(rename = "uint32_t")]
    UInt32,
    #[serde(rename = "int64_t")]
    Int64,
    #[serde(rename = "uint64_t")]
    UInt64,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
}

impl Scalar {
    /// The name as written in interface source (e.g. `int32_t`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Scalar::Bool => "bool",
            Scalar::Int8 => "int8_t",
            Scalar::UInt8 => "uint8_t",
            Scalar::Int16 => "int16_t",
            Scalar::UInt16 => "uint16_t",
            Scalar::Int32 => "int32_t",
            Scalar::UInt32 => "uint32_t",
            Scalar::Int64 => "int64_t",
            Scalar::UInt64 => "uint64_t",
            Scalar::Float => "float",
            Scalar::Double => "double",
        }
    }

    /// The tag used by the test-harness format (e.g. `bool_t`, `int32_t`).
    pub fn vts_tag(&self) -> &'static str {
        match self {
            Scalar::Bool => "bool_t",
            Scalar::Float => "float_t",
            Scalar::Double => "double_t",
            other => other.as_str(),
        }
    }
}

/// The body of an enum type: its storage type and enumerators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumType {
    /// Underlying storage type (usually a scalar).
    pub storage: Box<Type>,
    /// Enumerators, in declaration order. These fields carry no type.
    pub fields: Fields,
}

/// A type expression.
///
/// `Vec`, `Array`, `Ref` and `Named` are derived kinds: each owns exactly one
/// base type, reachable through [`Type::base`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Scalar(Scalar),
    Vec(Box<Type>),
    Array {
        base: Box<Type>,
        /// Dimension text as written (a number or a constant name).
        dimension: String,
    },
    Enum(EnumType),
    Union(Fields),
    Struct(Fields),
    /// A reference to a named type (typedef, struct or enum name).
    Named {
        name: String,
        base: Box<Type>,
    },
    Ref(Box<Type>),
    Opaque,
    String,
    Handle,
}

impl Type {
    /// Create a vector of `base`.
    pub fn vec(base: Type) -> Self {
        Type::Vec(Box::new(base))
    }

    /// Create an array of `base` with the given dimension text.
    pub fn array(base: Type, dimension: impl Into<String>) -> Self {
        Type::Array {
            base: Box::new(base),
            dimension: dimension.into(),
        }
    }

    /// Create a reference to `base`.
    pub fn reference(base: Type) -> Self {
        Type::Ref(Box::new(base))
    }

    /// Create a named alias resolving to `base`.
    pub fn named(name: impl Into<String>, base: Type) -> Self {
        Type::Named {
            name: name.into(),
            base: Box::new(base),
        }
    }

    /// Create an enum type body.
    pub fn enumeration(storage: Type, fields: Fields) -> Self {
        Type::Enum(EnumType {
            storage: Box::new(storage),
            fields,
        })
    }

    /// The kind name used to select per-kind snippets.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Scalar(_) => "scalar",
            Type::Vec(_) => "vec",
            Type::Array { .. } => "array",
            Type::Enum(_) => "enum",
            Type::Union(_) => "union",
            Type::Struct(_) => "struct",
            Type::Named { .. } => "named",
            Type::Ref(_) => "ref",
            Type::Opaque => "opaque",
            Type::String => "string",
            Type::Handle => "handle",
        }
    }

    /// The base type of a derived kind.
    pub fn base(&self) -> Option<&Type> {
        match self {
            Type::Vec(base) | Type::Ref(base) => Some(base),
            Type::Array { base, .. } | Type::Named { base, .. } => Some(base),
            _ => None,
        }
    }

    /// Suffix used to pick specialised snippets.
    ///
    /// The non-subtype form is always `<kind>_all`. The subtype form chains
    /// through derived kinds and enum storage, so a vector of `int32_t`
    /// yields `vec_scalar_int32_t` while a vector of structs yields
    /// `vec_struct`.
    pub fn suffix(&self, subtype: bool) -> String {
        if !subtype {
            return format!("{}_all", self.kind_name());
        }
        match self {
            Type::Scalar(scalar) => format!("scalar_{}", scalar.as_str()),
            Type::Enum(body) => format!("enum_{}", body.storage.suffix(true)),
            Type::Vec(base) | Type::Ref(base) => {
                format!("{}_{}", self.kind_name(), base.suffix(true))
            }
            Type::Array { base, .. } | Type::Named { base, .. } => {
                format!("{}_{}", self.kind_name(), base.suffix(true))
            }
            Type::Union(_) | Type::Struct(_) | Type::Opaque | Type::String | Type::Handle => {
                self.kind_name().to_string()
            }
        }
    }

    /// Whether the test harness treats this type as primitive.
    pub fn is_primitive(&self) -> bool {
        match self {
            Type::Scalar(_) | Type::Enum(_) | Type::String => true,
            Type::Named { base, .. } => base.is_primitive(),
            _ => false,
        }
    }

    /// Type tag for the test-harness format.
    pub fn vts_type(&self) -> &'static str {
        match self {
            Type::Scalar(scalar) => scalar.vts_tag(),
            Type::Named { base, .. } => base.vts_type(),
            Type::Vec(_) => "TYPE_VECTOR",
            Type::Array { .. } => "TYPE_ARRAY",
            Type::Enum(_) => "TYPE_ENUM",
            Type::Union(_) => "TYPE_UNION",
            Type::Struct(_) => "TYPE_STRUCT",
            Type::Ref(_) => "TYPE_REF",
            Type::Opaque => "TYPE_OPAQUE",
            Type::String => "TYPE_STRING",
            Type::Handle => "TYPE_HANDLE",
        }
    }
}

impl From<Scalar> for Type {
    fn from(scalar: Scalar) -> Self {
        Type::Scalar(scalar)
    }
}
