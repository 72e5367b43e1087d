//! Syntax tree types for the hidlgen interface compiler backend.
//!
//! This crate provides the already-validated tree that the code generator
//! walks. The parser that produces it lives elsewhere; here the tree is a
//! plain, immutable data model that can also be loaded from JSON.
//!
//! # Architecture
//!
//! ```text
//! .hal source → parser → Unit (this crate) → hidlgen-codegen → output text
//! ```
//!
//! The types are designed to be:
//! - Closed: every type and declaration kind is an enum variant, so adding a
//!   kind is caught by exhaustive matches in the generator
//! - Order-preserving: field and declaration order is significant
//! - Target-agnostic: nothing here knows about sections or snippets

mod annotation;
mod decl;
mod field;
mod types;
mod unit;

pub use annotation::{Annotation, AnnotationValue, Annotations};
pub use decl::{
    ConstDecl, Declaration, EnumDecl, Function, ImportDecl, StructDecl, TypedefDecl, UnionDecl,
};
pub use field::{Field, Fields, Literal};
pub use types::{EnumType, Scalar, Type};
pub use unit::{Interface, Unit, Version};
