//! Generation for types, fields and declarations.
//!
//! Every tree node implements [`Generate`], which produces two things:
//!
//! - an inline spelling of the node (`hidl_vec<int32_t>`, `Foo[4]`, ...)
//! - the substitution facts that declaration-shaped snippets are filled with
//!
//! Field sequences get the list combinators of [`FieldList`].

mod decls;
mod fields;
mod function;
mod types;

pub use fields::{FieldList, field_subs};
pub use function::{function_subs, join_params, params_and_callback, render_call_flow};

use crate::{RenderContext, Substitutions};

/// A tree node that can be rendered for a section.
pub trait Generate {
    /// Inline spelling of the node.
    fn generate(&self, cx: &RenderContext<'_>) -> String;

    /// Facts for declaration-shaped snippets.
    fn subs(&self, cx: &RenderContext<'_>) -> Substitutions;
}
