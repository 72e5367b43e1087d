//! The substitution engine.
//!
//! - [`Substitutions`] - ordered placeholder facts
//! - [`fill`] - collision-safe, single-pass template filling
//! - [`RenderContext`] - snippet resolution for the active section

mod context;
mod fill;
mod substitutions;

pub use context::RenderContext;
pub use fill::fill;
pub use substitutions::Substitutions;
