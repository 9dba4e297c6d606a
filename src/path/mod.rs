//! Path templates and typed path parameters.
//!
//! A route path is a `/`-delimited template. A segment beginning with `$`
//! declares a parameter, optionally typed with a `:TypeName` suffix:
//!
//! ```text
//! /users/$user_id:Integer/posts/$slug
//! ```
//!
//! Types are resolved against a [`PathTypes`] table constructed once at
//! startup and passed by reference into the compiler; there is no ambient
//! global registry. The built-in types are `String`, `Integer`, and `Long`.

mod core;
#[cfg(test)]
mod tests;

pub use core::{
    compile_template, split_segments, CompiledPath, ParamValue, PathSegment, PathType, PathTypes,
};
