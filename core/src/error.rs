#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A field's declared kind has no Terraform mapping.
    /// Recovered per field: the field is skipped and reported as a diagnostic.
    #[from(ignore)]
    #[display("Unsupported field type for '{field}': {kind}")]
    UnsupportedFieldType {
        /// The raw (pre-normalization) field name.
        field: String,
        /// The raw kind string from the discovery document.
        kind: String,
    },

    /// A `$ref` points at a type absent from the graph.
    /// Fatal for the containing field, fatal for the run only at the root.
    #[from(ignore)]
    #[display("Unresolved reference: no schema named '{_0}'")]
    UnresolvedReference(String),

    /// A `$ref` re-enters a type already being translated.
    #[from(ignore)]
    #[display("Cyclic reference through schema '{_0}'")]
    CyclicReference(String),

    /// The renderer failed while expanding a descriptor. Always fatal.
    #[from(ignore)]
    #[display("Rendering failed: {_0}")]
    Render(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
