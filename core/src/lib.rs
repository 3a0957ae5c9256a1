#![deny(missing_docs)]

//! # tfgen Core
//!
//! Core library for the discovery-to-Terraform schema generator.
//!
//! Translates the named type definitions of a Google-style discovery
//! document into classified Terraform resource schema fields and renders
//! them as Go source text. Network and file handling live in the CLI crate.

/// Shared error types.
pub mod error;

/// Discovery document data model.
pub mod discovery;

/// Identifier conversion (camelCase -> snake_case).
pub mod naming;

/// Field mutability classification heuristic.
pub mod classifier;

/// Schema translation (type definitions -> field descriptors).
pub mod translator;

/// Field descriptor rendering (descriptors -> Go schema text).
pub mod render;

pub use classifier::{classify, Mutability};
pub use discovery::{DiscoveryDocument, SchemaGraph, TypeDefinition};
pub use error::{AppError, AppResult};
pub use naming::underscore;
pub use render::{render_field, render_schema};
pub use translator::{translate, Elem, FieldDescriptor, FieldKind, FieldMap, SkippedField, Translation};
