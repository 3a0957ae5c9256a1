#![deny(missing_docs)]

//! # Discovery Data Model
//!
//! Deserialization targets for Google-style discovery documents.
//!
//! Only the subset needed for resource schema generation is modeled:
//! the `schemas` map and, per type, the kind tag, `$ref`, description,
//! `required`/`readOnly` flags, array `items` and object `properties`.
//! The graph is read-only for the duration of a translation run.

use indexmap::IndexMap;
use serde::Deserialize;

/// The type-definition graph: named type schemas addressed by name.
pub type SchemaGraph = IndexMap<String, TypeDefinition>;

/// A named type definition, or a fragment of one (array element,
/// inline property value).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    /// Primitive kind tag: "integer", "number", "string", "boolean",
    /// "array" or "object". Absent for named references.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Name of another type in the same graph. A definition carrying a
    /// reference and no kind tag is a named reference.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    /// Free-text description from the upstream service.
    pub description: Option<String>,

    /// Whether the field must be supplied on creation.
    #[serde(default)]
    pub required: bool,

    /// Whether the field is derived by the service.
    #[serde(default)]
    pub read_only: bool,

    /// Element type, present for "array" kinds.
    pub items: Option<Box<TypeDefinition>>,

    /// Declared fields, present for named object types.
    #[serde(default)]
    pub properties: IndexMap<String, TypeDefinition>,
}

/// The envelope of a discovery document, as fetched from the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiscoveryDocument {
    /// API identifier (e.g. "compute").
    pub name: String,

    /// API version (e.g. "v1").
    pub version: String,

    /// The type-definition graph.
    #[serde(default)]
    pub schemas: SchemaGraph,
}
