#![deny(missing_docs)]

//! # Schema Translation
//!
//! Walks the type-definition graph of a discovery document and produces, for
//! one root type, an ordered map of classified field descriptors.
//!
//! Translation is partial by design: a field whose kind cannot be mapped, or
//! whose reference cannot be resolved, is skipped and reported as a
//! diagnostic while its siblings still translate. Rendering a `Translation`
//! twice yields byte-identical output because every produced map is sorted
//! by normalized field name.

use crate::classifier::{classify, Mutability};
use crate::discovery::{SchemaGraph, TypeDefinition};
use crate::error::{AppError, AppResult};
use crate::naming::underscore;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt;

/// Scalar or container kind of a translated field.
///
/// `Display` yields the Terraform SDK type token. `Nested` renders as
/// `schema.TypeList` since the SDK models singleton sub-objects as
/// one-element lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A whole number.
    Int,
    /// A floating point number.
    Float,
    /// A string.
    String,
    /// A boolean.
    Bool,
    /// A list with a single element type.
    List,
    /// A free-form string map with no fixed keys.
    Map,
    /// A sub-object with declared fields.
    Nested,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            FieldKind::Int => "schema.TypeInt",
            FieldKind::Float => "schema.TypeFloat",
            FieldKind::String => "schema.TypeString",
            FieldKind::Bool => "schema.TypeBool",
            FieldKind::List | FieldKind::Nested => "schema.TypeList",
            FieldKind::Map => "schema.TypeMap",
        };
        f.write_str(token)
    }
}

/// Ordered mapping from normalized field name to descriptor.
///
/// Keys are unique after normalization; when two source names normalize to
/// the same key the later one overwrites the earlier. Sorted
/// lexicographically before being returned or nested.
pub type FieldMap = IndexMap<String, FieldDescriptor>;

/// Child payload of a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Elem {
    /// Element type of a list.
    Single(Box<FieldDescriptor>),
    /// Declared fields of a nested object.
    Fields(FieldMap),
}

/// The translated, classified representation of one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Scalar or container kind.
    pub kind: FieldKind,
    /// Description text, if the source carried a non-empty one.
    pub description: Option<String>,
    /// Required / Optional / Computed classification.
    pub mutability: Mutability,
    /// Whether changing the field recreates the resource. Always true: the
    /// discovery data carries no update-in-place signal, so the generator
    /// assumes recreation.
    pub force_new: bool,
    /// Cardinality bound; one for singleton nested objects.
    pub max_items: Option<u32>,
    /// Child descriptor(s), for lists and nested objects.
    pub elem: Option<Elem>,
}

/// A field dropped during translation, with the reason.
#[derive(Debug)]
pub struct SkippedField {
    /// Source field name; dotted path for fields inside referenced types.
    pub field: String,
    /// Why the field could not be translated.
    pub reason: AppError,
}

/// The outcome of translating one root type: the field map plus the
/// non-fatal diagnostics accumulated along the way.
#[derive(Debug, Default)]
pub struct Translation {
    /// Translated fields, sorted by normalized name.
    pub fields: FieldMap,
    /// Fields skipped during translation.
    pub skipped: Vec<SkippedField>,
}

/// Translates the named root type of `graph` into a field map.
///
/// Fails outright only when `root` itself is absent from the graph;
/// per-field failures are collected into [`Translation::skipped`].
pub fn translate(graph: &SchemaGraph, root: &str) -> AppResult<Translation> {
    let mut in_progress = HashSet::new();
    translate_type(graph, root, &mut in_progress)
}

/// Translates one named type. `in_progress` holds the reference names on the
/// current recursion path; re-entering one of them is reported as a cycle
/// instead of recursing forever.
fn translate_type(
    graph: &SchemaGraph,
    name: &str,
    in_progress: &mut HashSet<String>,
) -> AppResult<Translation> {
    let schema = graph
        .get(name)
        .ok_or_else(|| AppError::UnresolvedReference(name.to_string()))?;

    in_progress.insert(name.to_string());

    let mut translation = Translation::default();
    for (field_name, definition) in &schema.properties {
        match build_descriptor(graph, field_name, definition, in_progress, &mut translation.skipped)
        {
            Ok(descriptor) => {
                // Last-write-wins on post-normalization collisions.
                translation.fields.insert(underscore(field_name), descriptor);
            }
            Err(reason) => translation.skipped.push(SkippedField {
                field: field_name.clone(),
                reason,
            }),
        }
    }

    in_progress.remove(name);

    translation.fields.sort_keys();
    Ok(translation)
}

/// Builds the descriptor for one field (or one array element, which goes
/// through the same logic as an unnamed field).
fn build_descriptor(
    graph: &SchemaGraph,
    field_name: &str,
    definition: &TypeDefinition,
    in_progress: &mut HashSet<String>,
    skipped: &mut Vec<SkippedField>,
) -> AppResult<FieldDescriptor> {
    let description = definition.description.clone().filter(|d| !d.is_empty());
    let mutability = classify(
        definition.read_only,
        definition.required,
        description.as_deref().unwrap_or(""),
    );

    let mut descriptor = FieldDescriptor {
        kind: FieldKind::String,
        description,
        mutability,
        force_new: true,
        max_items: None,
        elem: None,
    };

    match definition.kind.as_deref() {
        Some("integer") => descriptor.kind = FieldKind::Int,
        Some("number") => descriptor.kind = FieldKind::Float,
        Some("string") => descriptor.kind = FieldKind::String,
        Some("boolean") => descriptor.kind = FieldKind::Bool,
        Some("array") => {
            let items = definition.items.as_deref().ok_or_else(|| {
                AppError::General(format!("array field '{}' has no items", field_name))
            })?;
            let element = build_descriptor(graph, field_name, items, in_progress, skipped)?;
            descriptor.kind = FieldKind::List;
            descriptor.elem = Some(Elem::Single(Box::new(element)));
        }
        // An inline map-typed value; no recursion into fixed keys.
        Some("object") => descriptor.kind = FieldKind::Map,
        Some(other) => {
            return Err(AppError::UnsupportedFieldType {
                field: field_name.to_string(),
                kind: other.to_string(),
            })
        }
        None => match definition.reference.as_deref() {
            Some(target) => {
                if in_progress.contains(target) {
                    return Err(AppError::CyclicReference(target.to_string()));
                }
                let nested = translate_type(graph, target, in_progress)?;
                if nested.fields.is_empty() {
                    return Err(AppError::General(format!(
                        "referenced schema '{}' declares no fields",
                        target
                    )));
                }
                // Surface nested diagnostics with the path to the field.
                skipped.extend(nested.skipped.into_iter().map(|s| SkippedField {
                    field: format!("{}.{}", field_name, s.field),
                    reason: s.reason,
                }));
                descriptor.kind = FieldKind::Nested;
                descriptor.max_items = Some(1);
                descriptor.elem = Some(Elem::Fields(nested.fields));
            }
            None => {
                return Err(AppError::UnsupportedFieldType {
                    field: field_name.to_string(),
                    kind: "(none)".to_string(),
                })
            }
        },
    }

    Ok(descriptor)
}
