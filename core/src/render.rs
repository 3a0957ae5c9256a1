#![deny(missing_docs)]

//! # Descriptor Rendering
//!
//! Serializes field descriptors into Terraform SDK schema literals (Go
//! source text). Output is tab-indented the way gofmt would leave it;
//! entries arrive pre-sorted from the translator, so rendering the same
//! descriptor twice yields identical text.

use crate::classifier::Mutability;
use crate::error::{AppError, AppResult};
use crate::translator::{Elem, FieldDescriptor};
use std::fmt::{self, Write};

/// Renders one named, top-level schema entry:
/// `"name": { ... },` followed by a newline.
pub fn render_field(name: &str, descriptor: &FieldDescriptor) -> AppResult<String> {
    let mut out = String::new();
    write_entry(&mut out, name, descriptor, 0)
        .map_err(|_| AppError::Render(format!("failed to render field '{}'", name)))?;
    Ok(out)
}

/// Renders a bare descriptor body, or, when `nested`, a self-contained
/// `&schema.Schema{ ... }` unit as used for list elements.
pub fn render_schema(descriptor: &FieldDescriptor, nested: bool) -> AppResult<String> {
    let mut out = String::new();
    let result = if nested {
        writeln!(out, "&schema.Schema{{")
            .and_then(|_| write_body(&mut out, descriptor, 1))
            .and_then(|_| write!(out, "}}"))
    } else {
        write_body(&mut out, descriptor, 0)
    };
    result.map_err(|_| AppError::Render("failed to render descriptor".to_string()))?;
    Ok(out)
}

fn write_entry(
    out: &mut String,
    name: &str,
    descriptor: &FieldDescriptor,
    level: usize,
) -> fmt::Result {
    let pad = indent(level);
    writeln!(out, "{}\"{}\": {{", pad, name)?;
    write_body(out, descriptor, level + 1)?;
    writeln!(out, "{}}},", pad)
}

fn write_body(out: &mut String, descriptor: &FieldDescriptor, level: usize) -> fmt::Result {
    let pad = indent(level);

    writeln!(out, "{}Type: {},", pad, descriptor.kind)?;
    if let Some(description) = &descriptor.description {
        writeln!(out, "{}Description: {},", pad, go_quote(description))?;
    }
    match descriptor.mutability {
        Mutability::Required => writeln!(out, "{}Required: true,", pad)?,
        Mutability::Optional => writeln!(out, "{}Optional: true,", pad)?,
        Mutability::Computed => writeln!(out, "{}Computed: true,", pad)?,
    }
    if descriptor.force_new {
        writeln!(out, "{}ForceNew: true,", pad)?;
    }
    if let Some(bound) = descriptor.max_items {
        writeln!(out, "{}MaxItems: {},", pad, bound)?;
    }

    match &descriptor.elem {
        Some(Elem::Single(element)) => {
            writeln!(out, "{}Elem: &schema.Schema{{", pad)?;
            write_body(out, element, level + 1)?;
            writeln!(out, "{}}},", pad)?;
        }
        Some(Elem::Fields(fields)) => {
            let inner = indent(level + 1);
            writeln!(out, "{}Elem: &schema.Resource{{", pad)?;
            writeln!(out, "{}Schema: map[string]*schema.Schema{{", inner)?;
            for (name, child) in fields {
                write_entry(out, name, child, level + 2)?;
            }
            writeln!(out, "{}}},", inner)?;
            writeln!(out, "{}}},", pad)?;
        }
        None => {}
    }

    Ok(())
}

fn indent(level: usize) -> String {
    "\t".repeat(level)
}

/// Quotes a description as a Go string literal. JSON string encoding is a
/// valid Go interpreted string for the escapes that occur in practice.
fn go_quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("{:?}", text))
}
