#![deny(missing_docs)]

//! # Field Classification
//!
//! Derives the mutability classification of a field from its flags and
//! description text.
//!
//! This is a keyword heuristic, not ground truth: discovery descriptions
//! state "Required" or "Output-only" by convention only, so the result is a
//! starting point for human review. The imprecision is intentional and kept
//! in one small pure function so it can be reviewed or swapped on its own.

/// Mutability classification of a translated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// The field must be supplied.
    Required,
    /// The field may be supplied.
    Optional,
    /// The field is derived by the service and never supplied.
    Computed,
}

const OUTPUT_ONLY_MARKER: &str = "Output-only";
const REQUIRED_MARKER: &str = "Required";

/// Classifies a field from its `readOnly` flag, `required` flag and
/// description text, in that order of authority.
///
/// A read-only flag or an "Output-only" description prefix wins outright;
/// the Required/Optional decision is skipped for such fields.
pub fn classify(read_only: bool, required: bool, description: &str) -> Mutability {
    if read_only || description.starts_with(OUTPUT_ONLY_MARKER) {
        Mutability::Computed
    } else if required || description.starts_with(REQUIRED_MARKER) {
        Mutability::Required
    } else {
        Mutability::Optional
    }
}
