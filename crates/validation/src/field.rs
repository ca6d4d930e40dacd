//! Field validation contract.

use std::collections::HashMap;

/// All field values of a form, keyed by field name.
///
/// Validators read sibling fields from here at validation time instead of
/// holding any state of their own.
pub type FieldInput = HashMap<String, String>;

/// Message reported when a required field is missing or empty
pub const REQUIRED_FIELD_MESSAGE: &str = "Required field";

/// Message reported when a field value does not satisfy its rule
pub const INVALID_FIELD_MESSAGE: &str = "Invalid field";

/// One stateless check of one named field.
pub trait FieldValidation: Send + Sync {
    /// Name of the field this validation targets
    fn field(&self) -> &str;

    /// Run the check; `None` means the field passed
    fn validate(&self, input: &FieldInput) -> Option<String>;
}

/// Build a `FieldInput` from (name, value) pairs.
pub fn field_input<const N: usize>(pairs: [(&str, &str); N]) -> FieldInput {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
