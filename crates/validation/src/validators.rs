//! Concrete field validators.
//!
//! Every validator is independent and composable; none inspects fields other
//! than the ones it was explicitly configured with.

use validator::ValidateEmail;

use crate::field::{FieldInput, FieldValidation, INVALID_FIELD_MESSAGE, REQUIRED_FIELD_MESSAGE};

fn value_of<'a>(input: &'a FieldInput, field: &str) -> &'a str {
    input.get(field).map(String::as_str).unwrap_or_default()
}

/// Fails when the field is missing or empty.
pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for RequiredFieldValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FieldInput) -> Option<String> {
        if value_of(input, &self.field).is_empty() {
            Some(REQUIRED_FIELD_MESSAGE.to_string())
        } else {
            None
        }
    }
}

/// Fails when the value is shorter than the configured minimum.
///
/// Empty values pass; emptiness is the required-field rule's concern.
pub struct MinLengthValidation {
    field: String,
    min_length: usize,
}

impl MinLengthValidation {
    pub fn new(field: impl Into<String>, min_length: usize) -> Self {
        Self {
            field: field.into(),
            min_length,
        }
    }
}

impl FieldValidation for MinLengthValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FieldInput) -> Option<String> {
        let value = value_of(input, &self.field);
        if !value.is_empty() && value.chars().count() < self.min_length {
            Some(INVALID_FIELD_MESSAGE.to_string())
        } else {
            None
        }
    }
}

/// Fails when the value differs from a sibling field's value.
pub struct CompareFieldsValidation {
    field: String,
    field_to_compare: String,
}

impl CompareFieldsValidation {
    pub fn new(field: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            field_to_compare: field_to_compare.into(),
        }
    }
}

impl FieldValidation for CompareFieldsValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FieldInput) -> Option<String> {
        if value_of(input, &self.field) != value_of(input, &self.field_to_compare) {
            Some(INVALID_FIELD_MESSAGE.to_string())
        } else {
            None
        }
    }
}

/// Fails when a non-empty value is not a well-formed e-mail address.
pub struct EmailValidation {
    field: String,
}

impl EmailValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for EmailValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FieldInput) -> Option<String> {
        let value = value_of(input, &self.field);
        if !value.is_empty() && !value.validate_email() {
            Some(INVALID_FIELD_MESSAGE.to_string())
        } else {
            None
        }
    }
}
