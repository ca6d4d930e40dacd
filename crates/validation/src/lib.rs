//! Validation layer - Composable field validators.
//!
//! Each validator checks one named field against one rule. The composite
//! evaluates them in registration order and reports the first failure per
//! field, so callers register rules in priority order (required before
//! length before format).

pub mod builder;
pub mod composite;
pub mod field;
pub mod validators;

pub use builder::ValidationBuilder;
pub use composite::ValidationComposite;
pub use field::{
    field_input, FieldInput, FieldValidation, INVALID_FIELD_MESSAGE, REQUIRED_FIELD_MESSAGE,
};
pub use validators::{
    CompareFieldsValidation, EmailValidation, MinLengthValidation, RequiredFieldValidation,
};
