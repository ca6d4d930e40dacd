//! Validation composite.

use crate::field::{FieldInput, FieldValidation};

/// Ordered aggregation of field validators.
///
/// Evaluation is a pure function of (field, input, registered validators):
/// validators targeting the requested field run in registration order and the
/// first failure wins. Registration order is therefore part of the contract.
pub struct ValidationComposite {
    validators: Vec<Box<dyn FieldValidation>>,
}

impl ValidationComposite {
    pub fn new(validators: Vec<Box<dyn FieldValidation>>) -> Self {
        Self { validators }
    }

    /// Validate one field against every validator registered for it.
    ///
    /// Returns the first failing validator's message, or `None` when all
    /// pass. Never panics; a field with no registered validators passes.
    pub fn validate(&self, field: &str, input: &FieldInput) -> Option<String> {
        self.validators
            .iter()
            .filter(|validation| validation.field() == field)
            .find_map(|validation| validation.validate(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::field_input;

    /// Configurable stand-in for a field validation.
    struct FieldValidationSpy {
        field: String,
        error: Option<String>,
    }

    impl FieldValidationSpy {
        fn new(field: &str) -> Self {
            Self {
                field: field.to_string(),
                error: None,
            }
        }

        fn failing(field: &str, message: &str) -> Self {
            Self {
                field: field.to_string(),
                error: Some(message.to_string()),
            }
        }
    }

    impl FieldValidation for FieldValidationSpy {
        fn field(&self) -> &str {
            &self.field
        }

        fn validate(&self, _input: &FieldInput) -> Option<String> {
            self.error.clone()
        }
    }

    #[test]
    fn returns_error_if_any_validation_fails() {
        let sut = ValidationComposite::new(vec![
            Box::new(FieldValidationSpy::new("any_field")),
            Box::new(FieldValidationSpy::failing("any_field", "any_error_message")),
        ]);

        let error = sut.validate("any_field", &field_input([("any_field", "any_value")]));
        assert_eq!(error.as_deref(), Some("any_error_message"));
    }

    #[test]
    fn returns_the_first_error_when_multiple_validations_fail() {
        let sut = ValidationComposite::new(vec![
            Box::new(FieldValidationSpy::failing(
                "any_field",
                "first_error_message",
            )),
            Box::new(FieldValidationSpy::failing(
                "any_field",
                "second_error_message",
            )),
        ]);

        let error = sut.validate("any_field", &field_input([("any_field", "any_value")]));
        assert_eq!(error.as_deref(), Some("first_error_message"));
    }

    #[test]
    fn returns_none_when_all_validations_pass() {
        let sut = ValidationComposite::new(vec![
            Box::new(FieldValidationSpy::new("any_field")),
            Box::new(FieldValidationSpy::new("any_field")),
        ]);

        let error = sut.validate("any_field", &field_input([("any_field", "any_value")]));
        assert!(error.is_none());
    }

    #[test]
    fn ignores_validations_registered_for_other_fields() {
        let sut = ValidationComposite::new(vec![Box::new(FieldValidationSpy::failing(
            "other_field",
            "other_error",
        ))]);

        let error = sut.validate("any_field", &field_input([("any_field", "any_value")]));
        assert!(error.is_none());
    }

    #[test]
    fn returns_none_for_a_field_with_no_validations() {
        let sut = ValidationComposite::new(Vec::new());

        assert!(sut.validate("any_field", &field_input([])).is_none());
    }
}
