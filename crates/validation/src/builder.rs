//! Fluent per-field validation builder.

use crate::field::FieldValidation;
use crate::validators::{
    CompareFieldsValidation, EmailValidation, MinLengthValidation, RequiredFieldValidation,
};

/// Builds the validator list for one field, in call order.
///
/// Because the composite reports the first failure, the call order here is
/// the priority order of the messages the user will see.
pub struct ValidationBuilder {
    field: String,
    validations: Vec<Box<dyn FieldValidation>>,
}

impl ValidationBuilder {
    /// Start building validations for a field.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            field: name.into(),
            validations: Vec::new(),
        }
    }

    /// The field must be present and non-empty.
    pub fn required(mut self) -> Self {
        self.validations
            .push(Box::new(RequiredFieldValidation::new(self.field.clone())));
        self
    }

    /// The field must have at least `min_length` characters.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.validations.push(Box::new(MinLengthValidation::new(
            self.field.clone(),
            min_length,
        )));
        self
    }

    /// The field must be a well-formed e-mail address.
    pub fn email(mut self) -> Self {
        self.validations
            .push(Box::new(EmailValidation::new(self.field.clone())));
        self
    }

    /// The field must equal another field's value.
    pub fn same_as(mut self, field_to_compare: impl Into<String>) -> Self {
        self.validations.push(Box::new(CompareFieldsValidation::new(
            self.field.clone(),
            field_to_compare,
        )));
        self
    }

    /// Finish, yielding the validators in call order.
    pub fn build(self) -> Vec<Box<dyn FieldValidation>> {
        self.validations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::ValidationComposite;
    use crate::field::{field_input, INVALID_FIELD_MESSAGE, REQUIRED_FIELD_MESSAGE};

    #[test]
    fn builds_validations_in_call_order() {
        let validations = ValidationBuilder::field("email").required().email().build();

        assert_eq!(validations.len(), 2);

        // Empty value: the earlier-registered required rule wins
        let sut = ValidationComposite::new(validations);
        let error = sut.validate("email", &field_input([("email", "")]));
        assert_eq!(error.as_deref(), Some(REQUIRED_FIELD_MESSAGE));
    }

    #[test]
    fn later_rules_report_once_earlier_rules_pass() {
        let sut = ValidationComposite::new(
            ValidationBuilder::field("email").required().email().build(),
        );

        let error = sut.validate("email", &field_input([("email", "not-an-email")]));
        assert_eq!(error.as_deref(), Some(INVALID_FIELD_MESSAGE));
    }

    #[test]
    fn same_as_compares_against_the_sibling_field() {
        let sut = ValidationComposite::new(
            ValidationBuilder::field("passwordConfirmation")
                .required()
                .same_as("password")
                .build(),
        );

        let error = sut.validate(
            "passwordConfirmation",
            &field_input([("password", "12345"), ("passwordConfirmation", "54321")]),
        );
        assert_eq!(error.as_deref(), Some(INVALID_FIELD_MESSAGE));
    }
}
