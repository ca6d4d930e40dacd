//! Composition root - wires validation, remote use cases and adapters.

use std::sync::Arc;

use data::{
    HttpClient, LocalUpdateCurrentAccount, RemoteAddAccount, RemoteAuthentication,
    RemoteLoadSurveyList,
};
use domain::{CURRENT_ACCOUNT_KEY, MIN_PASSWORD_LENGTH};
use infra::MemoryStorageAdapter;
use validation::{ValidationBuilder, ValidationComposite};

use crate::config::SurveysConfig;

/// Validation for the login form: required fields first, format second.
pub fn make_login_validation() -> ValidationComposite {
    let mut validations = ValidationBuilder::field("email").required().email().build();
    validations.extend(
        ValidationBuilder::field("password")
            .required()
            .min_length(MIN_PASSWORD_LENGTH)
            .build(),
    );
    ValidationComposite::new(validations)
}

/// Validation for the signup form.
pub fn make_signup_validation() -> ValidationComposite {
    let mut validations = ValidationBuilder::field("name").required().build();
    validations.extend(ValidationBuilder::field("email").required().email().build());
    validations.extend(
        ValidationBuilder::field("password")
            .required()
            .min_length(MIN_PASSWORD_LENGTH)
            .build(),
    );
    validations.extend(
        ValidationBuilder::field("passwordConfirmation")
            .required()
            .same_as("password")
            .build(),
    );
    ValidationComposite::new(validations)
}

pub fn make_authentication(
    config: &SurveysConfig,
    http_client: Arc<dyn HttpClient>,
) -> RemoteAuthentication {
    RemoteAuthentication::new(config.login_url(), http_client)
}

pub fn make_add_account(
    config: &SurveysConfig,
    http_client: Arc<dyn HttpClient>,
) -> RemoteAddAccount {
    RemoteAddAccount::new(config.signup_url(), http_client)
}

pub fn make_load_survey_list(
    config: &SurveysConfig,
    http_client: Arc<dyn HttpClient>,
) -> RemoteLoadSurveyList {
    RemoteLoadSurveyList::new(config.surveys_url(), http_client)
}

pub fn make_update_current_account(
    storage: Arc<MemoryStorageAdapter>,
) -> LocalUpdateCurrentAccount {
    LocalUpdateCurrentAccount::new(CURRENT_ACCOUNT_KEY, storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validation::{field_input, INVALID_FIELD_MESSAGE, REQUIRED_FIELD_MESSAGE};

    #[test]
    fn login_validation_reports_required_before_format() {
        let sut = make_login_validation();
        let input = field_input([("email", ""), ("password", "")]);

        assert_eq!(
            sut.validate("email", &input).as_deref(),
            Some(REQUIRED_FIELD_MESSAGE)
        );
        assert_eq!(
            sut.validate("password", &input).as_deref(),
            Some(REQUIRED_FIELD_MESSAGE)
        );
    }

    #[test]
    fn login_validation_accepts_a_valid_form() {
        let sut = make_login_validation();
        let input = field_input([("email", "any@mail.com"), ("password", "12345")]);

        assert!(sut.validate("email", &input).is_none());
        assert!(sut.validate("password", &input).is_none());
    }

    #[test]
    fn signup_validation_rejects_a_mismatched_confirmation() {
        let sut = make_signup_validation();
        let input = field_input([
            ("name", "Any Name"),
            ("email", "any@mail.com"),
            ("password", "12345"),
            ("passwordConfirmation", "54321"),
        ]);

        assert_eq!(
            sut.validate("passwordConfirmation", &input).as_deref(),
            Some(INVALID_FIELD_MESSAGE)
        );
    }
}
