//! Account entity and use-case parameter objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated account as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountModel {
    /// Unique account identifier
    pub id: Uuid,
    /// Account display name
    pub name: String,
    /// Account e-mail address
    pub email: String,
    /// Bearer token granted on login/signup
    pub access_token: String,
}

impl AccountModel {
    /// Check whether the account carries a usable token
    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }
}

/// Credentials submitted to the authentication use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationParams {
    pub email: String,
    pub password: String,
}

/// Signup data submitted to the account-creation use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_model_uses_camel_case_wire_names() {
        let account = AccountModel {
            id: Uuid::new_v4(),
            name: "Any Name".to_string(),
            email: "any@mail.com".to_string(),
            access_token: "any_token".to_string(),
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["accessToken"], "any_token");
        assert!(json.get("access_token").is_none());
    }

    #[test]
    fn add_account_params_uses_camel_case_wire_names() {
        let params = AddAccountParams {
            name: "Any Name".to_string(),
            email: "any@mail.com".to_string(),
            password: "12345".to_string(),
            password_confirmation: "12345".to_string(),
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["passwordConfirmation"], "12345");
    }

    #[test]
    fn has_access_token_rejects_empty_token() {
        let account = AccountModel {
            id: Uuid::new_v4(),
            name: "Any Name".to_string(),
            email: "any@mail.com".to_string(),
            access_token: String::new(),
        };

        assert!(!account.has_access_token());
    }
}
