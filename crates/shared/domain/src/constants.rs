//! Domain-level constants.
//!
//! These constants define business rules shared between the validation
//! wiring and the local account use case.

/// Minimum password length accepted by the signup form
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Storage key under which the current account is persisted
pub const CURRENT_ACCOUNT_KEY: &str = "account";
