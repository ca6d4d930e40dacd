//! Remote use-case adapters.
//!
//! Each adapter translates exactly one HTTP round trip into a domain
//! outcome: the configured success status decodes the body, the statuses
//! with a dedicated meaning map to their domain error, and everything else
//! is `Unexpected`.

mod remote_add_account;
mod remote_authentication;
mod remote_load_survey_list;

pub use remote_add_account::RemoteAddAccount;
pub use remote_authentication::RemoteAuthentication;
pub use remote_load_survey_list::RemoteLoadSurveyList;

use domain::{DomainError, DomainResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a success body into the expected domain shape.
///
/// A missing body or a body that does not match the shape is promoted to
/// `Unexpected`; the server claimed success but the payload is unusable.
fn decode_body<T: DeserializeOwned>(body: Option<Value>) -> DomainResult<T> {
    body.and_then(|value| serde_json::from_value(value).ok())
        .ok_or(DomainError::Unexpected)
}
