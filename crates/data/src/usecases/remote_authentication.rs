//! Remote authentication adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use domain::{AccountModel, Authentication, AuthenticationParams, DomainError, DomainResult};

use crate::http::{HttpClient, HttpRequest, HttpStatusCode};

use super::decode_body;

/// Authenticates against a remote endpoint through the transport port.
///
/// Stateless across calls; holds only the configured URL and the port.
pub struct RemoteAuthentication {
    url: String,
    http_client: Arc<dyn HttpClient>,
}

impl RemoteAuthentication {
    pub fn new(url: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl Authentication for RemoteAuthentication {
    async fn auth(&self, params: AuthenticationParams) -> DomainResult<AccountModel> {
        let body = serde_json::to_value(&params).map_err(|_| DomainError::Unexpected)?;
        debug!(url = %self.url, "issuing authentication request");

        let response = self
            .http_client
            .post(HttpRequest::with_body(&self.url, body))
            .await?;

        match response.status_code {
            HttpStatusCode::Ok => decode_body(response.body),
            HttpStatusCode::Unauthorized => Err(DomainError::InvalidCredentials),
            other => {
                warn!(status = other.as_u16(), "unexpected authentication status");
                Err(DomainError::Unexpected)
            }
        }
    }
}
