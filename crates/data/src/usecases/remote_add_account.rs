//! Remote account-creation adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use domain::{AccountModel, AddAccount, AddAccountParams, DomainError, DomainResult};

use crate::http::{HttpClient, HttpRequest, HttpStatusCode};

use super::decode_body;

/// Creates an account against a remote endpoint through the transport port.
pub struct RemoteAddAccount {
    url: String,
    http_client: Arc<dyn HttpClient>,
}

impl RemoteAddAccount {
    pub fn new(url: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl AddAccount for RemoteAddAccount {
    async fn add(&self, params: AddAccountParams) -> DomainResult<AccountModel> {
        let body = serde_json::to_value(&params).map_err(|_| DomainError::Unexpected)?;
        debug!(url = %self.url, "issuing account-creation request");

        let response = self
            .http_client
            .post(HttpRequest::with_body(&self.url, body))
            .await?;

        match response.status_code {
            HttpStatusCode::Ok => decode_body(response.body),
            HttpStatusCode::Forbidden => Err(DomainError::EmailInUse),
            other => {
                warn!(status = other.as_u16(), "unexpected account-creation status");
                Err(DomainError::Unexpected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpResponse, MockHttpClient};
    use serde_json::json;
    use uuid::Uuid;

    fn mock_params() -> AddAccountParams {
        AddAccountParams {
            name: "Any Name".to_string(),
            email: "any@mail.com".to_string(),
            password: "any_password".to_string(),
            password_confirmation: "any_password".to_string(),
        }
    }

    fn mock_account_body() -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "name": "Any Name",
            "email": "any@mail.com",
            "accessToken": "any_token",
        })
    }

    fn make_sut(http_client: MockHttpClient) -> RemoteAddAccount {
        RemoteAddAccount::new("/signup", Arc::new(http_client))
    }

    #[tokio::test]
    async fn calls_http_client_once_with_correct_url_and_body() {
        let params = mock_params();
        let expected_body = serde_json::to_value(&params).unwrap();

        let mut http_client = MockHttpClient::new();
        http_client
            .expect_post()
            .withf(move |request| {
                request.url == "/signup" && request.body.as_ref() == Some(&expected_body)
            })
            .times(1)
            .returning(|_| {
                Ok(HttpResponse {
                    status_code: HttpStatusCode::Ok,
                    body: Some(mock_account_body()),
                })
            });

        let sut = make_sut(http_client);
        sut.add(params).await.unwrap();
    }

    #[tokio::test]
    async fn returns_the_account_exactly_as_received_on_status_200() {
        let body = mock_account_body();
        let expected: AccountModel = serde_json::from_value(body.clone()).unwrap();

        let mut http_client = MockHttpClient::new();
        http_client.expect_post().returning(move |_| {
            Ok(HttpResponse {
                status_code: HttpStatusCode::Ok,
                body: Some(body.clone()),
            })
        });

        let sut = make_sut(http_client);
        let account = sut.add(mock_params()).await.unwrap();
        assert_eq!(account, expected);
    }

    #[tokio::test]
    async fn returns_email_in_use_on_status_403() {
        let mut http_client = MockHttpClient::new();
        http_client.expect_post().times(1).returning(|_| {
            Ok(HttpResponse {
                status_code: HttpStatusCode::Forbidden,
                body: None,
            })
        });

        let sut = make_sut(http_client);
        let error = sut.add(mock_params()).await.unwrap_err();
        assert_eq!(error, DomainError::EmailInUse);
    }

    #[tokio::test]
    async fn returns_unexpected_on_other_statuses() {
        for status in [
            HttpStatusCode::BadRequest,
            HttpStatusCode::Unauthorized,
            HttpStatusCode::NotFound,
            HttpStatusCode::ServerError,
            HttpStatusCode::Other(418),
        ] {
            let mut http_client = MockHttpClient::new();
            http_client.expect_post().returning(move |_| {
                Ok(HttpResponse {
                    status_code: status,
                    body: None,
                })
            });

            let sut = make_sut(http_client);
            let error = sut.add(mock_params()).await.unwrap_err();
            assert_eq!(error, DomainError::Unexpected);
        }
    }
}
