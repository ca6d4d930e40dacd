//! Reqwest-backed transport adapter.
//!
//! This adapter owns transport details only: request serialization and the
//! normalization of every answered exchange into an `HttpResponse`. Reqwest
//! resolves on all status codes, so 4xx/5xx answers already arrive as
//! responses rather than errors; only failures with no response attached
//! (DNS, refused connection, interrupted body) become `HttpError::Network`.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use data::http::{HttpClient, HttpError, HttpRequest, HttpResponse, HttpResult, HttpStatusCode};

/// `HttpClient` implementation over a shared reqwest `Client`.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Build the adapter with a default reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying client cannot be constructed.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    fn parse_url(raw: &str) -> HttpResult<Url> {
        Url::parse(raw).map_err(|e| HttpError::InvalidUrl(format!("{raw}: {e}")))
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(&self, request: HttpRequest) -> HttpResult<HttpResponse> {
        let url = Self::parse_url(&request.url)?;
        debug!(%url, "POST");

        let mut builder = self.client.post(url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_network_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_network_error)?;

        Ok(to_http_response(status, &body))
    }

    async fn get(&self, request: HttpRequest) -> HttpResult<HttpResponse> {
        let url = Self::parse_url(&request.url)?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_network_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_network_error)?;

        Ok(to_http_response(status, &body))
    }
}

fn map_network_error(error: reqwest::Error) -> HttpError {
    HttpError::Network(error.to_string())
}

/// Normalize a completed exchange into the port's response shape.
///
/// A body that is absent or not valid JSON yields `body: None`; the use-case
/// adapters decide whether that matters for the status at hand.
fn to_http_response(status: u16, body: &[u8]) -> HttpResponse {
    HttpResponse {
        status_code: HttpStatusCode::from_u16(status),
        body: serde_json::from_slice(body).ok(),
    }
}
