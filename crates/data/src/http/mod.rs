//! HTTP transport port.
//!
//! The `HttpClient` trait is the only suspension point of the data layer.
//! It resolves with an `HttpResponse` for every exchange the server answered,
//! whatever the status code; only a failure with no response attached (DNS,
//! refused connection, interrupted body) surfaces as an `HttpError`.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Status-code taxonomy consumed by the remote use cases.
///
/// `Other` is the named default branch for every code without a dedicated
/// mapping, so adapters can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatusCode {
    Ok,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    Other(u16),
}

impl HttpStatusCode {
    /// Classify a raw status code.
    pub fn from_u16(code: u16) -> Self {
        match code {
            200 => HttpStatusCode::Ok,
            204 => HttpStatusCode::NoContent,
            400 => HttpStatusCode::BadRequest,
            401 => HttpStatusCode::Unauthorized,
            403 => HttpStatusCode::Forbidden,
            404 => HttpStatusCode::NotFound,
            500 => HttpStatusCode::ServerError,
            other => HttpStatusCode::Other(other),
        }
    }

    /// Raw status code for logging.
    pub fn as_u16(&self) -> u16 {
        match self {
            HttpStatusCode::Ok => 200,
            HttpStatusCode::NoContent => 204,
            HttpStatusCode::BadRequest => 400,
            HttpStatusCode::Unauthorized => 401,
            HttpStatusCode::Forbidden => 403,
            HttpStatusCode::NotFound => 404,
            HttpStatusCode::ServerError => 500,
            HttpStatusCode::Other(code) => *code,
        }
    }
}

/// One outbound request. Immutable once constructed; `body` is only present
/// for mutating calls and is opaque to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Build a bodyless request (GET).
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: None,
        }
    }

    /// Build a request carrying a JSON body (POST).
    pub fn with_body(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            body: Some(body),
        }
    }
}

/// One inbound response: exactly one status code, plus the JSON body when the
/// server sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: HttpStatusCode,
    pub body: Option<Value>,
}

/// Transport-level failures. A response that arrived with an error status is
/// NOT one of these; it is a legitimate `HttpResponse`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// Network failure with no server response attached
    #[error("network failure: {0}")]
    Network(String),

    /// The request URL could not be parsed
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

/// Result type alias for transport operations
pub type HttpResult<T> = Result<T, HttpError>;

/// Transport port for issuing HTTP requests.
///
/// Implementations issue exactly one request per call and never retry.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a POST with the request body serialized as JSON
    async fn post(&self, request: HttpRequest) -> HttpResult<HttpResponse>;

    /// Issue a GET; the request body, if any, is ignored
    async fn get(&self, request: HttpRequest) -> HttpResult<HttpResponse>;
}

impl From<HttpError> for domain::DomainError {
    fn from(err: HttpError) -> Self {
        domain::DomainError::network(err.to_string())
    }
}
