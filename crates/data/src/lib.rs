//! Data layer - HTTP transport port and remote use-case adapters.
//!
//! This crate owns the protocols the use cases depend on (HTTP client,
//! key-value storage) and the adapters that map one transport round trip
//! into one domain outcome. Concrete transports live in the `infra` crate.

pub mod cache;
pub mod http;
pub mod usecases;

pub use cache::{GetStorage, LocalUpdateCurrentAccount, SetStorage, StorageError};
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, HttpResult, HttpStatusCode};
pub use usecases::{RemoteAddAccount, RemoteAuthentication, RemoteLoadSurveyList};
