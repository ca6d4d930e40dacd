//! Infrastructure adapters for the data-layer ports.

pub mod http_client;
pub mod storage;

pub use http_client::ReqwestHttpClient;
pub use storage::MemoryStorageAdapter;
