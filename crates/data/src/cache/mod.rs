//! Key-value storage port and the local current-account use case.
//!
//! The storage behind these traits is an opaque collaborator: all this layer
//! requires is a synchronous key -> JSON get/set surface.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use domain::{AccountModel, DomainError, DomainResult, UpdateCurrentAccount};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage-level failure (serialization or backend write).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage failure: {0}")]
    Backend(String),
}

/// Write one JSON value under a key.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SetStorage: Send + Sync {
    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError>;
}

/// Read one JSON value back by key.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GetStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
}

/// Persists the authenticated account under a configured key.
pub struct LocalUpdateCurrentAccount {
    key: String,
    storage: Arc<dyn SetStorage>,
}

impl LocalUpdateCurrentAccount {
    pub fn new(key: impl Into<String>, storage: Arc<dyn SetStorage>) -> Self {
        Self {
            key: key.into(),
            storage,
        }
    }
}

#[async_trait]
impl UpdateCurrentAccount for LocalUpdateCurrentAccount {
    async fn save(&self, account: &AccountModel) -> DomainResult<()> {
        // An account without a token cannot start a session
        if !account.has_access_token() {
            return Err(DomainError::Unexpected);
        }

        let value = serde_json::to_value(account).map_err(|_| DomainError::Unexpected)?;
        self.storage
            .set(&self.key, &value)
            .map_err(|_| DomainError::Unexpected)?;

        Ok(())
    }
}
