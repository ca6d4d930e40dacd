//! Use-case contracts implemented by the data layer.
//!
//! Each trait is a single operation; callers receive an `Arc<dyn ...>` built
//! by the composition root and never see the transport behind it.

use async_trait::async_trait;

use crate::account::{AccountModel, AddAccountParams, AuthenticationParams};
use crate::error::DomainResult;
use crate::survey::SurveyModel;

/// Authenticate an existing account.
#[async_trait]
pub trait Authentication: Send + Sync {
    /// Exchange credentials for an authenticated account
    async fn auth(&self, params: AuthenticationParams) -> DomainResult<AccountModel>;
}

/// Create a new account.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Register the account and return it already authenticated
    async fn add(&self, params: AddAccountParams) -> DomainResult<AccountModel>;
}

/// List the surveys visible to the current account.
#[async_trait]
pub trait LoadSurveyList: Send + Sync {
    async fn load(&self) -> DomainResult<Vec<SurveyModel>>;
}

/// Persist the authenticated account for later sessions.
#[async_trait]
pub trait UpdateCurrentAccount: Send + Sync {
    async fn save(&self, account: &AccountModel) -> DomainResult<()>;
}
