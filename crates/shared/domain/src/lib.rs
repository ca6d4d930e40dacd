//! Domain layer - Core entities, use-case contracts and errors.
//!
//! This crate contains pure domain types with no transport or storage
//! dependencies. The data layer implements the use-case traits declared here.

pub mod account;
pub mod constants;
pub mod error;
pub mod survey;
pub mod usecases;

pub use account::{AccountModel, AddAccountParams, AuthenticationParams};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use survey::{SurveyAnswerModel, SurveyModel};
pub use usecases::{AddAccount, Authentication, LoadSurveyList, UpdateCurrentAccount};
