//! Remote survey-listing adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use domain::{DomainError, DomainResult, LoadSurveyList, SurveyModel};

use crate::http::{HttpClient, HttpRequest, HttpStatusCode};

use super::decode_body;

/// Loads the survey list through the transport port's GET side.
pub struct RemoteLoadSurveyList {
    url: String,
    http_client: Arc<dyn HttpClient>,
}

impl RemoteLoadSurveyList {
    pub fn new(url: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl LoadSurveyList for RemoteLoadSurveyList {
    async fn load(&self) -> DomainResult<Vec<SurveyModel>> {
        debug!(url = %self.url, "loading survey list");

        let response = self.http_client.get(HttpRequest::new(&self.url)).await?;

        match response.status_code {
            HttpStatusCode::Ok => decode_body(response.body),
            HttpStatusCode::NoContent => Ok(Vec::new()),
            HttpStatusCode::Forbidden => Err(DomainError::AccessDenied),
            other => {
                warn!(status = other.as_u16(), "unexpected survey-list status");
                Err(DomainError::Unexpected)
            }
        }
    }
}
