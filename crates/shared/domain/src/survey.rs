//! Survey entity as listed by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One answer option of a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswerModel {
    /// Optional icon shown next to the answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub answer: String,
}

/// A survey as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyModel {
    pub id: Uuid,
    pub question: String,
    pub answers: Vec<SurveyAnswerModel>,
    pub date: DateTime<Utc>,
    /// Whether the current account already answered this survey
    pub did_answer: bool,
}
