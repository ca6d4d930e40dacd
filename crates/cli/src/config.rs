//! CLI configuration.

use std::env;

/// API endpoints used by the CLI.
#[derive(Debug, Clone)]
pub struct SurveysConfig {
    /// Base URL of the surveys API
    pub api_url: String,
}

impl SurveysConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("SURVEYS_API_URL")
                .unwrap_or_else(|_| "http://localhost:5050/api".to_string()),
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.api_url)
    }

    pub fn signup_url(&self) -> String {
        format!("{}/signup", self.api_url)
    }

    pub fn surveys_url(&self) -> String {
        format!("{}/surveys", self.api_url)
    }
}

impl Default for SurveysConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5050/api".to_string(),
        }
    }
}
