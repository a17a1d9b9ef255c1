//! Configuration options for the Health Manager client

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Daily energy goal the progress bar is measured against
pub const DEFAULT_DAILY_KCAL_GOAL: u32 = 2400;

/// Configuration options for the Health Manager client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the REST API
    pub api_url: String,

    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Value sent in the `X-Client-Info` header
    pub client_info: String,

    /// File the bearer token is persisted to between runs
    pub session_path: Option<PathBuf>,

    /// Energy goal used for the summary percentage
    pub daily_kcal_goal: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            request_timeout: Some(Duration::from_secs(30)),
            client_info: format!("health-manager-rust/{}", env!("CARGO_PKG_VERSION")),
            session_path: None,
            daily_kcal_goal: DEFAULT_DAILY_KCAL_GOAL,
        }
    }
}

impl ClientOptions {
    /// Build options from `HEALTH_MANAGER_*` environment variables, reading `.env` first
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut options = Self::default();

        if let Ok(url) = std::env::var("HEALTH_MANAGER_API_URL") {
            options = options.with_api_url(&url);
        }

        if let Ok(path) = std::env::var("HEALTH_MANAGER_SESSION_FILE") {
            options = options.with_session_path(Some(PathBuf::from(path)));
        }

        if let Ok(secs) = std::env::var("HEALTH_MANAGER_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                Error::config(format!("HEALTH_MANAGER_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            options = options.with_request_timeout(Some(Duration::from_secs(secs)));
        }

        Ok(options)
    }

    /// Set the API base URL
    pub fn with_api_url(mut self, value: &str) -> Self {
        self.api_url = value.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the client info header
    pub fn with_client_info(mut self, value: &str) -> Self {
        self.client_info = value.to_string();
        self
    }

    /// Set the session file
    pub fn with_session_path(mut self, value: Option<PathBuf>) -> Self {
        self.session_path = value;
        self
    }

    /// Set the daily energy goal
    pub fn with_daily_kcal_goal(mut self, value: u32) -> Self {
        self.daily_kcal_goal = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.daily_kcal_goal, 2400);
        assert_eq!(options.request_timeout, Some(Duration::from_secs(30)));
        assert!(options.session_path.is_none());
    }

    #[test]
    fn test_api_url_drops_trailing_slash() {
        let options = ClientOptions::default().with_api_url("https://api.example.com/");
        assert_eq!(options.api_url, "https://api.example.com");
    }
}
