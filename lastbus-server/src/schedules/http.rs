//! Schedule datasets served over HTTP.

use crate::domain::{ScheduleError, ScheduleRecord, StandCode};

use super::source::{ScheduleSource, parse_dataset};

/// Configuration for the HTTP dataset source.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Base URL; datasets live at `<base_url>/<stand>.json`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HttpSourceConfig {
    /// Create a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Fetches per-stand datasets from a static file host.
#[derive(Debug, Clone)]
pub struct HttpScheduleSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpScheduleSource {
    /// Create a new HTTP dataset source.
    pub fn new(config: HttpSourceConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn dataset_url(&self, stand: &StandCode) -> String {
        format!("{}/{}.json", self.base_url, stand.as_str())
    }
}

impl ScheduleSource for HttpScheduleSource {
    async fn fetch(&self, stand: &StandCode) -> Result<Vec<ScheduleRecord>, ScheduleError> {
        let url = self.dataset_url(stand);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ScheduleError::load(stand.as_str(), format!("HTTP error: {e}")))?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScheduleError::not_found(stand.as_str()));
        }

        if !status.is_success() {
            return Err(ScheduleError::load(
                stand.as_str(),
                format!("API error {}", status.as_u16()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScheduleError::load(stand.as_str(), format!("HTTP error: {e}")))?;

        parse_dataset(stand, &body)
    }
}
