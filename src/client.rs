use reqwest::{Client, Response};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// HTTP client for the shop's REST API. One instance is shared by every
/// endpoint function; transport failures propagate untranslated.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    pub(crate) http: Client,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Non-2xx responses become [`AppError::UnexpectedStatus`] with whatever
    /// body the server sent.
    pub(crate) async fn ensure_success(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::UnexpectedStatus { status, body })
    }
}
