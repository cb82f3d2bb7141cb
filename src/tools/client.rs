use reqwest::Client;
use serde_json::Value;

use crate::config::ApiConfig;

/// Outcome of one GET against the metadata API, before tool-level error
/// mapping is applied.
#[derive(Debug)]
pub enum ApiResponse {
    /// 2xx with a JSON body.
    Ok(Value),
    /// Non-2xx. `detail` is the body's error field when it carried one.
    Status {
        code: u16,
        status_text: String,
        detail: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Thin GET wrapper around the metadata API. One request per call; no
/// retries, no caching, no deduplication of identical concurrent calls.
#[derive(Debug, Clone)]
pub struct MetadataClient {
    client: Client,
    config: ApiConfig,
}

impl MetadataClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn get_json(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<ApiResponse, FetchError> {
        let url = self.config.endpoint_url(endpoint);
        tracing::debug!(%url, params = query.len(), "metadata API request");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.json::<Value>().await?;
            return Ok(ApiResponse::Ok(body));
        }

        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string();
        // Error bodies look like {"detail": "..."}; missing or unparsable
        // bodies just drop the detail.
        let detail = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("detail").and_then(Value::as_str).map(String::from));

        tracing::warn!(%url, code = status.as_u16(), "metadata API returned an error status");
        Ok(ApiResponse::Status {
            code: status.as_u16(),
            status_text,
            detail,
        })
    }
}

/// Message shown when the API cannot be reached at all.
pub fn connect_error_message(base_url: &str) -> String {
    format!(
        "Failed to connect to IMDb API. Make sure the API server is running at {}",
        base_url
    )
}
