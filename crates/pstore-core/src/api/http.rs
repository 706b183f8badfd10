//! `reqwest` client for the storage REST API.
//!
//! Every request carries `Content-Type: application/json` and the session
//! token in a configurable header. Responses are classified into
//! [`ApiError`] variants here so nothing upstream compares strings.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};

use super::FileApi;
use crate::config::settings::ApiConfig;
use crate::error::{ApiError, CoreError, CoreResult};
use crate::files::record::FileRecord;

/// Storage API client bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpFileApi {
    client: Client,
    base_url: Url,
    token_header: HeaderName,
    invalid_token_message: String,
}

impl HttpFileApi {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::ConfigParse`] if the base URL or header name is malformed.
    /// - [`CoreError::Http`] if the underlying client cannot be constructed.
    pub fn new(config: &ApiConfig) -> CoreResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| CoreError::ConfigParse(format!("invalid base_url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::ConfigParse(format!(
                "base_url cannot carry a path: {base_url}"
            )));
        }
        let token_header = HeaderName::from_bytes(config.token_header.as_bytes())
            .map_err(|e| CoreError::ConfigParse(format!("invalid token_header: {e}")))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(default_headers)
            .build()
            .map_err(|e| CoreError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            token_header,
            invalid_token_message: config.invalid_token_message.clone(),
        })
    }

    /// `{base}/api/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    fn authorize(&self, request: RequestBuilder, token: &str) -> Result<RequestBuilder, ApiError> {
        let value = HeaderValue::from_str(token).map_err(|_| {
            tracing::warn!("stored credential is not a valid header value");
            ApiError::InvalidCredential
        })?;
        Ok(request.header(self.token_header.clone(), value))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(classify_send_error)?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!("response error: status={status} body={body}");

        if self.is_invalid_credential(status, &body) {
            return Err(ApiError::InvalidCredential);
        }
        Err(ApiError::Transport(format!("server responded with {status}")))
    }

    fn is_invalid_credential(&self, status: StatusCode, body: &str) -> bool {
        if status == StatusCode::UNAUTHORIZED {
            return true;
        }
        server_messages(body)
            .iter()
            .any(|m| m.eq_ignore_ascii_case(&self.invalid_token_message))
    }
}

#[async_trait]
impl FileApi for HttpFileApi {
    async fn list_files(&self, token: &str) -> Result<Vec<FileRecord>, ApiError> {
        let url = self.endpoint(&["files"]);
        tracing::debug!("GET {url}");
        let request = self.authorize(self.client.get(url), token)?;
        let response = self.send(request).await?;

        response.json::<Vec<FileRecord>>().await.map_err(|e| {
            tracing::error!("response error: undecodable file listing: {e}");
            ApiError::Transport(format!("invalid response body: {e}"))
        })
    }

    async fn delete_file(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["files", id]);
        tracing::debug!("DELETE {url}");
        let request = self.authorize(self.client.delete(url), token)?;
        self.send(request).await?;
        Ok(())
    }
}

/// Separates "sent but no response" from "never sent" in the logs.
fn classify_send_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        tracing::error!("request error: timed out: {e}");
        ApiError::Transport("request timed out".to_string())
    } else if e.is_connect() || e.is_request() {
        tracing::error!("request error: no response: {e}");
        ApiError::Transport(format!("no response from server: {e}"))
    } else {
        tracing::error!("error: {e}");
        ApiError::Transport(e.to_string())
    }
}

/// Pulls the `message` and `error` strings out of a JSON error body.
fn server_messages(body: &str) -> Vec<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Vec::new();
    };
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
        .collect()
}
