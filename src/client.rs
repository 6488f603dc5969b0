//! Request gateway for the Codeforces public API.

use std::time::Duration;

use serde_json::Value;

use crate::config::ServerConfig;

/// Why an upstream request produced no payload.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("upstream returned HTTP {status}{}", comment_suffix(.comment))]
    Status { status: u16, comment: Option<String> },
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),
}

fn comment_suffix(comment: &Option<String>) -> String {
    comment.as_deref().map(|c| format!(": {c}")).unwrap_or_default()
}

impl ApiError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Query parameters for one upstream call, in insertion order.
///
/// Absent optionals are never inserted, so the upstream never sees empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn with_opt<T: ToString>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Insert `key=value` only when `enabled` is set.
    pub fn flag(self, key: &'static str, enabled: bool, value: &'static str) -> Self {
        if enabled {
            self.with(key, value)
        } else {
            self
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// Turn a comma- or semicolon-separated list into the `a;b;c` form the API expects.
///
/// Items are trimmed; empty items are dropped. Returns `None` when nothing is left.
pub fn semicolon_list(raw: &str) -> Option<String> {
    let items: Vec<&str> = raw
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items.join(";"))
    }
}

/// Stateless gateway to the upstream REST API.
#[derive(Debug, Clone)]
pub struct CodeforcesApi {
    base_url: String,
    timeout: Duration,
}

impl CodeforcesApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.api_base.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Issue one GET against `endpoint` and parse the body as JSON.
    ///
    /// The HTTP client lives only for the duration of this call. Failures
    /// are logged here; callers only decide what text to show.
    pub async fn request(&self, endpoint: &str, params: &QueryParams) -> Result<Value, ApiError> {
        let result = self.fetch(endpoint, params).await;
        if let Err(e) = &result {
            tracing::warn!(endpoint, timeout = e.is_timeout(), error = %e, "Codeforces API request failed");
        }
        result
    }

    async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<Value, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ApiError::Client)?;

        let url = self.endpoint_url(endpoint);
        tracing::debug!(%url, params = ?params.as_slice(), "GET");

        let response = client
            .get(&url)
            .query(params.as_slice())
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::Transport)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                comment: failure_comment(&body),
            });
        }

        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }
}

/// Extract `comment` from a `{"status":"FAILED","comment":...}` body, if that is what it is.
fn failure_comment(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("comment")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_skip_absent_values() {
        let params = QueryParams::new()
            .with("contestId", 566)
            .with_opt("handle", None::<String>)
            .flag("asManager", false, "true")
            .flag("gym", true, "true");

        assert_eq!(
            params.as_slice(),
            &[("contestId", "566".to_string()), ("gym", "true".to_string())]
        );
        assert_eq!(params.get("handle"), None);
    }

    #[test]
    fn semicolon_list_normalizes_separators() {
        assert_eq!(semicolon_list("tourist,Petr").as_deref(), Some("tourist;Petr"));
        assert_eq!(semicolon_list(" tourist ; Petr ,, ").as_deref(), Some("tourist;Petr"));
        assert_eq!(semicolon_list(" , ; "), None);
    }

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        let api = CodeforcesApi::new("https://codeforces.com/api/", Duration::from_secs(1));
        assert_eq!(api.endpoint_url("user.info"), "https://codeforces.com/api/user.info");
    }

    #[test]
    fn failure_comment_reads_upstream_error_payload() {
        let body = br#"{"status":"FAILED","comment":"handles: User with handle nobody not found"}"#;
        assert_eq!(
            failure_comment(body).as_deref(),
            Some("handles: User with handle nobody not found")
        );
        assert_eq!(failure_comment(b"<html>"), None);
    }
}
