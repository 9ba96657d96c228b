//! HTTP transport for the CCP webservice.
//!
//! Every operation is a single POST of an `{action, param}` envelope to the
//! configured endpoint. There are no retries; any failure surfaces to the
//! caller as-is.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::CcpClient;
use crate::error::{CcpError, Result};
use crate::types::{ApiResponse, RequestEnvelope};

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Maximum number of characters of a response body to include in debug logs.
const TRUNCATE_LIMIT: usize = 256;

/// Create an HTTP client with the given request timeout and user agent.
pub(crate) fn create_http_client(timeout: Duration, user_agent: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| CcpError::Network {
            detail: format!("failed to build HTTP client: {e}"),
        })
}

impl CcpClient {
    /// Send one action request and decode the typed response envelope.
    ///
    /// Request bodies are never logged: the `login` body carries the API
    /// password.
    pub(crate) async fn post_action<T, P>(&self, action: &str, param: &P) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
        P: Serialize,
    {
        let envelope = RequestEnvelope { action, param };
        let body = serde_json::to_string(&envelope).map_err(|e| CcpError::Serialization {
            detail: e.to_string(),
        })?;

        log::debug!("POST {} action={action}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CcpError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    CcpError::Network {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response.text().await.map_err(|e| CcpError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        if status != reqwest::StatusCode::OK {
            return Err(CcpError::HttpStatus {
                status: status.as_u16(),
                body: response_text,
            });
        }

        serde_json::from_str(&response_text).map_err(|e| CcpError::Parse {
            detail: e.to_string(),
        })
    }
}

/// Truncate a response body for logging.
///
/// Record sets can be large; the first `TRUNCATE_LIMIT` characters are enough
/// to identify a response in the logs.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// MSRV-compatible replacement for `str::floor_char_boundary`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}
