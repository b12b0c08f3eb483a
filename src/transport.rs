use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::debug;

use crate::error::RpcError;

/// Seam between the client and the network.
///
/// One implementation speaks HTTP ([`HttpTransport`]); tests substitute a
/// scripted mock. A call is one POST, one response, no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url` and return the response body as text.
    async fn post(&self, url: &str, body: String) -> Result<String, RpcError>;
}

/// HTTP transport over a shared `reqwest` client.
///
/// Redirects are followed (reqwest's default policy). Non-2xx statuses are
/// not rejected here: the daemon pairs error objects with HTTP 500, and
/// the body still carries the JSON-RPC envelope.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| RpcError::Transport(format!("build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: String) -> Result<String, RpcError> {
        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;
        let status = response.status();
        debug!(%status, "daemon http response");

        response
            .text()
            .await
            .map_err(|e| RpcError::Transport(format!("read response body: {e}")))
    }
}
