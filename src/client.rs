use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, trace};

use crate::endpoint::{resolve_endpoint, DEFAULT_HOST, DEFAULT_PORT};
use crate::error::RpcError;
use crate::protocol::{parse_daemon_error, RpcParams, WalletRequest, WalletResponse};
use crate::transport::{HttpTransport, Transport};

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for a local lbryum wallet daemon.
///
/// Each call is a single HTTP POST carrying `{method, params, id}`, one
/// attempt, fail-fast. Request ids come from an atomic counter that
/// advances by exactly one per attempt, success or failure, so N calls
/// transmit ids `initial_id + 1 ..= initial_id + N`. The most recent
/// failure message is retained and readable via
/// [`last_error`](WalletClient::last_error).
///
/// ```no_run
/// # async fn demo() -> Result<(), lbryum_rpc::RpcError> {
/// let client = lbryum_rpc::WalletClient::new()?;
/// let balance = client.get_balance().await?;
/// println!("{balance}");
/// # Ok(()) }
/// ```
pub struct WalletClient {
    transport: Box<dyn Transport>,
    endpoint: String,
    host: String,
    port: u16,
    /// Last used request id; the next request transmits this plus one.
    next_id: AtomicU64,
    /// Most recent failure message. Set on every failed call, never
    /// cleared by later successes.
    last_error: Mutex<Option<String>>,
}

impl std::fmt::Debug for WalletClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletClient")
            .field("endpoint", &self.endpoint)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("next_id", &self.next_id)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

impl WalletClient {
    /// Client for a daemon on the stock endpoint, `http://127.0.0.1:7777`.
    pub fn new() -> Result<Self, RpcError> {
        Self::builder().build()
    }

    pub fn builder() -> WalletClientBuilder {
        WalletClientBuilder {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            initial_id: 0,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    /// Daemon host URL, scheme included.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Daemon RPC port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Current value of the id counter, without advancing it.
    pub fn request_id(&self) -> u64 {
        self.next_id.load(Ordering::Relaxed)
    }

    /// Advance the id counter and return the new value.
    ///
    /// [`call`](WalletClient::call) does this once per request; calling it
    /// directly reserves an id and shifts the sequence accordingly.
    pub fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Most recent failure message, if any call has failed.
    ///
    /// Daemon errors record their `message` field; transport and decode
    /// failures record their display text.
    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .expect("last_error mutex poisoned")
            .clone()
    }

    /// Invoke `method` on the daemon with keyword `params`.
    ///
    /// The catalog methods all forward here; it is public so callers can
    /// reach daemon methods this crate does not wrap.
    pub async fn call(&self, method: &str, params: RpcParams) -> Result<Value, RpcError> {
        let id = self.next_request_id();
        match self.dispatch(id, method, &params).await {
            Ok(value) => Ok(value),
            Err(err) => {
                *self
                    .last_error
                    .lock()
                    .expect("last_error mutex poisoned") = Some(err.last_error_text());
                Err(err)
            }
        }
    }

    async fn dispatch(
        &self,
        id: u64,
        method: &str,
        params: &RpcParams,
    ) -> Result<Value, RpcError> {
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );
        let body = serde_json::to_string(&WalletRequest { method, params, id })
            .expect("request struct serializes to JSON");

        let response_body = self.transport.post(&self.endpoint, body).await?;
        debug!(
            rpc.id = id,
            rpc.method = method,
            body_len = response_body.len(),
            "rpc response"
        );
        trace!(rpc.id = id, rpc.method = method, body = %response_body, "rpc response body");

        let decoded: WalletResponse = serde_json::from_str(&response_body).map_err(|e| {
            RpcError::MalformedResponse(format!(
                "decode daemon response: {e}; body={response_body}"
            ))
        })?;

        if let Some(err) = decoded.error {
            return Err(parse_daemon_error(err));
        }

        Ok(decoded.result.unwrap_or(Value::Null))
    }
}

/// Builder for [`WalletClient`]. Every knob defaults to the daemon's stock
/// local setup.
pub struct WalletClientBuilder {
    host: String,
    port: u16,
    initial_id: u64,
    connect_timeout: Duration,
    timeout: Duration,
    transport: Option<Box<dyn Transport>>,
}

impl WalletClientBuilder {
    /// Daemon host URL including scheme, e.g. `http://127.0.0.1`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Value the id counter starts from; the first request transmits
    /// `initial_id + 1`.
    pub fn initial_id(mut self, initial_id: u64) -> Self {
        self.initial_id = initial_id;
        self
    }

    /// End-to-end timeout for one request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// TCP connect timeout.
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Replace the HTTP transport. Timeout settings only apply to the
    /// default transport.
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<WalletClient, RpcError> {
        let endpoint = resolve_endpoint(&self.host, self.port)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new(self.connect_timeout, self.timeout)?),
        };
        Ok(WalletClient {
            transport,
            endpoint,
            host: self.host,
            port: self.port,
            next_id: AtomicU64::new(self.initial_id),
            last_error: Mutex::new(None),
        })
    }
}
