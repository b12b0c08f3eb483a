/// Failures surfaced by [`WalletClient`](crate::WalletClient).
///
/// `InvalidEndpoint` can only occur at construction; the other three are
/// the per-call failure kinds. Every failed call also records a message in
/// the client's last-error slot.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The HTTP layer failed before a response body was available
    /// (connection refused, timeout, DNS, TLS).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The daemon answered, but the body was not a JSON-RPC response.
    #[error("malformed daemon response: {0}")]
    MalformedResponse(String),

    /// The daemon returned a structured error object.
    #[error("daemon error: {message}")]
    Daemon {
        message: String,
        /// Numeric code, when the daemon sends one.
        code: Option<i64>,
    },
}

impl RpcError {
    /// Text recorded in the client's last-error slot.
    ///
    /// Daemon errors record the bare `message` field; other kinds record
    /// their display rendering.
    pub(crate) fn last_error_text(&self) -> String {
        match self {
            RpcError::Daemon { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
