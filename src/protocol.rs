use serde_json::Value;

use crate::error::RpcError;

/// Keyed parameters for one wallet RPC call.
///
/// The daemon takes keyword arguments, so params always serialize as a
/// JSON object. Optional arguments are inserted only when present.
pub type RpcParams = serde_json::Map<String, Value>;

/// Wire form of one request: exactly `method`, `params`, `id`.
///
/// The lbryum daemon predates the `"jsonrpc": "2.0"` envelope; it is not
/// sent.
#[derive(serde::Serialize)]
pub(crate) struct WalletRequest<'a> {
    pub(crate) method: &'a str,
    pub(crate) params: &'a RpcParams,
    pub(crate) id: u64,
}

#[derive(serde::Deserialize)]
pub(crate) struct WalletResponse {
    pub(crate) result: Option<Value>,
    pub(crate) error: Option<Value>,
}

/// Parse the daemon's error value into a structured [`RpcError`].
///
/// Daemon errors look like `{"message": <string>, "code"?: <int>, ...}`.
/// If the value matches that shape we produce `Daemon`; otherwise we fall
/// back to `MalformedResponse` with the raw JSON.
pub(crate) fn parse_daemon_error(err: Value) -> RpcError {
    #[derive(serde::Deserialize)]
    struct DaemonError {
        message: String,
        code: Option<i64>,
    }

    if let Ok(parsed) = serde_json::from_value::<DaemonError>(err.clone()) {
        RpcError::Daemon {
            message: parsed.message,
            code: parsed.code,
        }
    } else {
        RpcError::MalformedResponse(format!("non-standard daemon error: {err}"))
    }
}
