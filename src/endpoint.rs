use reqwest::Url;

use crate::error::RpcError;

/// Host the daemon listens on in its stock local setup.
pub(crate) const DEFAULT_HOST: &str = "http://127.0.0.1";

/// Stock lbryum daemon RPC port.
pub(crate) const DEFAULT_PORT: u16 = 7777;

/// Join host and port into the POST target and validate the result.
///
/// `host` carries the scheme (`http://127.0.0.1`); the daemon speaks at
/// the URL root, so no path segment is appended.
pub(crate) fn resolve_endpoint(host: &str, port: u16) -> Result<String, RpcError> {
    let endpoint = format!("{host}:{port}");
    let parsed = Url::parse(&endpoint).map_err(|e| {
        RpcError::InvalidEndpoint(format!("`{endpoint}` is not an HTTP(S) URL ({e})"))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(endpoint),
        other => Err(RpcError::InvalidEndpoint(format!(
            "unsupported scheme `{other}`; expected http or https"
        ))),
    }
}
