//! Async JSON-RPC client for the lbryum wallet daemon.
//!
//! The daemon owns keys, balances, and transaction broadcast; this crate
//! only marshals method calls to it over HTTP. The entry point is
//! [`WalletClient`], whose inherent methods mirror the daemon's RPC
//! catalog one to one.

mod client;
mod endpoint;
mod error;
mod methods;
mod protocol;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{WalletClient, WalletClientBuilder};
pub use error::RpcError;
pub use protocol::RpcParams;
pub use transport::{HttpTransport, Transport};
