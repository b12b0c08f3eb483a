//! Remote method catalog.
//!
//! Each method is a fixed mapping from a typed signature to a daemon
//! method name and parameter keys; all of them forward to
//! [`WalletClient::call`] and none add behavior of their own.

use serde_json::{json, Value};

use crate::client::WalletClient;
use crate::error::RpcError;
use crate::protocol::RpcParams;

/// Build keyword params from a fixed set of entries.
fn keyed<const N: usize>(entries: [(&str, Value); N]) -> RpcParams {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

impl WalletClient {
    /// Daemon version.
    pub async fn version(&self) -> Result<Value, RpcError> {
        self.call("version", RpcParams::new()).await
    }

    /// Wallet synchronization status.
    pub async fn is_synchronized(&self) -> Result<Value, RpcError> {
        self.call("is_synchronized", RpcParams::new()).await
    }

    /// Balance of the daemon's wallet.
    pub async fn get_balance(&self) -> Result<Value, RpcError> {
        self.call("getbalance", RpcParams::new()).await
    }

    /// Balance of any address. Walletless server query; the result is not
    /// checked by SPV.
    pub async fn get_address_balance(&self, address: &str) -> Result<Value, RpcError> {
        self.call("getaddressbalance", keyed([("address", json!(address))]))
            .await
    }

    /// Transaction history of any address. Walletless server query; the
    /// result is not checked by SPV.
    pub async fn get_address_history(&self, address: &str) -> Result<Value, RpcError> {
        self.call("getaddresshistory", keyed([("address", json!(address))]))
            .await
    }

    /// UTXO list of any address. Walletless server query; the result is
    /// not checked by SPV.
    pub async fn get_address_unspent(&self, address: &str) -> Result<Value, RpcError> {
        self.call("getaddressunspent", keyed([("address", json!(address))]))
            .await
    }

    /// Whether `address` belongs to the daemon's wallet.
    pub async fn is_address_mine(&self, address: &str) -> Result<Value, RpcError> {
        self.call("ismine", keyed([("address", json!(address))])).await
    }

    /// Transaction history of the daemon's wallet.
    pub async fn get_history(&self) -> Result<Value, RpcError> {
        self.call("history", RpcParams::new()).await
    }

    /// Create a payment request for `amount`. `memo` and `expiration`
    /// (seconds) are left out of the request entirely when `None`.
    pub async fn add_request(
        &self,
        amount: u64,
        memo: Option<&str>,
        expiration: Option<u64>,
    ) -> Result<Value, RpcError> {
        let mut params = keyed([("amount", json!(amount))]);
        if let Some(memo) = memo {
            params.insert("memo".to_owned(), json!(memo));
        }
        if let Some(expiration) = expiration {
            params.insert("expiration".to_owned(), json!(expiration));
        }
        self.call("addrequest", params).await
    }

    /// List the payment requests made so far.
    pub async fn list_requests(&self) -> Result<Value, RpcError> {
        self.call("listrequests", RpcParams::new()).await
    }

    /// Look up one payment request by its receiving address.
    pub async fn get_request(&self, address: &str) -> Result<Value, RpcError> {
        self.call("getrequest", keyed([("key", json!(address))])).await
    }

    /// Remove one payment request.
    pub async fn remove_request(&self, address: &str) -> Result<Value, RpcError> {
        self.call("rmrequest", keyed([("address", json!(address))])).await
    }

    /// Remove all payment requests.
    pub async fn clear_requests(&self) -> Result<Value, RpcError> {
        self.call("clearrequests", RpcParams::new()).await
    }

    /// Sign a payment request with an OpenAlias.
    pub async fn sign_request(&self, address: &str) -> Result<Value, RpcError> {
        self.call("signrequest", keyed([("address", json!(address))]))
            .await
    }

    /// Broadcast a serialized transaction (hex) to the network.
    pub async fn broadcast(&self, tx: &str) -> Result<Value, RpcError> {
        self.call("broadcast", keyed([("tx", json!(tx))])).await
    }

    /// Build a serialized transaction from JSON inputs and outputs.
    /// Inputs must carry a `redeemPubkey`; outputs are `(address, value)`
    /// pairs.
    pub async fn serialize_transaction(&self, jsontx: &Value) -> Result<Value, RpcError> {
        self.call("serialize", keyed([("jsontx", jsontx.clone())]))
            .await
    }

    /// Decode a serialized transaction (hex).
    pub async fn deserialize_transaction(&self, tx: &str) -> Result<Value, RpcError> {
        self.call("deserialize", keyed([("tx", json!(tx))])).await
    }

    /// Encrypt a message with a public key.
    pub async fn encrypt(&self, pubkey: &str, message: &str) -> Result<Value, RpcError> {
        self.call(
            "encrypt",
            keyed([("pubkey", json!(pubkey)), ("message", json!(message))]),
        )
        .await
    }

    /// Decrypt a message encrypted with a public key.
    pub async fn decrypt(&self, pubkey: &str, encrypted: &str) -> Result<Value, RpcError> {
        self.call(
            "decrypt",
            keyed([("pubkey", json!(pubkey)), ("encrypted", json!(encrypted))]),
        )
        .await
    }

    /// Check that a seed phrase was generated with the daemon's entropy
    /// settings.
    pub async fn check_seed(&self, seed: &str) -> Result<Value, RpcError> {
        self.call("check_seed", keyed([("seed", json!(seed))])).await
    }

    /// Generate a fresh seed phrase.
    pub async fn create_seed(&self) -> Result<Value, RpcError> {
        self.call("make_seed", RpcParams::new()).await
    }

    /// Generation seed of the daemon's wallet.
    pub async fn get_seed(&self) -> Result<Value, RpcError> {
        self.call("getseed", RpcParams::new()).await
    }

    /// Freeze the funds at one of the wallet's addresses.
    pub async fn freeze(&self, address: &str) -> Result<Value, RpcError> {
        self.call("freeze", keyed([("address", json!(address))])).await
    }

    /// Read a daemon configuration variable.
    pub async fn get_config(&self, key: &str) -> Result<Value, RpcError> {
        self.call("getconfig", keyed([("key", json!(key))])).await
    }

    /// Set a daemon configuration variable.
    pub async fn set_config(&self, key: &str, value: &str) -> Result<Value, RpcError> {
        self.call(
            "setconfig",
            keyed([("key", json!(key)), ("value", json!(value))]),
        )
        .await
    }

    /// All claims in a channel.
    pub async fn get_claims_in_channel(&self, uri: &str) -> Result<Value, RpcError> {
        self.call("getclaimsinchannel", keyed([("uri", json!(uri))]))
            .await
    }

    /// Claims named `name` in a channel.
    pub async fn get_claims_in_channel_with_name(
        &self,
        uri: &str,
        name: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "getclaimsinchannelwithname",
            keyed([("uri", json!(uri)), ("name", json!(name))]),
        )
        .await
    }

    /// Claim with the given claim id.
    pub async fn get_claim_by_id(&self, claim_id: &str) -> Result<Value, RpcError> {
        self.call("getclaimbyid", keyed([("claim_id", json!(claim_id))]))
            .await
    }

    /// Claims made in the given transaction.
    pub async fn get_claims_in_tx(&self, txid: &str) -> Result<Value, RpcError> {
        self.call("getclaimsfromtx", keyed([("txid", json!(txid))]))
            .await
    }

    /// Claim sitting at the given outpoint's transaction.
    pub async fn get_claim_by_outpoint(&self, txid: &str) -> Result<Value, RpcError> {
        self.call("getclaimbyoutpoint", keyed([("txid", json!(txid))]))
            .await
    }

    /// The nth claim with the given name.
    pub async fn get_nth_claim_for_name(&self, name: &str, n: u32) -> Result<Value, RpcError> {
        self.call(
            "getnthclaimforname",
            keyed([("name", json!(name)), ("n", json!(n))]),
        )
        .await
    }

    /// Claims signed by the certificate claim with the given id.
    pub async fn get_claims_signed_by(&self, claim_id: &str) -> Result<Value, RpcError> {
        self.call("getclaimssignedby", keyed([("claim_id", json!(claim_id))]))
            .await
    }

    /// Resolve a claim URI to its current value, verifying the server's
    /// proof.
    pub async fn get_value_for_uri(&self, uri: &str) -> Result<Value, RpcError> {
        self.call("getvalueforuri", keyed([("uri", json!(uri))])).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::mock::{client_with, MockTransport};

    #[tokio::test]
    async fn get_address_balance_wire_shape() {
        let mock = MockTransport::builder().build();
        let client = client_with(&mock);

        client
            .get_address_balance("bXYZ")
            .await
            .expect("mocked call must succeed");

        let sent = mock.sent();
        assert_eq!(sent[0].body["method"], "getaddressbalance");
        assert_eq!(sent[0].body["params"], json!({"address": "bXYZ"}));
    }

    #[tokio::test]
    async fn add_request_omits_absent_optionals() {
        let mock = MockTransport::builder().build();
        let client = client_with(&mock);

        client
            .add_request(100, None, None)
            .await
            .expect("mocked call must succeed");

        let sent = mock.sent();
        assert_eq!(sent[0].body["method"], "addrequest");
        let params = sent[0].body["params"]
            .as_object()
            .expect("params must be an object");
        assert_eq!(params["amount"], json!(100));
        assert!(!params.contains_key("memo"));
        assert!(!params.contains_key("expiration"));
    }

    #[tokio::test]
    async fn add_request_includes_present_optionals() {
        let mock = MockTransport::builder().build();
        let client = client_with(&mock);

        client
            .add_request(100, Some("invoice"), Some(3600))
            .await
            .expect("mocked call must succeed");

        let params = &mock.sent()[0].body["params"];
        assert_eq!(
            *params,
            json!({"amount": 100, "memo": "invoice", "expiration": 3600})
        );
    }

    #[tokio::test]
    async fn get_request_keys_by_address_under_key_param() {
        // The daemon takes the lookup address under `key`, unlike the
        // other request-management methods.
        let mock = MockTransport::builder().build();
        let client = client_with(&mock);

        client
            .get_request("bABC")
            .await
            .expect("mocked call must succeed");

        let sent = mock.sent();
        assert_eq!(sent[0].body["method"], "getrequest");
        assert_eq!(sent[0].body["params"], json!({"key": "bABC"}));
    }

    #[tokio::test]
    async fn get_claims_signed_by_sends_explicit_claim_id() {
        let mock = MockTransport::builder().build();
        let client = client_with(&mock);

        client
            .get_claims_signed_by("abc123")
            .await
            .expect("mocked call must succeed");

        let sent = mock.sent();
        assert_eq!(sent[0].body["method"], "getclaimssignedby");
        assert_eq!(sent[0].body["params"], json!({"claim_id": "abc123"}));
    }

    #[tokio::test]
    async fn create_seed_maps_to_make_seed() {
        let mock = MockTransport::builder().build();
        let client = client_with(&mock);

        client.create_seed().await.expect("mocked call must succeed");

        let sent = mock.sent();
        assert_eq!(sent[0].body["method"], "make_seed");
        assert_eq!(sent[0].body["params"], json!({}));
    }

    #[tokio::test]
    async fn two_key_methods_send_both_params() {
        let mock = MockTransport::builder().build();
        let client = client_with(&mock);

        client
            .encrypt("pubkey-hex", "hello world")
            .await
            .expect("mocked call must succeed");
        client
            .set_config("rpcport", "7777")
            .await
            .expect("mocked call must succeed");
        client
            .get_nth_claim_for_name("what", 2)
            .await
            .expect("mocked call must succeed");

        let sent = mock.sent();
        assert_eq!(
            sent[0].body["params"],
            json!({"pubkey": "pubkey-hex", "message": "hello world"})
        );
        assert_eq!(
            sent[1].body["params"],
            json!({"key": "rpcport", "value": "7777"})
        );
        assert_eq!(sent[2].body["params"], json!({"name": "what", "n": 2}));
    }

    #[tokio::test]
    async fn serialize_transaction_passes_json_through() {
        let mock = MockTransport::builder().build();
        let client = client_with(&mock);

        let jsontx = json!({
            "inputs": [{"redeemPubkey": "02ab"}],
            "outputs": [["bXYZ", 100]],
        });
        client
            .serialize_transaction(&jsontx)
            .await
            .expect("mocked call must succeed");

        let sent = mock.sent();
        assert_eq!(sent[0].body["method"], "serialize");
        assert_eq!(sent[0].body["params"]["jsontx"], jsontx);
    }

    #[tokio::test]
    async fn catalog_methods_consume_consecutive_ids() {
        let mock = MockTransport::builder().build();
        let client = client_with(&mock);

        client.version().await.expect("mocked call must succeed");
        client.get_balance().await.expect("mocked call must succeed");
        client
            .broadcast("0100beef")
            .await
            .expect("mocked call must succeed");

        let ids: Vec<u64> = mock
            .sent()
            .iter()
            .map(|request| request.body["id"].as_u64().expect("id must be a number"))
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(client.request_id(), 3);
    }
}
