use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::WalletClient;
use crate::error::RpcError;
use crate::transport::Transport;

/// A scripted transport for testing. Pops canned outcomes in order and
/// records every request it was asked to send; once the script runs dry it
/// answers `{"result": null}`.
#[derive(Clone)]
pub(crate) struct MockTransport {
    state: Arc<MockState>,
}

struct MockState {
    outcomes: Mutex<VecDeque<Result<String, String>>>,
    sent: Mutex<Vec<SentRequest>>,
}

/// One request captured by the mock, body pre-parsed for assertions.
#[derive(Clone)]
pub(crate) struct SentRequest {
    pub(crate) url: String,
    pub(crate) body: serde_json::Value,
}

impl MockTransport {
    pub(crate) fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            outcomes: VecDeque::new(),
        }
    }

    /// Everything sent through this transport so far, in order.
    pub(crate) fn sent(&self) -> Vec<SentRequest> {
        self.state.sent.lock().unwrap().clone()
    }
}

pub(crate) struct MockTransportBuilder {
    outcomes: VecDeque<Result<String, String>>,
}

impl MockTransportBuilder {
    pub(crate) fn with_response(mut self, body: &str) -> Self {
        self.outcomes.push_back(Ok(body.to_owned()));
        self
    }

    pub(crate) fn with_transport_error(mut self, message: &str) -> Self {
        self.outcomes.push_back(Err(message.to_owned()));
        self
    }

    pub(crate) fn build(self) -> MockTransport {
        MockTransport {
            state: Arc::new(MockState {
                outcomes: Mutex::new(self.outcomes),
                sent: Mutex::new(Vec::new()),
            }),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, url: &str, body: String) -> Result<String, RpcError> {
        let parsed = serde_json::from_str(&body).expect("client sends JSON bodies");
        self.state.sent.lock().unwrap().push(SentRequest {
            url: url.to_owned(),
            body: parsed,
        });

        match self.state.outcomes.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(RpcError::Transport(message)),
            None => Ok(r#"{"result": null}"#.to_owned()),
        }
    }
}

/// Client on the default endpoint wired to a clone of `mock`.
pub(crate) fn client_with(mock: &MockTransport) -> WalletClient {
    WalletClient::builder()
        .transport(Box::new(mock.clone()))
        .build()
        .expect("default endpoint must resolve")
}
