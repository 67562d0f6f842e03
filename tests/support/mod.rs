// Integration-test servers: each runs on its own thread and runtime so it
// outlives the `#[tokio::test]` runtime that asked for it.
#![allow(dead_code)]

use async_trait::async_trait;
use query_api::domain::{EchoRoute, ErrorDetail, ProcessError, QueryParams, QueryProcessor};
use query_api::interface_adapters::state::AppState;
use std::sync::{Arc, OnceLock, mpsc};

static DEFAULT_SERVER: OnceLock<String> = OnceLock::new();

// Shared server with the production processing step.
pub fn ensure_server() -> &'static str {
    DEFAULT_SERVER.get_or_init(|| spawn_server(AppState::default()))
}

// Start a dedicated server for `state` and return its base URL.
pub fn spawn_server(state: AppState) -> String {
    let (addr_tx, addr_rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("test runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral test port");
            let addr = listener.local_addr().expect("get local addr");
            // The socket is already listening, so clients can connect once this is sent.
            addr_tx.send(addr).expect("test waits for the address");
            query_api::run(listener, Arc::new(state))
                .await
                .expect("server failed");
        });
    });

    let addr = addr_rx.recv().expect("server thread should publish its address");
    format!("http://{addr}")
}

pub struct FailingProcessor(pub &'static str);

#[async_trait]
impl QueryProcessor for FailingProcessor {
    async fn process(
        &self,
        _route: &EchoRoute,
        _query: QueryParams,
    ) -> Result<QueryParams, ProcessError> {
        Err(ProcessError::Internal(self.0.to_string()))
    }
}

pub struct RejectingProcessor(pub Vec<ErrorDetail>);

#[async_trait]
impl QueryProcessor for RejectingProcessor {
    async fn process(
        &self,
        _route: &EchoRoute,
        _query: QueryParams,
    ) -> Result<QueryParams, ProcessError> {
        Err(ProcessError::Rejected(self.0.clone()))
    }
}
