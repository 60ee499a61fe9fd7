//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tokio::net::TcpListener;

use translate_gateway::config::GatewayConfig;
use translate_gateway::gateway::{TranslationGateway, UpstreamClient};
use translate_gateway::payload::{FixedClock, FixedId, PayloadBuilder};
use translate_gateway::{HttpServer, Shutdown};

pub const FIXED_NOW: i64 = 1_700_000_000_123;
pub const FIXED_ID: i64 = 100_000_000;

/// A recorded call to the mock upstream.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub content_type: String,
    pub body: String,
}

/// Handle to a running mock upstream.
#[allow(dead_code)]
pub struct MockUpstream {
    pub addr: SocketAddr,
    calls: Arc<AtomicU32>,
    recorded: Arc<Mutex<Vec<RecordedCall>>>,
}

#[allow(dead_code)]
impl MockUpstream {
    pub fn endpoint(&self) -> String {
        format!("http://{}/jsonrpc", self.addr)
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.recorded.lock().unwrap().last().cloned()
    }
}

/// Start a JSON-RPC stand-in on an ephemeral port that always answers `status` with `body`.
pub async fn start_mock_upstream(status: u16, body: &'static str) -> MockUpstream {
    let calls = Arc::new(AtomicU32::new(0));
    let recorded = Arc::new(Mutex::new(Vec::new()));

    let handler_calls = calls.clone();
    let handler_recorded = recorded.clone();
    let app = Router::new().route(
        "/jsonrpc",
        post(move |headers: HeaderMap, request_body: String| {
            let calls = handler_calls.clone();
            let recorded = handler_recorded.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                let content_type = headers
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                recorded.lock().unwrap().push(RecordedCall {
                    content_type,
                    body: request_body,
                });
                (StatusCode::from_u16(status).unwrap(), body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, calls, recorded }
}

/// Gateway aimed at `endpoint` with a pinned clock and request id.
pub fn fixed_gateway(endpoint: &str) -> TranslationGateway {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let client = UpstreamClient::with_http(http, endpoint.parse().unwrap());
    let builder = PayloadBuilder::new(Arc::new(FixedClock(FIXED_NOW)), Arc::new(FixedId(FIXED_ID)));
    TranslationGateway::new(builder, client)
}

/// Start the gateway server on an ephemeral port in front of `endpoint`.
#[allow(dead_code)]
pub async fn start_gateway(endpoint: &str) -> (SocketAddr, Shutdown) {
    let mut config = GatewayConfig::default();
    config.upstream.endpoint = endpoint.to_string();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::with_gateway(config, fixed_gateway(endpoint));
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// HTTP client that never goes through a system proxy.
#[allow(dead_code)]
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
