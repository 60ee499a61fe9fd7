//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, body limit, request ID)
//! - Build the translation gateway from config
//! - Bind server to listener and shut down gracefully

use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    routing::get,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use url::Url;

use crate::config::GatewayConfig;
use crate::gateway::{GatewayError, TranslationGateway, UpstreamClient};
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::payload::PayloadBuilder;

/// Errors raised while assembling the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid upstream endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("failed to create upstream client: {0}")]
    Client(#[from] GatewayError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub gateway: TranslationGateway,
}

/// HTTP server for the translation gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a server whose gateway uses the wall clock and random request ids.
    pub fn new(config: GatewayConfig) -> Result<Self, ServerError> {
        let endpoint = Url::parse(&config.upstream.endpoint)?;
        let client = UpstreamClient::new(
            endpoint,
            config.upstream.timeout_secs.map(Duration::from_secs),
        )?;
        let gateway = TranslationGateway::new(PayloadBuilder::default(), client);
        Ok(Self::with_gateway(config, gateway))
    }

    /// Create a server around an already built gateway.
    pub fn with_gateway(config: GatewayConfig, gateway: TranslationGateway) -> Self {
        let router = Self::build_router(&config, AppState { gateway });
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route(
                "/translate",
                get(handlers::translate_hint).post(handlers::translate),
            )
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request.headers().request_id(),
                    )
                }),
            )
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Serve on `listener` until a message arrives on `shutdown`, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.endpoint,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::StatusCode;
    use tower::ServiceExt;

    use crate::http::handlers::{BANNER, POST_HINT};
    use crate::http::request::X_REQUEST_ID;
    use crate::payload::{FixedClock, FixedId};

    /// Server whose upstream points at a closed port.
    async fn offline_server() -> HttpServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut config = GatewayConfig::default();
        config.upstream.endpoint = format!("http://{}/jsonrpc", addr);
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = UpstreamClient::with_http(http, config.upstream.endpoint.parse().unwrap());
        let builder = PayloadBuilder::new(Arc::new(FixedClock(1_700_000_000_000)), Arc::new(FixedId(100_000_000)));
        HttpServer::with_gateway(config, TranslationGateway::new(builder, client))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/translate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_banner() {
        let server = offline_server().await;
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = send(server.router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, BANNER);
    }

    #[tokio::test]
    async fn test_get_translate_hint() {
        let server = offline_server().await;
        let request = Request::builder().uri("/translate").body(Body::empty()).unwrap();
        let (status, body) = send(server.router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, POST_HINT);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let server = offline_server().await;
        let (status, body) = send(server.router(), post_json("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({"code": 400, "message": "Invalid request body"}));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let server = offline_server().await;
        let request = Request::builder()
            .method("POST")
            .uri("/translate")
            .body(Body::from(r#"{"text":"Hello"}"#))
            .unwrap();
        let (status, _) = send(server.router(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_text_is_404() {
        let server = offline_server().await;
        let (status, body) = send(server.router(), post_json(r#"{"text":"","target_lang":"de"}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({"code": 404, "message": "No Translate Text Found"}));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_500() {
        let server = offline_server().await;
        let (status, body) = send(server.router(), post_json(r#"{"text":"Hello"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({"code": 500, "message": "Request failed"}));
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let server = offline_server().await;
        let request = Request::builder()
            .uri("/")
            .header(X_REQUEST_ID, "req-42")
            .body(Body::empty())
            .unwrap();
        let response = server.router().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[X_REQUEST_ID], "req-42");

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = server.router().oneshot(request).await.unwrap();
        assert!(response.headers().contains_key(X_REQUEST_ID));
    }

    #[tokio::test]
    async fn test_run_stops_on_trigger() {
        let server = offline_server().await;
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let shutdown = crate::lifecycle::Shutdown::new();
        let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

        shutdown.trigger();
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("server did not stop after trigger")
            .unwrap();
        assert!(result.is_ok());
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let mut config = GatewayConfig::default();
        config.upstream.endpoint = "::nope".into();
        assert!(matches!(HttpServer::new(config), Err(ServerError::Endpoint(_))));
    }
}
