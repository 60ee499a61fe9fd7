//! Translation gateway library.
//!
//! Accepts plain translation requests over HTTP and forwards them to a JSON-RPC
//! translation backend, shaping each outbound payload like the backend's own client.

pub mod config;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod payload;

pub use config::GatewayConfig;
pub use gateway::{TranslateRequest, TranslateResult, TranslationGateway};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use payload::PayloadBuilder;
