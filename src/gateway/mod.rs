//! Translation gateway subsystem.
//!
//! # Data Flow
//! ```text
//! TranslateRequest
//!     → translate.rs (empty-text check, payload synthesis)
//!     → client.rs (single POST to the JSON-RPC endpoint)
//!     → types.rs (reply decode, flatten first text + alternatives)
//!     → TranslateResult (code, message, optional data)
//! ```
//!
//! # Design Decisions
//! - No retries; every failure is terminal for its request
//! - Failures are typed (`GatewayError`) until the edge, then mapped once
//! - A 200 reply with no texts is treated as a decode failure

pub mod client;
pub mod translate;
pub mod types;

pub use client::UpstreamClient;
pub use translate::TranslationGateway;
pub use types::{GatewayError, GatewayResult, TranslateRequest, TranslateResult, Translation};
