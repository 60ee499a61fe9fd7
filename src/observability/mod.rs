//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Gateway and HTTP layer produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request span
//! - Metrics are off unless enabled in config

pub mod logging;
pub mod metrics;
