//! Outbound payload synthesis.
//!
//! # Data Flow
//! ```text
//! TranslateRequest (text, source_lang, target_lang)
//!     → entropy.rs (clock read, request id draw)
//!     → builder.rs (timestamp derivation, JSON layout)
//!     → builder.rs (method field spacing keyed on the id)
//!     → payload string handed to the gateway
//! ```
//!
//! # Design Decisions
//! - Field order is fixed by struct declaration order in types.rs
//! - Clock and id source are injected so payload bytes are reproducible in tests
//! - Nothing here performs I/O

pub mod builder;
pub mod entropy;
pub mod types;

pub use builder::{apply_method_spacing, derive_timestamp, MethodSpacing, PayloadBuilder};
pub use entropy::{Clock, FixedClock, FixedId, IdSource, RandomIds, SystemClock};
pub use types::{OutboundPayload, PayloadError, PayloadResult};
