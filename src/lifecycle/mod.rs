//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast to subscribers → server stops accepting → drains
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger_on_signal → trigger()
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
