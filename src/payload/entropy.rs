//! Sources of non-determinism for payload synthesis.
//!
//! # Responsibilities
//! - Read the wall clock in Unix milliseconds
//! - Draw the JSON-RPC request id
//! - Offer fixed stand-ins so tests can pin both values

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::payload::types::{MAX_REQUEST_ID, MIN_REQUEST_ID};

/// Supplies the current time in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Supplies request identifiers.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default()
    }
}

/// Uniform draw over the upstream client's id range, inclusive on both ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> i64 {
        rand::thread_rng().gen_range(MIN_REQUEST_ID..=MAX_REQUEST_ID)
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Id source that always returns the same id.
#[derive(Debug, Clone, Copy)]
pub struct FixedId(pub i64);

impl IdSource for FixedId {
    fn next_id(&self) -> i64 {
        self.0
    }
}
