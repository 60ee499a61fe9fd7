//! Wire types for the upstream JSON-RPC request.

use serde::Serialize;
use thiserror::Error;

/// JSON-RPC protocol tag.
pub const JSONRPC_VERSION: &str = "2.0";

/// Method name the upstream dispatches translations on.
pub const METHOD_HANDLE_TEXTS: &str = "LMT_handle_texts";

/// Number of alternative translations requested per text.
pub const MAX_ALTERNATIVES: u32 = 3;

/// Splitting mode sent with every request.
pub const SPLITTING_NEWLINES: &str = "newlines";

/// Language used when the caller leaves the source empty.
pub const DEFAULT_SOURCE_LANG: &str = "auto";

/// Language used when the caller leaves the target empty.
pub const DEFAULT_TARGET_LANG: &str = "en";

/// Lowest request id the upstream's own client produces.
pub const MIN_REQUEST_ID: i64 = 100_000_000;

/// Highest request id the upstream's own client produces.
pub const MAX_REQUEST_ID: i64 = 199_999_999;

/// Complete outbound request. Declaration order is serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundPayload {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub id: i64,
    pub params: Params,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Params {
    pub texts: Vec<TextEntry>,
    pub timestamp: i64,
    pub splitting: &'static str,
    pub lang: LangPair,
}

/// A single text to translate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEntry {
    pub text: String,
    #[serde(rename = "requestAlternatives")]
    pub request_alternatives: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LangPair {
    pub source_lang_user_selected: String,
    pub target_lang: String,
}

/// Errors raised while synthesizing a payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload could not be serialized to JSON.
    #[error("failed to encode payload: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type for payload synthesis.
pub type PayloadResult<T> = Result<T, PayloadError>;
