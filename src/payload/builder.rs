//! Payload construction.
//!
//! # Responsibilities
//! - Default and upper-case the language pair
//! - Derive the timestamp from the clock and the text
//! - Serialize the JSON-RPC envelope compactly
//! - Respace the `method` key the way the upstream's own client does

use std::fmt;
use std::sync::Arc;

use crate::payload::entropy::{Clock, IdSource, RandomIds, SystemClock};
use crate::payload::types::{
    LangPair, OutboundPayload, Params, PayloadResult, TextEntry, DEFAULT_SOURCE_LANG,
    DEFAULT_TARGET_LANG, JSONRPC_VERSION, MAX_ALTERNATIVES, METHOD_HANDLE_TEXTS,
    SPLITTING_NEWLINES,
};

/// Key/value separator emitted by `serde_json` for the method field.
const METHOD_COMPACT: &str = r#""method":""#;

/// Spacing applied to the `method` key of a serialized payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodSpacing {
    /// `"method" : "`
    Spaced,
    /// `"method": "`
    Compact,
}

impl MethodSpacing {
    /// Pick the spacing for a request id.
    pub fn for_id(id: i64) -> Self {
        if (id + 5) % 29 == 0 || (id + 5) % 29 == 3 || (id + 3) % 13 == 0 {
            MethodSpacing::Spaced
        } else {
            MethodSpacing::Compact
        }
    }

    /// Replacement text for the compact `"method":"` separator.
    pub fn replacement(self) -> &'static str {
        match self {
            MethodSpacing::Spaced => r#""method" : ""#,
            MethodSpacing::Compact => r#""method": ""#,
        }
    }
}

/// Rewrite the first `"method":"` in `body` according to the spacing for `id`.
pub fn apply_method_spacing(body: &str, id: i64) -> String {
    body.replacen(METHOD_COMPACT, MethodSpacing::for_id(id).replacement(), 1)
}

/// Derive the payload timestamp from the current time and the text.
///
/// With `c` occurrences of `i` in `text`, a non-zero `c` moves `now` to
/// `now - now % (c + 1) + (c + 1)`. Without any `i` the clock value is used as is.
pub fn derive_timestamp(text: &str, now_millis: i64) -> i64 {
    let count = text.matches('i').count() as i64;
    if count == 0 {
        return now_millis;
    }
    let step = count + 1;
    now_millis - (now_millis % step) + step
}

/// Builds serialized payloads from caller input.
#[derive(Clone)]
pub struct PayloadBuilder {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
}

impl PayloadBuilder {
    /// Create a builder from explicit clock and id sources.
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>) -> Self {
        Self { clock, ids }
    }

    /// Assemble the payload structure without serializing it.
    pub fn assemble(&self, text: &str, source_lang: &str, target_lang: &str) -> OutboundPayload {
        let source = if source_lang.is_empty() { DEFAULT_SOURCE_LANG } else { source_lang };
        let target = if target_lang.is_empty() { DEFAULT_TARGET_LANG } else { target_lang };

        OutboundPayload {
            jsonrpc: JSONRPC_VERSION,
            method: METHOD_HANDLE_TEXTS,
            id: self.ids.next_id(),
            params: Params {
                texts: vec![TextEntry {
                    text: text.to_string(),
                    request_alternatives: MAX_ALTERNATIVES,
                }],
                timestamp: derive_timestamp(text, self.clock.now_millis()),
                splitting: SPLITTING_NEWLINES,
                lang: LangPair {
                    source_lang_user_selected: source.to_uppercase(),
                    target_lang: target.to_uppercase(),
                },
            },
        }
    }

    /// Build the exact request body sent upstream.
    pub fn build_payload(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> PayloadResult<String> {
        let payload = self.assemble(text, source_lang, target_lang);
        let body = serde_json::to_string(&payload)?;
        Ok(apply_method_spacing(&body, payload.id))
    }
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomIds))
    }
}

impl fmt::Debug for PayloadBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadBuilder").finish_non_exhaustive()
    }
}
