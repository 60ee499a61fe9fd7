//! Caller-facing contract, upstream reply shape, and gateway errors.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::payload::PayloadError;

/// Decode `null` as the type's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Inbound translation request.
///
/// Missing or `null` fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_lang: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target_lang: String,
}

/// Result returned to the caller. `code` doubles as the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResult {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

impl TranslateResult {
    /// A result carrying only a code and message.
    pub fn failure(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            source_lang: None,
            target_lang: None,
            alternatives: None,
        }
    }

    /// A successful translation, echoing the caller's language values.
    pub fn success(translation: Translation, request: &TranslateRequest) -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
            data: Some(translation.text),
            source_lang: Some(request.source_lang.clone()),
            target_lang: Some(request.target_lang.clone()),
            alternatives: Some(translation.alternatives),
        }
    }
}

/// Flattened upstream translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub alternatives: Vec<String>,
}

/// Upstream reply: `{result: {texts: [{text, alternatives: [{text}]}]}}`.
///
/// Missing or `null` members decode as empty values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamReply {
    #[serde(deserialize_with = "null_as_default")]
    pub result: UpstreamResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamResult {
    #[serde(deserialize_with = "null_as_default")]
    pub texts: Vec<UpstreamText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamText {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alternatives: Vec<UpstreamAlternative>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamAlternative {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

impl UpstreamReply {
    /// Flatten the first text entry. `None` when the upstream returned no texts.
    pub fn into_translation(self) -> Option<Translation> {
        let first = self.result.texts.into_iter().next()?;
        Some(Translation {
            text: first.text,
            alternatives: first.alternatives.into_iter().map(|alt| alt.text).collect(),
        })
    }
}

/// Errors that end a translation attempt.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The caller sent no text.
    #[error("no text to translate")]
    EmptyText,

    /// The outbound payload could not be built.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// The upstream could not be reached or the exchange broke off.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream replied 200 with a body that is not the expected JSON.
    #[error("failed to decode upstream reply: {0}")]
    Decode(String),

    /// The upstream replied 200 with an empty `texts` list.
    #[error("upstream reply contained no translations")]
    EmptyResult,

    /// The upstream replied with a non-200 status.
    #[error("upstream returned status {0}")]
    Status(u16),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<GatewayError> for TranslateResult {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::EmptyText => TranslateResult::failure(404, "No Translate Text Found"),
            GatewayError::Payload(_) => TranslateResult::failure(500, "Failed to build request body"),
            GatewayError::Transport(_) => TranslateResult::failure(500, "Request failed"),
            GatewayError::Decode(_) | GatewayError::EmptyResult => {
                TranslateResult::failure(500, "Failed to decode response")
            }
            GatewayError::Status(429) => {
                TranslateResult::failure(429, "Too many requests, please try again later.")
            }
            GatewayError::Status(status) => TranslateResult::failure(status, "Unknown error."),
        }
    }
}
