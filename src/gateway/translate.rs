//! Translation flow: validate, synthesize, exchange, normalize.

use crate::gateway::client::UpstreamClient;
use crate::gateway::types::{GatewayError, GatewayResult, TranslateRequest, TranslateResult, Translation};
use crate::observability::metrics;
use crate::payload::PayloadBuilder;

/// Stateless translation gateway. Cheap to clone; share one per process.
#[derive(Debug, Clone)]
pub struct TranslationGateway {
    builder: PayloadBuilder,
    client: UpstreamClient,
}

impl TranslationGateway {
    pub fn new(builder: PayloadBuilder, client: UpstreamClient) -> Self {
        Self { builder, client }
    }

    /// Translate a request into the caller-facing result. Every failure is logged once.
    pub async fn translate(&self, request: &TranslateRequest) -> TranslateResult {
        let result = match self.try_translate(request).await {
            Ok(translation) => TranslateResult::success(translation, request),
            Err(err) => {
                log_failure(&err);
                TranslateResult::from(err)
            }
        };
        metrics::record_translation(result.code);
        result
    }

    /// Same flow as [`translate`](Self::translate) with the failure kept typed.
    pub async fn try_translate(&self, request: &TranslateRequest) -> GatewayResult<Translation> {
        if request.text.is_empty() {
            return Err(GatewayError::EmptyText);
        }

        let body = self
            .builder
            .build_payload(&request.text, &request.source_lang, &request.target_lang)?;

        tracing::debug!(
            endpoint = %self.client.endpoint(),
            source_lang = %request.source_lang,
            target_lang = %request.target_lang,
            chars = request.text.chars().count(),
            "Forwarding translation upstream"
        );

        self.client.exchange(body).await
    }
}

fn log_failure(err: &GatewayError) {
    match err {
        GatewayError::EmptyText => tracing::debug!("Rejected request without text"),
        GatewayError::Payload(e) => tracing::error!(error = %e, "Error building request body"),
        GatewayError::Transport(e) => tracing::error!(error = %e, "Error making upstream request"),
        GatewayError::Decode(e) => tracing::error!(error = %e, "Error decoding upstream reply"),
        GatewayError::EmptyResult => tracing::error!("Upstream reply contained no texts"),
        GatewayError::Status(status) => tracing::warn!(status = *status, "Upstream returned non-200 status"),
    }
}
