//! Span helpers for pipeline and provider calls

use tracing::Span;

/// Create a span for one provider round trip
///
/// # Example
/// ```
/// use apo_telemetry::model_call_span;
/// let span = model_call_span("OpenAI", "gpt-4o-mini");
/// let _enter = span.enter();
/// ```
pub fn model_call_span(provider: &str, model_name: &str) -> Span {
    tracing::info_span!("model.call", provider = provider, model.name = model_name)
}

/// Create a span for one pipeline stage
///
/// # Example
/// ```
/// use apo_telemetry::stage_span;
/// let span = stage_span("analyze");
/// let _enter = span.enter();
/// ```
pub fn stage_span(stage: &str) -> Span {
    tracing::info_span!("pipeline.stage", stage = stage)
}
