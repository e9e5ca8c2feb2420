//! Anthropic-style messages API.
//!
//! Sends `POST /v1/messages` with `x-api-key` and `anthropic-version` headers.
//! The system prompt is extended with a JSON-only reminder since this API has
//! no response format switch. Generated text is the newline-joined `text` of
//! every `text` content block.

pub(crate) mod convert;
mod transport;

pub use transport::{ANTHROPIC_API_VERSION, AnthropicTransport};
