//! OpenAI-style chat completions.
//!
//! Sends `POST /v1/chat/completions` with bearer authentication and asks for a
//! `json_object` response format. The generated text is read from
//! `choices[0].message.content`.

pub(crate) mod convert;
mod transport;

pub use transport::OpenAITransport;
