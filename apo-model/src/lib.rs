//! # apo-model
//!
//! Completion client for ai-priority-architect.
//!
//! ## Overview
//!
//! - [`LlmClient`] - one POST per completion against the configured provider
//! - [`ProviderConfig`] / [`Provider`] - explicit configuration, sourced once at the boundary
//! - [`Transport`] - per-provider request builder and response extractor
//! - [`MockCompletion`] - scripted backend for tests
//!
//! ## Supported Providers
//!
//! | Provider | Endpoint | Auth |
//! |----------|----------|------|
//! | `openai` | `/v1/chat/completions` | `Authorization: Bearer` |
//! | `anthropic` | `/v1/messages` | `x-api-key` + `anthropic-version` |

pub mod anthropic;
pub mod client;
pub mod config;
pub mod mock;
pub mod openai;
pub mod transport;

pub use anthropic::AnthropicTransport;
pub use client::LlmClient;
pub use config::{Provider, ProviderConfig};
pub use mock::MockCompletion;
pub use openai::OpenAITransport;
pub use transport::Transport;
