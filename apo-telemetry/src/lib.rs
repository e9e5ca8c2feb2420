//! # apo-telemetry
//!
//! Structured logging for ai-priority-architect.
//!
//! ## Usage
//!
//! ```rust
//! use apo_telemetry::{info, init_telemetry};
//!
//! init_telemetry("ai-priority-architect").expect("telemetry");
//! info!("pipeline starting");
//! ```

pub mod init;
pub mod spans;

// Re-export tracing macros for convenience
pub use tracing::{Instrument, Span, debug, error, info, instrument, trace, warn};

pub use init::{init_telemetry, init_telemetry_with_default};
pub use spans::*;
