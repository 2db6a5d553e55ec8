//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting
//! - `RUST_LOG` overrides on top of the configured level
//! - Output on stderr so rendered todos stay clean on stdout

pub mod logger;

pub use logger::{init_logging, LogFormat};
