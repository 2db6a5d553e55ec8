//! Domain layer for todo rendering
//!
//! Todo records, priority bands, timezones and the error taxonomy shared by
//! every output mode.

pub mod errors;
pub mod models;

// Re-export error types for convenient access
pub use errors::{FormatError, FormatResult, ParameterError};
