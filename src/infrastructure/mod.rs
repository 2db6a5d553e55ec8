//! Infrastructure layer module
//!
//! This module contains the process-level plumbing around the formatters:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
