//! Services that turn configuration into parse/format behaviour.

pub mod datetime_parser;

pub use datetime_parser::{DateTimeCodec, ParseStrategy};
