//! Domain errors for todo parsing and rendering.

use std::num::ParseIntError;

use thiserror::Error;

use crate::domain::models::UnknownTimezone;

/// Errors raised while turning user text into structured todo values.
#[derive(Debug, Error)]
pub enum FormatError {
    /// No pattern or phrase matched the input.
    #[error("Time description not recognized: {0}")]
    UnrecognizedTime(String),

    /// Not one of the symbolic priority names.
    #[error("Priority has to be one of low, medium, high or none (got {0:?})")]
    InvalidPriority(String),

    /// Strict machine input that failed to convert.
    #[error("Invalid value {value:?}: {source}")]
    BadParameter {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        #[source]
        source: ParameterError,
    },

    /// The wall-clock time falls in a DST gap.
    #[error("Local time {0} does not exist in the configured timezone")]
    NonexistentLocalTime(String),

    /// A strftime pattern that cannot render its value kind.
    #[error("Invalid {kind} pattern: {pattern:?}")]
    InvalidPattern {
        /// `date`, `time` or `datetime`.
        kind: &'static str,
        /// The offending pattern.
        pattern: String,
    },

    /// The configured timezone name is unknown.
    #[error(transparent)]
    Timezone(#[from] UnknownTimezone),
}

/// Conversion failures behind [`FormatError::BadParameter`].
///
/// Machine-oriented callers get these instead of the interactive vocabulary
/// errors, so scripts can tell malformed input from an unknown name.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// Not a base-10 integer.
    #[error(transparent)]
    NotAnInteger(#[from] ParseIntError),

    /// Integer outside 0-9.
    #[error("Priority has to be in the range 0-9")]
    PriorityOutOfRange(i64),

    /// Epoch seconds chrono cannot represent.
    #[error("Timestamp {0} is out of range")]
    TimestampOutOfRange(i64),
}

/// Result alias for parse and format operations.
pub type FormatResult<T> = Result<T, FormatError>;

impl FormatError {
    /// Wrap a parameter conversion failure together with the offending text.
    pub fn bad_parameter(value: &str, source: impl Into<ParameterError>) -> Self {
        Self::BadParameter {
            value: value.to_string(),
            source: source.into(),
        }
    }
}
