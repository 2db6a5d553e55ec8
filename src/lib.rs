//! Todofmt - rendering and parsing for command-line todo managers
//!
//! Turns todo records into text and user text back into structured values.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): todo records, priority bands, timezones, errors
//! - **Service Layer** (`services`): date/time parse cascade and formatting
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): colours, table layout, output modes, demo binary
//!
//! # Output modes
//!
//! [`DefaultFormatter`] prints borderless tables with absolute dates,
//! [`HumanizedFormatter`] prints relative dates ("in 3 hours") and
//! [`PorcelainFormatter`] prints JSON with epoch timestamps. All three
//! implement [`RecordFormatter`].
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todofmt::{DefaultFormatter, FormattingConfig, RecordFormatter, Todo, TodoList};
//!
//! let formatter = DefaultFormatter::new(&FormattingConfig::default())?;
//! let due = formatter.parse_datetime(Some("tomorrow"))?;
//! let mut todo = Todo::new(1, "Buy milk", Arc::new(TodoList::new("Home")));
//! todo.due = due;
//! println!("{}", formatter.compact(&todo));
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use cli::output::{
    build_formatter, formatter_from_config, formatter_from_config_at, DefaultFormatter,
    HumanizedFormatter, OutputMode, PorcelainFormatter, RecordFormatter,
};
pub use domain::models::{
    Config, Due, FormattingConfig, LoggingConfig, PriorityBand, Todo, TodoList, Zone,
};
pub use domain::{FormatError, FormatResult, ParameterError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{DateTimeCodec, ParseStrategy};
