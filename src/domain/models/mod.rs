//! Domain models: todos, priorities, zones and configuration.

pub mod config;
pub mod priority;
pub mod todo;
pub mod zone;

pub use config::{Config, FormattingConfig, LoggingConfig};
pub use priority::{format_priority, format_priority_compact, parse_priority, PriorityBand};
pub use todo::{Due, Todo, TodoList};
pub use zone::{UnknownTimezone, Zone};
