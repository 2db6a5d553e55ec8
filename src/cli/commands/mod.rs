//! Subcommand implementations.
//!
//! Each command renders to a `String` so the binary only has to print it.

pub mod input;
pub mod list;
pub mod parse;
pub mod show;

pub use input::{TodoEntry, TodoFile};
pub use list::ListArgs;
pub use parse::{ParseDateArgs, ParsePriorityArgs};
pub use show::ShowArgs;
