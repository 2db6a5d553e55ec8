//! Implementation of the `todofmt show` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::input::TodoFile;
use crate::cli::output::RecordFormatter;

/// Arguments for `todofmt show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// YAML todo file
    pub file: PathBuf,

    /// Identifier of the todo to show
    pub id: i64,
}

/// Render one todo in detail.
pub fn execute(args: &ShowArgs, formatter: &dyn RecordFormatter) -> Result<String> {
    let todos = TodoFile::load(&args.file)?.into_todos(formatter)?;
    let todo = todos
        .iter()
        .find(|todo| todo.id == args.id)
        .with_context(|| format!("No todo with id {} in {}", args.id, args.file.display()))?;
    Ok(formatter.detailed(todo))
}
