//! Implementation of the `todofmt list` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::input::TodoFile;
use crate::cli::output::RecordFormatter;

/// Arguments for `todofmt list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// YAML todo file
    pub file: PathBuf,

    /// Leave the list name out of the summary column
    #[arg(long)]
    pub hide_list: bool,
}

/// Render every todo in the file.
pub fn execute(args: &ListArgs, formatter: &dyn RecordFormatter) -> Result<String> {
    let todos = TodoFile::load(&args.file)?.into_todos(formatter)?;
    tracing::debug!(count = todos.len(), file = %args.file.display(), "listing todos");
    Ok(formatter.compact_multiple(&todos, args.hide_list))
}
