//! Implementation of `todofmt parse-date` and `todofmt parse-priority`.

use anyhow::Result;
use clap::Args;

use crate::cli::output::RecordFormatter;

/// Arguments for `todofmt parse-date`.
#[derive(Args, Debug)]
pub struct ParseDateArgs {
    /// Date/time description, e.g. "2024-03-01", "18:30" or "next friday"
    pub text: String,
}

/// Arguments for `todofmt parse-priority`.
#[derive(Args, Debug)]
pub struct ParsePriorityArgs {
    /// Priority name (none, low, medium, high) or 0-9 in porcelain mode
    pub text: String,
}

/// Parse and re-render; an empty description prints nothing.
pub fn execute_date(args: &ParseDateArgs, formatter: &dyn RecordFormatter) -> Result<String> {
    let due = formatter.parse_datetime(Some(args.text.as_str()))?;
    Ok(formatter.format_datetime(due.as_ref()))
}

/// Print the band name followed by the numeric value, e.g. `high (4)`.
pub fn execute_priority(args: &ParsePriorityArgs, formatter: &dyn RecordFormatter) -> Result<String> {
    let priority = formatter.parse_priority(Some(args.text.as_str()))?;
    let band = formatter.format_priority(priority);
    Ok(match priority {
        Some(value) => format!("{band} ({value})"),
        None => band.to_string(),
    })
}
