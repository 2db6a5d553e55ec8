//! Machine-readable JSON output.
//!
//! The object shape is a stable contract for scripts: keys `completed`,
//! `due`, `id`, `list`, `location`, `percent`, `priority`, `summary`, always
//! present, sorted, `null` when absent. Dates are epoch seconds.

use chrono::{NaiveTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{DefaultFormatter, RecordFormatter};
use crate::domain::errors::{FormatError, FormatResult, ParameterError};
use crate::domain::models::{Due, Todo, TodoList};

/// Fields are declared in key order so serialization is sorted.
#[derive(Debug, Serialize)]
struct PorcelainTodo<'a> {
    completed: bool,
    due: Option<i64>,
    id: i64,
    list: &'a str,
    location: Option<&'a str>,
    percent: Option<u8>,
    priority: Option<u8>,
    summary: &'a str,
}

/// JSON output; parses epoch timestamps and numeric priorities.
#[derive(Debug, Clone)]
pub struct PorcelainFormatter {
    inner: DefaultFormatter,
}

impl PorcelainFormatter {
    /// Wrap the formatter whose zone and list rendering are reused.
    pub const fn new(inner: DefaultFormatter) -> Self {
        Self { inner }
    }

    /// Epoch seconds for a due value. Dates count from local midnight.
    pub fn epoch_seconds(&self, due: Option<&Due>) -> Option<i64> {
        match due? {
            Due::DateTime(dt) => Some(dt.timestamp()),
            Due::Date(date) => {
                let midnight = date.and_time(NaiveTime::MIN);
                let instant = self
                    .inner
                    .codec()
                    .zone()
                    .localize(&midnight)
                    .map_or_else(|| midnight.and_utc().timestamp(), |dt| dt.timestamp());
                Some(instant)
            }
        }
    }

    fn as_record<'a>(&self, todo: &'a Todo) -> PorcelainTodo<'a> {
        PorcelainTodo {
            completed: todo.is_completed,
            due: self.epoch_seconds(todo.due.as_ref()),
            id: todo.id,
            list: &todo.list.name,
            location: todo.location.as_deref(),
            percent: todo.percent_complete,
            priority: todo.priority,
            summary: &todo.summary,
        }
    }
}

/// Pretty JSON with four-space indentation.
fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    if let Err(err) = value.serialize(&mut ser) {
        tracing::error!(error = %err, "failed to serialize todo");
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

impl RecordFormatter for PorcelainFormatter {
    fn simple_action(&self, _action: &str, todo: &Todo) -> String {
        self.compact(todo)
    }

    fn compact(&self, todo: &Todo) -> String {
        to_json(&self.as_record(todo))
    }

    fn compact_multiple(&self, todos: &[Todo], _hide_list: bool) -> String {
        let records: Vec<PorcelainTodo<'_>> = todos.iter().map(|t| self.as_record(t)).collect();
        to_json(&records)
    }

    fn detailed(&self, todo: &Todo) -> String {
        self.compact(todo)
    }

    fn format_datetime(&self, due: Option<&Due>) -> String {
        self.epoch_seconds(due)
            .map(|secs| secs.to_string())
            .unwrap_or_default()
    }

    /// Epoch seconds in UTC. Empty or zero means "not given".
    fn parse_datetime(&self, text: Option<&str>) -> FormatResult<Option<Due>> {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };
        let secs: i64 = text
            .trim()
            .parse()
            .map_err(|err| FormatError::bad_parameter(text, ParameterError::from(err)))?;
        if secs == 0 {
            return Ok(None);
        }
        Utc.timestamp_opt(secs, 0)
            .single()
            .map(|dt| Some(Due::DateTime(dt.fixed_offset())))
            .ok_or_else(|| FormatError::bad_parameter(text, ParameterError::TimestampOutOfRange(secs)))
    }

    /// Integer 0-9; anything else is a parameter error.
    fn parse_priority(&self, text: Option<&str>) -> FormatResult<Option<u8>> {
        let Some(text) = text else {
            return Ok(None);
        };
        let value: i64 = text
            .trim()
            .parse()
            .map_err(|err| FormatError::bad_parameter(text, ParameterError::from(err)))?;
        match u8::try_from(value) {
            Ok(priority @ 0..=9) => Ok(Some(priority)),
            _ => Err(FormatError::bad_parameter(
                text,
                ParameterError::PriorityOutOfRange(value),
            )),
        }
    }

    fn format_priority(&self, priority: Option<u8>) -> &'static str {
        self.inner.format_priority(priority)
    }

    fn format_priority_compact(&self, priority: Option<u8>) -> &'static str {
        self.inner.format_priority_compact(priority)
    }

    fn format_database(&self, list: &TodoList) -> String {
        self.inner.format_database(list)
    }
}
