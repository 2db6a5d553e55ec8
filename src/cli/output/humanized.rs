//! Table output with relative due times ("in 3 hours", "2 days ago").

use chrono::{NaiveTime, TimeDelta};
use chrono_humanize::{Accuracy, HumanTime, Tense};

use super::{DefaultFormatter, RecordFormatter};
use crate::domain::errors::FormatResult;
use crate::domain::models::{Due, Todo, TodoList};

const NOW_THRESHOLD_SECS: i64 = 10;

/// Like [`DefaultFormatter`], but due times read relative to "now".
#[derive(Debug, Clone)]
pub struct HumanizedFormatter {
    inner: DefaultFormatter,
}

impl HumanizedFormatter {
    /// Wrap the formatter whose tables and parsing are reused.
    pub const fn new(inner: DefaultFormatter) -> Self {
        Self { inner }
    }

    /// Time from `due` to the captured "now"; negative when `due` is ahead.
    fn elapsed(&self, due: &Due) -> TimeDelta {
        let now = self.inner.codec().now();
        match due {
            Due::DateTime(dt) => now.signed_duration_since(*dt),
            Due::Date(date) => now
                .naive_local()
                .signed_duration_since(date.and_time(NaiveTime::MIN)),
        }
    }
}

impl RecordFormatter for HumanizedFormatter {
    fn simple_action(&self, action: &str, todo: &Todo) -> String {
        self.inner.simple_action(action, todo)
    }

    fn compact(&self, todo: &Todo) -> String {
        self.compact_multiple(std::slice::from_ref(todo), false)
    }

    fn compact_multiple(&self, todos: &[Todo], hide_list: bool) -> String {
        self.inner
            .compact_multiple_with(todos, hide_list, |due| self.format_datetime(due))
    }

    fn detailed(&self, todo: &Todo) -> String {
        self.inner.detailed_with(todo, |due| self.format_datetime(due))
    }

    fn format_datetime(&self, due: Option<&Due>) -> String {
        let Some(due) = due else {
            return String::new();
        };

        let elapsed = self.elapsed(due);
        let (magnitude, tense) = if elapsed < TimeDelta::zero() {
            (-elapsed, Tense::Future)
        } else {
            (elapsed, Tense::Past)
        };
        // Rough accuracy collapses anything this close into "now".
        let tense = if magnitude.num_seconds() <= NOW_THRESHOLD_SECS {
            Tense::Present
        } else {
            tense
        };
        HumanTime::from(magnitude).to_text_en(Accuracy::Rough, tense)
    }

    fn parse_datetime(&self, text: Option<&str>) -> FormatResult<Option<Due>> {
        self.inner.parse_datetime(text)
    }

    fn parse_priority(&self, text: Option<&str>) -> FormatResult<Option<u8>> {
        self.inner.parse_priority(text)
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
