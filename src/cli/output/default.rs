//! Plain table output for todos.

use std::slice;

use chrono::{DateTime, FixedOffset};

use super::RecordFormatter;
use crate::cli::display::{colors_enabled, overdue, plain_table, rgb_to_ansi, RESET};
use crate::domain::errors::FormatResult;
use crate::domain::models::priority;
use crate::domain::models::{Due, FormattingConfig, Todo, TodoList};
use crate::services::DateTimeCodec;

const RECURRING_MARKER: &str = "\u{27f3}";

/// Renders todos as borderless tables with absolute dates.
#[derive(Debug, Clone)]
pub struct DefaultFormatter {
    codec: DateTimeCodec,
}

impl DefaultFormatter {
    /// Build from config, sampling "now" from the clock.
    pub fn new(config: &FormattingConfig) -> FormatResult<Self> {
        Ok(Self::from_codec(DateTimeCodec::new(config)?))
    }

    /// Build from config with an injected "now".
    pub fn with_now(config: &FormattingConfig, now: DateTime<FixedOffset>) -> FormatResult<Self> {
        Ok(Self::from_codec(DateTimeCodec::with_now(config, now)?))
    }

    /// Wrap an existing codec.
    pub const fn from_codec(codec: DateTimeCodec) -> Self {
        Self { codec }
    }

    /// The codec used for dates.
    pub const fn codec(&self) -> &DateTimeCodec {
        &self.codec
    }

    /// A todo is overdue when it is open and due at or before "now".
    ///
    /// Date-only dues compare against today's date in the configured zone.
    pub fn is_overdue(&self, todo: &Todo) -> bool {
        if todo.is_completed {
            return false;
        }
        let now = self.codec.now();
        match &todo.due {
            None => false,
            Some(Due::Date(date)) => *date <= now.date_naive(),
            Some(Due::DateTime(dt)) => *dt <= now,
        }
    }

    /// Table rows with the due column rendered by `due_text`.
    pub(crate) fn compact_multiple_with<F>(&self, todos: &[Todo], hide_list: bool, due_text: F) -> String
    where
        F: Fn(Option<&Due>) -> String,
    {
        tracing::trace!(count = todos.len(), hide_list, "rendering todo table");

        let rows = todos.iter().map(|todo| {
            let completed = if todo.is_completed { "[X]" } else { "[ ]" };

            let mut due = due_text(todo.due.as_ref());
            if self.is_overdue(todo) {
                due = overdue(&due);
            }
            let recurring = if todo.is_recurring { RECURRING_MARKER } else { "" };
            let due_cell = [due.as_str(), recurring]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");

            let percent = todo
                .percent_complete
                .filter(|p| *p > 0)
                .map(|p| format!(" ({p}%)"))
                .unwrap_or_default();
            let summary = if hide_list {
                format!("{} {percent}", todo.summary).trim_end().to_string()
            } else {
                format!("{} {}{percent}", todo.summary, self.format_database(&todo.list))
            };

            vec![
                todo.id.to_string(),
                completed.to_string(),
                priority::format_priority_compact(todo.priority).to_string(),
                due_cell,
                summary,
            ]
        });

        plain_table(rows, &[0])
    }

    /// Compact row followed by description and location, if any.
    pub(crate) fn detailed_with<F>(&self, todo: &Todo, due_text: F) -> String
    where
        F: Fn(Option<&Due>) -> String,
    {
        let compact = self.compact_multiple_with(slice::from_ref(todo), false, due_text);

        let mut extra_rows = columnize_text("Description", todo.description.as_deref());
        extra_rows.extend(columnize_text("Location", todo.location.as_deref()));

        if extra_rows.is_empty() {
            return compact;
        }
        format!("{compact}\n\n{}", plain_table(extra_rows, &[]))
    }
}

/// Split text on line endings into label/content rows.
pub fn columnize_text(label: &str, text: Option<&str>) -> Vec<Vec<String>> {
    let lines: Vec<&str> = text.map(|t| t.lines().collect()).unwrap_or_default();
    columnize_list(label, &lines)
}

/// One row per item; only the first row carries the label.
pub fn columnize_list(label: &str, items: &[&str]) -> Vec<Vec<String>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let label = if i == 0 { label } else { "" };
            vec![label.to_string(), (*item).to_string()]
        })
        .collect()
}

impl RecordFormatter for DefaultFormatter {
    fn simple_action(&self, action: &str, todo: &Todo) -> String {
        format!("{action} \"{}\"", todo.summary)
    }

    fn compact(&self, todo: &Todo) -> String {
        self.compact_multiple(slice::from_ref(todo), false)
    }

    fn compact_multiple(&self, todos: &[Todo], hide_list: bool) -> String {
        self.compact_multiple_with(todos, hide_list, |due| self.format_datetime(due))
    }

    fn detailed(&self, todo: &Todo) -> String {
        self.detailed_with(todo, |due| self.format_datetime(due))
    }

    fn format_datetime(&self, due: Option<&Due>) -> String {
        self.codec.format(due)
    }

    fn parse_datetime(&self, text: Option<&str>) -> FormatResult<Option<Due>> {
        self.codec.parse(text)
    }

    fn parse_priority(&self, text: Option<&str>) -> FormatResult<Option<u8>> {
        priority::parse_priority(text)
    }

    fn format_priority(&self, priority: Option<u8>) -> &'static str {
        priority::format_priority(priority)
    }

    fn format_priority_compact(&self, priority: Option<u8>) -> &'static str {
        priority::format_priority_compact(priority)
    }

    fn format_database(&self, list: &TodoList) -> String {
        if !colors_enabled() {
            return format!("@{}", list.name);
        }
        let prefix = rgb_to_ansi(list.colour.as_deref()).unwrap_or_default();
        format!("{prefix}@{}{RESET}", list.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};
    use std::sync::Arc;

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, 10, 0, 0)
            .unwrap()
    }

    fn formatter() -> DefaultFormatter {
        let config = FormattingConfig {
            timezone: Some("UTC".to_string()),
            ..Default::default()
        };
        DefaultFormatter::with_now(&config, now()).unwrap()
    }

    fn work() -> Arc<TodoList> {
        Arc::new(TodoList::new("Work"))
    }

    #[test]
    fn test_simple_action() {
        let todo = Todo::new(1, "Buy milk", work());
        assert_eq!(formatter().simple_action("Deleted", &todo), "Deleted \"Buy milk\"");
    }

    #[test]
    fn test_compact_row() {
        let tomorrow = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let todo = Todo::new(1, "Buy milk", work())
            .with_priority(4)
            .with_due(tomorrow);

        let out = formatter().compact(&todo);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("1  [ ]  !!!  2024-03-02  Buy milk @Work"));
    }

    #[test]
    fn test_completed_and_percent() {
        let todo = Todo::new(3, "Report", work()).with_percent(50).completed(true);
        let out = formatter().compact(&todo);
        assert!(out.contains("[X]"));
        assert!(out.contains("Report @Work"));
        assert!(out.ends_with(" (50%)"));
    }

    #[test]
    fn test_zero_percent_is_hidden() {
        let todo = Todo::new(3, "Report", work()).with_percent(0);
        assert!(!formatter().compact(&todo).contains('%'));
    }

    #[test]
    fn test_hide_list() {
        let todos = vec![
            Todo::new(1, "One", work()).with_percent(10),
            Todo::new(2, "Two", work()),
        ];
        let out = formatter().compact_multiple(&todos, true);
        assert!(!out.contains("@Work"));
        assert!(out.contains("One  (10%)"));
        assert!(out.lines().nth(1).unwrap().ends_with("Two"));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_recurring_marker() {
        let todo = Todo::new(5, "Standup", work())
            .with_due(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
            .recurring(true);
        assert!(formatter().compact(&todo).contains("2024-03-04 \u{27f3}"));
    }

    #[test]
    fn test_overdue_detection() {
        let f = formatter();
        let todo = Todo::new(1, "Now", work()).with_due(now());
        assert!(f.is_overdue(&todo));
        assert!(!f.is_overdue(&todo.clone().completed(true)));

        let later = Todo::new(2, "Later", work()).with_due(now() + Duration::minutes(1));
        assert!(!f.is_overdue(&later));

        let today = Todo::new(3, "Today", work()).with_due(now().date_naive());
        assert!(f.is_overdue(&today));

        assert!(!f.is_overdue(&Todo::new(4, "Whenever", work())));
    }

    #[test]
    fn test_overdue_is_highlighted() {
        colored::control::set_override(true);
        let todo = Todo::new(1, "Now", work()).with_due(now());
        let f = formatter();
        assert!(f.compact(&todo).contains("\x1b[31m2024-03-01 10:00\x1b[0m"));
        assert!(!f.compact(&todo.completed(true)).contains("\x1b[31m"));
    }

    #[test]
    fn test_format_database() {
        colored::control::set_override(true);
        let f = formatter();
        let coloured = TodoList::new("Home").with_colour("#ff0000");
        assert_eq!(f.format_database(&coloured), "\x1b[38;2;255;0;0m@Home\x1b[0m");

        let broken = TodoList::new("Home").with_colour("red");
        assert_eq!(f.format_database(&broken), "@Home\x1b[0m");
        assert_eq!(f.format_database(&TodoList::new("Home")), "@Home\x1b[0m");
    }

    #[test]
    fn test_detailed_without_extras_matches_compact() {
        colored::control::set_override(true);
        let todo = Todo::new(1, "Plain", work());
        let f = formatter();
        assert_eq!(f.detailed(&todo), f.compact(&todo));
    }

    #[test]
    fn test_detailed_with_description_and_location() {
        colored::control::set_override(true);
        let todo = Todo::new(1, "Trip", work())
            .with_description("pack bags\nbook taxi")
            .with_location("Airport");
        let f = formatter();
        let out = f.detailed(&todo);

        let (head, tail) = out.split_once("\n\n").expect("blank line before details");
        assert_eq!(head, f.compact(&todo));

        let lines: Vec<&str> = tail.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Description"));
        assert!(lines[0].ends_with("pack bags"));
        assert!(lines[1].trim_start().starts_with("book taxi"));
        assert_eq!(lines[0].find("pack"), lines[1].find("book"));
        assert!(lines[2].starts_with("Location"));
    }

    #[test]
    fn test_columnize() {
        assert!(columnize_text("Description", None).is_empty());
        assert!(columnize_text("Description", Some("")).is_empty());
        assert_eq!(
            columnize_list("Label", &["a", "b"]),
            vec![
                vec!["Label".to_string(), "a".to_string()],
                vec![String::new(), "b".to_string()],
            ]
        );
    }

    #[test]
    fn test_priority_delegation() {
        let f = formatter();
        assert_eq!(f.parse_priority(Some("medium")).unwrap(), Some(5));
        assert_eq!(f.format_priority(Some(7)), "low");
        assert_eq!(f.format_priority_compact(Some(2)), "!!!");
    }
}
