//! Todo records and the lists that own them.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A due moment: either a whole calendar day or a timezone-bearing instant.
///
/// Callers must branch on the variant. A date is never compared against a
/// date-time without first deciding how to widen or narrow one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    /// A whole calendar day.
    Date(NaiveDate),
    /// An instant with its UTC offset.
    DateTime(DateTime<FixedOffset>),
}

impl Due {
    /// Whether this is a whole-day value.
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// The instant, if this is a date-time.
    pub const fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            Self::Date(_) => None,
        }
    }

    /// The day, if this is a whole-day value.
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(_) => None,
        }
    }
}

impl From<NaiveDate> for Due {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<FixedOffset>> for Due {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::DateTime(dt)
    }
}

impl fmt::Display for Due {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

/// A list (calendar) that todos belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Display name, rendered as `@name`.
    pub name: String,
    /// Hex colour in `#RRGGBB` form, if the list has one.
    #[serde(default)]
    pub colour: Option<String>,
}

impl TodoList {
    /// A list without a colour.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colour: None,
        }
    }

    /// Set the `#RRGGBB` colour.
    #[must_use]
    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = Some(colour.into());
        self
    }
}

/// A single task as read from storage. Rendering never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Numeric identifier shown in the first column.
    pub id: i64,
    /// One-line title.
    pub summary: String,
    /// Free text, possibly multi-line.
    pub description: Option<String>,
    /// Where the task happens.
    pub location: Option<String>,
    /// When the task is due.
    pub due: Option<Due>,
    /// Percent complete, 0-100.
    pub percent_complete: Option<u8>,
    /// Priority on the 0-9 scale, 0 meaning none.
    pub priority: Option<u8>,
    /// Completed todos are never overdue.
    pub is_completed: bool,
    /// Has a recurrence rule.
    pub is_recurring: bool,
    /// Owning list, shared between todos.
    pub list: Arc<TodoList>,
}

impl Todo {
    /// Create an open, non-recurring todo with only the required fields.
    pub fn new(id: i64, summary: impl Into<String>, list: Arc<TodoList>) -> Self {
        Self {
            id,
            summary: summary.into(),
            description: None,
            location: None,
            due: None,
            percent_complete: None,
            priority: None,
            is_completed: false,
            is_recurring: false,
            list,
        }
    }

    /// Set the due value.
    #[must_use]
    pub fn with_due(mut self, due: impl Into<Due>) -> Self {
        self.due = Some(due.into());
        self
    }

    /// Set the 0-9 priority.
    #[must_use]
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set percent complete.
    #[must_use]
    pub fn with_percent(mut self, percent: u8) -> Self {
        self.percent_complete = Some(percent);
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Mark done or open.
    #[must_use]
    pub fn completed(mut self, done: bool) -> Self {
        self.is_completed = done;
        self
    }

    /// Mark as recurring.
    #[must_use]
    pub fn recurring(mut self, recurring: bool) -> Self {
        self.is_recurring = recurring;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_variants() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let due = Due::from(date);
        assert!(due.is_date());
        assert_eq!(due.as_date(), Some(date));
        assert!(due.as_datetime().is_none());

        let dt = DateTime::parse_from_rfc3339("2024-03-01T09:30:00+01:00").unwrap();
        let due = Due::from(dt);
        assert!(!due.is_date());
        assert_eq!(due.as_datetime(), Some(&dt));
        assert_eq!(due.to_string(), "2024-03-01T09:30:00+01:00");
    }

    #[test]
    fn test_todo_builder() {
        let list = Arc::new(TodoList::new("Home").with_colour("#ff0000"));
        let todo = Todo::new(7, "Water plants", list.clone())
            .with_priority(5)
            .with_percent(40)
            .completed(true);

        assert_eq!(todo.id, 7);
        assert_eq!(todo.priority, Some(5));
        assert_eq!(todo.percent_complete, Some(40));
        assert!(todo.is_completed);
        assert!(!todo.is_recurring);
        assert_eq!(todo.list.colour.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_list_yaml() {
        let list: TodoList = serde_yaml::from_str("name: Work\n").unwrap();
        assert_eq!(list, TodoList::new("Work"));
    }
}
