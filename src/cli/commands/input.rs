//! YAML todo files consumed by `list` and `show`.
//!
//! ```yaml
//! lists:
//!   - name: Work
//!     colour: "#ff8800"
//! todos:
//!   - id: 1
//!     summary: Buy milk
//!     list: Work
//!     due: tomorrow
//!     priority: high
//! ```
//!
//! `due` and `priority` hold raw user text and go through the active
//! formatter's parse path, so porcelain files use epoch seconds and 0-9.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::output::RecordFormatter;
use crate::domain::models::{Todo, TodoList};

const DEFAULT_LIST: &str = "default";

/// A YAML scalar that may be written as a number or as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A YAML integer.
    Int(i64),
    /// Anything else, kept as written.
    Text(String),
}

impl Scalar {
    /// The raw text handed to the formatter.
    pub fn as_text(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// One todo as written in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoEntry {
    /// Identifier.
    pub id: i64,
    /// Title.
    pub summary: String,
    /// List name; `default` when omitted.
    #[serde(default)]
    pub list: Option<String>,
    /// Raw due text.
    #[serde(default)]
    pub due: Option<Scalar>,
    /// Raw priority text.
    #[serde(default)]
    pub priority: Option<Scalar>,
    /// Percent complete.
    #[serde(default)]
    pub percent: Option<u8>,
    /// Free text.
    #[serde(default)]
    pub description: Option<String>,
    /// Where.
    #[serde(default)]
    pub location: Option<String>,
    /// Done.
    #[serde(default)]
    pub completed: bool,
    /// Repeats.
    #[serde(default)]
    pub recurring: bool,
}

/// A whole todo file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoFile {
    /// Declared lists and their colours.
    #[serde(default)]
    pub lists: Vec<TodoList>,
    /// Todos in display order.
    #[serde(default)]
    pub todos: Vec<TodoEntry>,
}

impl TodoFile {
    /// Read and parse a file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read todo file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid todo file {}", path.display()))
    }

    /// Parse YAML text.
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Build todos, parsing `due` and `priority` with `formatter`.
    ///
    /// Todos naming an undeclared list get a colourless list of that name.
    pub fn into_todos(self, formatter: &dyn RecordFormatter) -> Result<Vec<Todo>> {
        let mut lists: HashMap<String, Arc<TodoList>> = self
            .lists
            .into_iter()
            .map(|list| (list.name.clone(), Arc::new(list)))
            .collect();

        self.todos
            .into_iter()
            .map(|entry| {
                let list_name = entry.list.as_deref().unwrap_or(DEFAULT_LIST);
                let list = lists
                    .entry(list_name.to_string())
                    .or_insert_with(|| Arc::new(TodoList::new(list_name)))
                    .clone();
                entry.into_todo(list, formatter)
            })
            .collect()
    }
}

impl TodoEntry {
    fn into_todo(self, list: Arc<TodoList>, formatter: &dyn RecordFormatter) -> Result<Todo> {
        let id = self.id;
        let due_text = self.due.as_ref().map(Scalar::as_text);
        let priority_text = self.priority.as_ref().map(Scalar::as_text);

        let due = formatter
            .parse_datetime(due_text.as_deref())
            .with_context(|| format!("Todo {id}: invalid due"))?;
        let priority = formatter
            .parse_priority(priority_text.as_deref())
            .with_context(|| format!("Todo {id}: invalid priority"))?;

        Ok(Todo {
            id,
            summary: self.summary,
            description: self.description,
            location: self.location,
            due,
            percent_complete: self.percent,
            priority,
            is_completed: self.completed,
            is_recurring: self.recurring,
            list,
        })
    }
}
