//! Todo output modes.
//!
//! Every mode implements [`RecordFormatter`] in full. The humanized and
//! porcelain modes wrap a [`DefaultFormatter`] and forward the operations
//! they leave unchanged to it.

pub mod default;
pub mod humanized;
pub mod porcelain;

use chrono::{DateTime, FixedOffset};

use crate::domain::errors::FormatResult;
use crate::domain::models::{Due, FormattingConfig, Todo, TodoList};
use crate::services::DateTimeCodec;

pub use default::DefaultFormatter;
pub use humanized::HumanizedFormatter;
pub use porcelain::PorcelainFormatter;

/// Renders todos to text and parses user-supplied dates and priorities.
pub trait RecordFormatter: Send + Sync {
    /// One-line message such as `Deleted "Buy milk"`.
    fn simple_action(&self, action: &str, todo: &Todo) -> String;

    /// A single todo, rendered like one row of [`Self::compact_multiple`].
    fn compact(&self, todo: &Todo) -> String;

    /// All todos in input order; `hide_list` drops the `@list` annotation.
    fn compact_multiple(&self, todos: &[Todo], hide_list: bool) -> String;

    /// The compact form followed by description and location.
    fn detailed(&self, todo: &Todo) -> String;

    /// Due text for tables; absent renders as "".
    fn format_datetime(&self, due: Option<&Due>) -> String;

    /// Parse a due description; empty or absent means none.
    fn parse_datetime(&self, text: Option<&str>) -> FormatResult<Option<Due>>;

    /// Parse a priority into the 0-9 scale.
    fn parse_priority(&self, text: Option<&str>) -> FormatResult<Option<u8>>;

    /// Band name: `none`, `high`, `medium` or `low`.
    fn format_priority(&self, priority: Option<u8>) -> &'static str;

    /// Glyph form used in the table's priority column.
    fn format_priority_compact(&self, priority: Option<u8>) -> &'static str;

    /// The owning list as `@name`, coloured when possible.
    fn format_database(&self, list: &TodoList) -> String;
}

/// Which formatter to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Absolute dates in plain tables.
    #[default]
    Default,
    /// Relative due times.
    Humanized,
    /// JSON for scripts.
    Porcelain,
}

impl OutputMode {
    /// Porcelain wins over humanize when both are requested.
    pub const fn from_flags(porcelain: bool, humanize: bool) -> Self {
        if porcelain {
            Self::Porcelain
        } else if humanize {
            Self::Humanized
        } else {
            Self::Default
        }
    }

    /// Lowercase mode name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Humanized => "humanized",
            Self::Porcelain => "porcelain",
        }
    }
}

/// Build the formatter for `mode` around an existing codec.
pub fn build_formatter(mode: OutputMode, codec: DateTimeCodec) -> Box<dyn RecordFormatter> {
    tracing::debug!(
        mode = mode.as_str(),
        zone = %codec.zone(),
        now = %codec.now(),
        "building formatter"
    );
    let base = DefaultFormatter::from_codec(codec);
    match mode {
        OutputMode::Default => Box::new(base),
        OutputMode::Humanized => Box::new(HumanizedFormatter::new(base)),
        OutputMode::Porcelain => Box::new(PorcelainFormatter::new(base)),
    }
}

/// Build the formatter selected by the config's `humanize`/`porcelain` flags.
pub fn formatter_from_config(config: &FormattingConfig) -> FormatResult<Box<dyn RecordFormatter>> {
    let mode = OutputMode::from_flags(config.porcelain, config.humanize);
    Ok(build_formatter(mode, DateTimeCodec::new(config)?))
}

/// Same as [`formatter_from_config`] with an injected "now".
pub fn formatter_from_config_at(
    config: &FormattingConfig,
    now: DateTime<FixedOffset>,
) -> FormatResult<Box<dyn RecordFormatter>> {
    let mode = OutputMode::from_flags(config.porcelain, config.humanize);
    Ok(build_formatter(mode, DateTimeCodec::with_now(config, now)?))
}
