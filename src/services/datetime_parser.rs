//! Bidirectional conversion between user text and [`Due`] values.
//!
//! Parsing walks a fixed cascade of strategies: the configured date-time
//! pattern, the date pattern, the time pattern (anchored to today), and
//! finally natural-language phrases such as "tomorrow" or "next friday".
//! The first strategy that matches wins.

use std::fmt::{Display, Write};

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    Weekday,
};
use chrono_english::{parse_date_string, Dialect};

use crate::domain::errors::{FormatError, FormatResult};
use crate::domain::models::{Due, FormattingConfig, Zone};

/// One step of the parse cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Combined date and time pattern.
    DateTime,
    /// Date pattern alone.
    Date,
    /// Time pattern, combined with the captured day.
    Time,
    /// Free-form phrases relative to the captured "now".
    Natural,
}

impl ParseStrategy {
    /// Strategies in the order they are tried.
    pub const CASCADE: [Self; 4] = [Self::DateTime, Self::Date, Self::Time, Self::Natural];
}

/// What a strategy produced before the zone is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parsed {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

/// Date/time patterns, zone and a "now" captured once at construction.
///
/// "now" is never re-sampled. Overdue checks, time-only input and relative
/// phrases all use the instant the codec was built, so a codec kept alive
/// for hours drifts from the wall clock. Build one per invocation.
#[derive(Debug, Clone)]
pub struct DateTimeCodec {
    date_format: String,
    time_format: String,
    datetime_format: String,
    zone: Zone,
    now: DateTime<FixedOffset>,
}

impl DateTimeCodec {
    /// Build a codec, sampling the clock in the configured zone.
    pub fn new(config: &FormattingConfig) -> FormatResult<Self> {
        let zone = resolve_zone(config)?;
        Self::build(config, zone, zone.now())
    }

    /// Build a codec with an injected "now".
    pub fn with_now(config: &FormattingConfig, now: DateTime<FixedOffset>) -> FormatResult<Self> {
        let zone = resolve_zone(config)?;
        Self::build(config, zone, now)
    }

    fn build(config: &FormattingConfig, zone: Zone, now: DateTime<FixedOffset>) -> FormatResult<Self> {
        let codec = Self {
            date_format: config.date_format.clone(),
            time_format: config.time_format.clone(),
            datetime_format: config.datetime_format(),
            zone,
            now,
        };
        codec.validate()?;
        Ok(codec)
    }

    /// Reject patterns chrono cannot render for their value kind.
    fn validate(&self) -> FormatResult<()> {
        let sample = NaiveDate::from_ymd_opt(2000, 1, 31)
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .unwrap_or_default();

        let checks: [(&'static str, &str, Option<String>); 3] = [
            ("date", &self.date_format, render(sample.date().format(&self.date_format))),
            ("time", &self.time_format, render(sample.time().format(&self.time_format))),
            ("datetime", &self.datetime_format, render(sample.format(&self.datetime_format))),
        ];
        for (kind, pattern, rendered) in checks {
            if rendered.is_none() {
                return Err(FormatError::InvalidPattern {
                    kind,
                    pattern: pattern.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The instant captured at construction.
    pub const fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    /// Zone attached to parsed date-times.
    pub const fn zone(&self) -> Zone {
        self.zone
    }

    /// Pattern for whole days.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Pattern for times of day.
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Date and time patterns joined by the separator.
    pub fn datetime_format(&self) -> &str {
        &self.datetime_format
    }

    /// Render a due value; absent renders as the empty string.
    pub fn format(&self, due: Option<&Due>) -> String {
        let rendered = match due {
            None => return String::new(),
            Some(Due::DateTime(dt)) => render(dt.format(&self.datetime_format)),
            Some(Due::Date(d)) => render(d.format(&self.date_format)),
        };
        rendered.unwrap_or_default()
    }

    /// Parse user text. Empty input means "not given".
    ///
    /// Date-times get the configured zone attached; plain dates stay dates.
    pub fn parse(&self, text: Option<&str>) -> FormatResult<Option<Due>> {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let parsed = ParseStrategy::CASCADE
            .iter()
            .find_map(|strategy| {
                let parsed = self.attempt(*strategy, text)?;
                tracing::debug!(?strategy, input = text, "date/time input matched");
                Some(parsed)
            })
            .ok_or_else(|| FormatError::UnrecognizedTime(text.to_string()))?;

        match parsed {
            Parsed::Date(d) => Ok(Some(Due::Date(d))),
            Parsed::DateTime(naive) => self
                .zone
                .localize(&naive)
                .map(|dt| Some(Due::DateTime(dt)))
                .ok_or_else(|| FormatError::NonexistentLocalTime(naive.to_string())),
        }
    }

    fn attempt(&self, strategy: ParseStrategy, text: &str) -> Option<Parsed> {
        match strategy {
            ParseStrategy::DateTime => NaiveDateTime::parse_from_str(text, &self.datetime_format)
                .ok()
                .map(Parsed::DateTime),
            ParseStrategy::Date => NaiveDate::parse_from_str(text, &self.date_format)
                .ok()
                .map(Parsed::Date),
            ParseStrategy::Time => NaiveTime::parse_from_str(text, &self.time_format)
                .ok()
                .map(|t| Parsed::DateTime(self.now.date_naive().and_time(t))),
            ParseStrategy::Natural => self.parse_natural(text),
        }
    }

    /// Natural-language fallback anchored at the captured "now".
    ///
    /// Relative offsets and `next <unit>` phrases are resolved here; the rest
    /// goes to `chrono-english`. Bare numbers are rejected rather than read
    /// as years.
    fn parse_natural(&self, text: &str) -> Option<Parsed> {
        let phrase = text.trim().to_lowercase();
        if phrase.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if let Some(naive) = self.parse_relative(&phrase) {
            return Some(Parsed::DateTime(naive));
        }
        match parse_date_string(&phrase, self.now, self.dialect()) {
            Ok(dt) => Some(Parsed::DateTime(dt.naive_local())),
            Err(err) => {
                tracing::trace!(input = text, error = ?err, "no date or time found in phrase");
                None
            }
        }
    }

    /// `in 3 hours`, `2 days ago`, `next month`, `next friday` and friends.
    fn parse_relative(&self, phrase: &str) -> Option<NaiveDateTime> {
        let now = self.now.naive_local();
        let words: Vec<&str> = phrase.split_whitespace().collect();
        match words.as_slice() {
            ["next", unit] => next_unit(now, unit),
            ["in", count, unit] | [count, unit, "later"] | [count, unit] => {
                shift(now, count, unit, true)
            }
            [count, unit, "ago"] => shift(now, count, unit, false),
            _ => None,
        }
    }

    /// Month-first date patterns read ambiguous phrases the US way.
    fn dialect(&self) -> Dialect {
        if self.date_format.trim_start().starts_with("%m") {
            Dialect::Us
        } else {
            Dialect::Uk
        }
    }
}

/// `next week|month|year` keep the time of day; `next <weekday>` is the
/// following occurrence strictly after today, at midnight.
fn next_unit(now: NaiveDateTime, unit: &str) -> Option<NaiveDateTime> {
    match unit {
        "week" => now.checked_add_signed(TimeDelta::try_weeks(1)?),
        "month" => now.checked_add_months(Months::new(1)),
        "year" => now.checked_add_months(Months::new(12)),
        day => {
            let weekday = day.parse::<Weekday>().ok()?;
            let today = now.weekday().num_days_from_monday();
            let ahead = (weekday.num_days_from_monday() + 7 - today) % 7;
            let ahead = if ahead == 0 { 7 } else { ahead };
            now.date()
                .checked_add_days(Days::new(u64::from(ahead)))
                .map(|date| date.and_time(NaiveTime::MIN))
        }
    }
}

/// Move `now` by `count` units. `count` may be `a`/`an`.
fn shift(now: NaiveDateTime, count: &str, unit: &str, forward: bool) -> Option<NaiveDateTime> {
    let count: u32 = match count {
        "a" | "an" => 1,
        n => n.parse().ok()?,
    };
    let unit = unit.strip_suffix('s').unwrap_or(unit);

    let months = match unit {
        "month" => Some(count),
        "year" => Some(count.checked_mul(12)?),
        _ => None,
    };
    if let Some(months) = months {
        let months = Months::new(months);
        return if forward {
            now.checked_add_months(months)
        } else {
            now.checked_sub_months(months)
        };
    }

    let unit_secs: i64 = match unit {
        "sec" | "second" => 1,
        "min" | "minute" => 60,
        "hr" | "hour" => 3_600,
        "day" => 86_400,
        "week" => 604_800,
        _ => return None,
    };
    let delta = TimeDelta::try_seconds(i64::from(count) * unit_secs)?;
    if forward {
        now.checked_add_signed(delta)
    } else {
        now.checked_sub_signed(delta)
    }
}

fn resolve_zone(config: &FormattingConfig) -> FormatResult<Zone> {
    match config.timezone.as_deref() {
        None => Ok(Zone::Local),
        Some(name) => Ok(name.parse::<Zone>()?),
    }
}

/// Render a delayed chrono format, `None` if the pattern does not fit the value.
fn render(value: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{value}").ok()?;
    Some(out)
}
