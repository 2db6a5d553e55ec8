//! Timezone handle used to anchor parsed and captured date-times.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// A timezone name not in the IANA database.
#[derive(Debug, Error)]
#[error("Unknown timezone: {0}")]
pub struct UnknownTimezone(pub String);

/// Either the system's local zone or a named IANA zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The system zone.
    #[default]
    Local,
    /// A zone from the IANA database.
    Named(Tz),
}

impl Zone {
    /// Current wall-clock time in this zone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.from_utc(&Utc::now())
    }

    /// Convert a UTC instant into this zone's wall clock.
    pub fn from_utc(&self, utc: &DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Local => utc.with_timezone(&Local).fixed_offset(),
            Self::Named(tz) => utc.with_timezone(tz).fixed_offset(),
        }
    }

    /// Attach this zone to a wall-clock time.
    ///
    /// Ambiguous times (DST fold) resolve to the earlier instant. Returns
    /// `None` for times skipped by a DST gap.
    pub fn localize(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Local => Local
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            Self::Named(tz) => tz
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
        }
    }
}

impl FromStr for Zone {
    type Err = UnknownTimezone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        trimmed
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| UnknownTimezone(trimmed.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}
