// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-date interpretation in a declared timezone.
//!
//! Snapshots mix three date shapes:
//! - date-only strings (`2026-02-10`), which name a calendar day and must
//!   never be shifted by a UTC conversion
//! - RFC 3339 instants (`2026-02-10T11:00:00Z`, `...-03:00`), which are
//!   converted into the declared timezone before the day is taken
//! - naive wall-clock strings (`2026-02-10T14:30`), read as local time
//!
//! ## Invariants
//!
//! - The current instant is always injected; nothing here reads the clock
//! - Every day boundary is local midnight in the declared timezone

use crate::error::DomainError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

/// Timezone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Interprets date strings and instants in one declared timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDates {
    tz: Tz,
}

impl LocalDates {
    /// Creates a `LocalDates` from an IANA timezone name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is unknown.
    pub fn new(timezone: &str) -> Result<Self, DomainError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(timezone.to_string()))?;
        Ok(Self { tz })
    }

    /// Creates a `LocalDates` from an already-parsed timezone.
    #[must_use]
    pub const fn from_tz(tz: Tz) -> Self {
        Self { tz }
    }

    /// Returns the declared timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Returns the local calendar day containing `now`.
    #[must_use]
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.tz).date_naive()
    }

    /// Resolves a raw date string to a local calendar day.
    ///
    /// Returns `None` for blank or unparseable input.
    #[must_use]
    pub fn local_date(&self, raw: &str) -> Option<NaiveDate> {
        self.local_datetime(raw).map(|dt| dt.date())
    }

    /// Resolves a raw date string to a local wall-clock datetime.
    ///
    /// Date-only input resolves to local noon of that day.
    #[must_use]
    pub fn local_datetime(&self, raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Some(at_local_noon(date));
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.with_timezone(&self.tz).naive_local());
        }

        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    }

    /// Resolves an epoch-milliseconds timestamp to a local calendar day.
    #[must_use]
    pub fn date_of_epoch_ms(&self, millis: i64) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|dt| dt.with_timezone(&self.tz).date_naive())
    }
}

impl Default for LocalDates {
    fn default() -> Self {
        Self {
            tz: chrono_tz::America::Sao_Paulo,
        }
    }
}

/// Truncates a raw date string to its `YYYY-MM-DD` prefix.
///
/// This is purely textual: the time of day and any offset are discarded
/// without conversion, so the result is reconstructible from the stored
/// field alone. Returns `None` when the prefix is not a valid date.
#[must_use]
pub fn to_date_only(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok()?;
    Some(prefix)
}

/// Parses a strict `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date_only(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: raw.to_string(),
        error: e.to_string(),
    })
}

/// Local noon of `date`, the wall-clock time given to day-only values.
#[must_use]
pub fn at_local_noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN))
}
