// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Period presets and the date windows they select.
//!
//! ## Invariants
//!
//! - Windows are half-open: a day `d` belongs iff `start <= d < end`
//! - Boundaries are local calendar days (local midnight)
//! - Presets are forward-looking from today, never trailing
//! - The `all` preset yields an inactive window that admits every day

use crate::error::CoreError;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use stayops_domain::{DomainError, parse_date_only};
use std::str::FromStr;

/// A named date-range shorthand chosen in the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PeriodPreset {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "7days")]
    Next7Days,
    #[serde(rename = "30days")]
    Next30Days,
    #[serde(rename = "thisMonth")]
    ThisMonth,
    #[serde(rename = "custom")]
    Custom,
}

impl PeriodPreset {
    /// Returns the wire representation of the preset.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Next7Days => "7days",
            Self::Next30Days => "30days",
            Self::ThisMonth => "thisMonth",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for PeriodPreset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "7days" => Ok(Self::Next7Days),
            "30days" => Ok(Self::Next30Days),
            "thisMonth" => Ok(Self::ThisMonth),
            "custom" => Ok(Self::Custom),
            _ => Err(DomainError::UnknownValue {
                kind: "period preset",
                value: s.to_string(),
            }),
        }
    }
}

/// The period part of the filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodSelection {
    pub preset: PeriodPreset,
    /// `YYYY-MM-DD`, used only with `PeriodPreset::Custom`.
    pub custom_start_date: Option<String>,
    /// `YYYY-MM-DD`, inclusive, used only with `PeriodPreset::Custom`.
    pub custom_end_date: Option<String>,
}

impl PeriodSelection {
    /// Creates a selection for a non-custom preset.
    #[must_use]
    pub const fn preset(preset: PeriodPreset) -> Self {
        Self {
            preset,
            custom_start_date: None,
            custom_end_date: None,
        }
    }

    /// Creates a custom selection covering `start` through `end`, inclusive.
    #[must_use]
    pub fn custom(start: &str, end: &str) -> Self {
        Self {
            preset: PeriodPreset::Custom,
            custom_start_date: Some(start.to_string()),
            custom_end_date: Some(end.to_string()),
        }
    }
}

/// A half-open range of local days, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// When false, downstream stages apply no date filtering.
    pub active: bool,
}

impl PeriodWindow {
    /// A window that admits every day.
    #[must_use]
    pub const fn inactive(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: today,
            active: false,
        }
    }

    /// Returns true if `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        !self.active || (self.start <= date && date < self.end)
    }
}

/// Converts a period selection into a date window relative to `today`.
///
/// # Errors
///
/// Returns an error if:
/// - a custom date is not a valid `YYYY-MM-DD`
/// - the custom end precedes the custom start
/// - date arithmetic overflows
pub fn compute_period_window(
    selection: &PeriodSelection,
    today: NaiveDate,
) -> Result<PeriodWindow, CoreError> {
    let (start, end) = match selection.preset {
        PeriodPreset::All => return Ok(PeriodWindow::inactive(today)),
        PeriodPreset::Today => (today, add_days(today, 1)?),
        PeriodPreset::Next7Days => (today, add_days(today, 7)?),
        PeriodPreset::Next30Days => (today, add_days(today, 30)?),
        PeriodPreset::ThisMonth => month_bounds(today)?,
        PeriodPreset::Custom => {
            let (Some(raw_start), Some(raw_end)) = (
                non_blank(selection.custom_start_date.as_deref()),
                non_blank(selection.custom_end_date.as_deref()),
            ) else {
                // Half-filled custom range: the user is still typing.
                return Ok(PeriodWindow::inactive(today));
            };
            let start: NaiveDate = parse_date_only(raw_start)?;
            let last: NaiveDate = parse_date_only(raw_end)?;
            if last < start {
                return Err(CoreError::InvalidPeriod {
                    reason: format!("custom end {last} is before custom start {start}"),
                });
            }
            (start, add_days(last, 1)?)
        }
    };

    Ok(PeriodWindow {
        start,
        end,
        active: true,
    })
}

/// Returns `[first of month, first of next month)` for the month of `day`.
///
/// # Errors
///
/// Returns an error if the bounds overflow the supported date range.
pub fn month_bounds(day: NaiveDate) -> Result<(NaiveDate, NaiveDate), CoreError> {
    let first = NaiveDate::from_ymd_opt(day.year(), day.month(), 1).ok_or_else(overflow)?;
    let next = if day.month() == 12 {
        NaiveDate::from_ymd_opt(day.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(day.year(), day.month() + 1, 1)
    }
    .ok_or_else(overflow)?;
    Ok((first, next))
}

pub(crate) fn add_days(day: NaiveDate, days: u64) -> Result<NaiveDate, CoreError> {
    day.checked_add_days(Days::new(days)).ok_or_else(overflow)
}

fn overflow() -> CoreError {
    CoreError::InvalidPeriod {
        reason: String::from("date arithmetic overflow"),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
