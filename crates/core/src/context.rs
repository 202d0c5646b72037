// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use stayops_domain::{DomainError, LocalDates};
use std::str::FromStr;

/// Language used for group labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt-BR" | "pt" => Ok(Self::PtBr),
            "en-US" | "en" => Ok(Self::EnUs),
            _ => Err(CoreError::DomainViolation(DomainError::UnknownValue {
                kind: "locale",
                value: s.to_string(),
            })),
        }
    }
}

/// Everything the feed derivation needs besides its data: the declared
/// timezone, the local day treated as "today", and the label language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedContext {
    pub dates: LocalDates,
    pub today: NaiveDate,
    pub locale: Locale,
}

impl FeedContext {
    /// Builds a context for the local day containing `now`.
    #[must_use]
    pub fn at(dates: LocalDates, now: DateTime<Utc>, locale: Locale) -> Self {
        Self {
            dates,
            today: dates.today(now),
            locale,
        }
    }

    /// Builds a context with an explicit local day.
    #[must_use]
    pub const fn on_day(dates: LocalDates, today: NaiveDate, locale: Locale) -> Self {
        Self {
            dates,
            today,
            locale,
        }
    }
}
