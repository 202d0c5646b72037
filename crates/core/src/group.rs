// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use serde::Serialize;
use stayops_domain::MaintenanceItem;

/// Id of the single group holding undated open work.
pub const BACKLOG_GROUP_ID: &str = "backlog";

/// A bucket of feed items sharing a local day, or the backlog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceGroup {
    /// `YYYY-MM-DD` for date groups, `backlog` for the backlog.
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub items: Vec<MaintenanceItem>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_backlog: bool,
}

impl MaintenanceGroup {
    /// Creates an empty group for `date`.
    #[must_use]
    pub fn for_date(date: NaiveDate, label: String) -> Self {
        Self {
            id: date.format("%Y-%m-%d").to_string(),
            label,
            date: Some(date),
            items: Vec::new(),
            is_backlog: false,
        }
    }

    /// Creates an empty backlog group.
    #[must_use]
    pub fn backlog(label: &str) -> Self {
        Self {
            id: String::from(BACKLOG_GROUP_ID),
            label: label.to_string(),
            date: None,
            items: Vec::new(),
            is_backlog: true,
        }
    }

    /// Returns a copy of this group carrying `items` instead.
    #[must_use]
    pub fn with_items(&self, items: Vec<MaintenanceItem>) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            date: self.date,
            items,
            is_backlog: self.is_backlog,
        }
    }
}
