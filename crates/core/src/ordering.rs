// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ordering of feed groups.
//!
//! Two modes, selected by whether a period filter is active:
//!
//! - **Relevance window** (no period filter): backlog, then the days in
//!   `[today, today + 7]` ascending, then later days ascending, then past
//!   days descending (most recent first).
//! - **Chronological** (period filter active): backlog, then every day
//!   ascending.
//!
//! The backlog is emitted first whenever it has items.

use crate::group::MaintenanceGroup;
use chrono::{Days, NaiveDate};

/// Length of the forward relevance window, in days after today.
pub const RELEVANCE_WINDOW_DAYS: u64 = 7;

/// Orders pre-split date groups and the optional backlog.
#[must_use]
pub fn order_maintenance_groups(
    date_groups: Vec<MaintenanceGroup>,
    backlog: Option<MaintenanceGroup>,
    today: NaiveDate,
    period_active: bool,
) -> Vec<MaintenanceGroup> {
    let mut ordered: Vec<MaintenanceGroup> = Vec::with_capacity(date_groups.len() + 1);
    if let Some(backlog) = backlog.filter(|g| !g.items.is_empty()) {
        ordered.push(backlog);
    }

    if period_active {
        let mut groups = date_groups;
        groups.sort_by_key(group_day);
        ordered.extend(groups);
        return ordered;
    }

    let window_end: NaiveDate = today
        .checked_add_days(Days::new(RELEVANCE_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let (mut past, upcoming): (Vec<MaintenanceGroup>, Vec<MaintenanceGroup>) = date_groups
        .into_iter()
        .partition(|g| group_day(g) < today);
    let (mut this_week, mut later): (Vec<MaintenanceGroup>, Vec<MaintenanceGroup>) = upcoming
        .into_iter()
        .partition(|g| group_day(g) <= window_end);

    this_week.sort_by_key(group_day);
    later.sort_by_key(group_day);
    past.sort_by_key(|g| std::cmp::Reverse(group_day(g)));

    ordered.extend(this_week);
    ordered.extend(later);
    ordered.extend(past);
    ordered
}

// Undated groups never come from the feed builder; they sort as the oldest past.
fn group_day(group: &MaintenanceGroup) -> NaiveDate {
    group.date.unwrap_or(NaiveDate::MIN)
}
