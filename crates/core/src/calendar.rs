// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Items for the month-grid view.
//!
//! The calendar always shows "the displayed month, from today on",
//! independent of the period preset chosen for the list view. It applies
//! the category, hidden, search, property and type filters and the same
//! real-ticket-suppresses-placeholder rule, but neither the period nor the
//! status/assignee filters, and it does not group or paginate.

use crate::context::FeedContext;
use crate::error::CoreError;
use crate::feed::{
    FeedEntry, FeedInputs, FeedStats, compare_entries, select_tickets, synthesize_checkouts,
};
use crate::filters::MaintenanceFilters;
use crate::period::{PeriodSelection, PeriodWindow, month_bounds};
use chrono::NaiveDate;
use serde::Serialize;
use stayops_domain::MaintenanceItem;
use tracing::debug;

/// An item placed on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarItem {
    pub day: NaiveDate,
    pub item: MaintenanceItem,
}

/// Returns the items to draw for the month containing `displayed`.
///
/// The range is `[today, first day of the following month)`. A displayed
/// month that ended before today yields nothing. Undated items are omitted.
///
/// # Errors
///
/// Returns an error if the month bounds overflow the supported date range.
pub fn build_calendar_items(
    inputs: FeedInputs<'_>,
    filters: &MaintenanceFilters,
    ctx: &FeedContext,
    displayed: NaiveDate,
) -> Result<Vec<CalendarItem>, CoreError> {
    let (_, month_end) = month_bounds(displayed)?;
    if month_end <= ctx.today {
        return Ok(Vec::new());
    }

    let window: PeriodWindow = PeriodWindow {
        start: ctx.today,
        end: month_end,
        active: true,
    };
    let calendar_filters: MaintenanceFilters = MaintenanceFilters {
        status: None,
        assignee: None,
        period: PeriodSelection::default(),
        ..filters.clone()
    };

    let mut stats: FeedStats = FeedStats::default();
    let mut entries: Vec<FeedEntry> = select_tickets(
        inputs,
        &calendar_filters,
        &window,
        &ctx.dates,
        &mut stats.hidden,
    )
    .into_iter()
    .map(|ticket| FeedEntry::for_ticket(ticket, &ctx.dates))
    .collect();
    entries.extend(synthesize_checkouts(
        inputs,
        &calendar_filters,
        &window,
        &ctx.dates,
        &mut stats,
    ));
    entries.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| compare_entries(a, b)));

    let items: Vec<CalendarItem> = entries
        .into_iter()
        .filter_map(|entry| entry.day.map(|day| CalendarItem { day, item: entry.item }))
        .collect();

    debug!(
        items = items.len(),
        suppressed = stats.suppressed_reservations,
        %month_end,
        "Built calendar items"
    );
    Ok(items)
}
