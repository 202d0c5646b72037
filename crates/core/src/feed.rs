// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The maintenance feed: tickets and checkout placeholders merged into one
//! deduplicated, period-windowed, grouped and ordered list.
//!
//! ## Pipeline
//!
//! 1. Tickets of the selected category that are not hidden by an override
//! 2. Period window, applied only to tickets that have a date
//! 3. Search, status, assignee, property and type filters (conjunction)
//! 4. Placeholders for non-canceled reservations whose checkout falls in the
//!    window, unless a real checkout ticket already covers the reservation
//! 5. Sort, bucket by local day (or backlog), label, order
//!
//! ## Invariants
//!
//! - A reservation is represented by at most one item: its real checkout
//!   ticket or its placeholder, never both
//! - Undated open work always reaches the backlog, whatever the period
//! - The derivation is pure: same inputs, same output

use crate::context::FeedContext;
use crate::error::CoreError;
use crate::filters::MaintenanceFilters;
use crate::group::MaintenanceGroup;
use crate::labels::{backlog_label, date_group_label};
use crate::ordering::order_maintenance_groups;
use crate::period::{PeriodWindow, compute_period_window};
use crate::reconcile::covered_positions;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use stayops_domain::{
    Category, LocalDates, MaintenanceItem, MaintenanceOverrides, Reservation, Ticket,
    at_local_noon, reservation_checkout_key, ticket_key,
};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// Snapshots the feed is derived from.
#[derive(Debug, Clone, Copy)]
pub struct FeedInputs<'a> {
    pub tickets: &'a [Ticket],
    pub reservations: &'a [Reservation],
    pub overrides: &'a MaintenanceOverrides,
}

/// Counters describing one derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedStats {
    /// Tickets that survived every filter.
    pub tickets: usize,
    /// Placeholders synthesized for reservations.
    pub virtual_checkouts: usize,
    /// Reservations skipped because a real checkout ticket covers them.
    pub suppressed_reservations: usize,
    /// Tickets and placeholders removed by a hidden override.
    pub hidden: usize,
    /// Done tickets with no date at all, which belong to no group.
    pub undated_done: usize,
}

/// The grouped, ordered feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceFeed {
    pub window: PeriodWindow,
    pub groups: Vec<MaintenanceGroup>,
    pub stats: FeedStats,
}

impl MaintenanceFeed {
    /// Total number of items across groups.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Returns the tickets the filter state selects, sorted.
///
/// Open tickets come first by ascending effective date; done tickets follow,
/// most recently completed first.
///
/// # Errors
///
/// Returns an error if the period selection is invalid.
pub fn filter_tickets(
    inputs: FeedInputs<'_>,
    filters: &MaintenanceFilters,
    ctx: &FeedContext,
) -> Result<Vec<Ticket>, CoreError> {
    let window: PeriodWindow = compute_period_window(&filters.period, ctx.today)?;
    let mut hidden: usize = 0;
    let mut tickets: Vec<&Ticket> =
        select_tickets(inputs, filters, &window, &ctx.dates, &mut hidden);
    tickets.sort_by(|a, b| compare_tickets(a, b, &ctx.dates));
    Ok(tickets.into_iter().cloned().collect())
}

/// Derives the full maintenance feed.
///
/// # Errors
///
/// Returns an error if the period selection is invalid.
pub fn build_maintenance_feed(
    inputs: FeedInputs<'_>,
    filters: &MaintenanceFilters,
    ctx: &FeedContext,
) -> Result<MaintenanceFeed, CoreError> {
    let window: PeriodWindow = compute_period_window(&filters.period, ctx.today)?;
    let mut stats: FeedStats = FeedStats::default();

    let tickets: Vec<&Ticket> =
        select_tickets(inputs, filters, &window, &ctx.dates, &mut stats.hidden);
    stats.tickets = tickets.len();

    let mut entries: Vec<FeedEntry> = tickets
        .into_iter()
        .map(|ticket| FeedEntry::for_ticket(ticket, &ctx.dates))
        .collect();

    let placeholders: Vec<FeedEntry> =
        synthesize_checkouts(inputs, filters, &window, &ctx.dates, &mut stats);
    stats.virtual_checkouts = placeholders.len();
    entries.extend(placeholders);

    entries.sort_by(compare_entries);

    let backlog_label_text: &str = backlog_label(ctx.locale);
    let mut backlog: MaintenanceGroup = MaintenanceGroup::backlog(backlog_label_text);
    let mut by_day: BTreeMap<NaiveDate, Vec<MaintenanceItem>> = BTreeMap::new();

    for entry in entries {
        match entry.day {
            Some(day) => by_day.entry(day).or_default().push(entry.item),
            None if !entry.item.is_done() => backlog.items.push(entry.item),
            None => stats.undated_done += 1,
        }
    }

    let date_groups: Vec<MaintenanceGroup> = by_day
        .into_iter()
        .map(|(day, items)| MaintenanceGroup {
            items,
            ..MaintenanceGroup::for_date(day, date_group_label(day, ctx.today, ctx.locale))
        })
        .collect();

    let groups: Vec<MaintenanceGroup> =
        order_maintenance_groups(date_groups, Some(backlog), ctx.today, window.active);

    debug!(
        tickets = stats.tickets,
        virtual_checkouts = stats.virtual_checkouts,
        suppressed = stats.suppressed_reservations,
        hidden = stats.hidden,
        groups = groups.len(),
        period_active = window.active,
        "Built maintenance feed"
    );

    Ok(MaintenanceFeed {
        window,
        groups,
        stats,
    })
}

/// Steps 1-3 of the pipeline, unsorted.
pub(crate) fn select_tickets<'a>(
    inputs: FeedInputs<'a>,
    filters: &MaintenanceFilters,
    window: &PeriodWindow,
    dates: &LocalDates,
    hidden: &mut usize,
) -> Vec<&'a Ticket> {
    inputs
        .tickets
        .iter()
        .filter(|ticket| ticket.category == filters.category)
        .filter(|ticket| {
            let is_hidden = inputs.overrides.is_hidden(&ticket_key(ticket));
            if is_hidden {
                *hidden += 1;
            }
            !is_hidden
        })
        .filter(|ticket| ticket_day(ticket, dates).is_none_or(|day| window.contains(day)))
        .filter(|ticket| filters.ticket_passes(ticket))
        .collect()
}

/// Step 4: placeholders for reservations no real ticket covers yet.
pub(crate) fn synthesize_checkouts(
    inputs: FeedInputs<'_>,
    filters: &MaintenanceFilters,
    window: &PeriodWindow,
    dates: &LocalDates,
    stats: &mut FeedStats,
) -> Vec<FeedEntry> {
    if filters.category != Category::Maintenance {
        return Vec::new();
    }

    let covered: HashSet<usize> = covered_reservations(inputs.tickets, inputs.reservations, dates);
    let mut emitted_keys: HashSet<String> = HashSet::new();
    let mut entries: Vec<FeedEntry> = Vec::new();

    for (index, reservation) in inputs.reservations.iter().enumerate() {
        if reservation.status.is_canceled() {
            continue;
        }
        if covered.contains(&index) {
            stats.suppressed_reservations += 1;
            continue;
        }
        let Some(checkout_day) = reservation.checkout_day() else {
            debug!(
                property_code = %reservation.property_code,
                check_out_date = %reservation.check_out_date,
                "Skipping reservation with unparseable checkout date"
            );
            continue;
        };
        if !window.contains(checkout_day) {
            continue;
        }

        let key: String = reservation_checkout_key(reservation);
        if inputs.overrides.is_hidden(&key) {
            stats.hidden += 1;
            continue;
        }
        if !filters.reservation_passes(reservation) {
            continue;
        }
        // Re-synced bookings can appear twice with the same checkout key.
        if !emitted_keys.insert(key) {
            continue;
        }

        entries.push(FeedEntry {
            item: MaintenanceItem::VirtualCheckout(reservation.clone()),
            day: Some(checkout_day),
            open_at: Some(checkout_time(reservation, checkout_day, dates)),
            done_at: None,
        });
    }
    entries
}

/// Sort instant of a placeholder, always inside its checkout day.
fn checkout_time(reservation: &Reservation, day: NaiveDate, dates: &LocalDates) -> NaiveDateTime {
    dates
        .local_datetime(&reservation.check_out_date)
        .filter(|local| local.date() == day)
        .unwrap_or_else(|| at_local_noon(day))
}

/// Indices of reservations that a real checkout ticket already represents.
///
/// Computed over every ticket, filtered or not, so that hiding or filtering
/// out a real ticket never resurrects its placeholder. A reservation sharing
/// its checkout key with a covered one is covered too.
pub(crate) fn covered_reservations(
    tickets: &[Ticket],
    reservations: &[Reservation],
    dates: &LocalDates,
) -> HashSet<usize> {
    let mut covered: HashSet<usize> = tickets
        .iter()
        .filter(|ticket| ticket.is_checkout_ticket && !ticket.is_virtual)
        .flat_map(|ticket| covered_positions(ticket, reservations, dates))
        .collect();

    let covered_keys: HashSet<String> = covered
        .iter()
        .filter_map(|&index| reservations.get(index))
        .map(reservation_checkout_key)
        .collect();
    covered.extend(
        reservations
            .iter()
            .enumerate()
            .filter(|(_, reservation)| {
                !reservation.status.is_canceled()
                    && covered_keys.contains(&reservation_checkout_key(reservation))
            })
            .map(|(index, _)| index),
    );
    covered
}

/// The local day a ticket is grouped under.
///
/// Done tickets without completion or schedule fall back to the day they
/// were last touched.
pub(crate) fn ticket_day(ticket: &Ticket, dates: &LocalDates) -> Option<NaiveDate> {
    if let Some(raw) = ticket.display_date() {
        let day = dates.local_date(raw);
        if day.is_none() {
            warn!(ticket_id = %ticket.id, date = %raw, "Unparseable ticket date");
        }
        if day.is_some() || !ticket.is_done() {
            return day;
        }
    }
    if !ticket.is_done() {
        return None;
    }
    ticket
        .updated_at
        .or(ticket.created_at)
        .and_then(|ms| dates.date_of_epoch_ms(ms))
}

/// An item plus the precomputed keys it is sorted and grouped by.
pub(crate) struct FeedEntry {
    pub(crate) item: MaintenanceItem,
    pub(crate) day: Option<NaiveDate>,
    open_at: Option<NaiveDateTime>,
    done_at: Option<NaiveDateTime>,
}

impl FeedEntry {
    pub(crate) fn for_ticket(ticket: &Ticket, dates: &LocalDates) -> Self {
        Self {
            day: ticket_day(ticket, dates),
            open_at: ticket.effective_date().and_then(|d| dates.local_datetime(d)),
            done_at: ticket
                .completed_date
                .as_deref()
                .and_then(|d| dates.local_datetime(d)),
            item: MaintenanceItem::Ticket(ticket.clone()),
        }
    }
}

pub(crate) fn compare_entries(a: &FeedEntry, b: &FeedEntry) -> Ordering {
    compare_sort_keys(
        (a.item.is_done(), a.open_at, a.done_at),
        (b.item.is_done(), b.open_at, b.done_at),
    )
}

pub(crate) fn compare_tickets(a: &Ticket, b: &Ticket, dates: &LocalDates) -> Ordering {
    let key = |t: &Ticket| {
        (
            t.is_done(),
            t.effective_date().and_then(|d| dates.local_datetime(d)),
            t.completed_date
                .as_deref()
                .and_then(|d| dates.local_datetime(d)),
        )
    };
    compare_sort_keys(key(a), key(b)).then_with(|| a.id.cmp(&b.id))
}

type SortKey = (bool, Option<NaiveDateTime>, Option<NaiveDateTime>);

/// Open before done; open ascending by effective date, done descending by
/// completion. Missing dates sort last in both halves.
fn compare_sort_keys(a: SortKey, b: SortKey) -> Ordering {
    let (a_done, a_open, a_completed) = a;
    let (b_done, b_open, b_completed) = b;

    match a_done.cmp(&b_done) {
        Ordering::Equal => {}
        other => return other,
    }

    if a_done {
        match (a_completed, b_completed) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    } else {
        match (a_open, b_open) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
