// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Derivation of the maintenance console's feed.
//!
//! Every entry point is a pure function of immutable snapshots (tickets,
//! reservations, hidden overrides), the filter state and a [`FeedContext`]
//! carrying the timezone and the local "today". Nothing here performs I/O or
//! reads the clock.

mod access;
mod calendar;
mod context;
mod error;
mod feed;
mod filters;
mod group;
mod labels;
mod observed;
mod ordering;
mod pagination;
mod period;
mod reconcile;

#[cfg(test)]
mod tests;

pub use access::{AccessLevel, ItemAction, item_action};
pub use calendar::{CalendarItem, build_calendar_items};
pub use context::{FeedContext, Locale};
pub use error::CoreError;
pub use feed::{FeedInputs, FeedStats, MaintenanceFeed, build_maintenance_feed, filter_tickets};
pub use filters::MaintenanceFilters;
pub use group::{BACKLOG_GROUP_ID, MaintenanceGroup};
pub use labels::{backlog_label, date_group_label};
pub use observed::{ObservedDiff, diff_observed_ids, observe_reservations, observe_tickets};
pub use ordering::{RELEVANCE_WINDOW_DAYS, order_maintenance_groups};
pub use pagination::{DEFAULT_PAGE_SIZE, PaginatedFeed, page_budget, paginate_groups};
pub use period::{
    PeriodPreset, PeriodSelection, PeriodWindow, compute_period_window, month_bounds,
};
pub use reconcile::{
    MatchStrategy, ReconcileDiagnostics, ReservationResolution, map_reservation_to_virtual_ticket,
    resolve_reservation_for_checkout_ticket,
};
