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

mod dates;
mod error;
mod item;
mod keys;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use dates::{DEFAULT_TIMEZONE, LocalDates, at_local_noon, parse_date_only, to_date_only};
pub use error::DomainError;
pub use item::{ItemKind, MaintenanceItem};
pub use keys::{
    content_hash_key, maintenance_item_key, normalize_property_code, reservation_checkout_key,
    reservation_override_key, sanitize_key, ticket_key,
};
pub use status::{Category, Priority, ReservationStatus, TicketStatus, TicketType};

// Re-export public types
pub use types::{
    CHECKOUT_SERVICE_TYPE, MAX_ASSIGNEES, MaintenanceOverride, MaintenanceOverrides, Reservation,
    STAYS_SOURCE, Ticket,
};
