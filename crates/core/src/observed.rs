// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Change detection between snapshots.
//!
//! Callers keep the previously observed id set wherever they like and pass
//! it in; nothing here reads or writes storage.

use serde::Serialize;
use stayops_domain::{DomainError, Reservation, Ticket, reservation_override_key, ticket_key};
use std::collections::BTreeSet;

/// Ids that appeared and disappeared since the previous observation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedDiff {
    /// Sorted.
    pub newly_added: Vec<String>,
    /// Sorted.
    pub removed: Vec<String>,
}

impl ObservedDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.newly_added.is_empty() && self.removed.is_empty()
    }
}

/// Compares the current ids against the previously observed ones.
#[must_use]
pub fn diff_observed_ids(
    current: &BTreeSet<String>,
    previously_seen: &BTreeSet<String>,
) -> ObservedDiff {
    ObservedDiff {
        newly_added: current.difference(previously_seen).cloned().collect(),
        removed: previously_seen.difference(current).cloned().collect(),
    }
}

/// Item keys of a ticket snapshot.
#[must_use]
pub fn observe_tickets(tickets: &[Ticket]) -> BTreeSet<String> {
    tickets.iter().map(ticket_key).collect()
}

/// Override keys of a reservation snapshot.
///
/// # Errors
///
/// Returns an error if a reservation has neither `id` nor `externalId`.
pub fn observe_reservations(reservations: &[Reservation]) -> Result<BTreeSet<String>, DomainError> {
    reservations.iter().map(reservation_override_key).collect()
}
