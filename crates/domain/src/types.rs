// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::{parse_date_only, to_date_only};
use crate::status::{Category, Priority, ReservationStatus, TicketStatus, TicketType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Channel name whose reservation ids are regenerated on every sync.
pub const STAYS_SOURCE: &str = "Stays";

/// Service type given to checkout cleaning work.
pub const CHECKOUT_SERVICE_TYPE: &str = "Limpeza de Check-out";

/// Legacy tickets may name more assignees, but only this many are honored.
pub const MAX_ASSIGNEES: usize = 2;

/// An operational work item.
///
/// Tickets are created and updated by the storage service; this crate only
/// reads them. Date fields are kept as the raw strings found in the snapshot
/// and interpreted through `LocalDates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Ticket {
    /// Stable identifier assigned at creation.
    pub id: String,
    pub property_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    /// Absent in older documents, which were all maintenance.
    pub category: Category,
    pub status: TicketStatus,
    pub priority: Priority,
    /// Legacy single assignee name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Current assignee names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    /// Epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    /// Links a checkout ticket to the reservation that triggered it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    pub is_checkout_ticket: bool,
    pub is_preventive: bool,
    pub is_guest_request: bool,
    /// Set only on in-memory placeholders, never on persisted tickets.
    #[serde(alias = "_isVirtual", skip_serializing_if = "std::ops::Not::not")]
    pub is_virtual: bool,
    /// Back-reference to the reservation a virtual ticket was built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_reservation: Option<Box<Reservation>>,
}

impl Ticket {
    /// Returns the assignee names, legacy field first, de-duplicated and
    /// capped at `MAX_ASSIGNEES`.
    #[must_use]
    pub fn assignee_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(MAX_ASSIGNEES);
        let candidates = self
            .assignee
            .iter()
            .chain(self.assignees.iter())
            .map(|name| name.trim())
            .filter(|name| !name.is_empty());

        for name in candidates {
            if names.len() == MAX_ASSIGNEES {
                break;
            }
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Returns true if the ticket is assigned to `name` in either field.
    #[must_use]
    pub fn is_assigned_to(&self, name: &str) -> bool {
        let name = name.trim();
        self.assignee_names().iter().any(|n| *n == name)
    }

    /// Returns the type flags this ticket carries.
    ///
    /// `TicketType::Regular` is returned alone when no other flag is set.
    #[must_use]
    pub fn ticket_types(&self) -> Vec<TicketType> {
        let mut types: Vec<TicketType> = Vec::new();
        if self.is_checkout_ticket {
            types.push(TicketType::Checkout);
        }
        if self.is_preventive {
            types.push(TicketType::Preventive);
        }
        if self.is_guest_request {
            types.push(TicketType::Guest);
        }
        if types.is_empty() {
            types.push(TicketType::Regular);
        }
        types
    }

    /// Returns true for finished work.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.status.is_terminal()
    }

    /// The raw date the ticket is displayed under, if any.
    ///
    /// Done tickets prefer `completedDate`; open work prefers
    /// `scheduledDate`. `desiredDate` is only a request and never places a
    /// ticket on the calendar.
    #[must_use]
    pub fn display_date(&self) -> Option<&str> {
        let (first, second) = if self.is_done() {
            (&self.completed_date, &self.scheduled_date)
        } else {
            (&self.scheduled_date, &self.completed_date)
        };
        first
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or_else(|| second.as_deref().filter(|d| !d.trim().is_empty()))
    }

    /// The raw date used to order open work: scheduled, else desired.
    #[must_use]
    pub fn effective_date(&self) -> Option<&str> {
        self.scheduled_date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or_else(|| self.desired_date.as_deref().filter(|d| !d.trim().is_empty()))
    }
}

/// A booking record from an external channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Reservation {
    /// Channel-local id. Regenerated across syncs for Stays bookings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Stable booking id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub property_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    /// Date-only semantics.
    pub check_in_date: String,
    /// Date-only semantics; may carry a time that is ignored for keys.
    pub check_out_date: String,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Returns the non-blank `id`, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    /// Returns the non-blank `externalId`, if any.
    #[must_use]
    pub fn external_id(&self) -> Option<&str> {
        non_blank(self.external_id.as_deref())
    }

    /// Returns true if the booking comes from Stays.
    #[must_use]
    pub fn is_from_stays(&self) -> bool {
        self.source.as_deref() == Some(STAYS_SOURCE)
    }

    /// Returns the checkout day named by the stored `checkOutDate`.
    ///
    /// Only the `YYYY-MM-DD` prefix is read, with no timezone conversion, so
    /// the day always agrees with the date in the reservation's checkout key.
    #[must_use]
    pub fn checkout_day(&self) -> Option<NaiveDate> {
        to_date_only(&self.check_out_date).and_then(|day| parse_date_only(day).ok())
    }

    /// Returns true if `candidate` equals this reservation's id or external id.
    #[must_use]
    pub fn matches_id(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        !candidate.is_empty()
            && (self.id() == Some(candidate) || self.external_id() == Some(candidate))
    }
}

/// A user-dismissal record for one maintenance item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceOverride {
    pub hidden: bool,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

/// Sparse map from item key to override, as stored by the override service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct MaintenanceOverrides(HashMap<String, MaintenanceOverride>);

impl MaintenanceOverrides {
    /// Creates an empty override map.
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Returns true if the item with `key` was hidden by a user.
    #[must_use]
    pub fn is_hidden(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|o| o.hidden)
    }

    /// Records an override for `key`, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: MaintenanceOverride) {
        self.0.insert(key.into(), value);
    }

    /// Returns the number of stored overrides, hidden or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no override is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, MaintenanceOverride)> for MaintenanceOverrides {
    fn from_iter<I: IntoIterator<Item = (String, MaintenanceOverride)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
