// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Filter-bar state and the per-item predicates it implies.
//!
//! All predicates are conjunctive. An unset filter (`None`, empty string,
//! empty type list) admits everything.

use crate::period::PeriodSelection;
use serde::{Deserialize, Serialize};
use stayops_domain::{
    Category, Reservation, Ticket, TicketStatus, TicketType, normalize_property_code,
};

/// The filter state of the maintenance console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceFilters {
    pub category: Category,
    /// Free text matched case-insensitively.
    pub search: String,
    pub status: Option<TicketStatus>,
    /// Assignee name; matches the legacy and the new assignee fields.
    pub assignee: Option<String>,
    pub property: Option<String>,
    /// Accepted ticket types; empty means all.
    pub types: Vec<TicketType>,
    pub period: PeriodSelection,
}

impl MaintenanceFilters {
    /// Filters for `category` with nothing else constrained.
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Returns the lowercase search needle, or `None` when search is blank.
    fn needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// Search across description, property, service type and assignees.
    #[must_use]
    pub fn ticket_matches_search(&self, ticket: &Ticket) -> bool {
        let Some(needle) = self.needle() else {
            return true;
        };
        let haystacks = [
            Some(ticket.description.as_str()),
            Some(ticket.property_code.as_str()),
            ticket.property_name.as_deref(),
            ticket.service_type.as_deref(),
            ticket.guest_name.as_deref(),
        ];
        haystacks
            .into_iter()
            .flatten()
            .chain(ticket.assignee_names())
            .any(|text| text.to_lowercase().contains(&needle))
    }

    /// Search across property and guest of a reservation placeholder.
    #[must_use]
    pub fn reservation_matches_search(&self, reservation: &Reservation) -> bool {
        let Some(needle) = self.needle() else {
            return true;
        };
        [
            Some(reservation.property_code.as_str()),
            reservation.property_name.as_deref(),
            reservation.guest_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(&needle))
    }

    /// Property-code equality after stripping display suffixes.
    #[must_use]
    pub fn matches_property(&self, property_code: &str) -> bool {
        match self.property.as_deref().map(normalize_property_code) {
            None | Some("") => true,
            Some(wanted) => normalize_property_code(property_code) == wanted,
        }
    }

    #[must_use]
    pub fn matches_status(&self, ticket: &Ticket) -> bool {
        self.status.is_none_or(|status| ticket.status == status)
    }

    #[must_use]
    pub fn matches_assignee(&self, ticket: &Ticket) -> bool {
        match self.assignee.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(name) => ticket.is_assigned_to(name),
        }
    }

    /// True if any of the ticket's types is among the accepted ones.
    #[must_use]
    pub fn matches_type(&self, ticket: &Ticket) -> bool {
        self.types.is_empty()
            || ticket
                .ticket_types()
                .iter()
                .any(|kind| self.types.contains(kind))
    }

    /// Search, status, assignee, property and type, together.
    #[must_use]
    pub fn ticket_passes(&self, ticket: &Ticket) -> bool {
        self.ticket_matches_search(ticket)
            && self.matches_status(ticket)
            && self.matches_assignee(ticket)
            && self.matches_property(&ticket.property_code)
            && self.matches_type(ticket)
    }

    /// The subset that applies to placeholders: search and property.
    ///
    /// Placeholders have no assignee and an implicit open checkout status,
    /// so status, assignee and type filters are not applied to them.
    #[must_use]
    pub fn reservation_passes(&self, reservation: &Reservation) -> bool {
        self.reservation_matches_search(reservation)
            && self.matches_property(&reservation.property_code)
    }
}
