// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Reservation, Ticket};
use serde::{Deserialize, Serialize};

/// One entry of the maintenance feed.
///
/// Either a persisted ticket, or a placeholder for the cleaning that a
/// reservation's checkout will require once nobody has opened a ticket for
/// it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MaintenanceItem {
    Ticket(Ticket),
    VirtualCheckout(Reservation),
}

/// Discriminant of `MaintenanceItem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Ticket,
    VirtualCheckout,
}

impl MaintenanceItem {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Ticket(_) => ItemKind::Ticket,
            Self::VirtualCheckout(_) => ItemKind::VirtualCheckout,
        }
    }

    /// Returns the ticket if this is a real (or caller-built virtual) ticket.
    #[must_use]
    pub const fn as_ticket(&self) -> Option<&Ticket> {
        match self {
            Self::Ticket(ticket) => Some(ticket),
            Self::VirtualCheckout(_) => None,
        }
    }

    /// Returns the reservation behind a virtual checkout.
    #[must_use]
    pub const fn as_reservation(&self) -> Option<&Reservation> {
        match self {
            Self::Ticket(_) => None,
            Self::VirtualCheckout(reservation) => Some(reservation),
        }
    }

    /// Returns the property code the item refers to.
    #[must_use]
    pub fn property_code(&self) -> &str {
        match self {
            Self::Ticket(ticket) => &ticket.property_code,
            Self::VirtualCheckout(reservation) => &reservation.property_code,
        }
    }

    /// Returns true only for finished tickets; placeholders are always open.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        match self {
            Self::Ticket(ticket) => ticket.is_done(),
            Self::VirtualCheckout(_) => false,
        }
    }
}
