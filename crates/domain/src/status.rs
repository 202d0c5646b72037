// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Closed vocabularies shared by tickets and reservations.
//!
//! Wire values are the Portuguese labels written by the operations console,
//! so the same snapshot files can be read without translation.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a ticket. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    /// Created, nobody assigned yet.
    #[default]
    #[serde(rename = "Aberto")]
    Open,
    /// Assigned to at least one person.
    #[serde(rename = "Atribuído")]
    Assigned,
    /// Assignee is travelling to the property.
    #[serde(rename = "A caminho")]
    OnTheWay,
    /// Work has started.
    #[serde(rename = "Em andamento")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "Concluído")]
    Done,
}

impl TicketStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Aberto",
            Self::Assigned => "Atribuído",
            Self::OnTheWay => "A caminho",
            Self::InProgress => "Em andamento",
            Self::Done => "Concluído",
        }
    }

    /// Returns true if no further transition is expected.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Aberto" | "open" => Ok(Self::Open),
            "Atribuído" | "assigned" => Ok(Self::Assigned),
            "A caminho" | "on-the-way" => Ok(Self::OnTheWay),
            "Em andamento" | "in-progress" => Ok(Self::InProgress),
            "Concluído" | "done" => Ok(Self::Done),
            _ => Err(DomainError::UnknownValue {
                kind: "ticket status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    #[serde(rename = "Baixa")]
    Low,
    #[default]
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Urgente")]
    Urgent,
}

/// Which console a ticket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Operational maintenance and cleaning.
    #[default]
    Maintenance,
    /// Guest concierge offers and requests.
    Concierge,
}

impl Category {
    /// Returns the wire representation of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Concierge => "concierge",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maintenance" => Ok(Self::Maintenance),
            "concierge" => Ok(Self::Concierge),
            _ => Err(DomainError::UnknownValue {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

/// Booking state reported by the reservation channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReservationStatus {
    #[default]
    #[serde(rename = "Confirmada")]
    Confirmed,
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Check-in")]
    CheckedIn,
    #[serde(rename = "Check-out")]
    CheckedOut,
    #[serde(
        rename = "Cancelada",
        alias = "Cancelado",
        alias = "Canceled",
        alias = "Cancelled"
    )]
    Canceled,
}

impl ReservationStatus {
    /// Canceled bookings never produce checkout work or occupancy.
    #[must_use]
    pub const fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }
}

/// The classification flags a ticket can be filtered by.
///
/// A ticket may carry several of these at once; `Regular` applies only when
/// none of the other three flags is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Checkout,
    Preventive,
    Guest,
    Regular,
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkout" => Ok(Self::Checkout),
            "preventive" => Ok(Self::Preventive),
            "guest" => Ok(Self::Guest),
            "regular" => Ok(Self::Regular),
            _ => Err(DomainError::UnknownValue {
                kind: "ticket type",
                value: s.to_string(),
            }),
        }
    }
}
