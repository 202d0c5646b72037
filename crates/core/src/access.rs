// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! What a viewer may do with a feed item.

use serde::{Deserialize, Serialize};
use stayops_domain::{DomainError, MaintenanceItem};
use std::str::FromStr;

/// Permission level of the current viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AccessLevel {
    ReadOnly,
    #[default]
    Operator,
    Admin,
}

impl AccessLevel {
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

impl FromStr for AccessLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "readOnly" | "read-only" => Ok(Self::ReadOnly),
            "operator" => Ok(Self::Operator),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::UnknownValue {
                kind: "access level",
                value: s.to_string(),
            }),
        }
    }
}

/// The action opened when an item is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemAction {
    /// Create the real checkout ticket for a placeholder.
    PromoteToTicket,
    Edit,
    View,
}

#[must_use]
pub const fn item_action(item: &MaintenanceItem, access: AccessLevel) -> ItemAction {
    if access.is_read_only() {
        return ItemAction::View;
    }
    match item {
        MaintenanceItem::VirtualCheckout(_) => ItemAction::PromoteToTicket,
        MaintenanceItem::Ticket(_) => ItemAction::Edit,
    }
}
