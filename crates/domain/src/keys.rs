// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stable identity keys for maintenance items and reservations.
//!
//! Keys index the override store and the observed-id sets, so they must be
//! reconstructible from stored fields alone and safe to use as document ids.
//!
//! ## Key shapes
//!
//! - real ticket: `ticket_<sanitized id>`
//! - checkout placeholder: `checkout_<sanitized property code>_<YYYY-MM-DD>`,
//!   even when the code is blank
//! - virtual ticket built from a placeholder: its `id`, which already has the
//!   checkout shape
//! - anything else, including a checkout without a usable date:
//!   `item_<base-36 content hash>` (degraded, not stable across
//!   field-order changes)

use crate::dates::to_date_only;
use crate::error::DomainError;
use crate::item::MaintenanceItem;
use crate::types::{Reservation, Ticket};
use serde::Serialize;
use tracing::warn;

/// Makes a string safe for use as a storage key.
///
/// Trims, maps `/` and `|` to `-`, and collapses whitespace runs to `_`.
#[must_use]
pub fn sanitize_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_whitespace = false;

    for c in raw.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        match c {
            '/' | '|' => out.push('-'),
            _ => out.push(c),
        }
    }
    out
}

/// Strips a display suffix (`"501A | Ed. Atlântico"`) from a property code.
#[must_use]
pub fn normalize_property_code(raw: &str) -> &str {
    raw.split('|').next().unwrap_or_default().trim()
}

/// Computes the identity key of a feed item.
#[must_use]
pub fn maintenance_item_key(item: &MaintenanceItem) -> String {
    match item {
        MaintenanceItem::Ticket(ticket) => ticket_key(ticket),
        MaintenanceItem::VirtualCheckout(reservation) => reservation_checkout_key(reservation),
    }
}

/// Computes the identity key of a ticket.
#[must_use]
pub fn ticket_key(ticket: &Ticket) -> String {
    let id = ticket.id.trim();
    if ticket.is_virtual && ticket.is_checkout_ticket && !id.is_empty() {
        return ticket.id.clone();
    }
    if !id.is_empty() {
        return format!("ticket_{}", sanitize_key(id));
    }

    let key = content_hash_key(ticket);
    warn!(key = %key, "Ticket without id; using content hash key");
    key
}

/// Computes the checkout key of a reservation.
///
/// Shared by placeholder items and the virtual tickets built from them so
/// that both resolve to the same override entry.
#[must_use]
pub fn reservation_checkout_key(reservation: &Reservation) -> String {
    if let Some(date) = to_date_only(&reservation.check_out_date) {
        let code = sanitize_key(&reservation.property_code);
        return format!("checkout_{code}_{date}");
    }

    let key = content_hash_key(reservation);
    warn!(
        key = %key,
        property_code = %reservation.property_code,
        check_out_date = %reservation.check_out_date,
        "Reservation without usable checkout date; using content hash key"
    );
    key
}

/// Computes the key under which reservation-level state is stored.
///
/// Priority:
/// 1. Stays bookings use `externalId`, since Stays regenerates `id`
/// 2. other channels use `id`
/// 3. then `externalId`
/// 4. then `id`
///
/// # Errors
///
/// Returns `DomainError::MissingIdentity` when neither id is present.
pub fn reservation_override_key(reservation: &Reservation) -> Result<String, DomainError> {
    let id = reservation.id();
    let external_id = reservation.external_id();

    let chosen = if reservation.is_from_stays() {
        external_id.or(id)
    } else {
        id.or(external_id)
    };

    chosen
        .map(sanitize_key)
        .ok_or_else(|| DomainError::MissingIdentity {
            property_code: reservation.property_code.clone(),
            check_out_date: reservation.check_out_date.clone(),
        })
}

/// Degraded key from the JSON serialization of `value`.
///
/// Uses the 31-multiplier rolling hash over UTF-16 code units, wrapping at
/// 32 bits, rendered base-36.
#[must_use]
pub fn content_hash_key<T: Serialize>(value: &T) -> String {
    let json = serde_json::to_string(value).unwrap_or_default();
    let hash = json
        .encode_utf16()
        .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    format!("item_{}", to_base36(i64::from(hash).unsigned_abs()))
}

#[allow(clippy::cast_possible_truncation)]
fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return String::from("0");
    }
    let mut buf: Vec<u8> = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}
