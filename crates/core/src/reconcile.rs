// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Linking checkout tickets to the reservations that caused them.
//!
//! Both directions are read-only:
//! - a checkout ticket is resolved to its reservation (by id, then by
//!   property code and checkout day)
//! - a reservation without a ticket is mapped to a virtual placeholder ticket
//!   whose id equals the reservation's checkout key

use chrono::NaiveDate;
use serde::Serialize;
use stayops_domain::{
    CHECKOUT_SERVICE_TYPE, Category, LocalDates, Priority, Reservation, Ticket, TicketStatus,
    normalize_property_code, reservation_checkout_key, to_date_only,
};

/// How a reservation was matched to a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchStrategy {
    /// `ticket.reservationId` equals the reservation's `id` or `externalId`.
    ReservationId,
    /// Normalized property code and checkout day agree.
    PropertyAndDate,
}

/// What the resolver looked at, for callers that surface "no match" states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileDiagnostics {
    pub reservation_id: Option<String>,
    pub normalized_property_code: String,
    pub candidate_dates: Vec<NaiveDate>,
    pub reservations_checked: usize,
    pub matched_by: Option<MatchStrategy>,
}

/// Result of `resolve_reservation_for_checkout_ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationResolution<'a> {
    /// `None` is a valid outcome: the ticket stands alone.
    pub reservation: Option<&'a Reservation>,
    pub diagnostics: ReconcileDiagnostics,
}

/// Finds the reservation a checkout ticket was opened for.
///
/// First match wins:
/// 1. `reservationId` equal to a reservation's `id` or `externalId`
/// 2. same normalized property code and a checkout day equal to the
///    ticket's desired or scheduled day (canceled bookings are skipped here)
#[must_use]
pub fn resolve_reservation_for_checkout_ticket<'a>(
    ticket: &Ticket,
    reservations: &'a [Reservation],
    dates: &LocalDates,
) -> ReservationResolution<'a> {
    let (position, diagnostics) = resolve_position(ticket, reservations, dates);
    ReservationResolution {
        reservation: position.and_then(|i| reservations.get(i)),
        diagnostics,
    }
}

/// Index-returning core of `resolve_reservation_for_checkout_ticket`.
fn resolve_position(
    ticket: &Ticket,
    reservations: &[Reservation],
    dates: &LocalDates,
) -> (Option<usize>, ReconcileDiagnostics) {
    let property_code: &str = normalize_property_code(&ticket.property_code);
    let mut diagnostics: ReconcileDiagnostics = ReconcileDiagnostics {
        reservation_id: ticket.reservation_id.clone(),
        normalized_property_code: property_code.to_string(),
        candidate_dates: candidate_dates(ticket, dates),
        reservations_checked: reservations.len(),
        matched_by: None,
    };

    let by_id: Option<usize> = ticket
        .reservation_id
        .as_deref()
        .and_then(|id| reservations.iter().position(|r| r.matches_id(id)));
    if by_id.is_some() {
        diagnostics.matched_by = Some(MatchStrategy::ReservationId);
        return (by_id, diagnostics);
    }

    if property_code.is_empty() || diagnostics.candidate_dates.is_empty() {
        return (None, diagnostics);
    }

    let by_day: Option<usize> = reservations
        .iter()
        .position(|r| same_checkout(r, property_code, &diagnostics.candidate_dates));
    if by_day.is_some() {
        diagnostics.matched_by = Some(MatchStrategy::PropertyAndDate);
    }
    (by_day, diagnostics)
}

/// Every reservation a real checkout ticket stands for.
///
/// Same rules as `resolve_position`, but each rule keeps all of its matches:
/// a booking synced twice under one id is covered twice.
pub(crate) fn covered_positions(
    ticket: &Ticket,
    reservations: &[Reservation],
    dates: &LocalDates,
) -> Vec<usize> {
    if let Some(id) = ticket.reservation_id.as_deref() {
        let by_id: Vec<usize> = positions(reservations, |r| r.matches_id(id));
        if !by_id.is_empty() {
            return by_id;
        }
    }

    let property_code: &str = normalize_property_code(&ticket.property_code);
    let candidates: Vec<NaiveDate> = candidate_dates(ticket, dates);
    if property_code.is_empty() || candidates.is_empty() {
        return Vec::new();
    }
    positions(reservations, |r| same_checkout(r, property_code, &candidates))
}

fn candidate_dates(ticket: &Ticket, dates: &LocalDates) -> Vec<NaiveDate> {
    let mut candidates: Vec<NaiveDate> = [&ticket.desired_date, &ticket.scheduled_date]
        .into_iter()
        .flatten()
        .filter_map(|raw| dates.local_date(raw))
        .collect();
    candidates.dedup();
    candidates
}

fn same_checkout(reservation: &Reservation, property_code: &str, days: &[NaiveDate]) -> bool {
    !reservation.status.is_canceled()
        && normalize_property_code(&reservation.property_code) == property_code
        && reservation
            .checkout_day()
            .is_some_and(|day| days.contains(&day))
}

fn positions(reservations: &[Reservation], matches: impl Fn(&Reservation) -> bool) -> Vec<usize> {
    reservations
        .iter()
        .enumerate()
        .filter(|(_, reservation)| matches(reservation))
        .map(|(index, _)| index)
        .collect()
}

/// Builds the placeholder ticket for a reservation's checkout cleaning.
///
/// The result is never persisted. Its `id` is the reservation's checkout key,
/// so overrides recorded against the placeholder apply to the virtual ticket
/// as well. Calling this twice on the same reservation yields equal tickets.
#[must_use]
pub fn map_reservation_to_virtual_ticket(reservation: &Reservation) -> Ticket {
    let checkout_day: Option<String> =
        to_date_only(&reservation.check_out_date).map(String::from);
    let description: String = match reservation.guest_name.as_deref().map(str::trim) {
        Some(guest) if !guest.is_empty() => format!("{CHECKOUT_SERVICE_TYPE} - {guest}"),
        _ => String::from(CHECKOUT_SERVICE_TYPE),
    };

    Ticket {
        id: reservation_checkout_key(reservation),
        property_code: reservation.property_code.clone(),
        property_name: reservation.property_name.clone(),
        description,
        service_type: Some(String::from(CHECKOUT_SERVICE_TYPE)),
        category: Category::Maintenance,
        status: TicketStatus::Open,
        priority: Priority::High,
        desired_date: checkout_day.clone(),
        scheduled_date: checkout_day,
        reservation_id: reservation
            .id()
            .or_else(|| reservation.external_id())
            .map(String::from),
        guest_name: reservation.guest_name.clone(),
        is_checkout_ticket: true,
        is_virtual: true,
        source_reservation: Some(Box::new(reservation.clone())),
        ..Ticket::default()
    }
}
