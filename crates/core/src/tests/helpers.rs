// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FeedContext, FeedInputs, Locale};
use chrono::NaiveDate;
use stayops_domain::{
    LocalDates, MaintenanceOverride, MaintenanceOverrides, Reservation, ReservationStatus, Ticket,
    TicketStatus,
};

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Monday 2026-10-19 in Sao Paulo, Portuguese labels.
pub fn create_test_context() -> FeedContext {
    FeedContext::on_day(LocalDates::default(), day(2026, 10, 19), Locale::PtBr)
}

pub fn create_test_ticket(id: &str, scheduled: Option<&str>) -> Ticket {
    Ticket {
        id: id.to_string(),
        property_code: String::from("501A"),
        description: format!("Reparo {id}"),
        status: TicketStatus::Open,
        scheduled_date: scheduled.map(String::from),
        ..Ticket::default()
    }
}

pub fn create_checkout_ticket(id: &str, reservation_id: &str, scheduled: &str) -> Ticket {
    Ticket {
        reservation_id: Some(reservation_id.to_string()),
        is_checkout_ticket: true,
        ..create_test_ticket(id, Some(scheduled))
    }
}

pub fn create_test_reservation(id: &str, property_code: &str, check_out: &str) -> Reservation {
    Reservation {
        id: Some(id.to_string()),
        property_code: property_code.to_string(),
        guest_name: Some(String::from("Maria Lima")),
        check_in_date: String::from("2026-10-01"),
        check_out_date: check_out.to_string(),
        status: ReservationStatus::Confirmed,
        ..Reservation::default()
    }
}

pub fn hidden(keys: &[&str]) -> MaintenanceOverrides {
    keys.iter()
        .map(|key| {
            (
                (*key).to_string(),
                MaintenanceOverride {
                    hidden: true,
                    updated_at: 1_770_000_000_000,
                },
            )
        })
        .collect()
}

pub fn inputs<'a>(
    tickets: &'a [Ticket],
    reservations: &'a [Reservation],
    overrides: &'a MaintenanceOverrides,
) -> FeedInputs<'a> {
    FeedInputs {
        tickets,
        reservations,
        overrides,
    }
}
