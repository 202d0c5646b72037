// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_checkout_ticket, create_test_context, create_test_reservation, create_test_ticket, day,
    hidden, inputs,
};
use crate::{
    BACKLOG_GROUP_ID, CoreError, FeedContext, Locale, MaintenanceFeed, MaintenanceFilters,
    PeriodPreset, PeriodSelection, build_maintenance_feed, filter_tickets,
};
use stayops_domain::{
    Category, LocalDates, MaintenanceItem, MaintenanceOverrides, Reservation, ReservationStatus,
    Ticket, TicketStatus, TicketType, maintenance_item_key,
};

fn with_preset(preset: PeriodPreset) -> MaintenanceFilters {
    MaintenanceFilters {
        period: PeriodSelection::preset(preset),
        ..MaintenanceFilters::default()
    }
}

fn build(
    tickets: &[Ticket],
    reservations: &[Reservation],
    overrides: &MaintenanceOverrides,
    filters: &MaintenanceFilters,
) -> MaintenanceFeed {
    build_maintenance_feed(
        inputs(tickets, reservations, overrides),
        filters,
        &create_test_context(),
    )
    .unwrap()
}

fn item_keys(feed: &MaintenanceFeed) -> Vec<String> {
    feed.groups
        .iter()
        .flat_map(|g| g.items.iter().map(maintenance_item_key))
        .collect()
}

#[test]
fn test_scheduled_ticket_lands_in_its_date_group() {
    let tickets: Vec<Ticket> = vec![create_test_ticket("t1", Some("2026-02-10"))];
    let feed: MaintenanceFeed = build(
        &tickets,
        &[],
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(feed.groups.len(), 1);
    assert_eq!(feed.groups[0].id, "2026-02-10");
    assert_eq!(feed.groups[0].date, Some(day(2026, 2, 10)));
    assert!(!feed.groups[0].is_backlog);
    assert_eq!(item_keys(&feed), vec![String::from("ticket_t1")]);
}

#[test]
fn test_reservation_without_ticket_becomes_virtual_checkout() {
    let reservations: Vec<Reservation> = vec![create_test_reservation(
        "r1",
        "501A",
        "2026-02-10T11:00:00Z",
    )];
    let feed: MaintenanceFeed = build(
        &[],
        &reservations,
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(feed.stats.virtual_checkouts, 1);
    assert_eq!(feed.groups.len(), 1);
    assert_eq!(feed.groups[0].id, "2026-02-10");
    assert_eq!(item_keys(&feed), vec![String::from("checkout_501A_2026-02-10")]);
    assert!(matches!(
        feed.groups[0].items[0],
        MaintenanceItem::VirtualCheckout(_)
    ));
}

#[test]
fn test_real_checkout_ticket_suppresses_virtual_checkout() {
    let reservations: Vec<Reservation> = vec![create_test_reservation(
        "r1",
        "501A",
        "2026-02-10T11:00:00Z",
    )];
    let tickets: Vec<Ticket> = vec![create_checkout_ticket("t9", "r1", "2026-02-10")];
    let feed: MaintenanceFeed = build(
        &tickets,
        &reservations,
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(feed.item_count(), 1);
    assert_eq!(feed.stats.virtual_checkouts, 0);
    assert_eq!(feed.stats.suppressed_reservations, 1);
    assert_eq!(item_keys(&feed), vec![String::from("ticket_t9")]);
}

#[test]
fn test_checkout_ticket_suppresses_every_copy_of_its_reservation() {
    let reservations: Vec<Reservation> = vec![
        create_test_reservation("r1", "501A", "2026-10-21"),
        create_test_reservation("r1", "501A", "2026-10-21"),
    ];
    let tickets: Vec<Ticket> = vec![create_checkout_ticket("t1", "r1", "2026-10-21")];
    let feed: MaintenanceFeed = build(
        &tickets,
        &reservations,
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(item_keys(&feed), vec![String::from("ticket_t1")]);
    assert_eq!(feed.stats.virtual_checkouts, 0);
    assert_eq!(feed.stats.suppressed_reservations, 2);
}

#[test]
fn test_checkout_ticket_suppresses_resynced_copy_under_new_id() {
    let mut original: Reservation = create_test_reservation("r1", "501A", "2026-10-21");
    original.external_id = Some(String::from("BK-9"));
    let resynced: Reservation = create_test_reservation("r1-bis", "501A", "2026-10-21T14:00");
    let tickets: Vec<Ticket> = vec![create_checkout_ticket("t1", "BK-9", "2026-10-21")];
    let feed: MaintenanceFeed = build(
        &tickets,
        &[original, resynced],
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(item_keys(&feed), vec![String::from("ticket_t1")]);
    assert_eq!(feed.stats.virtual_checkouts, 0);
}

#[test]
fn test_virtual_checkout_day_matches_its_key() {
    // 01:00Z on the 20th is still the 19th in Sao Paulo.
    let reservations: Vec<Reservation> = vec![create_test_reservation(
        "r1",
        "501A",
        "2026-10-20T01:00:00Z",
    )];
    let context: FeedContext =
        FeedContext::on_day(LocalDates::default(), day(2026, 10, 20), Locale::PtBr);

    for preset in [PeriodPreset::All, PeriodPreset::Today] {
        let feed: MaintenanceFeed = build_maintenance_feed(
            inputs(&[], &reservations, &MaintenanceOverrides::new()),
            &with_preset(preset),
            &context,
        )
        .unwrap();

        assert_eq!(feed.groups.len(), 1, "preset {}", preset.as_str());
        assert_eq!(feed.groups[0].id, "2026-10-20");
        assert_eq!(item_keys(&feed), vec![String::from("checkout_501A_2026-10-20")]);
    }
}

#[test]
fn test_checkout_ticket_matched_by_property_and_day_suppresses_virtual() {
    let reservations: Vec<Reservation> = vec![create_test_reservation(
        "r1",
        "501A",
        "2026-10-22T11:00:00Z",
    )];
    let mut ticket: Ticket = create_checkout_ticket("t9", "stale-id", "2026-10-22");
    ticket.property_code = String::from("501A | Ed. Atlântico");
    let feed: MaintenanceFeed = build(
        &[ticket],
        &reservations,
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(item_keys(&feed), vec![String::from("ticket_t9")]);
}

#[test]
fn test_filtered_out_checkout_ticket_still_suppresses_virtual() {
    let reservations: Vec<Reservation> = vec![create_test_reservation(
        "r1",
        "501A",
        "2026-10-22T11:00:00Z",
    )];
    let mut ticket: Ticket = create_checkout_ticket("t9", "r1", "2026-10-22");
    ticket.status = TicketStatus::Done;
    let filters: MaintenanceFilters = MaintenanceFilters {
        status: Some(TicketStatus::Open),
        ..MaintenanceFilters::default()
    };
    let feed: MaintenanceFeed = build(
        &[ticket],
        &reservations,
        &MaintenanceOverrides::new(),
        &filters,
    );

    assert_eq!(feed.item_count(), 0);
}

#[test]
fn test_undated_open_ticket_is_backlog_under_every_preset() {
    let tickets: Vec<Ticket> = vec![create_test_ticket("t2", None)];
    for preset in [
        PeriodPreset::All,
        PeriodPreset::Today,
        PeriodPreset::Next7Days,
        PeriodPreset::Next30Days,
        PeriodPreset::ThisMonth,
    ] {
        let feed: MaintenanceFeed =
            build(&tickets, &[], &MaintenanceOverrides::new(), &with_preset(preset));
        assert_eq!(feed.groups.len(), 1, "preset {}", preset.as_str());
        assert_eq!(feed.groups[0].id, BACKLOG_GROUP_ID);
        assert!(feed.groups[0].is_backlog);
        assert_eq!(feed.groups[0].label, "Sem data definida");
    }
}

#[test]
fn test_backlog_is_emitted_first() {
    let tickets: Vec<Ticket> = vec![
        create_test_ticket("dated", Some("2026-10-19")),
        create_test_ticket("undated", None),
    ];
    let feed: MaintenanceFeed = build(
        &tickets,
        &[],
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(feed.groups[0].id, BACKLOG_GROUP_ID);
    assert_eq!(feed.groups[1].label, "Hoje - segunda-feira, 19 de outubro");
}

#[test]
fn test_undated_done_ticket_falls_back_to_updated_at() {
    let mut ticket: Ticket = create_test_ticket("t3", None);
    ticket.status = TicketStatus::Done;
    ticket.updated_at = Some(1_770_771_600_000);
    let feed: MaintenanceFeed = build(
        &[ticket],
        &[],
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(feed.groups.len(), 1);
    assert_eq!(feed.groups[0].date, Some(day(2026, 2, 10)));
}

#[test]
fn test_done_ticket_without_any_date_is_dropped() {
    let mut ticket: Ticket = create_test_ticket("t3", None);
    ticket.status = TicketStatus::Done;
    let feed: MaintenanceFeed = build(
        &[ticket],
        &[],
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert!(feed.groups.is_empty());
    assert_eq!(feed.stats.undated_done, 1);
}

#[test]
fn test_hidden_override_removes_ticket_and_virtual() {
    let tickets: Vec<Ticket> = vec![create_test_ticket("t1", Some("2026-10-20"))];
    let reservations: Vec<Reservation> = vec![create_test_reservation(
        "r1",
        "502",
        "2026-10-21",
    )];
    let overrides: MaintenanceOverrides = hidden(&["ticket_t1", "checkout_502_2026-10-21"]);
    let feed: MaintenanceFeed = build(
        &tickets,
        &reservations,
        &overrides,
        &MaintenanceFilters::default(),
    );

    assert_eq!(feed.item_count(), 0);
    assert_eq!(feed.stats.hidden, 2);
}

#[test]
fn test_canceled_reservation_produces_nothing() {
    let mut reservation: Reservation = create_test_reservation("r1", "501A", "2026-10-21");
    reservation.status = ReservationStatus::Canceled;
    let feed: MaintenanceFeed = build(
        &[],
        &[reservation],
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(feed.item_count(), 0);
}

#[test]
fn test_duplicate_reservations_yield_one_virtual_checkout() {
    let first: Reservation = create_test_reservation("r1", "501A", "2026-10-21");
    let mut resynced: Reservation = create_test_reservation("r1-bis", "501A", "2026-10-21T14:00");
    resynced.external_id = Some(String::from("BK-9"));
    let feed: MaintenanceFeed = build(
        &[],
        &[first, resynced],
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(feed.item_count(), 1);
}

#[test]
fn test_concierge_category_has_no_virtual_checkouts() {
    let mut ticket: Ticket = create_test_ticket("c1", Some("2026-10-20"));
    ticket.category = Category::Concierge;
    let reservations: Vec<Reservation> = vec![create_test_reservation("r1", "501A", "2026-10-21")];
    let feed: MaintenanceFeed = build(
        &[ticket],
        &reservations,
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::for_category(Category::Concierge),
    );

    assert_eq!(item_keys(&feed), vec![String::from("ticket_c1")]);
}

#[test]
fn test_period_window_excludes_out_of_range_items() {
    let tickets: Vec<Ticket> = vec![
        create_test_ticket("yesterday", Some("2026-10-18")),
        create_test_ticket("today", Some("2026-10-19")),
        create_test_ticket("next-week", Some("2026-10-26")),
    ];
    let reservations: Vec<Reservation> = vec![
        create_test_reservation("r-in", "501A", "2026-10-25"),
        create_test_reservation("r-out", "502", "2026-10-26"),
    ];
    let feed: MaintenanceFeed = build(
        &tickets,
        &reservations,
        &MaintenanceOverrides::new(),
        &with_preset(PeriodPreset::Next7Days),
    );

    assert_eq!(
        item_keys(&feed),
        vec![
            String::from("ticket_today"),
            String::from("checkout_501A_2026-10-25"),
        ]
    );
    assert!(feed.window.active);
}

#[test]
fn test_virtual_checkouts_ignore_status_assignee_and_type_filters() {
    let reservations: Vec<Reservation> = vec![create_test_reservation("r1", "501A", "2026-10-21")];
    let filters: MaintenanceFilters = MaintenanceFilters {
        status: Some(TicketStatus::Done),
        assignee: Some(String::from("Carlos")),
        types: vec![TicketType::Preventive],
        ..MaintenanceFilters::default()
    };
    let feed: MaintenanceFeed = build(&[], &reservations, &MaintenanceOverrides::new(), &filters);

    assert_eq!(feed.stats.virtual_checkouts, 1);
}

#[test]
fn test_virtual_checkouts_honor_search_and_property() {
    let reservations: Vec<Reservation> = vec![
        create_test_reservation("r1", "501A", "2026-10-21"),
        create_test_reservation("r2", "502", "2026-10-21"),
    ];
    let by_property: MaintenanceFilters = MaintenanceFilters {
        property: Some(String::from("502")),
        ..MaintenanceFilters::default()
    };
    let feed: MaintenanceFeed = build(
        &[],
        &reservations,
        &MaintenanceOverrides::new(),
        &by_property,
    );
    assert_eq!(item_keys(&feed), vec![String::from("checkout_502_2026-10-21")]);

    let by_search: MaintenanceFilters = MaintenanceFilters {
        search: String::from("joão"),
        ..MaintenanceFilters::default()
    };
    let feed: MaintenanceFeed = build(&[], &reservations, &MaintenanceOverrides::new(), &by_search);
    assert_eq!(feed.item_count(), 0);
}

#[test]
fn test_items_within_a_day_sort_open_before_done() {
    let mut done: Ticket = create_test_ticket("done", Some("2026-10-20T08:00:00-03:00"));
    done.status = TicketStatus::Done;
    done.completed_date = Some(String::from("2026-10-20T09:00:00-03:00"));
    let late: Ticket = create_test_ticket("late", Some("2026-10-20T16:00:00-03:00"));
    let early: Ticket = create_test_ticket("early", Some("2026-10-20T07:00:00-03:00"));
    let feed: MaintenanceFeed = build(
        &[done, late, early],
        &[],
        &MaintenanceOverrides::new(),
        &MaintenanceFilters::default(),
    );

    assert_eq!(
        item_keys(&feed),
        vec![
            String::from("ticket_early"),
            String::from("ticket_late"),
            String::from("ticket_done"),
        ]
    );
}

#[test]
fn test_english_labels() {
    let tickets: Vec<Ticket> = vec![create_test_ticket("t1", Some("2026-10-19"))];
    let ctx: FeedContext = FeedContext::on_day(LocalDates::default(), day(2026, 10, 19), Locale::EnUs);
    let overrides: MaintenanceOverrides = MaintenanceOverrides::new();
    let feed: MaintenanceFeed = build_maintenance_feed(
        inputs(&tickets, &[], &overrides),
        &MaintenanceFilters::default(),
        &ctx,
    )
    .unwrap();

    assert_eq!(feed.groups[0].label, "Today - Monday, October 19");
}

#[test]
fn test_invalid_custom_period_is_an_error() {
    let filters: MaintenanceFilters = MaintenanceFilters {
        period: PeriodSelection::custom("2026-10-20", "2026-10-10"),
        ..MaintenanceFilters::default()
    };
    let overrides: MaintenanceOverrides = MaintenanceOverrides::new();
    let result = build_maintenance_feed(inputs(&[], &[], &overrides), &filters, &create_test_context());

    assert!(matches!(result, Err(CoreError::InvalidPeriod { .. })));
}

#[test]
fn test_filter_tickets_sorts_open_then_done() {
    let mut done_old: Ticket = create_test_ticket("done-old", Some("2026-10-01"));
    done_old.status = TicketStatus::Done;
    done_old.completed_date = Some(String::from("2026-10-01"));
    let mut done_new: Ticket = create_test_ticket("done-new", Some("2026-10-10"));
    done_new.status = TicketStatus::Done;
    done_new.completed_date = Some(String::from("2026-10-10"));
    let mut desired_only: Ticket = create_test_ticket("desired", None);
    desired_only.desired_date = Some(String::from("2026-10-20"));
    let scheduled: Ticket = create_test_ticket("scheduled", Some("2026-10-25"));

    let tickets: Vec<Ticket> = vec![done_old, scheduled, done_new, desired_only];
    let overrides: MaintenanceOverrides = MaintenanceOverrides::new();
    let sorted: Vec<Ticket> = filter_tickets(
        inputs(&tickets, &[], &overrides),
        &MaintenanceFilters::default(),
        &create_test_context(),
    )
    .unwrap();

    let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["desired", "scheduled", "done-new", "done-old"]);
}

#[test]
fn test_derivation_is_repeatable() {
    let tickets: Vec<Ticket> = vec![
        create_test_ticket("t1", Some("2026-10-20")),
        create_test_ticket("t2", None),
    ];
    let reservations: Vec<Reservation> = vec![create_test_reservation("r1", "501A", "2026-10-21")];
    let overrides: MaintenanceOverrides = MaintenanceOverrides::new();
    let first: MaintenanceFeed = build(&tickets, &reservations, &overrides, &MaintenanceFilters::default());
    let second: MaintenanceFeed = build(&tickets, &reservations, &overrides, &MaintenanceFilters::default());

    assert_eq!(first, second);
}
