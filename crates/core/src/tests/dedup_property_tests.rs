// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_checkout_ticket, create_test_context, create_test_reservation};
use crate::{FeedInputs, MaintenanceFeed, MaintenanceFilters, build_maintenance_feed};
use proptest::prelude::*;
use stayops_domain::{MaintenanceItem, MaintenanceOverrides, Reservation, Ticket};
use std::collections::{HashMap, HashSet};

proptest! {
    #[test]
    fn prop_reservation_is_represented_at_most_once(
        slots in proptest::collection::vec((0_u8..4, 1_u32..28, any::<bool>()), 1..12),
    ) {
        let reservations: Vec<Reservation> = slots
            .iter()
            .enumerate()
            .map(|(i, (code, day, _))| {
                create_test_reservation(&format!("r{i}"), &format!("P{code}"), &format!("2026-11-{day:02}"))
            })
            .collect();
        let tickets: Vec<Ticket> = slots
            .iter()
            .enumerate()
            .filter(|(_, (_, _, has_ticket))| *has_ticket)
            .map(|(i, (_, day, _))| {
                create_checkout_ticket(&format!("t{i}"), &format!("r{i}"), &format!("2026-11-{day:02}"))
            })
            .collect();
        let covered: HashSet<String> = tickets
            .iter()
            .filter_map(|t| t.reservation_id.clone())
            .collect();

        let overrides: MaintenanceOverrides = MaintenanceOverrides::new();
        let feed: MaintenanceFeed = build_maintenance_feed(
            FeedInputs { tickets: &tickets, reservations: &reservations, overrides: &overrides },
            &MaintenanceFilters::default(),
            &create_test_context(),
        )
        .unwrap();

        let mut seen: HashMap<String, usize> = HashMap::new();
        for item in feed.groups.iter().flat_map(|g| g.items.iter()) {
            let reservation_id = match item {
                MaintenanceItem::Ticket(t) => t.reservation_id.clone(),
                MaintenanceItem::VirtualCheckout(r) => {
                    let id = r.id.clone();
                    prop_assert!(!id.as_ref().is_some_and(|id| covered.contains(id)));
                    id
                }
            };
            if let Some(id) = reservation_id {
                *seen.entry(id).or_default() += 1;
            }
        }
        prop_assert!(seen.values().all(|count| *count == 1));
        prop_assert_eq!(feed.stats.tickets, tickets.len());
    }
}
