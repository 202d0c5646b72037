// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! "Load more" slicing of ordered groups.
//!
//! The budget counts items, not groups. Group boundaries are preserved: a
//! group that straddles the budget is cut, keeping its id, label and date.

use crate::group::MaintenanceGroup;
use serde::Serialize;

/// Items revealed by each "load more".
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// The visible prefix of a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedFeed {
    pub groups: Vec<MaintenanceGroup>,
    /// Items across the returned groups.
    pub shown: usize,
    /// Items across all input groups.
    pub total: usize,
    pub has_more: bool,
}

/// Returns the first `visible_items` items of `groups`, in order.
///
/// Empty groups are never emitted, whether they were empty on input or
/// fell entirely past the budget.
#[must_use]
pub fn paginate_groups(groups: &[MaintenanceGroup], visible_items: usize) -> PaginatedFeed {
    let total: usize = groups.iter().map(|g| g.items.len()).sum();
    let mut remaining: usize = visible_items;
    let mut visible: Vec<MaintenanceGroup> = Vec::new();

    for group in groups {
        if remaining == 0 {
            break;
        }
        if group.items.is_empty() {
            continue;
        }
        let take: usize = group.items.len().min(remaining);
        remaining -= take;
        if take == group.items.len() {
            visible.push(group.clone());
        } else {
            visible.push(group.with_items(group.items[..take].to_vec()));
        }
    }

    let shown: usize = visible_items.min(total);
    PaginatedFeed {
        groups: visible,
        shown,
        total,
        has_more: shown < total,
    }
}

/// Cumulative budget after `page` loads (the first page is `1`).
#[must_use]
pub fn page_budget(page: usize, page_size: usize) -> usize {
    page.max(1).saturating_mul(page_size)
}
