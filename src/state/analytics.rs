//! Session-review state: the child/page filter, derived metrics, and the
//! active audio session.
//!
//! DESIGN
//! ======
//! The filter's fields are private so the page-reset invariant cannot be
//! bypassed: picking a different child always moves the cursor back to the
//! first page. Metric helpers are pure functions over the snapshot so they
//! stay unit-testable off the rendering path.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use crate::net::types::HourlyUsage;

/// Fixed page size for the recent-conversations table.
pub const ITEMS_PER_PAGE: u32 = 10;

/// Child filter + page cursor for the analytics snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionFilter {
    child: String,
    page: u32,
}

impl Default for SessionFilter {
    fn default() -> Self {
        Self { child: "all".to_owned(), page: 1 }
    }
}

impl SessionFilter {
    /// Filter scoped to one child from the start (deep link from the parents
    /// screen).
    pub fn for_child(child: impl Into<String>) -> Self {
        Self { child: child.into(), page: 1 }
    }

    pub fn child(&self) -> &str {
        &self.child
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether the snapshot covers all children rather than a single one.
    pub fn is_all(&self) -> bool {
        self.child == "all"
    }

    /// Switch the child filter. Selecting a different child invalidates the
    /// page cursor; re-selecting the current child is a no-op.
    pub fn set_child(&mut self, child: impl Into<String>) {
        let child = child.into();
        if child != self.child {
            self.child = child;
            self.page = 1;
        }
    }

    /// Move the page cursor, clamped to at least 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

/// The single in-progress playback, if any. Starting another conversation's
/// audio tears this one down first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioSession {
    pub child_id: String,
    pub conversation_id: String,
    pub child_name: String,
    pub url: String,
    pub playing: bool,
}

/// Average conversation time rounded to whole minutes for the metric tile.
pub fn avg_minutes(avg_conversation_time: f64) -> i64 {
    avg_conversation_time.round() as i64
}

/// The hour-of-day with the most usage. Ties resolve to the first maximum in
/// array order.
pub fn peak_usage_hour(hourly: &[HourlyUsage]) -> Option<u8> {
    let mut best: Option<&HourlyUsage> = None;
    for entry in hourly {
        match best {
            Some(current) if entry.duration > current.duration => best = Some(entry),
            None => best = Some(entry),
            _ => {}
        }
    }
    best.map(|entry| entry.hour)
}

/// 1-based inclusive bounds of the rows the current page shows.
pub fn showing_range(page: u32, per_page: u32, total: u64) -> (u64, u64) {
    let start = u64::from(page - 1) * u64::from(per_page) + 1;
    let end = (u64::from(page) * u64::from(per_page)).min(total);
    (start, end)
}

/// The "Showing X to Y of N results" caption under the table.
pub fn format_showing(page: u32, per_page: u32, total: u64) -> String {
    let (start, end) = showing_range(page, per_page, total);
    format!("Showing {start} to {end} of {total} results")
}

/// Pagination controls render only when there is more than one page worth of
/// rows.
pub fn pagination_visible(total: u64, per_page: u32) -> bool {
    total > u64::from(per_page)
}

pub fn has_prev(page: u32) -> bool {
    page > 1
}

pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}
