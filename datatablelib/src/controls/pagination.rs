//! Pagination bar.

use serde::{Deserialize, Serialize};

use crate::query::{Pagination, TableView, PAGE_SIZES};

/// Everything the pagination bar displays, computed on the filtered count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationBar {
    /// Zero-based current page
    pub page_index: usize,
    /// Pages available (0 when nothing matches)
    pub page_count: usize,
    pub page_size: usize,
    /// Choices for the page-size selector
    pub page_sizes: Vec<usize>,
    /// Rows matching the current search and filters
    pub total_filtered: usize,
    /// One-based first row on the page (0 when empty)
    pub page_start: usize,
    /// One-based last row on the page (0 when empty)
    pub page_end: usize,
    /// `"6-10 of 12"`, or `"0 of 0"` when empty
    pub summary: String,
    /// `"Page 2 of 3"`
    pub page_label: String,
    /// First/previous buttons enabled
    pub can_previous: bool,
    /// Next/last buttons enabled
    pub can_next: bool,
}

impl PaginationBar {
    /// Build the bar for a computed view. The page shown is the view's
    /// (clamped) page, not the one requested.
    pub fn new(pagination: &Pagination, view: &TableView<'_>) -> Self {
        let pagination = pagination.page(view.page_index);
        let total = view.total_filtered;
        let page_count = view.page_count;
        let page_start = pagination.page_start(total);
        let page_end = pagination.page_end(total);

        let summary = if total == 0 {
            "0 of 0".to_string()
        } else {
            format!("{}-{} of {}", page_start, page_end, total)
        };

        Self {
            page_index: pagination.page_index,
            page_count,
            page_size: pagination.page_size,
            page_sizes: PAGE_SIZES.to_vec(),
            total_filtered: total,
            page_start,
            page_end,
            summary,
            page_label: format!(
                "Page {} of {}",
                pagination.page_index.saturating_add(1),
                page_count.max(1)
            ),
            can_previous: pagination.can_previous(),
            can_next: pagination.page_index.saturating_add(1) < page_count,
        }
    }
}
