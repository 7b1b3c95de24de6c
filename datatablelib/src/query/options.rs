//! Query options: sort, pagination and the combined view query.
//!
//! These are the inputs a [`ViewEngine`](super::ViewEngine) needs besides
//! the rows and columns themselves.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::filter::FilterState;
use crate::error::DatatableError;
use crate::Result;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZES: [usize; 5] = [5, 10, 20, 50, 100];

/// Page size used when a table is created.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (A-Z, smallest first, oldest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first, newest first)
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// One (column, direction) entry of a sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Column key
    pub column: String,
    /// Sort direction
    pub direction: SortDirection,
}

/// Ordered sort keys. Earlier keys take precedence.
///
/// The interactive table keeps a single key at a time, but the engine
/// honours the whole sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortState {
    keys: Vec<SortKey>,
}

impl SortState {
    /// No sorting: rows keep input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by a single column.
    pub fn by(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            keys: vec![SortKey {
                column: column.into(),
                direction,
            }],
        }
    }

    /// Add a lower-precedence sort key.
    pub fn then(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.keys.push(SortKey {
            column: column.into(),
            direction,
        });
        self
    }

    /// Sort keys in precedence order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Current direction for a column, if it is sorted.
    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        self.keys
            .iter()
            .find(|k| k.column == column)
            .map(|k| k.direction)
    }

    /// Cycle a column through unsorted -> ascending -> descending -> unsorted.
    ///
    /// Only one column is sorted at a time: toggling a different column
    /// replaces the current sort.
    pub fn toggle(&mut self, column: &str) {
        let next = match self.direction_of(column) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.keys.clear();
        if let Some(direction) = next {
            self.keys.push(SortKey {
                column: column.to_string(),
                direction,
            });
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Page position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Zero-based page index
    pub page_index: usize,
    /// Rows per page, one of [`PAGE_SIZES`]
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// First page with the given size.
    pub fn with_page_size(page_size: usize) -> Result<Self> {
        validate_page_size(page_size)?;
        Ok(Self {
            page_index: 0,
            page_size,
        })
    }

    /// Builder: set the page index
    pub fn page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Number of pages needed for `total` rows (0 when there are no rows).
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1))
    }

    /// One-based index of the first row on the current page (0 when empty).
    pub fn page_start(&self, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            self.offset().saturating_add(1).min(total)
        }
    }

    /// One-based index of the last row on the current page (0 when empty).
    pub fn page_end(&self, total: usize) -> usize {
        self.offset().saturating_add(self.page_size).min(total)
    }

    /// Row offset of the current page.
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index.saturating_add(1) < self.page_count(total)
    }

    /// Move to a page, clamped to the pages that exist for `total` rows.
    pub fn go_to(&mut self, page_index: usize, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        self.page_index = page_index.min(last);
    }

    /// Change the page size, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        validate_page_size(page_size)?;
        let top_row = self.offset();
        self.page_index = top_row / page_size;
        self.page_size = page_size;
        Ok(())
    }

    pub fn reset_page(&mut self) {
        self.page_index = 0;
    }

    /// Same size, page index clamped to the pages that exist for `total` rows.
    pub fn clamped(&self, total: usize) -> Self {
        let mut clamped = *self;
        clamped.go_to(self.page_index, total);
        clamped
    }
}

fn validate_page_size(page_size: usize) -> Result<()> {
    if PAGE_SIZES.contains(&page_size) {
        Ok(())
    } else {
        Err(DatatableError::InvalidPageSize(page_size))
    }
}

/// Everything a view engine needs besides rows and columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewQuery {
    /// Sort keys
    pub sort: SortState,
    /// Per-column filter values
    pub filters: FilterState,
    /// Free-text search across all columns
    pub global_filter: String,
    /// Page position and size
    pub pagination: Pagination,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the sort
    pub fn sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Builder: set a column filter
    pub fn filter(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.set(column, value);
        self
    }

    /// Builder: set the global search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.global_filter = text.into();
        self
    }

    /// Builder: set pagination
    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_toggle_cycle() {
        let mut sort = SortState::new();
        sort.toggle("amount");
        assert_eq!(sort.direction_of("amount"), Some(SortDirection::Ascending));
        sort.toggle("amount");
        assert_eq!(sort.direction_of("amount"), Some(SortDirection::Descending));
        sort.toggle("amount");
        assert_eq!(sort.direction_of("amount"), None);
        assert!(sort.is_empty());
    }

    #[test]
    fn test_sort_toggle_other_column_replaces() {
        let mut sort = SortState::by("amount", SortDirection::Descending);
        sort.toggle("customer");
        assert_eq!(sort.keys().len(), 1);
        assert_eq!(sort.direction_of("amount"), None);
        assert_eq!(
            sort.direction_of("customer"),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn test_sort_direction_from_str() {
        assert_eq!(
            SortDirection::from_str("asc").unwrap(),
            SortDirection::Ascending
        );
        assert_eq!(
            SortDirection::from_str("DESC").unwrap(),
            SortDirection::Descending
        );
        assert!(SortDirection::from_str("sideways").is_err());
    }

    #[test]
    fn test_pagination_defaults() {
        let p = Pagination::default();
        assert_eq!(p.page_index, 0);
        assert_eq!(p.page_size, 5);
    }

    #[test]
    fn test_pagination_bounds() {
        let p = Pagination::default();
        assert_eq!(p.page_count(12), 3);
        assert_eq!((p.page_start(12), p.page_end(12)), (1, 5));

        let last = p.page(2);
        assert_eq!((last.page_start(12), last.page_end(12)), (11, 12));
        assert!(!last.can_next(12));
        assert!(last.can_previous());
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::default();
        assert_eq!(p.page_count(0), 0);
        assert_eq!((p.page_start(0), p.page_end(0)), (0, 0));
        assert!(!p.can_next(0));
        assert!(!p.can_previous());
    }

    #[test]
    fn test_go_to_clamps() {
        let mut p = Pagination::default();
        p.go_to(10, 12);
        assert_eq!(p.page_index, 2);
        p.go_to(4, 0);
        assert_eq!(p.page_index, 0);
    }

    #[test]
    fn test_huge_page_index_saturates() {
        let p = Pagination::default().page(usize::MAX / 2);
        assert_eq!(p.offset(), usize::MAX);
        assert_eq!((p.page_start(12), p.page_end(12)), (12, 12));
        assert!(!p.can_next(12));

        let clamped = p.clamped(12);
        assert_eq!(clamped.page_index, 2);
        assert_eq!(clamped.page_size, 5);
        assert_eq!(Pagination::default().page(4).clamped(0).page_index, 0);
    }

    #[test]
    fn test_set_page_size_keeps_top_row() {
        let mut p = Pagination::default().page(3); // rows 15..20
        p.set_page_size(10).unwrap();
        assert_eq!(p.page_index, 1); // rows 10..20
        p.set_page_size(5).unwrap();
        assert_eq!(p.page_index, 2);
    }

    #[test]
    fn test_invalid_page_size() {
        let mut p = Pagination::default();
        assert!(matches!(p.set_page_size(7), Err(DatatableError::InvalidPageSize(7))));
        assert!(Pagination::with_page_size(0).is_err());
        assert_eq!(Pagination::with_page_size(50).unwrap().page_size, 50);
    }
}
