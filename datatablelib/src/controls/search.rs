//! Global search box and filter toggle.

use serde::{Deserialize, Serialize};

use crate::query::ViewEngine;
use crate::state::TableState;

/// Placeholder shown in an empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search all columns...";

/// The toolbar above the table: search input plus the filter toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBox {
    /// Current search text
    pub value: String,
    pub placeholder: String,
    /// Whether the filter toggle is shown at all
    pub has_filterable_columns: bool,
    /// Whether the filter panel is open
    pub show_filters: bool,
    /// Badge count on the filter toggle
    pub active_filters_count: usize,
}

impl SearchBox {
    pub fn from_state<E: ViewEngine>(state: &TableState<E>) -> Self {
        Self {
            value: state.global_filter().to_string(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            has_filterable_columns: state.columns().has_filterable(),
            show_filters: state.show_filters(),
            active_filters_count: state.active_filter_count(),
        }
    }
}
