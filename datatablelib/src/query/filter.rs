//! Column filters and global search.
//!
//! Filter values are kept as the raw strings the user typed (see
//! [`FilterState`]) and turned into a typed [`ColumnFilter`] per column when
//! the view is computed. Every predicate is total: a filter value that cannot
//! be interpreted constrains nothing rather than failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::data::{CellValue, ColumnConfig, Columns, DataType, Row};
use crate::format::{self, date};

/// Separator between the two sides of a date range filter value.
pub const DATE_RANGE_SEPARATOR: char = '|';

/// Raw per-column filter values keyed by column key.
///
/// Empty values are never stored: setting a column to `""` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    values: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column's filter value. Returns `true` if the state changed.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) -> bool {
        let column = column.into();
        let value = value.into();
        if value.is_empty() {
            return self.values.remove(&column).is_some();
        }
        self.values.insert(column, value.clone()) != Some(value)
    }

    /// Clear a column's filter. Returns `true` if it was set.
    pub fn clear(&mut self, column: &str) -> bool {
        self.values.remove(column).is_some()
    }

    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    /// Current value for a column (`""` when unset).
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn is_active(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Number of columns with a filter value.
    pub fn active_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split a `"from|to"` value into its raw sides.
///
/// A value without separator is a lone `from`.
pub fn split_date_range(value: &str) -> (&str, &str) {
    match value.split_once(DATE_RANGE_SEPARATOR) {
        Some((from, to)) => (from, to),
        None => (value, ""),
    }
}

/// Encode two date inputs into one filter value, omitting empty sides.
///
/// `("a", "b")` -> `"a|b"`, `("a", "")` -> `"a"`, `("", "b")` -> `"|b"`,
/// `("", "")` -> `""`.
pub fn encode_date_range(from: &str, to: &str) -> String {
    match (from.is_empty(), to.is_empty()) {
        (true, true) => String::new(),
        (false, true) => from.to_string(),
        (true, false) => format!("{}{}", DATE_RANGE_SEPARATOR, to),
        (false, false) => format!("{}{}{}", from, DATE_RANGE_SEPARATOR, to),
    }
}

/// Inclusive date interval; an absent side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Parse a `"from|to"` filter value. Unparseable sides are left open.
    pub fn parse(value: &str) -> Self {
        let (from, to) = split_date_range(value);
        Self {
            from: date::parse_date(from),
            to: date::parse_date(to),
        }
    }

    /// True when neither side constrains anything.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, dt: &DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| *dt >= from) && self.to.is_none_or(|to| *dt <= to)
    }
}

/// Typed filter for one column, derived from its data type and raw value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnFilter {
    /// Case-insensitive substring (stored lowercased)
    Text(String),
    /// Case-insensitive exact match (stored lowercased)
    Status(String),
    /// Numeric equality; `None` when the value did not parse and the filter is inert
    Number(Option<f64>),
    /// Inclusive date range
    DateRange(DateRange),
}

impl ColumnFilter {
    /// Build the filter for a column type. Returns `None` for an empty value.
    pub fn for_type(data_type: DataType, value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        let filter = match data_type {
            DataType::Date => ColumnFilter::DateRange(DateRange::parse(value)),
            DataType::Number => {
                let number = value.trim().parse::<f64>().ok();
                ColumnFilter::Number(number.filter(|n| n.is_finite()))
            }
            DataType::Status => ColumnFilter::Status(value.to_lowercase()),
            DataType::String | DataType::Currency => ColumnFilter::Text(value.to_lowercase()),
        };
        Some(filter)
    }

    /// Build the filter for a column, honouring its `filterable` flag.
    pub fn for_column(column: &ColumnConfig, value: &str) -> Option<Self> {
        if !column.filterable {
            return None;
        }
        Self::for_type(column.data_type, value)
    }

    /// Test a raw cell value.
    pub fn matches(&self, cell: &CellValue) -> bool {
        match self {
            ColumnFilter::Text(needle) => cell.to_string().to_lowercase().contains(needle),
            ColumnFilter::Status(expected) => cell.to_string().to_lowercase() == *expected,
            ColumnFilter::Number(None) => true,
            ColumnFilter::Number(Some(expected)) => cell.as_number() == Some(*expected),
            ColumnFilter::DateRange(range) => {
                if range.is_unbounded() {
                    return true;
                }
                match date::parse_value(cell) {
                    Some(dt) => range.contains(&dt),
                    None => false,
                }
            }
        }
    }
}

/// Distinct values of every status column, for populating a select.
///
/// Computed over the full, unfiltered dataset. Null and empty values are
/// skipped; each list is sorted.
pub fn status_options(columns: &Columns, rows: &[Row]) -> BTreeMap<String, Vec<String>> {
    columns
        .status_columns()
        .map(|column| {
            let mut values: Vec<String> = rows
                .iter()
                .map(|row| row.get(&column.key))
                .filter(|cell| !cell.is_null())
                .map(|cell| cell.to_string())
                .filter(|s| !s.is_empty())
                .collect();
            values.sort();
            values.dedup();
            (column.key.clone(), values)
        })
        .collect()
}

/// Case-insensitive search across every column of a row.
///
/// A row matches when the needle occurs in the raw string or the formatted
/// display string of any configured column. `needle` must already be
/// lowercased and non-empty.
pub fn matches_global(row: &Row, columns: &Columns, needle: &str) -> bool {
    columns.iter().any(|column| {
        let cell = row.get(&column.key);
        if cell.is_null() {
            return false;
        }
        cell.to_string().to_lowercase().contains(needle)
            || format::format_cell(cell, column.data_type)
                .to_lowercase()
                .contains(needle)
    })
}
