//! Row comparison on raw values.
//!
//! Sorting never looks at formatted strings: currency and numbers compare
//! numerically, dates chronologically, everything else lexicographically
//! ignoring case (exact text only breaks ties).

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use super::options::{SortDirection, SortState};
use crate::data::{CellValue, Columns, DataType, Row};
use crate::format::date;

/// Comparable projection of a cell for a given column type.
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Number(f64),
    Date(DateTime<Utc>),
    Text(String),
    Missing,
}

impl SortValue {
    fn of(cell: &CellValue, data_type: DataType) -> Self {
        if cell.is_null() {
            return SortValue::Missing;
        }
        match data_type {
            DataType::Number | DataType::Currency => match cell.as_number() {
                Some(n) => SortValue::Number(n),
                None => SortValue::Text(cell.to_string()),
            },
            DataType::Date => match date::parse_value(cell) {
                Some(dt) => SortValue::Date(dt),
                None => SortValue::Text(cell.to_string()),
            },
            DataType::String | DataType::Status => SortValue::Text(cell.to_string()),
        }
    }

    /// Typed values first, then text, then missing.
    fn rank(&self) -> u8 {
        match self {
            SortValue::Number(_) | SortValue::Date(_) => 0,
            SortValue::Text(_) => 1,
            SortValue::Missing => 2,
        }
    }

    fn cmp_present(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Compare two cells of a column in the given direction.
///
/// Missing values sort last in both directions.
pub fn compare_cells(
    a: &CellValue,
    b: &CellValue,
    data_type: DataType,
    direction: SortDirection,
) -> Ordering {
    let a = SortValue::of(a, data_type);
    let b = SortValue::of(b, data_type);
    match (&a, &b) {
        (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
        (SortValue::Missing, _) => Ordering::Greater,
        (_, SortValue::Missing) => Ordering::Less,
        _ => {
            let ordering = a.cmp_present(&b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

/// Stable-sort row indices by the sort keys.
///
/// Keys naming unknown or non-sortable columns are ignored. Rows that
/// compare equal on every key keep their relative order.
pub fn sort_indices(indices: &mut [usize], rows: &[Row], columns: &Columns, sort: &SortState) {
    let keys: Vec<(&str, DataType, SortDirection)> = sort
        .keys()
        .iter()
        .filter_map(|key| {
            columns
                .get(&key.column)
                .filter(|c| c.sortable)
                .map(|c| (c.key.as_str(), c.data_type, key.direction))
        })
        .collect();

    if keys.is_empty() {
        return;
    }

    indices.sort_by(|&a, &b| {
        keys.iter()
            .map(|(column, data_type, direction)| {
                compare_cells(
                    rows[a].get(column),
                    rows[b].get(column),
                    *data_type,
                    *direction,
                )
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ColumnConfig;

    fn columns() -> Columns {
        Columns::new(vec![
            ColumnConfig::new("name", "Name", DataType::String),
            ColumnConfig::new("amount", "Amount", DataType::Currency),
            ColumnConfig::new("created_at", "Created", DataType::Date),
            ColumnConfig::new("rank", "Rank", DataType::Number).not_sortable(),
        ])
        .unwrap()
    }

    fn sorted(rows: &[Row], sort: &SortState) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&mut indices, rows, &columns(), sort);
        indices
    }

    #[test]
    fn test_currency_sorts_numerically_not_by_display() {
        let rows = vec![
            Row::new().with("amount", 1000),
            Row::new().with("amount", 900),
        ];
        let order = sorted(&rows, &SortState::by("amount", SortDirection::Ascending));
        // "10.00" < "9.00" as strings, but 900 < 1000
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn test_dates_sort_chronologically() {
        let rows = vec![
            Row::new().with("created_at", "2024-03-01T00:00:00Z"),
            Row::new().with("created_at", "2023-12-31T23:59:00Z"),
            Row::new().with("created_at", "2024-01-15T08:00:00+05:00"),
        ];
        let asc = SortState::by("created_at", SortDirection::Ascending);
        assert_eq!(sorted(&rows, &asc), vec![1, 2, 0]);
        let desc = SortState::by("created_at", SortDirection::Descending);
        assert_eq!(sorted(&rows, &desc), vec![0, 2, 1]);
    }

    #[test]
    fn test_missing_values_last_in_both_directions() {
        let rows = vec![
            Row::new().with("amount", 5),
            Row::new(),
            Row::new().with("amount", 1),
        ];
        assert_eq!(
            sorted(&rows, &SortState::by("amount", SortDirection::Ascending)),
            vec![2, 0, 1]
        );
        assert_eq!(
            sorted(&rows, &SortState::by("amount", SortDirection::Descending)),
            vec![0, 2, 1]
        );
    }

    #[test]
    fn test_ties_keep_input_order_and_secondary_key() {
        let rows = vec![
            Row::new().with("name", "b").with("amount", 1),
            Row::new().with("name", "a").with("amount", 2),
            Row::new().with("name", "b").with("amount", 0),
            Row::new().with("name", "a").with("amount", 2),
        ];
        let by_name = sorted(&rows, &SortState::by("name", SortDirection::Ascending));
        assert_eq!(by_name, vec![1, 3, 0, 2]);

        let name_then_amount = SortState::by("name", SortDirection::Ascending)
            .then("amount", SortDirection::Ascending);
        let by_name_then_amount = sorted(&rows, &name_then_amount);
        assert_eq!(by_name_then_amount, vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_text_sorts_case_insensitively() {
        let rows = vec![
            Row::new().with("name", "paid"),
            Row::new().with("name", "UNPAID"),
            Row::new().with("name", "acme"),
            Row::new().with("name", "Globex"),
            Row::new().with("name", "Acme"),
        ];
        let order = sorted(&rows, &SortState::by("name", SortDirection::Ascending));
        assert_eq!(order, vec![4, 2, 3, 0, 1]);
    }

    #[test]
    fn test_non_sortable_and_unknown_columns_ignored() {
        let rows = vec![Row::new().with("rank", 2), Row::new().with("rank", 1)];
        let locked = SortState::by("rank", SortDirection::Ascending);
        assert_eq!(sorted(&rows, &locked), vec![0, 1]);
        let unknown = SortState::by("nope", SortDirection::Ascending);
        assert_eq!(sorted(&rows, &unknown), vec![0, 1]);
    }

    #[test]
    fn test_numbers_before_text_in_numeric_column() {
        let a = CellValue::from("n/a");
        let b = CellValue::from(3);
        assert_eq!(
            compare_cells(&a, &b, DataType::Number, SortDirection::Ascending),
            Ordering::Greater
        );
    }
}
