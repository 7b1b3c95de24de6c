//! Cell formatting: raw values to display strings.
//!
//! All functions here are pure and total. A value that cannot be formatted
//! for its column type is shown in its raw string form instead.

pub mod date;
pub mod number;
pub mod status;

use crate::data::{CellValue, DataType};

pub use date::{format_date, parse_date};
pub use number::{format_currency, format_number};
pub use status::StatusCategory;

/// Format a raw cell value for display according to its column type.
///
/// - `date`: `Jan 15, 2024, 02:30 PM` (raw value when unparseable)
/// - `currency`: numbers are minor units, shown as `1,234.56`; text passes through
/// - `number`: numbers get thousands separators; text passes through
/// - `status`, `string`: the value as-is
///
/// Null renders as the empty string for every type.
pub fn format_cell(value: &CellValue, data_type: DataType) -> String {
    match data_type {
        DataType::Date => match date::parse_value(value) {
            Some(dt) => format_date(&dt),
            None => value.to_string(),
        },
        DataType::Currency => match value {
            CellValue::Number(n) => format_currency(*n),
            other => other.to_string(),
        },
        DataType::Number => match value {
            CellValue::Number(n) => format_number(*n),
            other => other.to_string(),
        },
        DataType::Status | DataType::String => value.to_string(),
    }
}
