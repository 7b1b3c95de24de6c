//! Per-column filter panel.
//!
//! One input per filterable column, shaped by the column type:
//!
//! | type     | input                                        |
//! |----------|----------------------------------------------|
//! | status   | select: "All" plus the column's status values |
//! | number   | text restricted to a signed decimal           |
//! | date     | from/to date-time pair                       |
//! | other    | free text                                    |

use serde::{Deserialize, Serialize};

use crate::data::{ColumnConfig, DataType};
use crate::query::{split_date_range, ViewEngine};
use crate::state::TableState;

/// Label of the select option that clears a status filter.
pub const ALL_OPTION_LABEL: &str = "All";

/// Whether `input` is acceptable as (partial) number filter text.
///
/// Accepts an optional leading `-`, digits, and at most one `.`. The empty
/// string and incomplete values such as `"-"` or `"1."` are accepted so the
/// user can keep typing.
pub fn is_valid_number_input(input: &str) -> bool {
    let digits = input.strip_prefix('-').unwrap_or(input);
    let mut seen_dot = false;
    digits.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// A choice in a status select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Input widget for one column filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterInputKind {
    Text { value: String, placeholder: String },
    Number { value: String, placeholder: String },
    Select {
        value: String,
        options: Vec<SelectOption>,
    },
    DateRange { from: String, to: String },
}

/// A labelled filter input bound to a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInput {
    /// Column key
    pub key: String,
    /// Column label
    pub label: String,
    /// Element id, `filter-<key>`
    pub id: String,
    #[serde(flatten)]
    pub kind: FilterInputKind,
    /// A value is set, so a clear action is offered
    pub active: bool,
}

impl FilterInput {
    fn for_column(column: &ColumnConfig, value: &str, status_options: &[String]) -> Self {
        let placeholder = format!("Filter {}...", column.label.to_lowercase());
        let kind = match column.data_type {
            DataType::Status => {
                let options = std::iter::once(SelectOption {
                    value: String::new(),
                    label: ALL_OPTION_LABEL.to_string(),
                })
                .chain(status_options.iter().map(|option| SelectOption {
                    value: option.clone(),
                    label: option.clone(),
                }))
                .collect();
                FilterInputKind::Select {
                    value: value.to_string(),
                    options,
                }
            }
            DataType::Number => FilterInputKind::Number {
                value: value.to_string(),
                placeholder,
            },
            DataType::Date => {
                let (from, to) = split_date_range(value);
                FilterInputKind::DateRange {
                    from: from.to_string(),
                    to: to.to_string(),
                }
            }
            DataType::String | DataType::Currency => FilterInputKind::Text {
                value: value.to_string(),
                placeholder,
            },
        };

        Self {
            key: column.key.clone(),
            label: column.label.clone(),
            id: format!("filter-{}", column.key),
            kind,
            active: !value.is_empty(),
        }
    }
}

/// The collapsible panel of column filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPanel {
    /// Whether the panel is expanded
    pub open: bool,
    /// Inputs in column order
    pub inputs: Vec<FilterInput>,
}

impl FilterPanel {
    /// Build the panel, or `None` when no column is filterable.
    pub fn from_state<E: ViewEngine>(state: &TableState<E>) -> Option<Self> {
        let inputs: Vec<FilterInput> = state
            .columns()
            .filterable()
            .map(|column| {
                FilterInput::for_column(
                    column,
                    state.column_filter(&column.key),
                    state.status_options(&column.key),
                )
            })
            .collect();

        if inputs.is_empty() {
            return None;
        }
        Some(Self {
            open: state.show_filters(),
            inputs,
        })
    }

    pub fn input(&self, key: &str) -> Option<&FilterInput> {
        self.inputs.iter().find(|input| input.key == key)
    }
}
